//! EPS security algorithm identifiers
//!
//! Security Mode Commands select one integrity (EIA) and one ciphering (EEA)
//! algorithm by a 3-bit identifier. Values 0..3 are the defined algorithms,
//! 4..7 are spare. Identifiers arrive already decoded from the protocol
//! stack, so any `u8` is accepted and anything above 3 is kept as spare.

use std::fmt;

/// Highest identifier that names a defined algorithm.
pub const MAX_DEFINED_ALGORITHM_ID: u8 = 3;

/// EPS integrity algorithm (3GPP TS 33.401 Section 5.1.4.1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IntegrityAlgorithm {
    /// EIA0 (null integrity)
    #[default]
    Eia0,
    /// 128-EIA1 (SNOW 3G based)
    Eia1,
    /// 128-EIA2 (AES based)
    Eia2,
    /// 128-EIA3 (ZUC based)
    Eia3,
    /// Spare or out of range identifier
    Spare(u8),
}

/// EPS ciphering algorithm (3GPP TS 33.401 Section 5.1.3.2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CipheringAlgorithm {
    /// EEA0 (null ciphering)
    #[default]
    Eea0,
    /// 128-EEA1 (SNOW 3G based)
    Eea1,
    /// 128-EEA2 (AES based)
    Eea2,
    /// 128-EEA3 (ZUC based)
    Eea3,
    /// Spare or out of range identifier
    Spare(u8),
}

impl From<u8> for IntegrityAlgorithm {
    fn from(id: u8) -> Self {
        match id {
            0 => IntegrityAlgorithm::Eia0,
            1 => IntegrityAlgorithm::Eia1,
            2 => IntegrityAlgorithm::Eia2,
            3 => IntegrityAlgorithm::Eia3,
            other => IntegrityAlgorithm::Spare(other),
        }
    }
}

impl From<IntegrityAlgorithm> for u8 {
    fn from(alg: IntegrityAlgorithm) -> Self {
        match alg {
            IntegrityAlgorithm::Eia0 => 0,
            IntegrityAlgorithm::Eia1 => 1,
            IntegrityAlgorithm::Eia2 => 2,
            IntegrityAlgorithm::Eia3 => 3,
            IntegrityAlgorithm::Spare(id) => id,
        }
    }
}

impl From<u8> for CipheringAlgorithm {
    fn from(id: u8) -> Self {
        match id {
            0 => CipheringAlgorithm::Eea0,
            1 => CipheringAlgorithm::Eea1,
            2 => CipheringAlgorithm::Eea2,
            3 => CipheringAlgorithm::Eea3,
            other => CipheringAlgorithm::Spare(other),
        }
    }
}

impl From<CipheringAlgorithm> for u8 {
    fn from(alg: CipheringAlgorithm) -> Self {
        match alg {
            CipheringAlgorithm::Eea0 => 0,
            CipheringAlgorithm::Eea1 => 1,
            CipheringAlgorithm::Eea2 => 2,
            CipheringAlgorithm::Eea3 => 3,
            CipheringAlgorithm::Spare(id) => id,
        }
    }
}

impl IntegrityAlgorithm {
    /// Returns true for EIA0
    pub fn is_null(&self) -> bool {
        matches!(self, IntegrityAlgorithm::Eia0)
    }

    /// Returns true for identifiers above the defined range
    pub fn is_spare(&self) -> bool {
        matches!(self, IntegrityAlgorithm::Spare(_))
    }

    /// A selection gives no protection if it is NULL or not a defined algorithm
    pub fn is_insecure(&self) -> bool {
        self.is_null() || self.is_spare()
    }
}

impl CipheringAlgorithm {
    /// Returns true for EEA0
    pub fn is_null(&self) -> bool {
        matches!(self, CipheringAlgorithm::Eea0)
    }

    /// Returns true for identifiers above the defined range
    pub fn is_spare(&self) -> bool {
        matches!(self, CipheringAlgorithm::Spare(_))
    }

    /// A selection gives no protection if it is NULL or not a defined algorithm
    pub fn is_insecure(&self) -> bool {
        self.is_null() || self.is_spare()
    }
}

impl fmt::Display for IntegrityAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityAlgorithm::Eia0 => write!(f, "EIA0"),
            IntegrityAlgorithm::Eia1 => write!(f, "128-EIA1"),
            IntegrityAlgorithm::Eia2 => write!(f, "128-EIA2"),
            IntegrityAlgorithm::Eia3 => write!(f, "128-EIA3"),
            IntegrityAlgorithm::Spare(id) => write!(f, "EIA{id} (spare)"),
        }
    }
}

impl fmt::Display for CipheringAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipheringAlgorithm::Eea0 => write!(f, "EEA0"),
            CipheringAlgorithm::Eea1 => write!(f, "128-EEA1"),
            CipheringAlgorithm::Eea2 => write!(f, "128-EEA2"),
            CipheringAlgorithm::Eea3 => write!(f, "128-EEA3"),
            CipheringAlgorithm::Spare(id) => write!(f, "EEA{id} (spare)"),
        }
    }
}
