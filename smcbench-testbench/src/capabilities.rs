//! Advertised UE security capabilities
//!
//! The UE network capability IE carries one bit per EEA/EIA algorithm. The
//! testbench receives the mask the UE was configured with and decodes it once
//! when the attempt starts.

/// Number of algorithm slots in a capability mask
pub const CAPABILITY_SLOTS: usize = 8;

/// Slot of the NULL algorithm
pub const SLOT_NULL: usize = 0;
/// Slot of the SNOW 3G based algorithm
pub const SLOT_SNOW3G: usize = 1;
/// Slot of the AES based algorithm
pub const SLOT_AES: usize = 2;
/// Slot of the ZUC based algorithm
pub const SLOT_ZUC: usize = 3;

/// Decoded capability mask, slot `i` is bit `i` of the mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    slots: [bool; CAPABILITY_SLOTS],
}

impl Capabilities {
    /// Decodes an 8-bit capability mask.
    pub fn from_mask(mask: u8) -> Self {
        let mut slots = [false; CAPABILITY_SLOTS];
        for (i, slot) in slots.iter_mut().enumerate() {
            *slot = ((mask >> i) & 1) == 1;
        }
        Self { slots }
    }

    /// Returns whether algorithm `slot` is advertised. Out of range slots are not.
    pub fn supports(&self, slot: usize) -> bool {
        self.slots.get(slot).copied().unwrap_or(false)
    }

    /// Re-encodes the capabilities as a mask
    pub fn mask(&self) -> u8 {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, set)| **set)
            .fold(0u8, |mask, (i, _)| mask | (1 << i))
    }

    /// Returns the decoded slots
    pub fn slots(&self) -> &[bool; CAPABILITY_SLOTS] {
        &self.slots
    }

    /// SNOW 3G or AES is advertised
    pub fn has_standard_algorithm(&self) -> bool {
        self.supports(SLOT_SNOW3G) || self.supports(SLOT_AES)
    }
}

/// Returns true when both directions advertise SNOW 3G or AES, i.e. a
/// correctly behaving network has a secure choice available.
pub fn has_secure_capabilities(integrity: &Capabilities, ciphering: &Capabilities) -> bool {
    integrity.has_standard_algorithm() && ciphering.has_standard_algorithm()
}
