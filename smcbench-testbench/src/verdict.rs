//! Security verdict of an attempt
//!
//! The verdict is a pure function of the negotiated state. It is recomputed
//! wholesale after every mutation and never edited field by field.

use crate::algorithms::{CipheringAlgorithm, IntegrityAlgorithm};

/// Algorithms a Security Mode Command selected for one layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    /// Selected integrity algorithm
    pub integrity: IntegrityAlgorithm,
    /// Selected ciphering algorithm
    pub ciphering: CipheringAlgorithm,
}

impl Selection {
    /// Builds a selection from raw identifiers
    pub fn from_ids(integrity_id: u8, ciphering_id: u8) -> Self {
        Self {
            integrity: IntegrityAlgorithm::from(integrity_id),
            ciphering: CipheringAlgorithm::from(ciphering_id),
        }
    }

    /// Either identifier is above the defined range
    pub fn has_spare(&self) -> bool {
        self.integrity.is_spare() || self.ciphering.is_spare()
    }
}

/// Inputs of the classification, borrowed from an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NegotiationState {
    /// Attach Accept received
    pub attach_accepted: bool,
    /// NAS Security Mode Command received
    pub nas_smc_received: bool,
    /// RRC Security Mode Command received
    pub rrc_smc_received: bool,
    /// Last NAS selection, NULL/NULL until the command arrives
    pub nas: Selection,
    /// Last RRC selection, NULL/NULL until the command arrives
    pub rrc: Selection,
}

/// Derived classification flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Verdict {
    /// NAS selected NULL or spare ciphering
    pub insecure_nas_ciphering: bool,
    /// NAS selected NULL or spare integrity
    pub insecure_nas_integrity: bool,
    /// RRC selected NULL or spare ciphering
    pub insecure_rrc_ciphering: bool,
    /// RRC selected NULL or spare integrity
    pub insecure_rrc_integrity: bool,
    /// Any stored identifier is spare, received or not
    pub spare_values: bool,
    /// The negotiation progressed: attach accepted or any SMC received
    pub success: bool,
    /// Worth manual review
    pub notable: bool,
}

impl Verdict {
    /// Classifies a negotiation state.
    ///
    /// `notable` deliberately ignores `success`; only the issue lines of the
    /// summary are gated on it.
    pub fn classify(state: &NegotiationState) -> Self {
        let insecure_nas_ciphering = state.nas_smc_received && state.nas.ciphering.is_insecure();
        let insecure_nas_integrity = state.nas_smc_received && state.nas.integrity.is_insecure();
        let insecure_rrc_ciphering = state.rrc_smc_received && state.rrc.ciphering.is_insecure();
        let insecure_rrc_integrity = state.rrc_smc_received && state.rrc.integrity.is_insecure();

        let spare_values = state.nas.has_spare() || state.rrc.has_spare();
        let success = state.attach_accepted || state.nas_smc_received || state.rrc_smc_received;

        let notable = insecure_nas_ciphering
            || insecure_nas_integrity
            || insecure_rrc_ciphering
            || insecure_rrc_integrity
            || spare_values;

        Self {
            insecure_nas_ciphering,
            insecure_nas_integrity,
            insecure_rrc_ciphering,
            insecure_rrc_integrity,
            spare_values,
            success,
            notable,
        }
    }

    /// Either layer selected an insecure ciphering algorithm
    pub fn insecure_ciphering(&self) -> bool {
        self.insecure_nas_ciphering || self.insecure_rrc_ciphering
    }

    /// Either layer selected an insecure integrity algorithm
    pub fn insecure_integrity(&self) -> bool {
        self.insecure_nas_integrity || self.insecure_rrc_integrity
    }
}
