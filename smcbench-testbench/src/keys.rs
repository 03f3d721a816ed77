//! Key material captured from the RRC layer

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Size of a derived AS key in bytes
pub const KEY_SIZE: usize = 32;

/// Derived AS key reported by the RRC layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum KeyKind {
    /// K_RRCenc
    RrcCiphering = 0,
    /// K_RRCint
    RrcIntegrity = 1,
    /// K_UPenc
    UpCiphering = 2,
}

impl KeyKind {
    /// Label used when the key is logged
    pub fn label(&self) -> &'static str {
        match self {
            KeyKind::RrcCiphering => "RRC encryption key - k_rrc_enc",
            KeyKind::RrcIntegrity => "RRC integrity key - k_rrc_int",
            KeyKind::UpCiphering => "UP encryption key - k_up_enc",
        }
    }
}

/// Captured keys of one attempt. A slot stays `None` until reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySet {
    rrc_ciphering: Option<[u8; KEY_SIZE]>,
    rrc_integrity: Option<[u8; KEY_SIZE]>,
    up_ciphering: Option<[u8; KEY_SIZE]>,
}

impl KeySet {
    /// Stores a key, replacing any earlier value of the same kind
    pub fn store(&mut self, kind: KeyKind, key: &[u8; KEY_SIZE]) {
        *self.slot_mut(kind) = Some(*key);
    }

    /// Returns the captured key of the given kind
    pub fn get(&self, kind: KeyKind) -> Option<&[u8; KEY_SIZE]> {
        match kind {
            KeyKind::RrcCiphering => self.rrc_ciphering.as_ref(),
            KeyKind::RrcIntegrity => self.rrc_integrity.as_ref(),
            KeyKind::UpCiphering => self.up_ciphering.as_ref(),
        }
    }

    fn slot_mut(&mut self, kind: KeyKind) -> &mut Option<[u8; KEY_SIZE]> {
        match kind {
            KeyKind::RrcCiphering => &mut self.rrc_ciphering,
            KeyKind::RrcIntegrity => &mut self.rrc_integrity,
            KeyKind::UpCiphering => &mut self.up_ciphering,
        }
    }
}
