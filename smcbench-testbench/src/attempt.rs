//! A single test attempt
//!
//! An attempt starts with the capabilities the UE advertises and accumulates
//! the events the protocol stack reports while the UE attaches. Events may
//! arrive in any order, repeat, or never arrive at all. Received flags only
//! ever go from false to true. After every mutation the [`Verdict`] is
//! recomputed from scratch.

use num_enum::TryFromPrimitive;
use smcbench_common::format_hex_compact;
use tracing::{error, info, warn};

use crate::capabilities::{has_secure_capabilities, Capabilities};
use crate::cause::cause_str;
use crate::error::TestbenchError;
use crate::keys::{KeyKind, KeySet, KEY_SIZE};
use crate::verdict::{NegotiationState, Selection, Verdict};

/// Bytes per hex group when a key is logged
const KEY_HEX_GROUP: usize = 16;

/// Attempt identifier, assigned from 1 upwards
pub type AttemptId = u32;

/// Trace files the protocol stack writes for an attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TracePaths {
    /// NAS trace
    pub nas: Option<String>,
    /// MAC layer trace
    pub mac: Option<String>,
}

/// One test attempt and its derived verdict.
#[derive(Debug, Clone)]
pub struct Attempt {
    id: AttemptId,
    integrity_caps: Capabilities,
    ciphering_caps: Capabilities,
    state: NegotiationState,
    attach_rejected: bool,
    reject_cause: Option<u8>,
    keys: KeySet,
    traces: TracePaths,
    verdict: Verdict,
}

impl Attempt {
    /// Creates an attempt advertising the given EIA and EEA capability masks
    pub fn new(id: AttemptId, integrity_mask: u8, ciphering_mask: u8) -> Self {
        let mut attempt = Self {
            id,
            integrity_caps: Capabilities::from_mask(integrity_mask),
            ciphering_caps: Capabilities::from_mask(ciphering_mask),
            state: NegotiationState::default(),
            attach_rejected: false,
            reject_cause: None,
            keys: KeySet::default(),
            traces: TracePaths::default(),
            verdict: Verdict::default(),
        };
        attempt.update_verdict();
        attempt
    }

    /// Attempt identifier
    pub fn id(&self) -> AttemptId {
        self.id
    }

    /// Advertised integrity capabilities
    pub fn integrity_capabilities(&self) -> &Capabilities {
        &self.integrity_caps
    }

    /// Advertised ciphering capabilities
    pub fn ciphering_capabilities(&self) -> &Capabilities {
        &self.ciphering_caps
    }

    /// Received flags and selected algorithms
    pub fn negotiation(&self) -> &NegotiationState {
        &self.state
    }

    /// Attach Reject received
    pub fn attach_rejected(&self) -> bool {
        self.attach_rejected
    }

    /// Cause of the last Attach Reject
    pub fn reject_cause(&self) -> Option<u8> {
        self.reject_cause
    }

    /// Captured key material
    pub fn keys(&self) -> &KeySet {
        &self.keys
    }

    /// Stored trace file paths
    pub fn traces(&self) -> &TracePaths {
        &self.traces
    }

    /// Current verdict
    pub fn verdict(&self) -> &Verdict {
        &self.verdict
    }

    /// SNOW3G or AES is advertised for both integrity and ciphering, so a
    /// correctly behaving network can pick a secure configuration
    pub fn offers_secure_choice(&self) -> bool {
        has_secure_capabilities(&self.integrity_caps, &self.ciphering_caps)
    }

    /// Shortcut for `verdict().notable`
    pub fn is_notable(&self) -> bool {
        self.verdict.notable
    }

    /// Attach procedure ended, either way
    pub fn is_finished(&self) -> bool {
        self.state.attach_accepted || self.attach_rejected
    }

    /// Attached with both NAS and RRC security established
    pub fn is_connected(&self) -> bool {
        self.state.attach_accepted && self.state.nas_smc_received && self.state.rrc_smc_received
    }

    /// Records where the traces of this attempt are written
    pub fn set_trace_paths(&mut self, nas: impl Into<String>, mac: impl Into<String>) {
        let (nas, mac) = (nas.into(), mac.into());
        info!(
            attempt = self.id,
            nas = %nas,
            mac = %mac,
            "Attempt {} traces set",
            self.id
        );
        self.traces = TracePaths {
            nas: Some(nas),
            mac: Some(mac),
        };
        self.update_verdict();
    }

    /// Attach Accept received
    pub fn report_attach_accept(&mut self) {
        info!(attempt = self.id, "Attempt {} got Attach Accept", self.id);
        self.state.attach_accepted = true;
        self.update_verdict();
    }

    /// Attach Reject received with an EMM cause
    pub fn report_attach_reject(&mut self, cause: u8) {
        info!(
            attempt = self.id,
            cause,
            "Attempt {} got Attach Reject, cause: {}",
            self.id,
            cause_str(cause)
        );
        if self.offers_secure_choice() {
            warn!(
                attempt = self.id,
                "Attempt {} rejected although SNOW3G or AES was advertised", self.id
            );
        }
        self.attach_rejected = true;
        self.reject_cause = Some(cause);
        self.update_verdict();
    }

    /// NAS Security Mode Command received
    pub fn report_nas_security_mode_command(&mut self, integrity_id: u8, ciphering_id: u8) {
        let selection = Selection::from_ids(integrity_id, ciphering_id);
        info!(
            attempt = self.id,
            "Attempt {} got NAS Security Mode Command. Integrity: {}, Ciphering: {}",
            self.id,
            selection.integrity,
            selection.ciphering
        );
        self.state.nas = selection;
        self.state.nas_smc_received = true;
        self.update_verdict();
    }

    /// RRC Security Mode Command received
    pub fn report_rrc_security_mode_command(&mut self, integrity_id: u8, ciphering_id: u8) {
        let selection = Selection::from_ids(integrity_id, ciphering_id);
        info!(
            attempt = self.id,
            "Attempt {} got RRC Security Mode Command. Integrity: {}, Ciphering: {}",
            self.id,
            selection.integrity,
            selection.ciphering
        );
        self.state.rrc = selection;
        self.state.rrc_smc_received = true;
        self.update_verdict();
    }

    /// Stores a derived key. A missing buffer is ignored.
    pub fn report_key(&mut self, kind: KeyKind, key: Option<&[u8; KEY_SIZE]>) {
        let Some(key) = key else {
            return;
        };
        self.keys.store(kind, key);
        info!(
            attempt = self.id,
            key = %format_hex_compact(key, KEY_HEX_GROUP),
            "{}",
            kind.label()
        );
        self.update_verdict();
    }

    /// Stores a derived key identified by its numeric kind.
    ///
    /// Unknown kinds are logged and nothing is stored.
    pub fn report_raw_key(
        &mut self,
        kind: u8,
        key: Option<&[u8; KEY_SIZE]>,
    ) -> Result<(), TestbenchError> {
        if key.is_none() {
            return Ok(());
        }
        match KeyKind::try_from_primitive(kind) {
            Ok(kind) => {
                self.report_key(kind, key);
                Ok(())
            }
            Err(_) => {
                error!(attempt = self.id, kind, "Error setting key, attempt {}", self.id);
                Err(TestbenchError::UnknownKeyKind(kind))
            }
        }
    }

    /// Human readable report, see [`crate::summary`]
    pub fn summary(&self) -> String {
        crate::summary::render(self)
    }

    fn update_verdict(&mut self) {
        self.verdict = Verdict::classify(&self.state);
    }
}
