//! Attempt registry
//!
//! [`Testbench`] owns every attempt of a run and routes reports to the
//! attempt most recently started. All calls are serialized behind one mutex,
//! so the protocol stack and the test driver may share a testbench across
//! threads (`Arc<Testbench>`).
//!
//! The "current attempt" indirection is a convenience for a single driver
//! running one attempt at a time; it is not a multi-session API. Callers
//! that keep the [`AttemptId`] returned by [`Testbench::create_attempt`] can
//! read any attempt back with [`Testbench::verdict`] and
//! [`Testbench::attempt_summary`].
//!
//! Reporting calls never fail loudly. Without a current attempt they log an
//! error and return `false`, `"error"` or nothing.

use std::sync::{Mutex, MutexGuard, PoisonError};

use smcbench_common::CapabilityProfile;
use tracing::{debug, error, info};

use crate::attempt::{Attempt, AttemptId};
use crate::error::TestbenchError;
use crate::keys::{KeyKind, KEY_SIZE};
use crate::verdict::Verdict;

/// Returned by [`Testbench::current_summary`] when there is no attempt
pub const SUMMARY_ERROR: &str = "error";

/// Attempts indexed by `id - 1`. Identifiers are never reused, so the last
/// element is always the current attempt.
#[derive(Debug, Default)]
struct Inner {
    attempts: Vec<Attempt>,
}

impl Inner {
    fn current_id(&self) -> AttemptId {
        self.attempts.len() as AttemptId
    }

    fn get(&self, id: AttemptId) -> Result<&Attempt, TestbenchError> {
        let idx = (id as usize)
            .checked_sub(1)
            .ok_or(TestbenchError::UnknownAttempt(id))?;
        self.attempts
            .get(idx)
            .ok_or(TestbenchError::UnknownAttempt(id))
    }
}

/// Shared registry of test attempts.
#[derive(Debug, Default)]
pub struct Testbench {
    inner: Mutex<Inner>,
}

impl Testbench {
    /// Creates an empty testbench
    pub fn new() -> Self {
        Self::default()
    }

    // Every critical section is a complete in-memory update, so a panic in
    // another thread cannot leave an attempt half written.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` on the current attempt, logging `op` when there is none.
    fn with_current<T>(
        &self,
        op: &str,
        f: impl FnOnce(&mut Attempt) -> T,
    ) -> Result<T, TestbenchError> {
        let mut inner = self.lock();
        let current_id = inner.current_id();
        match inner.attempts.last_mut() {
            Some(attempt) => Ok(f(attempt)),
            None => {
                error!(op, "{}: no attempt {} available", op, current_id);
                Err(TestbenchError::NoCurrentAttempt)
            }
        }
    }

    /// Starts a new attempt and makes it current.
    ///
    /// Identifiers start at 1 and increase by one per call.
    pub fn create_attempt(&self, integrity_mask: u8, ciphering_mask: u8) -> AttemptId {
        let mut inner = self.lock();
        let id = inner.current_id() + 1;
        info!(
            attempt = id,
            "New attempt {} with EIA {:08b} EEA {:08b}", id, integrity_mask, ciphering_mask
        );
        inner
            .attempts
            .push(Attempt::new(id, integrity_mask, ciphering_mask));
        id
    }

    /// Starts a new attempt advertising a configured capability profile
    pub fn start_profile(&self, profile: &CapabilityProfile) -> AttemptId {
        let id = self.create_attempt(profile.integrity_mask, profile.ciphering_mask);
        info!(attempt = id, profile = %profile.name, "Attempt {} uses profile {}", id, profile.name);
        id
    }

    /// Identifier of the current attempt
    pub fn current_id(&self) -> Option<AttemptId> {
        let current = self.lock().current_id();
        (current != 0).then_some(current)
    }

    /// Number of attempts started so far
    pub fn attempt_count(&self) -> usize {
        self.lock().attempts.len()
    }

    /// Stores the trace file paths of the current attempt
    pub fn set_trace_paths(&self, nas_path: impl Into<String>, mac_path: impl Into<String>) -> bool {
        self.with_current("set_trace_paths", |attempt| {
            attempt.set_trace_paths(nas_path, mac_path)
        })
        .is_ok()
    }

    /// Attach Accept received
    pub fn report_attach_accept(&self) {
        let _ = self.with_current("report_attach_accept", Attempt::report_attach_accept);
    }

    /// Attach Reject received
    pub fn report_attach_reject(&self, cause: u8) {
        let _ = self.with_current("report_attach_reject", |attempt| {
            attempt.report_attach_reject(cause)
        });
    }

    /// NAS Security Mode Command received
    pub fn report_nas_security_mode_command(&self, integrity_id: u8, ciphering_id: u8) {
        let _ = self.with_current("report_nas_security_mode_command", |attempt| {
            attempt.report_nas_security_mode_command(integrity_id, ciphering_id)
        });
    }

    /// RRC Security Mode Command received
    pub fn report_rrc_security_mode_command(&self, integrity_id: u8, ciphering_id: u8) {
        let _ = self.with_current("report_rrc_security_mode_command", |attempt| {
            attempt.report_rrc_security_mode_command(integrity_id, ciphering_id)
        });
    }

    /// Derived AS key reported by RRC. `None` is ignored.
    pub fn report_key(&self, kind: KeyKind, key: Option<&[u8; KEY_SIZE]>) {
        let _ = self.with_current("report_key", |attempt| attempt.report_key(kind, key));
    }

    /// Derived AS key with a numeric kind, as delivered by the stack
    pub fn report_raw_key(&self, kind: u8, key: Option<&[u8; KEY_SIZE]>) {
        if let Ok(Err(e)) = self.with_current("report_key", |attempt| attempt.report_raw_key(kind, key)) {
            error!(kind, "report_key: {}", e);
        }
    }

    /// Whether the current attempt's attach procedure ended
    pub fn is_finished(&self) -> bool {
        self.with_current("is_finished", |attempt| attempt.is_finished())
            .unwrap_or(false)
    }

    /// Whether the current attempt is attached with NAS and RRC security
    pub fn is_connected(&self) -> bool {
        self.with_current("is_connected", |attempt| attempt.is_connected())
            .unwrap_or(false)
    }

    /// Verdict of the current attempt
    pub fn current_verdict(&self) -> Option<Verdict> {
        self.with_current("current_verdict", |attempt| *attempt.verdict())
            .ok()
    }

    /// Report of the current attempt, [`SUMMARY_ERROR`] if there is none
    pub fn current_summary(&self) -> String {
        self.with_current("get_summary", |attempt| attempt.summary())
            .unwrap_or_else(|_| SUMMARY_ERROR.to_string())
    }

    /// Verdict of any attempt
    pub fn verdict(&self, id: AttemptId) -> Result<Verdict, TestbenchError> {
        self.lock().get(id).map(|attempt| *attempt.verdict())
    }

    /// Report of any attempt
    pub fn attempt_summary(&self, id: AttemptId) -> Result<String, TestbenchError> {
        self.lock().get(id).map(Attempt::summary)
    }

    /// Concatenated reports of every notable attempt, in identifier order.
    ///
    /// Attempts that are not notable are skipped. Nothing is modified.
    pub fn aggregate_summary(&self) -> String {
        let inner = self.lock();
        let notable: Vec<&Attempt> = inner.attempts.iter().filter(|a| a.is_notable()).collect();

        info!("############ SUMMARY ############");
        info!("# Executed attempts: {}", inner.attempts.len());
        info!(
            "# Following attempts require manual inspection: {}",
            notable.len()
        );

        let mut out = String::new();
        for attempt in notable {
            let summary = attempt.summary();
            info!(attempt = attempt.id(), "{}", summary);
            out.push_str(&summary);
        }
        out
    }
}

impl Drop for Testbench {
    fn drop(&mut self) {
        let inner = self.inner.get_mut().unwrap_or_else(PoisonError::into_inner);
        debug!(attempts = inner.attempts.len(), "Testbench dropped");
    }
}
