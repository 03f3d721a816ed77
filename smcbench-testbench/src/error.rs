//! Testbench error types

use thiserror::Error;

use crate::attempt::AttemptId;

/// Errors raised by testbench operations.
///
/// The registry's reporting API logs these and turns them into sentinel
/// values; the handle based API returns them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TestbenchError {
    /// No attempt has been started yet
    #[error("no current attempt")]
    NoCurrentAttempt,
    /// The identifier does not belong to a started attempt
    #[error("no attempt {0} available")]
    UnknownAttempt(AttemptId),
    /// Key kind outside the known set
    #[error("unknown key kind {0}")]
    UnknownKeyKind(u8),
}
