//! Security mode negotiation testbench
//!
//! Tracks, per test attempt, which security capabilities a UE advertised,
//! which algorithms the network selected in the NAS and RRC Security Mode
//! Commands, how the attach ended and which AS keys were derived. From that
//! state every attempt carries a [`Verdict`] telling whether the negotiated
//! configuration deserves manual review.
//!
//! The protocol stack reports events to a shared [`Testbench`], which
//! forwards them to the attempt currently under test.
//!
//! # Example
//!
//! ```
//! use smcbench_testbench::Testbench;
//!
//! let bench = Testbench::new();
//! bench.create_attempt(0b0000_0110, 0b0000_0110);
//! bench.report_nas_security_mode_command(0, 0);
//! bench.report_attach_accept();
//!
//! assert!(bench.is_finished());
//! assert!(bench.aggregate_summary().contains("Insecure ciphering"));
//! ```

pub mod algorithms;
pub mod attempt;
pub mod capabilities;
pub mod cause;
pub mod error;
pub mod keys;
pub mod registry;
pub mod summary;
pub mod verdict;

pub use algorithms::{CipheringAlgorithm, IntegrityAlgorithm};
pub use attempt::{Attempt, AttemptId, TracePaths};
pub use capabilities::{has_secure_capabilities, Capabilities};
pub use cause::{cause_str, EmmCause};
pub use error::TestbenchError;
pub use keys::{KeyKind, KEY_SIZE};
pub use registry::Testbench;
pub use verdict::{NegotiationState, Selection, Verdict};
