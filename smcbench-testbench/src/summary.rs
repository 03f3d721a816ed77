//! Human readable attempt report
//!
//! Rendering is a read-only projection of an [`Attempt`]. Issue lines are
//! only printed when the negotiation progressed (`success`), so an attempt
//! can be notable and still report no issues.

use std::fmt::Write;

use crate::attempt::Attempt;
use crate::capabilities::{SLOT_AES, SLOT_NULL, SLOT_SNOW3G, SLOT_ZUC};
use crate::cause::cause_str;

/// Line printed when no issue applies
pub const NO_ISSUES: &str = " -- no issues -- ";
/// Issue line for an insecure EEA choice
pub const ISSUE_CIPHERING: &str = "  * Insecure ciphering algorithm (EEA) selected!";
/// Issue line for an insecure EIA choice
pub const ISSUE_INTEGRITY: &str = "  * Insecure integrity algorithm (EIA) selected!";
/// Issue line for spare algorithm identifiers
pub const ISSUE_SPARE: &str = "  * Spare algorithm identifier selected!";

const CAPABILITY_ROWS: [(&str, usize); 4] = [
    ("NULL", SLOT_NULL),
    ("Snow3G", SLOT_SNOW3G),
    ("AES", SLOT_AES),
    ("ZUC", SLOT_ZUC),
];

fn mark(set: bool) -> char {
    if set {
        'x'
    } else {
        '-'
    }
}

/// Renders the multi-line report of an attempt.
pub fn render(attempt: &Attempt) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_summary(&mut out, attempt);
    out
}

fn write_summary(out: &mut String, attempt: &Attempt) -> std::fmt::Result {
    let state = attempt.negotiation();
    let verdict = attempt.verdict();

    writeln!(out, "Attempt {}", attempt.id())?;
    writeln!(out, "UE Security Capabilities: Encryption Integrity")?;
    for (name, slot) in CAPABILITY_ROWS {
        writeln!(
            out,
            "                 {:<7}:     {}          {}",
            name,
            mark(attempt.ciphering_capabilities().supports(slot)),
            mark(attempt.integrity_capabilities().supports(slot)),
        )?;
    }

    writeln!(out, "Received Messages:")?;
    if state.nas_smc_received {
        writeln!(
            out,
            "  * NAS Security Mode Command: EEA={}, EIA={}",
            state.nas.ciphering, state.nas.integrity
        )?;
    }
    if state.rrc_smc_received {
        writeln!(
            out,
            "  * RRC Security Mode Command: EEA={}, EIA={}",
            state.rrc.ciphering, state.rrc.integrity
        )?;
    }
    if state.attach_accepted {
        writeln!(out, "  * Attach Accept")?;
    }
    if attempt.attach_rejected() {
        match attempt.reject_cause() {
            Some(cause) => writeln!(out, "  * Attach Reject ({})", cause_str(cause))?,
            None => writeln!(out, "  * Attach Reject")?,
        }
    }

    writeln!(out, "Potential issues:")?;
    let mut any = false;
    if verdict.success && verdict.insecure_ciphering() {
        writeln!(out, "{ISSUE_CIPHERING}")?;
        any = true;
    }
    if verdict.success && verdict.insecure_integrity() {
        writeln!(out, "{ISSUE_INTEGRITY}")?;
        any = true;
    }
    if verdict.success && verdict.spare_values {
        writeln!(out, "{ISSUE_SPARE}")?;
        any = true;
    }
    if !any {
        writeln!(out, "{NO_ISSUES}")?;
    }
    Ok(())
}
