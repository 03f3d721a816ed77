//! Single attempt attach scenarios
//!
//! Drives one attempt at a time through the event sequences the protocol
//! stack produces and checks the verdict and the rendered summary.

use integration_tests::{
    assert_issue_lines, init_test_logging, replay, AttachEvent, EEA_SNOW_AES, EIA_SNOW_AES,
    NULL_ONLY,
};
use smcbench_testbench::summary::{ISSUE_CIPHERING, ISSUE_INTEGRITY, ISSUE_SPARE, NO_ISSUES};
use smcbench_testbench::{cause_str, EmmCause, KeyKind, Testbench};

/// Secure AES selection on NAS, attach accepted, RRC never seen
#[test]
fn test_secure_nas_selection() {
    init_test_logging();

    let bench = Testbench::new();
    bench.create_attempt(EIA_SNOW_AES, EEA_SNOW_AES);
    replay(&bench, &[AttachEvent::NasSmc { eia: 2, eea: 2 }, AttachEvent::Accept]);

    assert!(bench.is_finished());
    assert!(!bench.is_connected());

    let verdict = bench.current_verdict().expect("attempt exists");
    assert!(!verdict.notable);
    assert!(verdict.success);

    let summary = bench.current_summary();
    assert!(summary.contains("  * NAS Security Mode Command: EEA=128-EEA2, EIA=128-EIA2"));
    assert!(summary.contains("  * Attach Accept"));
    assert_issue_lines(&summary, &[NO_ISSUES]);
}

/// NULL selected for both NAS algorithms
#[test]
fn test_null_nas_selection() {
    init_test_logging();

    let bench = Testbench::new();
    bench.create_attempt(EIA_SNOW_AES, EEA_SNOW_AES);
    replay(&bench, &[AttachEvent::NasSmc { eia: 0, eea: 0 }, AttachEvent::Accept]);

    let verdict = bench.current_verdict().expect("attempt exists");
    assert!(verdict.notable);
    assert!(verdict.success);
    assert!(verdict.insecure_nas_ciphering);
    assert!(verdict.insecure_nas_integrity);
    assert!(!verdict.spare_values);

    let summary = bench.current_summary();
    assert!(summary.contains("EEA=EEA0, EIA=EIA0"));
    assert_issue_lines(&summary, &[ISSUE_CIPHERING, ISSUE_INTEGRITY]);
}

/// Attach Reject on a fresh attempt
#[test]
fn test_attach_reject() {
    init_test_logging();

    let bench = Testbench::new();
    bench.create_attempt(EIA_SNOW_AES, EEA_SNOW_AES);
    bench.report_attach_reject(0x03);

    assert!(bench.is_finished());
    assert!(!bench.is_connected());
    assert_eq!(cause_str(0x03), "MME_EMM_CAUSE_ILLEGAL_UE");
    assert_eq!(cause_str(0x99), "error");

    let summary = bench.current_summary();
    assert!(summary.contains("  * Attach Reject (MME_EMM_CAUSE_ILLEGAL_UE)"));
    assert_issue_lines(&summary, &[NO_ISSUES]);

    bench.create_attempt(EIA_SNOW_AES, EEA_SNOW_AES);
    bench.report_attach_reject(0x99);
    assert!(bench.current_summary().contains("  * Attach Reject (error)"));
}

/// Full attach with RRC keys, spare identifier selected for RRC ciphering
#[test]
fn test_connected_with_spare_rrc_ciphering() {
    init_test_logging();

    let bench = Testbench::new();
    bench.create_attempt(EIA_SNOW_AES, EEA_SNOW_AES);
    replay(
        &bench,
        &[
            AttachEvent::NasSmc { eia: 1, eea: 1 },
            AttachEvent::RrcSmc { eia: 2, eea: 5 },
            AttachEvent::Key(KeyKind::RrcCiphering, 0x11),
            AttachEvent::Key(KeyKind::RrcIntegrity, 0x22),
            AttachEvent::Key(KeyKind::UpCiphering, 0x33),
            AttachEvent::Accept,
        ],
    );

    assert!(bench.is_finished());
    assert!(bench.is_connected());

    let verdict = bench.current_verdict().expect("attempt exists");
    assert!(verdict.insecure_rrc_ciphering);
    assert!(verdict.spare_values);
    assert!(!verdict.insecure_integrity());
    assert!(verdict.notable);

    let summary = bench.current_summary();
    assert!(summary.contains("  * RRC Security Mode Command: EEA=EEA5 (spare), EIA=128-EIA2"));
    assert_issue_lines(&summary, &[ISSUE_CIPHERING, ISSUE_SPARE]);
}

/// Events after the attach finished keep accumulating
#[test]
fn test_late_events_accepted() {
    init_test_logging();

    let bench = Testbench::new();
    bench.create_attempt(EIA_SNOW_AES, EEA_SNOW_AES);
    replay(
        &bench,
        &[
            AttachEvent::Accept,
            AttachEvent::NasSmc { eia: 2, eea: 2 },
            AttachEvent::RrcSmc { eia: 2, eea: 2 },
        ],
    );

    assert!(bench.is_connected());
    assert!(!bench.current_verdict().expect("attempt exists").notable);
}

/// Unknown key kinds are rejected without touching the attempt
#[test]
fn test_unknown_raw_key_kind() {
    init_test_logging();

    let bench = Testbench::new();
    bench.create_attempt(EIA_SNOW_AES, EEA_SNOW_AES);
    let before = bench.current_summary();

    bench.report_raw_key(42, Some(&[0xEE; 32]));
    bench.report_raw_key(0, None);

    assert_eq!(bench.current_summary(), before);
    assert_eq!(bench.current_verdict(), bench.verdict(1).ok());
}

/// UE advertising only NULL algorithms, network selects NULL and rejects
#[test]
fn test_null_only_ue_rejected() {
    init_test_logging();

    let bench = Testbench::new();
    bench.create_attempt(NULL_ONLY, NULL_ONLY);
    replay(
        &bench,
        &[
            AttachEvent::NasSmc { eia: 0, eea: 0 },
            AttachEvent::Reject(EmmCause::UeSecurityCapMismatch.into()),
        ],
    );

    assert!(bench.is_finished());
    assert!(!bench.is_connected());

    let verdict = bench.current_verdict().expect("attempt exists");
    assert!(verdict.notable);
    assert!(verdict.success);

    let summary = bench.current_summary();
    assert!(summary.contains("                 NULL   :     x          x"));
    assert!(summary.contains("                 AES    :     -          -"));
    assert!(summary.contains("  * Attach Reject (MME_EMM_CAUSE_UE_SECURITY_CAPABILITIES_MISMATCH)"));
    assert_issue_lines(&summary, &[ISSUE_CIPHERING, ISSUE_INTEGRITY]);
}
