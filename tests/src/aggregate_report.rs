//! Aggregate report across attempts

use integration_tests::{init_test_logging, replay, AttachEvent, EEA_SNOW_AES, EIA_SNOW_AES};
use smcbench_testbench::Testbench;

/// Only the notable attempt shows up in the aggregate report
#[test]
fn test_aggregate_contains_only_notable() {
    init_test_logging();

    let bench = Testbench::new();

    let first = bench.create_attempt(EIA_SNOW_AES, EEA_SNOW_AES);
    replay(&bench, &[AttachEvent::NasSmc { eia: 2, eea: 2 }, AttachEvent::Accept]);

    let second = bench.create_attempt(EIA_SNOW_AES, EEA_SNOW_AES);
    replay(&bench, &[AttachEvent::NasSmc { eia: 0, eea: 0 }, AttachEvent::Accept]);

    let third = bench.create_attempt(EIA_SNOW_AES, EEA_SNOW_AES);
    bench.report_attach_reject(0x11);

    let report = bench.aggregate_summary();
    assert_eq!(report, bench.attempt_summary(second).unwrap());
    assert!(!report.contains(&format!("Attempt {first}\n")));
    assert!(!report.contains(&format!("Attempt {third}\n")));
}

/// Notable attempts are concatenated in identifier order
#[test]
fn test_aggregate_order() {
    init_test_logging();

    let bench = Testbench::new();
    for eia in [0u8, 2, 7, 1, 0] {
        bench.create_attempt(EIA_SNOW_AES, EEA_SNOW_AES);
        bench.report_rrc_security_mode_command(eia, 2);
    }

    let expected: String = [1, 3, 5]
        .iter()
        .map(|&id| bench.attempt_summary(id).unwrap())
        .collect();
    assert_eq!(bench.aggregate_summary(), expected);
}

/// Sweeping does not change any attempt
#[test]
fn test_aggregate_is_read_only() {
    init_test_logging();

    let bench = Testbench::new();
    bench.create_attempt(EIA_SNOW_AES, EEA_SNOW_AES);
    bench.report_nas_security_mode_command(4, 4);

    let summary = bench.current_summary();
    let first = bench.aggregate_summary();
    let second = bench.aggregate_summary();

    assert_eq!(first, second);
    assert_eq!(bench.current_summary(), summary);
    assert_eq!(bench.attempt_count(), 1);
}
