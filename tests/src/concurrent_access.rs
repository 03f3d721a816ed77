//! Concurrent access to a shared testbench
//!
//! The protocol stack reports from its own thread while the driver polls
//! and reads summaries from another.

use std::sync::Arc;
use std::thread;

use integration_tests::{init_test_logging, EEA_SNOW_AES, EIA_SNOW_AES};
use smcbench_testbench::Testbench;

/// Reporter and poller threads on one attempt
#[test]
fn test_reporter_and_poller() {
    init_test_logging();

    let bench = Arc::new(Testbench::new());
    bench.create_attempt(EIA_SNOW_AES, EEA_SNOW_AES);

    let reporter = {
        let bench = Arc::clone(&bench);
        thread::spawn(move || {
            bench.report_nas_security_mode_command(2, 2);
            bench.report_rrc_security_mode_command(2, 2);
            bench.report_attach_accept();
        })
    };

    let poller = {
        let bench = Arc::clone(&bench);
        thread::spawn(move || {
            let mut seen_connected_unfinished = false;
            for _ in 0..1000 {
                let connected = bench.is_connected();
                let finished = bench.is_finished();
                // `connected` is read first, so it can only lag behind `finished`
                if connected && !finished {
                    seen_connected_unfinished = true;
                }
                let _ = bench.current_summary();
            }
            seen_connected_unfinished
        })
    };

    reporter.join().expect("reporter panicked");
    assert!(!poller.join().expect("poller panicked"));
    assert!(bench.is_connected());
}

/// Attempts created from several threads get unique, dense identifiers
#[test]
fn test_parallel_creation_ids_unique() {
    init_test_logging();

    let bench = Arc::new(Testbench::new());
    let threads = 8;
    let per_thread = 25;

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let bench = Arc::clone(&bench);
            thread::spawn(move || {
                (0..per_thread)
                    .map(|_| bench.create_attempt(EIA_SNOW_AES, EEA_SNOW_AES))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids: Vec<u32> = handles
        .into_iter()
        .flat_map(|h| h.join().expect("creator panicked"))
        .collect();
    ids.sort_unstable();

    let expected: Vec<u32> = (1..=(threads * per_thread) as u32).collect();
    assert_eq!(ids, expected);
    assert_eq!(bench.current_id(), Some((threads * per_thread) as u32));
}
