//! Common test fixtures

use smcbench_testbench::{KeyKind, Testbench, KEY_SIZE};

/// EIA mask advertising 128-EIA1 and 128-EIA2
pub const EIA_SNOW_AES: u8 = 0b0000_0110;
/// EEA mask advertising 128-EEA1 and 128-EEA2
pub const EEA_SNOW_AES: u8 = 0b0000_0110;
/// Mask advertising only the NULL algorithm
pub const NULL_ONLY: u8 = 0b0000_0001;

/// Run configuration used by the config driven tests
pub const SAMPLE_CONFIG: &str = r#"
log_level: debug
trace_dir: /tmp/smcbench-traces
profiles:
  - name: snow-aes
    integrity_mask: 6
    ciphering_mask: 6
  - name: null-only
    integrity_mask: 1
    ciphering_mask: 1
  - name: everything
    integrity_mask: 255
    ciphering_mask: 255
"#;

/// One event as the protocol stack reports it
#[derive(Debug, Clone, Copy)]
pub enum AttachEvent {
    NasSmc { eia: u8, eea: u8 },
    RrcSmc { eia: u8, eea: u8 },
    Key(KeyKind, u8),
    Accept,
    Reject(u8),
}

/// Feeds events to the current attempt of `bench`
pub fn replay(bench: &Testbench, events: &[AttachEvent]) {
    for event in events {
        match *event {
            AttachEvent::NasSmc { eia, eea } => bench.report_nas_security_mode_command(eia, eea),
            AttachEvent::RrcSmc { eia, eea } => bench.report_rrc_security_mode_command(eia, eea),
            AttachEvent::Key(kind, fill) => bench.report_key(kind, Some(&[fill; KEY_SIZE])),
            AttachEvent::Accept => bench.report_attach_accept(),
            AttachEvent::Reject(cause) => bench.report_attach_reject(cause),
        }
    }
}
