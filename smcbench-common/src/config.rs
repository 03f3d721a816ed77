//! Testbench run configuration
//!
//! A run is described by the log level, an optional directory where the
//! protocol stack writes its traces, and the list of capability profiles the
//! test driver iterates over. Each profile becomes one attempt.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::logging::LogLevel;

/// One set of UE security capabilities to advertise.
///
/// Bit `i` of each mask advertises algorithm `i` (0 = NULL, 1 = Snow3G,
/// 2 = AES, 3 = ZUC, 4..7 spare).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityProfile {
    /// Human readable profile name, unique within a run
    pub name: String,
    /// Advertised integrity (EIA) capability mask
    pub integrity_mask: u8,
    /// Advertised ciphering (EEA) capability mask
    pub ciphering_mask: u8,
}

impl CapabilityProfile {
    /// Creates a new capability profile.
    pub fn new(name: impl Into<String>, integrity_mask: u8, ciphering_mask: u8) -> Self {
        Self {
            name: name.into(),
            integrity_mask,
            ciphering_mask,
        }
    }
}

/// Configuration of a testbench run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TestbenchConfig {
    /// Log level used when no `RUST_LOG` override is present
    #[serde(default)]
    pub log_level: LogLevel,
    /// Directory the protocol stack writes NAS and MAC traces into
    #[serde(default)]
    pub trace_dir: Option<PathBuf>,
    /// Capability profiles, one attempt each
    #[serde(default)]
    pub profiles: Vec<CapabilityProfile>,
}

impl TestbenchConfig {
    /// Parses a testbench configuration from a YAML string.
    ///
    /// # Example
    /// ```
    /// use smcbench_common::TestbenchConfig;
    ///
    /// let yaml = r#"
    /// log_level: debug
    /// trace_dir: /tmp/traces
    /// profiles:
    ///   - name: null-only
    ///     integrity_mask: 0x01
    ///     ciphering_mask: 0x01
    /// "#;
    ///
    /// let config = TestbenchConfig::from_yaml(yaml).unwrap();
    /// assert_eq!(config.profiles.len(), 1);
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self, Error> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a testbench configuration from a YAML file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Serializes the configuration to a YAML string.
    pub fn to_yaml(&self) -> Result<String, Error> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Checks that every profile has a non-empty, unique name.
    pub fn validate(&self) -> Result<(), Error> {
        let mut seen = HashSet::new();
        for profile in &self.profiles {
            if profile.name.trim().is_empty() {
                return Err(Error::Config("capability profile with empty name".into()));
            }
            if !seen.insert(profile.name.as_str()) {
                return Err(Error::Config(format!(
                    "duplicate capability profile '{}'",
                    profile.name
                )));
            }
        }
        Ok(())
    }

    /// Returns the NAS and MAC trace paths for an attempt.
    ///
    /// `None` when no trace directory is configured. Only computes the paths,
    /// nothing is created on disk.
    pub fn trace_paths(&self, attempt_id: u32) -> Option<(PathBuf, PathBuf)> {
        let dir = self.trace_dir.as_ref()?;
        Some((
            dir.join(format!("attempt_{attempt_id}_nas.pcap")),
            dir.join(format!("attempt_{attempt_id}_mac.pcap")),
        ))
    }
}
