use serde::Deserialize;
use std::fs::read_to_string;
use std::path::Path;
use std::time::Duration;

use super::{CryptoStatus, EngineOp, FailurePolicy};

/// Complete harness configuration, as read from a TOML file
#[derive(Clone, Debug, Default, Deserialize)]
pub struct HarnessConfig {
    #[serde(default)]
    pub harness: HarnessPolicy,
    #[serde(default)]
    pub accelerator: AcceleratorConfig,
}

/// How the driver reacts to failures and how it waits for the engine
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct HarnessPolicy {
    /// Applied when loading a key group fails
    pub key_load_failure: FailurePolicy,
    /// Applied when starting, waiting for or fetching a MAC fails
    pub auth_failure: FailurePolicy,
    /// Hand the expected MAC to the engine when fetching the result
    pub verify_in_engine: bool,
    /// Upper bound for a single completion wait. None waits forever.
    pub completion_timeout_ms: Option<u64>,
    /// Yield to the scheduler after a key load and after every vector
    pub cooperative_pause: bool,
}

impl Default for HarnessPolicy {
    fn default() -> HarnessPolicy {
        HarnessPolicy {
            key_load_failure: FailurePolicy::Abort,
            auth_failure: FailurePolicy::Continue,
            verify_in_engine: true,
            completion_timeout_ms: None,
            cooperative_pause: true,
        }
    }
}

impl HarnessPolicy {
    pub fn set_key_load_failure(mut self, policy: FailurePolicy) -> HarnessPolicy {
        self.key_load_failure = policy;
        self
    }
    pub fn set_auth_failure(mut self, policy: FailurePolicy) -> HarnessPolicy {
        self.auth_failure = policy;
        self
    }
    pub fn set_verify_in_engine(mut self, verify_in_engine: bool) -> HarnessPolicy {
        self.verify_in_engine = verify_in_engine;
        self
    }
    pub fn set_completion_timeout_ms(mut self, timeout_ms: Option<u64>) -> HarnessPolicy {
        self.completion_timeout_ms = timeout_ms;
        self
    }
    pub fn set_cooperative_pause(mut self, cooperative_pause: bool) -> HarnessPolicy {
        self.cooperative_pause = cooperative_pause;
        self
    }

    pub fn completion_timeout(&self) -> Option<Duration> {
        self.completion_timeout_ms.map(Duration::from_millis)
    }
}

/// Accelerator backend selection and software engine behaviour
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AcceleratorConfig {
    /// Backend name. Only "software" is available.
    pub backend: String,
    /// Simulated time between starting a MAC and its completion
    pub completion_delay_us: u64,
    /// Random extra delay, up to this many microseconds
    pub completion_jitter_us: u64,
    /// Number of completion events with foreign handles sent ahead of
    /// every real completion
    pub spurious_events: u8,
    /// Statuses forced onto selected calls
    pub faults: Vec<FaultSpec>,
}

impl Default for AcceleratorConfig {
    fn default() -> AcceleratorConfig {
        AcceleratorConfig {
            backend: "software".to_owned(),
            completion_delay_us: 0,
            completion_jitter_us: 0,
            spurious_events: 0,
            faults: Vec::new(),
        }
    }
}

impl AcceleratorConfig {
    pub fn set_backend(mut self, backend: String) -> AcceleratorConfig {
        self.backend = backend;
        self
    }
    pub fn set_completion_delay_us(mut self, delay_us: u64) -> AcceleratorConfig {
        self.completion_delay_us = delay_us;
        self
    }
    pub fn set_completion_jitter_us(mut self, jitter_us: u64) -> AcceleratorConfig {
        self.completion_jitter_us = jitter_us;
        self
    }
    pub fn set_spurious_events(mut self, spurious_events: u8) -> AcceleratorConfig {
        self.spurious_events = spurious_events;
        self
    }
    pub fn add_fault(mut self, fault: FaultSpec) -> AcceleratorConfig {
        self.faults.push(fault);
        self
    }
}

/// Makes the `call`-th invocation (counted from 1) of `operation` return `status`
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
pub struct FaultSpec {
    pub operation: EngineOp,
    pub call: u32,
    pub status: CryptoStatus,
}

impl HarnessConfig {
    /// Read the configuration from a TOML file
    pub fn from_file(config_file: &Path) -> Result<HarnessConfig, String> {
        let config_string = read_to_string(config_file)
            .map_err(|err| format!("cannot read {}: {}", config_file.display(), err))?;
        HarnessConfig::from_toml(&config_string)
    }

    /// Parse the configuration from TOML text
    pub fn from_toml(config_string: &str) -> Result<HarnessConfig, String> {
        let config: HarnessConfig = toml::from_str(config_string).map_err(|err| err.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn set_harness(mut self, harness: HarnessPolicy) -> HarnessConfig {
        self.harness = harness;
        self
    }
    pub fn set_accelerator(mut self, accelerator: AcceleratorConfig) -> HarnessConfig {
        self.accelerator = accelerator;
        self
    }

    fn validate(&self) -> Result<(), String> {
        if self.harness.completion_timeout_ms == Some(0) {
            return Err("completion_timeout_ms must be greater than 0".to_owned());
        }
        if let Some(fault) = self.accelerator.faults.iter().find(|f| f.call == 0) {
            return Err(format!(
                "fault for {} counts calls from 1, got 0",
                fault.operation
            ));
        }
        Ok(())
    }
}
