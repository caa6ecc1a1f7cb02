// src/config/ulam_config.rs

use serde::{Deserialize, Serialize};
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UlamConfig {
    /// Directory holding the persisted collections and logs
    pub output_dir: String,

    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Blocks are computed up to bound_multiplier * N
    pub bound_multiplier: i64,

    /// Continue from persisted state when present
    pub resume: bool,

    /// Ring bookkeeping
    pub ring: RingConfig,

    /// Brute-force cross-check range
    pub verify: VerifyConfig,
}

/// Validity threshold settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RingConfig {
    /// Starting lower bound on N
    pub initial_guess: i64,

    /// Lower bound the ring restarts from after each logged block
    pub reset_guess: i64,

    /// Log comparisons that need N above this
    pub report_guess_above: Option<i64>,
}

/// Concrete N checked against the brute-force computator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyConfig {
    pub min_n: i64,
    pub max_n: i64,
}

impl Default for UlamConfig {
    fn default() -> Self {
        UlamConfig {
            output_dir: ".".to_string(),
            log_level: "info".to_string(),
            bound_multiplier: 10,
            resume: true,
            ring: RingConfig::default(),
            verify: VerifyConfig::default(),
        }
    }
}

impl Default for RingConfig {
    fn default() -> Self {
        RingConfig {
            initial_guess: 1,
            reset_guess: 4,
            report_guess_above: None,
        }
    }
}

impl Default for VerifyConfig {
    fn default() -> Self {
        VerifyConfig { min_n: 4, max_n: 30 }
    }
}

impl UlamConfig {
    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("output_dir", ".")?
            .set_default("log_level", "info")?
            .set_default("bound_multiplier", 10)?
            .set_default("resume", true)?
            .set_default("ring.initial_guess", 1)?
            .set_default("ring.reset_guess", 4)?
            .set_default("verify.min_n", 4)?
            .set_default("verify.max_n", 30)
    }

    fn with_environment(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
        // ULAM_BOUND_MULTIPLIER, ULAM_RING__RESET_GUESS, ...
        builder.add_source(
            Environment::with_prefix("ULAM")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
    }

    /// Load configuration with precedence: env vars → config file → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        // TOML preferred, YAML fallback
        if Path::new("ulam.toml").exists() {
            builder = builder.add_source(File::with_name("ulam.toml"));
        } else if Path::new("ulam.yaml").exists() {
            builder = builder.add_source(File::with_name("ulam.yaml"));
        }

        let config = Self::with_environment(builder).build()?;
        config.try_deserialize()
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        let config = Self::with_environment(builder).build()?;
        config.try_deserialize()
    }
}
