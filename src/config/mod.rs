// src/config/mod.rs

pub mod ulam_config;

// Re-export main types for convenience
pub use ulam_config::{RingConfig, UlamConfig, VerifyConfig};
