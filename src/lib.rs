// src/lib.rs

pub mod config;
pub mod core;
pub mod reference;

pub use crate::core::error::{Result, UlamError};
pub use crate::core::ulam_sequence::{ulam_coefficients, NonStandardUlamSequence};
