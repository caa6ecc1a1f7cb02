// src/reference/mod.rs

pub mod naive;
pub mod verify;

pub use naive::{ulam_terms_up_to, NaiveUlam};
pub use verify::{verify_range, Mismatch};
