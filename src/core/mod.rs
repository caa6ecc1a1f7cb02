// src/core/mod.rs

pub mod arithmetic_sequence;
pub mod directory_location;
pub mod disjoint_sequences;
pub mod error;
pub mod non_standard_integer;
pub mod non_standard_ring;
pub mod serialization;
pub mod ulam_run;
pub mod ulam_sequence;
