// src/core/ulam_run.rs

use std::collections::BTreeSet;
use std::fs;

use chrono::Utc;
use log::{debug, info};

use crate::config::UlamConfig;
use crate::core::directory_location::DirectoryLocations;
use crate::core::disjoint_sequences::DisjointSequences;
use crate::core::error::Result;
use crate::core::non_standard_integer::NonStandardInteger;
use crate::core::non_standard_ring::NonStandardRing;
use crate::core::serialization::types::RunSummary;
use crate::core::serialization::{load, save};
use crate::core::ulam_sequence::NonStandardUlamSequence;

/// Persistent driver around `NonStandardUlamSequence`.
///
/// Each run picks up whatever an earlier run saved under `output_dir`,
/// extends it one block at a time and logs the validity constraint reached
/// by every block before resetting the ring for the next one.
pub struct UlamRun {
    config: UlamConfig,
    locations: DirectoryLocations,
}

impl UlamRun {
    pub fn new(config: UlamConfig) -> Self {
        let locations = DirectoryLocations::new(&config.output_dir);
        UlamRun { config, locations }
    }

    pub fn locations(&self) -> &DirectoryLocations {
        &self.locations
    }

    fn new_ring(&self) -> NonStandardRing {
        let mut ring = NonStandardRing::with_minimal_guess(self.config.ring.initial_guess);
        ring.set_report_threshold(self.config.ring.report_guess_above);
        ring
    }

    /// The saved sequence if resuming is enabled and one exists, else the seed.
    pub fn open(&self) -> Result<(NonStandardUlamSequence, bool)> {
        let mut ring = self.new_ring();

        if self.config.resume && self.locations.has_saved_state() {
            let ulam = load::sequences(&mut ring, &self.locations.ulam_filepath)?;
            let one = load::sequences_or_empty(&mut ring, &self.locations.one_representation_filepath)?;
            let multiple = load::sequences_or_empty(&mut ring, &self.locations.multiple_representation_filepath)?;

            let sequence = NonStandardUlamSequence::from_state(ring, ulam, one, multiple)?;
            info!(
                "Resuming from {} ({})",
                self.locations.save_directory,
                sequence.largest_constant_computed().to_affine_string()
            );
            return Ok((sequence, true));
        }

        info!("Starting U(1,N) from the seed blocks");
        Ok((NonStandardUlamSequence::with_ring(ring), false))
    }

    /// Extends the persisted sequence until it covers `bound_multiplier * N`,
    /// then rewrites the three collection files and the run summary.
    pub fn write_all_data_up_to(&self, bound_multiplier: i64) -> Result<RunSummary> {
        fs::create_dir_all(&self.locations.save_directory)?;

        let (mut sequence, resumed) = self.open()?;
        if !resumed {
            save::exclusions::clear(&self.locations.exclusions_filepath)?;
        }

        let bound = bound_multiplier * NonStandardInteger::N;
        let mut overall_guess = sequence.ring().minimal_guess();
        let mut overall_exclusions = BTreeSet::new();

        while !sequence.covers(&bound) {
            sequence.extend_one_block()?;

            let frontier = sequence.largest_constant_computed().to_affine_string();
            let ring = sequence.ring_mut();
            let description = ring.describe();
            overall_guess = overall_guess.max(ring.minimal_guess());
            overall_exclusions.extend(ring.exclusions());

            debug!("{}: {}", frontier, description);
            save::exclusions::append(&frontier, &description, &self.locations.exclusions_filepath)?;
            ring.reset(self.config.ring.reset_guess);
        }

        save::sequences(sequence.ulam(), &self.locations.ulam_filepath)?;
        save::sequences(sequence.one_representation(), &self.locations.one_representation_filepath)?;
        save::sequences(sequence.multiple_representation(), &self.locations.multiple_representation_filepath)?;

        let mut validity = NonStandardRing::with_minimal_guess(overall_guess);
        for exclusion in overall_exclusions {
            validity.record_exclusion(exclusion);
        }

        let summary = RunSummary {
            bound_multiplier,
            blocks: sequence.ulam().len(),
            one_representation_blocks: sequence.one_representation().len(),
            multiple_representation_blocks: sequence.multiple_representation().len(),
            computed_up_to: sequence.largest_constant_computed().to_affine_string(),
            minimal_guess: overall_guess,
            validity: validity.describe(),
            exclusions: validity.exclusions(),
            resumed,
            finished_at: Utc::now(),
        };
        save::object(&summary, &self.locations.summary_filepath)?;

        info!(
            "Saved {} blocks up to {} to {}; valid for {}",
            summary.blocks, summary.computed_up_to, self.locations.save_directory, summary.validity
        );
        Ok(summary)
    }

    /// Blocks currently persisted, without extending.
    pub fn saved_ulam(&self) -> Result<DisjointSequences> {
        let mut ring = self.new_ring();
        load::sequences(&mut ring, &self.locations.ulam_filepath)
    }
}
