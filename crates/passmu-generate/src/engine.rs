//! Parallel generation pipeline: expand, compose across workers, stream.

use std::collections::BTreeSet;
use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::info;

use passmu_core::MutationConfig;

use crate::compose::compose_variants;
use crate::errors::GenerationError;
use crate::expand::expand_base_word;
use crate::model::{GenerateOptions, GenerationReport};
use crate::sink::StreamingSink;

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub report: GenerationReport,
}

/// Entry point for generating a wordlist from one raw input.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Run the full pipeline for `input`.
    ///
    /// Workers share the immutable configuration and nothing else; each
    /// base word gets its own RNG seeded from (run seed, submission
    /// index, word), so a run is reproducible for a fixed seed. Results
    /// come back in submission order and are drained into the sink by
    /// this thread alone. A panic in any worker aborts the whole run.
    pub fn run(
        &self,
        input: &str,
        config: &MutationConfig,
    ) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(GenerationError::EmptyInput);
        }
        config.validate()?;

        let bases = expand_base_word(trimmed, config);
        let workers = self.options.workers.unwrap_or_else(num_cpus::get);
        info!(
            run_id = %run_id,
            input = trimmed,
            base_words = bases.len(),
            workers,
            seed = self.options.seed,
            "generation started"
        );

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()
            .map_err(|err| GenerationError::Scheduler(err.to_string()))?;

        let seed = self.options.seed;
        let variant_sets: Vec<BTreeSet<String>> = pool.install(|| {
            bases
                .par_iter()
                .enumerate()
                .map(|(index, base)| {
                    let mut rng = ChaCha8Rng::seed_from_u64(word_seed(seed, index as u64, base));
                    compose_variants(base, config, &mut rng)
                })
                .collect()
        });

        std::fs::create_dir_all(&self.options.out_dir)?;
        let mut sink = StreamingSink::new(
            &self.options.out_dir,
            &base_identifier(trimmed),
            config.use_compression,
            config.max_lines_per_file,
        );
        for set in &variant_sets {
            for variant in set {
                sink.write(variant)?;
            }
        }
        let summary = sink.close()?;

        let report = GenerationReport {
            run_id: run_id.clone(),
            base_words: bases.len() as u64,
            variants_written: summary.lines_written,
            parts_written: summary.parts_written,
            duration_ms: start.elapsed().as_millis() as u64,
            last_path: summary.last_path,
        };
        info!(
            run_id = %run_id,
            variants_written = report.variants_written,
            parts_written = report.parts_written,
            duration_ms = report.duration_ms,
            "generation completed"
        );

        Ok(GenerationResult { report })
    }
}

/// Stable identifier for output file names: input whitespace collapses
/// to underscores.
fn base_identifier(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join("_")
}

/// FNV-style mix of run seed, submission index, and word bytes.
fn word_seed(seed: u64, index: u64, word: &str) -> u64 {
    let mut hash = seed ^ index.wrapping_mul(0x9e3779b97f4a7c15);
    for byte in word.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}
