use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Directory where output parts are written.
    pub out_dir: PathBuf,
    /// Seed for the per-word random-capitalization draws.
    pub seed: u64,
    /// Worker threads (unset = number of available CPUs).
    pub workers: Option<usize>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("out"),
            seed: 0,
            workers: None,
        }
    }
}

/// Summary of a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub base_words: u64,
    pub variants_written: u64,
    pub parts_written: u64,
    pub duration_ms: u64,
    /// Path of the last part file written, if any line was written.
    pub last_path: Option<PathBuf>,
}
