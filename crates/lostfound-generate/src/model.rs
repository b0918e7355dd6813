use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Summary of a generated table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableReport {
    pub table: String,
    pub rows_requested: u64,
    pub rows_generated: u64,
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    /// Seed the run used, so it can be replayed.
    pub seed: u64,
    pub output_path: PathBuf,
    pub tables: Vec<TableReport>,
    pub bytes_written: u64,
    /// Hex SHA-256 of the script.
    pub sha256: String,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(run_id: String, seed: u64, output_path: PathBuf) -> Self {
        Self {
            run_id,
            seed,
            output_path,
            tables: Vec::new(),
            bytes_written: 0,
            sha256: String::new(),
            duration_ms: 0,
        }
    }

    pub fn rows_for(&self, table: &str) -> Option<u64> {
        self.tables
            .iter()
            .find(|report| report.table == table)
            .map(|report| report.rows_generated)
    }

    pub fn total_rows(&self) -> u64 {
        self.tables.iter().map(|report| report.rows_generated).sum()
    }
}
