use std::collections::BTreeMap;

use rand::{Rng, RngCore};

use crate::errors::GenerationError;

/// Access to the id ranges of tables generated so far.
///
/// Every table uses `AUTO_INCREMENT` keys on a freshly created table, so
/// the ids of a table with `n` rows are exactly `1..=n`.
pub trait ForeignContext {
    fn row_count(&self, table: &str) -> Result<u64, GenerationError>;

    /// Draw a uniformly random existing id of `table`.
    fn pick_id(&self, table: &str, rng: &mut dyn RngCore) -> Result<i64, GenerationError> {
        let count = self.row_count(table)?;
        if count == 0 {
            return Err(GenerationError::MissingParent(format!(
                "no parent rows for fk to {table}"
            )));
        }
        Ok(rng.random_range(1..=count) as i64)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryForeignContext {
    row_counts: BTreeMap<String, u64>,
}

impl InMemoryForeignContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ingest_table(&mut self, table: &str, rows: u64) {
        self.row_counts.insert(table.to_string(), rows);
    }
}

impl ForeignContext for InMemoryForeignContext {
    fn row_count(&self, table: &str) -> Result<u64, GenerationError> {
        self.row_counts.get(table).copied().ok_or_else(|| {
            GenerationError::MissingParent(format!("table {table} has not been generated"))
        })
    }
}
