use std::path::PathBuf;
use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use lostfound_core::{DatabaseSchema, REFERENCE_DATA, tables, tracker_schema, validate_schema};

use crate::config::GenerateConfig;
use crate::emitter::{
    header_sql, location_names, locations_sql, logic_sql, reference_data_sql, tables_sql,
};
use crate::errors::GenerationError;
use crate::foreign::{ForeignContext, InMemoryForeignContext};
use crate::generators::{GeneratorContext, GeneratorRegistry, Row, RowTarget};
use crate::model::{GenerationReport, TableReport};
use crate::output::script::{ScriptBuilder, render_insert, script_digest, write_script};
use crate::planner::plan_tables;

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub output_path: PathBuf,
    pub report: GenerationReport,
}

/// Rows generated for one table.
#[derive(Debug, Clone)]
pub struct TableRows {
    pub table: &'static str,
    pub columns: &'static [&'static str],
    pub rows_requested: u64,
    pub rows: Vec<Row>,
}

/// Everything a run generates before it is rendered.
#[derive(Debug, Clone)]
pub struct GeneratedDataset {
    pub seed: u64,
    pub locations: Vec<String>,
    /// Generated tables in emission order.
    pub tables: Vec<TableRows>,
}

impl GeneratedDataset {
    pub fn table(&self, name: &str) -> Option<&TableRows> {
        self.tables.iter().find(|table| table.table == name)
    }

    pub fn table_reports(&self) -> Vec<TableReport> {
        self.tables
            .iter()
            .map(|table| TableReport {
                table: table.table.to_string(),
                rows_requested: table.rows_requested,
                rows_generated: table.rows.len() as u64,
            })
            .collect()
    }
}

/// Entry point for building the seed script.
pub struct GenerationEngine {
    config: GenerateConfig,
    schema: DatabaseSchema,
    registry: GeneratorRegistry,
}

impl GenerationEngine {
    pub fn new(config: GenerateConfig) -> Self {
        Self {
            config,
            schema: tracker_schema(),
            registry: GeneratorRegistry::new(),
        }
    }

    pub fn config(&self) -> &GenerateConfig {
        &self.config
    }

    /// Generate, render and write the script, plus the report if configured.
    pub fn run(&self) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let seed = self
            .config
            .seed
            .unwrap_or_else(|| rand::rng().random::<u64>());

        info!(
            run_id = %run_id,
            seed,
            output = %self.config.output_path.display(),
            "generation started"
        );

        let dataset = self.generate_rows(seed)?;
        let script = self.render(&dataset)?;
        let stats = write_script(&self.config.output_path, &script)?;

        info!(
            run_id = %run_id,
            path = %self.config.output_path.display(),
            bytes = stats.bytes_written,
            "script written"
        );

        let mut report = GenerationReport::new(run_id.clone(), seed, self.config.output_path.clone());
        report.tables = dataset.table_reports();
        report.bytes_written = stats.bytes_written;
        report.sha256 = stats.sha256;
        report.duration_ms = start.elapsed().as_millis() as u64;

        if let Some(report_path) = &self.config.report_path {
            if let Some(parent) = report_path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(report_path, serde_json::to_vec_pretty(&report)?)?;
            debug!(path = %report_path.display(), "report written");
        }

        info!(
            run_id = %run_id,
            rows = report.total_rows(),
            duration_ms = report.duration_ms,
            "generation completed"
        );

        Ok(GenerationResult {
            output_path: self.config.output_path.clone(),
            report,
        })
    }

    /// Generate every entity table with per-table streams derived from `seed`.
    pub fn generate_rows(&self, seed: u64) -> Result<GeneratedDataset, GenerationError> {
        self.config.validate()?;
        validate_schema(&self.schema)?;
        let tasks = plan_tables(&self.schema, &self.registry, &self.config)?;

        let locations = location_names(&self.config.pools.cities);
        let mut foreign = InMemoryForeignContext::new();
        for reference in REFERENCE_DATA {
            foreign.ingest_table(reference.table, reference.values.len() as u64);
        }
        foreign.ingest_table(tables::LOCATIONS, locations.len() as u64);

        let mut generated = Vec::with_capacity(tasks.len());
        for task in tasks {
            let generator = self.registry.generator(task.table).ok_or_else(|| {
                GenerationError::InvalidConfig(format!("no generator for table '{}'", task.table))
            })?;
            let rows_requested = match task.target {
                RowTarget::Fixed(count) => count,
                RowTarget::PerParent(parent) => foreign.row_count(parent)?,
            };

            info!(table = task.table, rows = rows_requested, "generating table");

            let mut rng = ChaCha8Rng::seed_from_u64(hash_seed(seed, task.table));
            let rows = {
                let ctx = GeneratorContext {
                    config: &self.config,
                    foreign: &foreign,
                };
                generator.generate(&ctx, rows_requested, &mut rng)?
            };
            foreign.ingest_table(task.table, rows.len() as u64);

            info!(
                table = task.table,
                rows_generated = rows.len() as u64,
                "table generated"
            );

            generated.push(TableRows {
                table: task.table,
                columns: generator.columns(),
                rows_requested,
                rows,
            });
        }

        Ok(GeneratedDataset {
            seed,
            locations,
            tables: generated,
        })
    }

    /// Assemble the full script text for a generated dataset.
    pub fn render(&self, dataset: &GeneratedDataset) -> Result<String, GenerationError> {
        let mut script = ScriptBuilder::new();
        script
            .section(&header_sql(&self.schema)?)
            .section(&tables_sql(&self.schema))
            .section(&reference_data_sql())
            .section(&locations_sql(&dataset.locations));

        for table in &dataset.tables {
            script.section(&render_insert(table.table, table.columns, &table.rows));
            script.section("");
        }

        script.section(&logic_sql());
        Ok(script.finish())
    }

    /// Render the script for `seed` without touching the filesystem.
    pub fn render_seed(&self, seed: u64) -> Result<(String, String), GenerationError> {
        let dataset = self.generate_rows(seed)?;
        let script = self.render(&dataset)?;
        let digest = script_digest(&script);
        Ok((script, digest))
    }
}

fn hash_seed(seed: u64, key: &str) -> u64 {
    let mut hash = seed ^ 0xcbf29ce484222325;
    for byte in key.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> GenerateConfig {
        GenerateConfig {
            user_count: 12,
            item_count: 20,
            report_count: 6,
            alert_count: 5,
            comment_count: 4,
            match_count: 3,
            log_count: 7,
            admin_count: 2,
            seed: Some(42),
            ..GenerateConfig::default()
        }
    }

    #[test]
    fn table_seeds_differ_per_table() {
        assert_ne!(hash_seed(7, tables::USERS), hash_seed(7, tables::ITEMS));
        assert_eq!(hash_seed(7, tables::USERS), hash_seed(7, tables::USERS));
    }

    #[test]
    fn dataset_follows_configured_counts() {
        let engine = GenerationEngine::new(small_config());
        let dataset = engine.generate_rows(42).expect("generate");

        assert_eq!(dataset.table(tables::USERS).map(|t| t.rows.len()), Some(12));
        assert_eq!(dataset.table(tables::ITEMS).map(|t| t.rows.len()), Some(20));
        assert_eq!(dataset.table(tables::MATCHES).map(|t| t.rows.len()), Some(3));
        assert_eq!(
            dataset
                .table(tables::NOTIFICATION_SETTINGS)
                .map(|t| t.rows.len()),
            Some(12)
        );
        assert_eq!(
            dataset.locations.len(),
            engine.config().pools.cities.len() * 3
        );

        let tags = dataset.table(tables::ITEM_TAGS).expect("tags");
        assert_eq!(tags.rows_requested, 20);
        assert!(tags.rows.len() <= 20);
    }

    #[test]
    fn script_sections_appear_in_order() {
        let engine = GenerationEngine::new(small_config());
        let (script, _) = engine.render_seed(42).expect("render");

        let position = |needle: &str| {
            script
                .find(needle)
                .unwrap_or_else(|| panic!("missing {needle}"))
        };
        let order = [
            "CREATE DATABASE IF NOT EXISTS CommunityTrackerDB;",
            "CREATE TABLE UserRoles (",
            "INSERT INTO UserRoles (RoleName)",
            "INSERT INTO Locations (LocationName)",
            "INSERT INTO Users (",
            "INSERT INTO Items (",
            "INSERT INTO NotificationSettings (",
            "CREATE VIEW",
            "CREATE PROCEDURE",
            "CREATE TRIGGER",
            "SET FOREIGN_KEY_CHECKS = 1;",
        ];
        for pair in order.windows(2) {
            assert!(
                position(pair[0]) < position(pair[1]),
                "{} should precede {}",
                pair[0],
                pair[1]
            );
        }
        assert!(script.ends_with("-- END OF SCRIPT"));
    }

    #[test]
    fn invalid_config_fails_before_generating() {
        let config = GenerateConfig {
            item_count: 0,
            match_count: 0,
            ..small_config()
        };
        let err = GenerationEngine::new(config)
            .generate_rows(1)
            .expect_err("reports without items");
        assert!(matches!(err, GenerationError::InvalidConfig(_)));
    }

    #[test]
    fn admin_threshold_above_user_count_promotes_everyone() {
        let config = GenerateConfig {
            user_count: 3,
            ..GenerateConfig::default()
        };
        let dataset = GenerationEngine::new(config)
            .generate_rows(1)
            .expect("admin threshold is an upper bound");

        let users = dataset.table(tables::USERS).expect("users");
        assert_eq!(users.rows.len(), 3);
        assert!(
            users
                .rows
                .iter()
                .all(|row| row[3].as_i64() == Some(lostfound_core::ADMIN_ROLE_ID))
        );
    }
}
