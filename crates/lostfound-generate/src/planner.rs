use std::collections::BTreeSet;

use lostfound_core::{DatabaseSchema, REFERENCE_DATA, tables};

use crate::config::GenerateConfig;
use crate::errors::GenerationError;
use crate::generators::{GeneratorRegistry, RowTarget};

/// Planned generation task for a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationTask {
    pub table: &'static str,
    pub target: RowTarget,
}

/// Tables the script fills before any generator runs.
pub fn seeded_tables() -> Vec<&'static str> {
    let mut seeded: Vec<&'static str> = REFERENCE_DATA.iter().map(|r| r.table).collect();
    seeded.push(tables::LOCATIONS);
    seeded
}

/// Build the generation plan in registry order, checking it against the
/// FK graph: every parent of a table must be seeded or planned earlier.
pub fn plan_tables(
    schema: &DatabaseSchema,
    registry: &GeneratorRegistry,
    config: &GenerateConfig,
) -> Result<Vec<GenerationTask>, GenerationError> {
    let mut available: BTreeSet<&str> = seeded_tables().into_iter().collect();
    let mut tasks = Vec::new();

    for generator in registry.iter() {
        let table_name = generator.table();
        let table = schema.table(table_name).ok_or_else(|| {
            GenerationError::InvalidConfig(format!("table '{table_name}' not found in schema"))
        })?;

        for column in generator.columns() {
            if !table.columns.iter().any(|col| col.name == *column) {
                return Err(GenerationError::InvalidConfig(format!(
                    "column '{table_name}.{column}' not found in schema"
                )));
            }
        }

        for parent in table.parents() {
            if !available.contains(parent) {
                return Err(GenerationError::MissingParent(format!(
                    "{table_name} depends on {parent}, which is not generated before it"
                )));
            }
        }

        let target = generator.row_target(config);
        if let RowTarget::PerParent(parent) = target {
            if !available.contains(parent) {
                return Err(GenerationError::MissingParent(format!(
                    "{table_name} is sized by {parent}, which is not generated before it"
                )));
            }
        }

        available.insert(table_name);
        tasks.push(GenerationTask {
            table: table_name,
            target,
        });
    }

    if tasks.is_empty() {
        return Err(GenerationError::InvalidConfig(
            "no generation targets resolved".to_string(),
        ));
    }

    Ok(tasks)
}

#[cfg(test)]
mod tests {
    use lostfound_core::tracker_schema;

    use super::*;
    use crate::generators::{GeneratorRegistry, users::NotificationSettingsGenerator};

    #[test]
    fn plans_every_generated_table() {
        let config = GenerateConfig::default();
        let tasks = plan_tables(&tracker_schema(), &GeneratorRegistry::new(), &config)
            .expect("plan tables");

        assert_eq!(tasks.len(), 9);
        assert_eq!(tasks[0].table, tables::USERS);
        assert_eq!(tasks[0].target, RowTarget::Fixed(300));
        assert_eq!(
            tasks.last().map(|task| task.target),
            Some(RowTarget::PerParent(tables::USERS))
        );
    }

    #[test]
    fn rejects_child_planned_before_parent() {
        let mut registry = GeneratorRegistry::empty();
        registry.register_generator(Box::new(NotificationSettingsGenerator));

        let err = plan_tables(&tracker_schema(), &registry, &GenerateConfig::default())
            .expect_err("users not generated");
        assert!(matches!(err, GenerationError::MissingParent(_)));
    }
}
