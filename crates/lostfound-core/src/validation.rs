use std::collections::{BTreeMap, BTreeSet};

use crate::constraints::Constraint;
use crate::error::{Error, Result};
use crate::schema::DatabaseSchema;
use crate::types::ColumnType;

/// Validate internal consistency of a database schema.
///
/// This checks:
/// - duplicate tables/columns
/// - primary key and unique columns exist
/// - foreign key columns and referenced targets exist
/// - enum columns declare at least one label
pub fn validate_schema(schema: &DatabaseSchema) -> Result<()> {
    let mut catalog: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();

    for table in &schema.tables {
        if catalog.contains_key(table.name.as_str()) {
            return Err(Error::InvalidSchema(format!(
                "duplicate table name: {}",
                table.name
            )));
        }

        let mut columns = BTreeSet::new();
        for column in &table.columns {
            if !columns.insert(column.name.as_str()) {
                return Err(Error::InvalidSchema(format!(
                    "duplicate column name: {}.{}",
                    table.name, column.name
                )));
            }
            if let ColumnType::Enum(labels) = &column.column_type {
                if labels.is_empty() {
                    return Err(Error::InvalidSchema(format!(
                        "enum column without labels: {}.{}",
                        table.name, column.name
                    )));
                }
            }
        }

        catalog.insert(table.name.as_str(), columns);
    }

    for table in &schema.tables {
        let columns = catalog.get(table.name.as_str()).ok_or_else(|| {
            Error::InvalidSchema(format!("missing table in catalog: {}", table.name))
        })?;

        for constraint in &table.constraints {
            match constraint {
                Constraint::PrimaryKey(pk) => {
                    for column in &pk.columns {
                        if !columns.contains(column.as_str()) {
                            return Err(Error::InvalidSchema(format!(
                                "primary key column not found: {}.{}",
                                table.name, column
                            )));
                        }
                    }
                }
                Constraint::ForeignKey(fk) => {
                    for column in &fk.columns {
                        if !columns.contains(column.as_str()) {
                            return Err(Error::InvalidSchema(format!(
                                "foreign key column not found: {}.{}",
                                table.name, column
                            )));
                        }
                    }

                    let ref_columns =
                        catalog.get(fk.referenced_table.as_str()).ok_or_else(|| {
                            Error::InvalidSchema(format!(
                                "referenced table not found: {}",
                                fk.referenced_table
                            ))
                        })?;

                    for column in &fk.referenced_columns {
                        if !ref_columns.contains(column.as_str()) {
                            return Err(Error::InvalidSchema(format!(
                                "referenced column not found: {}.{}",
                                fk.referenced_table, column
                            )));
                        }
                    }
                }
                Constraint::Unique(unique) => {
                    for column in &unique.columns {
                        if !columns.contains(column.as_str()) {
                            return Err(Error::InvalidSchema(format!(
                                "unique column not found: {}.{}",
                                table.name, column
                            )));
                        }
                    }
                }
            }
        }
    }

    for legacy in &schema.legacy_tables {
        if catalog.contains_key(legacy.as_str()) {
            return Err(Error::InvalidSchema(format!(
                "legacy table shadows catalog table: {legacy}"
            )));
        }
    }

    Ok(())
}
