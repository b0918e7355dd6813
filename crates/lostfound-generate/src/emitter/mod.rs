//! Schema emitter: the static parts of the script.

use lostfound_core::catalog::LOCATION_VARIANTS;
use lostfound_core::{Column, Constraint, DatabaseSchema, REFERENCE_DATA, Table, drop_order, tables};

use crate::errors::GenerationError;
use crate::output::script::render_value_list;
use crate::value::SqlValue;

pub mod templates;

pub use templates::logic_sql;

/// Database creation plus idempotent drops, dependents before the tables
/// they reference.
pub fn header_sql(schema: &DatabaseSchema) -> Result<String, GenerationError> {
    let mut out = String::new();
    out.push_str(&format!("CREATE DATABASE IF NOT EXISTS {};\n", schema.database));
    out.push_str(&format!("USE {};\n", schema.database));
    out.push_str("SET FOREIGN_KEY_CHECKS = 0;\n");

    for table in drop_order(schema)? {
        out.push_str(&format!("DROP TABLE IF EXISTS {table};\n"));
    }
    for table in &schema.legacy_tables {
        out.push_str(&format!("DROP TABLE IF EXISTS {table};\n"));
    }
    for view in templates::VIEW_NAMES {
        out.push_str(&format!("DROP VIEW IF EXISTS {view};\n"));
    }
    for procedure in templates::PROCEDURE_NAMES {
        out.push_str(&format!("DROP PROCEDURE IF EXISTS {procedure};\n"));
    }
    for trigger in templates::TRIGGER_NAMES {
        out.push_str(&format!("DROP TRIGGER IF EXISTS {trigger};\n"));
    }

    Ok(out)
}

/// `CREATE TABLE` statements in catalog order.
pub fn tables_sql(schema: &DatabaseSchema) -> String {
    schema
        .tables
        .iter()
        .map(create_table_sql)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn create_table_sql(table: &Table) -> String {
    let single_pk = table
        .primary_key()
        .filter(|pk| pk.columns.len() == 1)
        .map(|pk| pk.columns[0].as_str());

    let mut lines: Vec<String> = table
        .columns
        .iter()
        .map(|column| column_sql(table, column, single_pk == Some(column.name.as_str())))
        .collect();

    for constraint in &table.constraints {
        match constraint {
            Constraint::PrimaryKey(pk) if pk.columns.len() > 1 => {
                lines.push(format!("PRIMARY KEY ({})", pk.columns.join(", ")));
            }
            Constraint::Unique(unique) if unique.columns.len() > 1 => {
                lines.push(format!("UNIQUE ({})", unique.columns.join(", ")));
            }
            Constraint::ForeignKey(fk) => {
                let mut line = format!(
                    "FOREIGN KEY ({}) REFERENCES {}({})",
                    fk.columns.join(", "),
                    fk.referenced_table,
                    fk.referenced_columns.join(", ")
                );
                if let Some(action) = fk.on_delete.as_sql() {
                    line.push_str(&format!(" ON DELETE {action}"));
                }
                lines.push(line);
            }
            _ => {}
        }
    }

    let body: Vec<String> = lines.iter().map(|line| format!("    {line}")).collect();
    format!("CREATE TABLE {} (\n{}\n);\n", table.name, body.join(",\n"))
}

fn column_sql(table: &Table, column: &Column, is_primary: bool) -> String {
    let mut line = format!("{} {}", column.name, column.column_type.to_sql());
    if column.auto_increment {
        line.push_str(" AUTO_INCREMENT");
    }
    if is_primary {
        line.push_str(" PRIMARY KEY");
    } else if !column.is_nullable {
        line.push_str(" NOT NULL");
    }
    if table.is_unique_column(&column.name) {
        line.push_str(" UNIQUE");
    }
    if let Some(default) = &column.default {
        line.push_str(&format!(" DEFAULT {default}"));
    }
    line
}

/// Inserts for the fixed lookup tables.
pub fn reference_data_sql() -> String {
    REFERENCE_DATA
        .iter()
        .map(|reference| {
            let values: Vec<Vec<SqlValue>> = reference
                .values
                .iter()
                .map(|value| vec![SqlValue::text(*value)])
                .collect();
            format!(
                "INSERT INTO {} ({}) VALUES {};\n",
                reference.table,
                reference.column,
                render_value_list(&values, ", ")
            )
        })
        .collect()
}

/// Location names: every city crossed with every location variant.
pub fn location_names(cities: &[String]) -> Vec<String> {
    cities
        .iter()
        .flat_map(|city| {
            LOCATION_VARIANTS
                .iter()
                .map(move |variant| format!("{city} {variant}"))
        })
        .collect()
}

pub fn locations_sql(names: &[String]) -> String {
    let values: Vec<Vec<SqlValue>> = names
        .iter()
        .map(|name| vec![SqlValue::text(name.as_str())])
        .collect();
    format!(
        "INSERT INTO {} (LocationName) VALUES {};\n",
        tables::LOCATIONS,
        render_value_list(&values, ", ")
    )
}
