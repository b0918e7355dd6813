use serde::{Deserialize, Serialize};

use crate::constraints::{Constraint, ForeignKey, PrimaryKey, UniqueConstraint};
use crate::types::ColumnType;

/// Top-level schema for the target database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSchema {
    /// Database created and selected by the script header.
    pub database: String,
    /// Tables in creation order.
    pub tables: Vec<Table>,
    /// Tables outside the catalog that the header still drops.
    #[serde(default)]
    pub legacy_tables: Vec<String>,
}

impl DatabaseSchema {
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|table| table.name == name)
    }
}

/// A table with its columns and constraints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    pub columns: Vec<Column>,
    pub constraints: Vec<Constraint>,
}

impl Table {
    /// Start a table whose first column is an auto-increment integer key.
    pub fn with_id(name: &str, id_column: &str) -> Self {
        Self {
            name: name.to_string(),
            columns: vec![Column {
                name: id_column.to_string(),
                column_type: ColumnType::Int,
                is_nullable: false,
                default: None,
                auto_increment: true,
            }],
            constraints: vec![Constraint::PrimaryKey(PrimaryKey {
                columns: vec![id_column.to_string()],
            })],
        }
    }

    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    pub fn unique(mut self, column: &str) -> Self {
        self.constraints.push(Constraint::Unique(UniqueConstraint {
            columns: vec![column.to_string()],
        }));
        self
    }

    pub fn foreign_key(mut self, fk: ForeignKey) -> Self {
        self.constraints.push(Constraint::ForeignKey(fk));
        self
    }

    pub fn primary_key(&self) -> Option<&PrimaryKey> {
        self.constraints.iter().find_map(|constraint| match constraint {
            Constraint::PrimaryKey(pk) => Some(pk),
            _ => None,
        })
    }

    pub fn foreign_keys(&self) -> impl Iterator<Item = &ForeignKey> {
        self.constraints.iter().filter_map(|constraint| match constraint {
            Constraint::ForeignKey(fk) => Some(fk),
            _ => None,
        })
    }

    /// True when `column` alone carries a unique constraint.
    pub fn is_unique_column(&self, column: &str) -> bool {
        self.constraints.iter().any(|constraint| match constraint {
            Constraint::Unique(unique) => unique.columns.len() == 1 && unique.columns[0] == column,
            _ => false,
        })
    }

    /// Table names this table references, without duplicates.
    pub fn parents(&self) -> Vec<&str> {
        let mut parents: Vec<&str> = Vec::new();
        for fk in self.foreign_keys() {
            if !parents.contains(&fk.referenced_table.as_str()) {
                parents.push(fk.referenced_table.as_str());
            }
        }
        parents
    }
}

/// Column metadata for a table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub column_type: ColumnType,
    pub is_nullable: bool,
    /// Raw SQL default expression (e.g. `CURRENT_TIMESTAMP`, `'Pending'`).
    pub default: Option<String>,
    pub auto_increment: bool,
}

impl Column {
    pub fn new(name: &str, column_type: ColumnType) -> Self {
        Self {
            name: name.to_string(),
            column_type,
            is_nullable: true,
            default: None,
            auto_increment: false,
        }
    }

    pub fn not_null(mut self) -> Self {
        self.is_nullable = false;
        self
    }

    pub fn default_sql(mut self, expression: &str) -> Self {
        self.default = Some(expression.to_string());
        self
    }
}
