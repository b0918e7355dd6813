//! Core contracts for the lost-and-found tracker seed generator.
//!
//! This crate defines the schema model, the tracker catalog, domain
//! enumerations, and the FK dependency helpers shared by the generator and
//! the CLI.

pub mod catalog;
pub mod constraints;
pub mod error;
pub mod graph;
pub mod schema;
pub mod types;
pub mod validation;

pub use catalog::{
    ADMIN_ROLE_ID, DATABASE_NAME, REFERENCE_DATA, REGULAR_ROLE_ID, ReferenceTable, tables,
    tracker_schema,
};
pub use constraints::{Constraint, FkAction, ForeignKey, PrimaryKey, UniqueConstraint};
pub use error::{Error, Result};
pub use graph::{FkGraphReport, FkGraphSummary, build_fk_graph_report, drop_order};
pub use schema::{Column, DatabaseSchema, Table};
pub use types::{ActivityAction, AlertType, ColumnType, ItemStatus, MatchStatus, ReportType};
pub use validation::validate_schema;
