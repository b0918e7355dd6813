//! Seed script generator for the lost-and-found community tracker.
//!
//! Renders the tracker schema, synthesizes FK-consistent rows for every
//! entity in dependency order, and writes one MySQL script.

pub mod config;
pub mod emitter;
pub mod engine;
pub mod errors;
pub mod foreign;
pub mod generators;
pub mod model;
pub mod output;
pub mod planner;
pub mod pools;
pub mod value;

pub use config::{CONFIG_FILE_NAME, DateWindow, GenerateConfig};
pub use engine::{GeneratedDataset, GenerationEngine, GenerationResult, TableRows};
pub use errors::GenerationError;
pub use model::{GenerationReport, TableReport};
pub use pools::ValuePools;
pub use value::SqlValue;
