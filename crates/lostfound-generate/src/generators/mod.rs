//! Per-entity row generators.
//!
//! Each generator owns one table: it knows the columns it fills and how
//! many rows it wants, and draws every FK through the [`ForeignContext`].

use chrono::{Duration, NaiveDate};
use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};

use crate::config::{DateWindow, GenerateConfig};
use crate::errors::GenerationError;
use crate::foreign::ForeignContext;
use crate::value::SqlValue;

pub mod activity;
pub mod interactions;
pub mod items;
pub mod users;

/// One generated row, values in column order.
pub type Row = Vec<SqlValue>;

/// How many rows a generator is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowTarget {
    /// A configured count.
    Fixed(u64),
    /// One candidate row per row of the named parent table.
    PerParent(&'static str),
}

/// Context passed to a generator for one table.
pub struct GeneratorContext<'a> {
    pub config: &'a GenerateConfig,
    pub foreign: &'a dyn ForeignContext,
}

impl GeneratorContext<'_> {
    pub fn pick_id(&self, table: &str, rng: &mut dyn RngCore) -> Result<i64, GenerationError> {
        self.foreign.pick_id(table, rng)
    }

    pub fn row_count(&self, table: &str) -> Result<u64, GenerationError> {
        self.foreign.row_count(table)
    }

    pub fn random_date(&self, rng: &mut dyn RngCore) -> NaiveDate {
        random_date(&self.config.date_window, rng)
    }
}

pub trait EntityGenerator {
    /// Table the generated rows are inserted into.
    fn table(&self) -> &'static str;

    /// Columns filled by the generator, in value order.
    fn columns(&self) -> &'static [&'static str];

    fn row_target(&self, config: &GenerateConfig) -> RowTarget;

    fn generate(
        &self,
        ctx: &GeneratorContext<'_>,
        rows: u64,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Row>, GenerationError>;
}

/// Generators in emission order.
pub struct GeneratorRegistry {
    generators: Vec<Box<dyn EntityGenerator>>,
}

impl GeneratorRegistry {
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register_generator(Box::new(users::UsersGenerator));
        registry.register_generator(Box::new(items::ItemsGenerator));
        registry.register_generator(Box::new(items::TagsGenerator));
        registry.register_generator(Box::new(interactions::ReportsGenerator));
        registry.register_generator(Box::new(interactions::MatchesGenerator));
        registry.register_generator(Box::new(interactions::CommentsGenerator));
        registry.register_generator(Box::new(interactions::AlertsGenerator));
        registry.register_generator(Box::new(activity::ActivityLogsGenerator));
        registry.register_generator(Box::new(users::NotificationSettingsGenerator));
        registry
    }

    pub fn empty() -> Self {
        Self {
            generators: Vec::new(),
        }
    }

    pub fn register_generator(&mut self, generator: Box<dyn EntityGenerator>) {
        self.generators.push(generator);
    }

    pub fn generator(&self, table: &str) -> Option<&dyn EntityGenerator> {
        self.generators
            .iter()
            .find(|generator| generator.table() == table)
            .map(|generator| generator.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn EntityGenerator> {
        self.generators.iter().map(|generator| generator.as_ref())
    }

    pub fn tables(&self) -> Vec<&'static str> {
        self.generators.iter().map(|generator| generator.table()).collect()
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Uniform day within the window, both ends included.
pub fn random_date(window: &DateWindow, rng: &mut dyn RngCore) -> NaiveDate {
    let span = window.span_days().max(0);
    let offset = rng.random_range(0..=span);
    window.start + Duration::days(offset)
}

pub(crate) fn pick<'a>(
    values: &'a [String],
    pool: &str,
    rng: &mut dyn RngCore,
) -> Result<&'a str, GenerationError> {
    values
        .choose(rng)
        .map(|value| value.as_str())
        .ok_or_else(|| GenerationError::InvalidConfig(format!("value pool '{pool}' is empty")))
}

pub(crate) fn pick_label<T: Copy>(values: &[T], rng: &mut dyn RngCore) -> Result<T, GenerationError> {
    values
        .choose(rng)
        .copied()
        .ok_or_else(|| GenerationError::InvalidConfig("empty value domain".to_string()))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use lostfound_core::tables;

    #[test]
    fn registry_follows_emission_order() {
        let registry = GeneratorRegistry::new();
        assert_eq!(
            registry.tables(),
            vec![
                tables::USERS,
                tables::ITEMS,
                tables::ITEM_TAGS,
                tables::REPORTS,
                tables::MATCHES,
                tables::COMMENTS,
                tables::ALERTS,
                tables::USER_ACTIVITY_LOGS,
                tables::NOTIFICATION_SETTINGS,
            ]
        );
    }

    #[test]
    fn random_dates_stay_in_window() {
        let window = DateWindow::default();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..2000 {
            assert!(window.contains(random_date(&window, &mut rng)));
        }
    }

    #[test]
    fn single_day_window_is_constant() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let window = DateWindow {
            start: day,
            end: day,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(random_date(&window, &mut rng), day);
    }
}
