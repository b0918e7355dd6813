use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::GenerationError;
use crate::pools::ValuePools;

pub const DEFAULT_OUTPUT_FILE: &str = "CommunityTrackerDB_Full.sql";

/// Optional config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "lostfound.toml";

/// Largest numeric suffix appended to generated email addresses.
pub const EMAIL_SUFFIX_MAX: u64 = 9999;

/// Inclusive range of days that generated dates fall in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Default for DateWindow {
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            end: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap_or_default(),
        }
    }
}

impl DateWindow {
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Configuration for one generation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GenerateConfig {
    pub user_count: u64,
    pub item_count: u64,
    pub report_count: u64,
    pub alert_count: u64,
    pub comment_count: u64,
    pub match_count: u64,
    pub log_count: u64,
    /// Leading users that receive the admin role.
    pub admin_count: u64,
    /// Destination of the SQL script.
    pub output_path: PathBuf,
    /// Fixed seed for a reproducible run; drawn from the OS when absent.
    pub seed: Option<u64>,
    /// Optional destination for the JSON generation report.
    pub report_path: Option<PathBuf>,
    pub date_window: DateWindow,
    pub pools: ValuePools,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            user_count: 300,
            item_count: 800,
            report_count: 300,
            alert_count: 200,
            comment_count: 200,
            match_count: 50,
            log_count: 100,
            admin_count: 5,
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            seed: None,
            report_path: None,
            date_window: DateWindow::default(),
            pools: ValuePools::default(),
        }
    }
}

impl GenerateConfig {
    /// Parse a TOML document; omitted keys keep their defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self, GenerationError> {
        Ok(toml::from_str(raw)?)
    }

    /// Load `lostfound.toml` from `dir` when present, defaults otherwise,
    /// with relative paths anchored at `dir`.
    pub fn load_from_dir(dir: &Path) -> Result<Self, GenerationError> {
        let path = dir.join(CONFIG_FILE_NAME);
        let mut config = if path.exists() {
            Self::from_toml_str(&std::fs::read_to_string(&path)?)?
        } else {
            Self::default()
        };
        config.resolve_paths(dir);
        Ok(config)
    }

    /// Anchor relative paths at `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        if self.output_path.is_relative() {
            self.output_path = base.join(&self.output_path);
        }
        if let Some(report_path) = self.report_path.as_mut() {
            if report_path.is_relative() {
                *report_path = base.join(&*report_path);
            }
        }
    }

    /// Number of distinct email addresses the name pools can produce.
    pub fn email_space(&self) -> u64 {
        (self.pools.first_names.len() as u64)
            .saturating_mul(self.pools.last_names.len() as u64)
            .saturating_mul(EMAIL_SUFFIX_MAX)
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        self.pools.validate()?;

        if self.date_window.start > self.date_window.end {
            return Err(GenerationError::InvalidConfig(format!(
                "date window starts after it ends ({} > {})",
                self.date_window.start, self.date_window.end
            )));
        }

        if self.user_count > self.email_space() {
            return Err(GenerationError::InvalidConfig(format!(
                "user_count {} exceeds the {} distinct emails the name pools allow",
                self.user_count,
                self.email_space()
            )));
        }

        let needs_users = [
            self.item_count,
            self.report_count,
            self.alert_count,
            self.comment_count,
            self.log_count,
        ]
        .iter()
        .any(|count| *count > 0);
        if needs_users && self.user_count == 0 {
            return Err(GenerationError::InvalidConfig(
                "user_count must be positive when dependent rows are requested".to_string(),
            ));
        }

        let needs_items = [self.report_count, self.alert_count, self.comment_count]
            .iter()
            .any(|count| *count > 0);
        if needs_items && self.item_count == 0 {
            return Err(GenerationError::InvalidConfig(
                "item_count must be positive when reports, alerts or comments are requested"
                    .to_string(),
            ));
        }

        if self.match_count > 0 && self.item_count < 2 {
            return Err(GenerationError::InvalidConfig(
                "matches need at least two items to pair distinct ids".to_string(),
            ));
        }

        Ok(())
    }
}
