use std::path::Path;

use lostfound_generate::{CONFIG_FILE_NAME, GenerateConfig};
use tracing::{debug, info};

use crate::CliError;

/// Configuration for this invocation, anchored at the working directory.
pub fn load_settings() -> Result<GenerateConfig, CliError> {
    let cwd = std::env::current_dir()?;
    load_settings_from(&cwd)
}

fn load_settings_from(dir: &Path) -> Result<GenerateConfig, CliError> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.exists() {
        info!(path = %path.display(), "loading settings");
    } else {
        debug!(dir = %dir.display(), "no settings file, using defaults");
    }
    Ok(GenerateConfig::load_from_dir(dir)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lostfound_generate::GenerationError;

    fn temp_dir() -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("lostfound_cli_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    #[test]
    fn defaults_write_next_to_working_directory() {
        let dir = temp_dir();
        let config = load_settings_from(&dir).expect("load");
        assert_eq!(config.output_path, dir.join("CommunityTrackerDB_Full.sql"));
        assert_eq!(config.user_count, 300);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn settings_file_overrides_counts() {
        let dir = temp_dir();
        std::fs::write(
            dir.join(CONFIG_FILE_NAME),
            "user_count = 20\nitem_count = 40\nseed = 5\nreport_path = \"report.json\"\n",
        )
        .expect("write settings");

        let config = load_settings_from(&dir).expect("load");
        assert_eq!(config.user_count, 20);
        assert_eq!(config.item_count, 40);
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.report_path, Some(dir.join("report.json")));
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn broken_settings_file_is_reported() {
        let dir = temp_dir();
        std::fs::write(dir.join(CONFIG_FILE_NAME), "user_count = [").expect("write settings");

        let err = load_settings_from(&dir).expect_err("invalid toml");
        assert!(matches!(
            err,
            CliError::Generation(GenerationError::Config(_))
        ));
        std::fs::remove_dir_all(&dir).ok();
    }
}
