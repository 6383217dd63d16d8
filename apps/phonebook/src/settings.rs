use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "phonebook.toml";
pub const ENV_PREFIX: &str = "PHONEBOOK";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub data_file: PathBuf,
    pub confirm_delete: bool,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("phonebook.json"),
            confirm_delete: false,
            log_level: "warn".into(),
        }
    }
}

impl Settings {
    /// Command-line flags win over every other source.
    pub fn with_overrides(mut self, data_file: Option<PathBuf>, confirm_delete: bool) -> Self {
        if let Some(path) = data_file {
            self.data_file = path;
        }
        if confirm_delete {
            self.confirm_delete = true;
        }
        self
    }
}

/// Defaults, then the TOML file, then `PHONEBOOK__*` variables.
///
/// Without `explicit` the default file is optional; an explicitly named file
/// must exist.
pub fn load_settings(explicit: Option<&Path>) -> anyhow::Result<Settings> {
    build_settings(explicit, None)
}

fn build_settings(
    explicit: Option<&Path>,
    env: Option<config::Map<String, String>>,
) -> anyhow::Result<Settings> {
    let file = match explicit {
        Some(path) => File::new(&path.to_string_lossy(), FileFormat::Toml).required(true),
        None => File::new(DEFAULT_CONFIG_FILE, FileFormat::Toml).required(false),
    };

    let raw = Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .try_parsing(true)
                .source(env),
        )
        .build()
        .with_context(|| match explicit {
            Some(path) => format!("failed to read settings from '{}'", path.display()),
            None => "failed to read phonebook settings".to_string(),
        })?;

    raw.try_deserialize().context("invalid phonebook settings")
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
