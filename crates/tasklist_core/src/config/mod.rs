use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const CONFIG_PATH_ENV_VAR: &str = "TASKLIST_CONFIG_PATH";
const CONFIG_FILE_NAME: &str = "config.json";

/// What completing an already-completed task does to its `completed_at`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecompletePolicy {
    #[default]
    Refresh,
    Keep,
}

impl RecompletePolicy {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "refresh" => Some(Self::Refresh),
            "keep" => Some(Self::Keep),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store_path: Option<PathBuf>,
    #[serde(default)]
    pub recomplete: RecompletePolicy,
}

/// Values given on the command line; `None` keeps the configured value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub store_path: Option<PathBuf>,
    pub recomplete: Option<RecompletePolicy>,
}

impl Config {
    /// `TASKLIST_CONFIG_PATH` when set, otherwise `tasklist/config.json` under
    /// the user's config directory. `None` when neither can be determined.
    pub fn locate() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV_VAR)
            && !path.trim().is_empty()
        {
            return Some(PathBuf::from(path));
        }

        let base = if cfg!(windows) {
            PathBuf::from(std::env::var_os("APPDATA")?)
        } else {
            PathBuf::from(std::env::var_os("HOME")?).join(".config")
        };
        Some(base.join("tasklist").join(CONFIG_FILE_NAME))
    }

    /// Reads the config at the default location; a missing file is the default config.
    pub fn load() -> Result<Self, AppError> {
        match Self::locate() {
            Some(path) => Ok(Self::read(&path)?.unwrap_or_default()),
            None => Ok(Self::default()),
        }
    }

    pub fn read(path: &Path) -> Result<Option<Self>, AppError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(AppError::invalid_data(format!(
                    "{}: {}",
                    path.display(),
                    err
                )));
            }
        };

        serde_json::from_str(&content).map(Some).map_err(|err| {
            AppError::invalid_data(format!("invalid config {}: {}", path.display(), err))
        })
    }

    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(store_path) = &overrides.store_path {
            self.store_path = Some(store_path.clone());
        }
        if let Some(recomplete) = overrides.recomplete {
            self.recomplete = recomplete;
        }
        self
    }
}
