use crate::error::AppError;
use crate::model::Task;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

pub const STORE_PATH_ENV_VAR: &str = "TASKLIST_STORE_PATH";
pub const DEFAULT_STORE_FILE_NAME: &str = ".tasks.json";

#[cfg(unix)]
const STORE_FILE_MODE: u32 = 0o644;

/// Resolves the backing file: the env var wins, then the configured path,
/// then `.tasks.json` in the working directory.
pub fn store_path(configured: Option<&Path>) -> PathBuf {
    if let Ok(path) = std::env::var(STORE_PATH_ENV_VAR)
        && !path.trim().is_empty()
    {
        return PathBuf::from(path);
    }

    match configured {
        Some(path) if !path.as_os_str().is_empty() => path.to_path_buf(),
        _ => PathBuf::from(DEFAULT_STORE_FILE_NAME),
    }
}

/// Reads the task array at `path`. A missing file yields `Ok(None)`.
pub fn read_tasks(path: &Path) -> Result<Option<Vec<Task>>, AppError> {
    let content = match std::fs::read(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(AppError::read(format!(
                "failed to open {}: {}",
                path.display(),
                err
            )));
        }
    };

    if content.is_empty() {
        return Err(AppError::empty_file(format!(
            "{} is empty",
            path.display()
        )));
    }

    // `null` is what an empty list looked like in older files.
    let tasks: Option<Vec<Task>> = serde_json::from_slice(&content).map_err(|err| {
        AppError::parse(format!("failed to parse {}: {}", path.display(), err))
    })?;

    Ok(Some(tasks.unwrap_or_default()))
}

pub fn load_tasks(path: &Path) -> Result<Vec<Task>, AppError> {
    Ok(read_tasks(path)?.unwrap_or_default())
}

pub fn save_tasks(path: &Path, tasks: &[Task]) -> Result<(), AppError> {
    let content = serde_json::to_string_pretty(tasks)
        .map_err(|err| AppError::serialize(format!("failed to encode tasks: {err}")))?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|err| AppError::write(err.to_string()))?;
    }

    write_store_file(path, content.as_bytes())
        .map_err(|err| AppError::write(format!("failed to write {}: {}", path.display(), err)))
}

/// Truncates and rewrites `path`. The fixed mode only applies when the file
/// is created; an existing file keeps its permissions.
fn write_store_file(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(STORE_FILE_MODE);
    }

    let mut file = options.open(path)?;
    file.write_all(content)?;
    file.flush()
}
