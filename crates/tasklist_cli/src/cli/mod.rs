use clap::Parser;
use std::path::PathBuf;
use tasklist_core::config::{ConfigOverrides, RecompletePolicy};
use tasklist_core::error::AppError;

#[derive(Parser, Debug)]
#[command(name = "tasklist", author, version, about, long_about = None)]
pub struct Cli {
    /// Add a new task
    ///
    /// Example: tasklist --add buy milk
    /// Example: echo "buy milk" | tasklist --add
    #[arg(long)]
    pub add: bool,

    /// Remove an existing task via its ID
    ///
    /// Example: tasklist --del 2
    #[arg(long, value_name = "ID", default_value_t = 0, allow_negative_numbers = true)]
    pub del: i64,

    /// Mark an existing task as complete via its ID
    ///
    /// Example: tasklist --done 1
    #[arg(long, value_name = "ID", default_value_t = 0, allow_negative_numbers = true)]
    pub done: i64,

    /// List all tasks
    #[arg(long)]
    pub ls: bool,

    /// Output JSON
    #[arg(long)]
    pub json: bool,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Override configuration values (format KEY=VALUE)
    #[arg(long = "config-override", value_name = "KEY=VALUE")]
    pub config_override: Vec<String>,

    /// Task description used with --add
    #[arg(value_name = "DESCRIPTION")]
    pub words: Vec<String>,
}

/// The single operation an invocation performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Delete(usize),
    Complete(usize),
    List,
    Invalid,
}

impl Cli {
    /// Picks the action by flag priority: add, delete, done, list.
    pub fn action(&self) -> Action {
        if self.add {
            Action::Add
        } else if let Some(position) = positive(self.del) {
            Action::Delete(position)
        } else if let Some(position) = positive(self.done) {
            Action::Complete(position)
        } else if self.ls {
            Action::List
        } else {
            Action::Invalid
        }
    }

    pub fn overrides(&self) -> Result<ConfigOverrides, AppError> {
        let mut overrides = ConfigOverrides::default();
        for raw in &self.config_override {
            let parsed = parse_config_override(raw).map_err(AppError::invalid_input)?;
            match parsed.target {
                ConfigOverrideTarget::StorePath => {
                    overrides.store_path = Some(PathBuf::from(parsed.value))
                }
                ConfigOverrideTarget::Recomplete => {
                    let policy = RecompletePolicy::parse(&parsed.value).ok_or_else(|| {
                        AppError::invalid_input(format!(
                            "recomplete must be 'refresh' or 'keep', got '{}'",
                            parsed.value
                        ))
                    })?;
                    overrides.recomplete = Some(policy);
                }
            }
        }
        Ok(overrides)
    }
}

fn positive(value: i64) -> Option<usize> {
    if value > 0 {
        usize::try_from(value).ok()
    } else {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOverrideTarget {
    StorePath,
    Recomplete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedConfigOverride {
    pub target: ConfigOverrideTarget,
    pub value: String,
}

/// Parse a raw `KEY=VALUE` override string into a structured target.
pub fn parse_config_override(raw: &str) -> Result<ParsedConfigOverride, String> {
    let (key_raw, value_raw) = raw
        .trim()
        .split_once('=')
        .ok_or_else(|| "override must be in KEY=VALUE format".to_string())?;

    let value = value_raw.trim().to_string();
    let field =
        canonicalize_flag_name(key_raw).ok_or_else(|| "override key cannot be empty".to_string())?;

    let target = match field.as_str() {
        "store_path" | "store" | "file" => ConfigOverrideTarget::StorePath,
        "recomplete" => ConfigOverrideTarget::Recomplete,
        other => return Err(format!("unknown config field '{other}'")),
    };

    if value.is_empty() {
        return Err(format!("override for '{field}' needs a value"));
    }

    Ok(ParsedConfigOverride { target, value })
}

fn canonicalize_flag_name(name: &str) -> Option<String> {
    let mut cleaned = String::new();
    let mut previous_underscore = false;

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            cleaned.push(ch.to_ascii_lowercase());
            previous_underscore = false;
        } else if !previous_underscore && !cleaned.is_empty() {
            cleaned.push('_');
            previous_underscore = true;
        }
    }

    let trimmed = cleaned.trim_matches('_');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
