//! Config loading from environment variables

use std::path::PathBuf;
use std::str::FromStr;

use furigana::{FuriganaConfig, FuriganaError};

use super::constants::{DEFAULT_OUTPUT_FORMAT, ENV_CLASS, ENV_CONFIG, ENV_OUTPUT_FORMAT};
use crate::errors::CliError;

/// Output format of one processed line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
  /// Rendered ruby HTML
  Html,
  /// JSON object with the decision, segments and HTML
  Json,
}

impl FromStr for OutputFormat {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "html" => Ok(Self::Html),
      "json" => Ok(Self::Json),
      _ => Err(format!("Unknown output format: {}. Valid values: html, json", s)),
    }
  }
}

/// CLI Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Output format
  pub output_format: OutputFormat,
  /// Class handle used for lines that do not carry one
  pub class_name: Option<String>,
  /// Path to a furigana library config (JSON)
  pub config_path: Option<PathBuf>,
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Loads configuration through an arbitrary variable lookup
  ///
  /// Empty values are treated as unset.
  pub fn from_lookup<F>(lookup: F) -> crate::errors::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let output_format_str =
      get(ENV_OUTPUT_FORMAT).unwrap_or_else(|| DEFAULT_OUTPUT_FORMAT.to_string());
    let output_format = OutputFormat::from_str(&output_format_str).map_err(CliError::config)?;

    let class_name = get(ENV_CLASS);
    let config_path = get(ENV_CONFIG).map(PathBuf::from);

    Ok(Self {
      output_format,
      class_name,
      config_path,
    })
  }

  /// Loads the library configuration
  ///
  /// Uses the built-in defaults when no path is configured.
  ///
  /// # Errors
  /// Returns an error if the file cannot be read or parsed
  pub fn load_library_config(&self) -> crate::errors::Result<FuriganaConfig> {
    match &self.config_path {
      Some(path) => Ok(FuriganaConfig::from_path(path).map_err(FuriganaError::from)?),
      None => Ok(FuriganaConfig::default()),
    }
  }
}
