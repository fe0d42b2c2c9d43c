// crates/furigana/src/config.rs

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::alignment::AlignmentMode;
use crate::errors::ConfigError;

/// Default upper bound for the number of items in one deck.
pub const DEFAULT_MAX_ITEMS: usize = 10_000;

/// Top-level configuration for furigana.
///
/// Every section is optional in JSON; omitted sections take their defaults,
/// so `{}` is a valid configuration that reproduces the built-in behavior.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FuriganaConfig {
  /// [annotation] section
  pub annotation: AnnotationConfig,
  /// [markup] section
  pub markup: MarkupConfig,
  /// [batch] section
  pub batch: BatchConfig,
  /// [logging] section
  pub logging: LoggingConfig,
}

/// [annotation] section configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnnotationConfig {
  /// `show` used for vocabulary items that do not set it
  pub show_by_default: bool,
  /// Reading distribution: "whole" | "per_run"
  pub alignment: AlignmentMode,
}

impl Default for AnnotationConfig {
  fn default() -> Self {
    Self {
      show_by_default: true,
      alignment: AlignmentMode::Whole,
    }
  }
}

/// [markup] section configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MarkupConfig {
  /// Emit `<rp>` fallback parentheses for renderers without ruby support
  pub fallback_parenthesis: bool,
  /// Opening fallback parenthesis
  pub open_parenthesis: String,
  /// Closing fallback parenthesis
  pub close_parenthesis: String,
  /// Class handle applied when the caller does not pass one
  pub class_name: Option<String>,
}

impl Default for MarkupConfig {
  fn default() -> Self {
    Self {
      fallback_parenthesis: true,
      open_parenthesis: "(".to_string(),
      close_parenthesis: ")".to_string(),
      class_name: None,
    }
  }
}

/// [batch] section configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
  /// Maximum number of items accepted from one deck
  pub max_items: usize,
}

impl Default for BatchConfig {
  fn default() -> Self {
    Self {
      max_items: DEFAULT_MAX_ITEMS,
    }
  }
}

/// [logging] section configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
  /// Log level: "trace" | "debug" | "info" | "warn" | "error"
  pub level: LogLevel,
}

/// Log level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
  /// trace
  Trace,

  /// debug
  Debug,

  /// info
  #[default]
  Info,

  /// warn
  Warn,

  ///error
  Error,
}

impl LogLevel {
  /// Returns the level as an `EnvFilter` directive.
  pub fn as_directive(&self) -> &'static str {
    match self {
      LogLevel::Trace => "trace",
      LogLevel::Debug => "debug",
      LogLevel::Info => "info",
      LogLevel::Warn => "warn",
      LogLevel::Error => "error",
    }
  }
}

impl std::fmt::Display for LogLevel {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_directive())
  }
}

// ===== Loading =====

impl FuriganaConfig {
  /// Parses a JSON configuration.
  ///
  /// The result is not validated; call [`validate`](Self::validate) or go
  /// through `FuriganaService::init`.
  pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
    serde_json::from_str(json).map_err(|e| ConfigError::Parse {
      source: Arc::new(e),
    })
  }

  /// Reads and parses a JSON configuration file.
  pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
      path: path.to_path_buf(),
      source: Arc::new(e),
    })?;
    Self::from_json_str(&json)
  }
}

// ===== Accessor Methods =====

impl FuriganaConfig {
  /// Returns the `show` default for items that leave it unset.
  pub fn show_by_default(&self) -> bool {
    self.annotation.show_by_default
  }

  /// Returns the alignment mode.
  pub fn alignment(&self) -> AlignmentMode {
    self.annotation.alignment
  }

  /// Returns the markup section.
  pub fn markup(&self) -> &MarkupConfig {
    &self.markup
  }

  /// Returns the maximum number of items per deck.
  pub fn max_items(&self) -> usize {
    self.batch.max_items
  }

  /// Returns the log level.
  pub fn log_level(&self) -> LogLevel {
    self.logging.level
  }

  /// Validates the configuration.
  ///
  /// # Validation Items
  /// - fallback parentheses are non-empty when `fallback_parenthesis` is on
  /// - fallback parentheses contain no `<`, `>` or `&`
  /// - `batch.max_items` >= 1
  ///
  /// # Errors
  /// Returns the corresponding `ConfigError` for the first failing check.
  pub fn validate(&self) -> Result<(), ConfigError> {
    let markup = &self.markup;

    // parentheses are required when fallback is enabled
    if markup.fallback_parenthesis
      && (markup.open_parenthesis.is_empty() || markup.close_parenthesis.is_empty())
    {
      return Err(ConfigError::EmptyFallbackParenthesis {
        open: markup.open_parenthesis.clone(),
        close: markup.close_parenthesis.clone(),
      });
    }

    // parentheses are emitted verbatim inside <rp>
    for value in [&markup.open_parenthesis, &markup.close_parenthesis] {
      if value.contains(['<', '>', '&']) {
        return Err(ConfigError::MarkupInFallbackParenthesis {
          value: value.clone(),
        });
      }
    }

    // batch.max_items >= 1
    if self.batch.max_items < 1 {
      return Err(ConfigError::InvalidMaxItems {
        actual: self.batch.max_items,
      });
    }

    Ok(())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
