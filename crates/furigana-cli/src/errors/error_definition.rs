//! CLIエラー定義

use std::io;

use thiserror::Error;

// furigana クレートのエラー型をインポート
use furigana::errors::{DeckError, FuriganaError};

/// エラーの種類
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorKind {
  /// 入力行が無効
  InvalidInput,
  /// 入力行が長すぎる
  LineTooLong,
  /// 入出力エラー
  Io,
  /// 内部エラー
  Internal,
  /// 設定エラー
  Config,
}

impl CliErrorKind {
  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::InvalidInput => "invalid_input",
      Self::LineTooLong => "line_too_long",
      Self::Io => "io_error",
      Self::Internal => "internal_error",
      Self::Config => "config_error",
    }
  }

  /// プロセスの終了コードを取得（sysexits.h 準拠）
  #[must_use]
  pub fn exit_code(&self) -> u8 {
    match self {
      Self::InvalidInput | Self::LineTooLong => 65, // EX_DATAERR
      Self::Internal => 70,                         // EX_SOFTWARE
      Self::Io => 74,                               // EX_IOERR
      Self::Config => 78,                           // EX_CONFIG
    }
  }
}

/// CLIエラー
#[derive(Debug, Error)]
pub enum CliError {
  /// 入力行が無効
  #[error("{line} 行目の入力が無効です: {message}")]
  InvalidInput {
    /// 1 始まりの行番号
    line: usize,
    /// 理由
    message: String,
  },

  /// 入力行が長すぎる
  #[error("{line} 行目が長すぎます（最大: {max} バイト）")]
  LineTooLong {
    /// 1 始まりの行番号
    line: usize,
    /// 上限
    max: usize,
  },

  /// 入出力エラー
  #[error("入出力エラー: {0}")]
  Io(#[from] io::Error),

  /// 内部エラー
  #[error("内部エラー: {0}")]
  Internal(String),

  /// 設定エラー
  #[error("設定エラー: {0}")]
  Config(String),
}

impl CliError {
  /// エラーの種類を取得
  #[must_use]
  pub fn kind(&self) -> CliErrorKind {
    match self {
      Self::InvalidInput { .. } => CliErrorKind::InvalidInput,
      Self::LineTooLong { .. } => CliErrorKind::LineTooLong,
      Self::Io(_) => CliErrorKind::Io,
      Self::Internal(_) => CliErrorKind::Internal,
      Self::Config(_) => CliErrorKind::Config,
    }
  }

  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// 終了コードを取得
  #[must_use]
  pub fn exit_code(&self) -> u8 {
    self.kind().exit_code()
  }

  /// 無効な入力エラーを作成
  #[must_use]
  pub fn invalid_input(line: usize, message: impl Into<String>) -> Self {
    Self::InvalidInput {
      line,
      message: message.into(),
    }
  }

  /// 行長超過エラーを作成
  #[must_use]
  pub fn line_too_long(line: usize, max: usize) -> Self {
    Self::LineTooLong { line, max }
  }

  /// 内部エラーを作成
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// 設定エラーを作成
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }
}

/// FuriganaError から CliError への変換
///
/// ライブラリ層のエラーを CLI 層のエラーにマッピングする。
impl From<FuriganaError> for CliError {
  fn from(err: FuriganaError) -> Self {
    match err {
      FuriganaError::Config(err) => CliError::config(err.to_string()),
      FuriganaError::Deck(DeckError::Parse { line, source }) => {
        CliError::invalid_input(line, source.to_string())
      }
      FuriganaError::Deck(err) => CliError::invalid_input(0, err.to_string()),
      // #[non_exhaustive] な enum のため、将来追加されるバリアントに対応
      _ => CliError::internal(format!("unknown error: {err}")),
    }
  }
}

/// Result 型エイリアス
pub type Result<T> = std::result::Result<T, CliError>;
