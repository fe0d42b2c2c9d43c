//! tracing の初期化
//!
//! `RUST_LOG` が設定されていればそれを優先し、なければ設定ファイルの
//! `logging.level` をデフォルトのフィルターとして使う。

use tracing_subscriber::EnvFilter;

use crate::config::LogLevel;

/// `RUST_LOG` が未設定のときに使うフィルター文字列
///
/// 例: `LogLevel::Debug` → `"info,furigana=debug"`
pub fn default_directive(level: LogLevel) -> String {
  match level {
    LogLevel::Trace | LogLevel::Debug => format!("info,furigana={level}"),
    _ => level.to_string(),
  }
}

/// グローバルな tracing subscriber をインストールする
///
/// 既にインストール済みの場合は何もしない（テストなどで複数回呼ばれても安全）。
/// 戻り値はこの呼び出しでインストールしたかどうか。
pub fn init_tracing(level: LogLevel) -> bool {
  let env_filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(level)));

  tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_target(true)
    .with_level(true)
    .with_writer(std::io::stderr)
    .try_init()
    .is_ok()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn debug_levels_scope_to_this_crate() {
    assert_eq!(default_directive(LogLevel::Debug), "info,furigana=debug");
    assert_eq!(default_directive(LogLevel::Trace), "info,furigana=trace");
  }

  #[test]
  fn other_levels_apply_globally() {
    assert_eq!(default_directive(LogLevel::Info), "info");
    assert_eq!(default_directive(LogLevel::Error), "error");
  }

  #[test]
  fn init_tracing_twice_is_harmless() {
    let _ = init_tracing(LogLevel::Info);
    assert!(!init_tracing(LogLevel::Info));
  }
}
