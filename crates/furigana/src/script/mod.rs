//! script モジュール
pub mod classifier;

/// 再エクスポート
pub use classifier::{
  Script, has_logographic, is_blank, is_hiragana, is_kana, is_katakana, is_latin_only,
  is_latin_only_char, is_logographic, katakana_to_hiragana, trim_blank,
};
