//! reading モジュール
pub mod cleaner;

/// 再エクスポート
pub use cleaner::{CleanedReading, clean_reading, clean_reading_detailed};
