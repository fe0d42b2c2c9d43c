//! annotator モジュール - 読み仮名を表示するかの判定
pub mod furigana_annotator;

/// 再エクスポート
pub use furigana_annotator::{Decision, FuriganaAnnotator, SuppressReason, decide, decide_with_reason};
