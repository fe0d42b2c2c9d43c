//! alignment モジュール - 基底テキストと読みの対応付け
pub mod run_aligner;

/// 再エクスポート
pub use run_aligner::{AlignmentMode, RubySegment, align, align_runs};
