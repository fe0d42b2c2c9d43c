//! 出力行モデル定義

use furigana::AnnotationResult;
use furigana::alignment::RubySegment;
use serde::Serialize;

/// 入力 1 行分の注釈結果
#[derive(Debug, Clone, Serialize)]
pub struct AnnotateResponse {
  /// 判定結果
  pub result: AnnotationResult,
  /// 整列済みのセグメント
  pub segments: Vec<RubySegment>,
  /// 描画済みの HTML
  pub html: String,
}
