//! 入力行モデル定義

use furigana::AnnotationRequest;
use serde::Deserialize;

/// 入力 1 行分の注釈リクエスト
///
/// `{"text": "...", "reading": "...", "show": true, "class": "..."}` の形式。
/// どのフィールドも省略・`null` 可。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AnnotateLine {
  /// 基底テキスト（`None` は空文字列）
  #[serde(default)]
  pub text: Option<String>,
  /// 読み
  #[serde(default)]
  pub reading: Option<String>,
  /// 表示可否（`None` なら `annotation.show_by_default`）
  #[serde(default)]
  pub show: Option<bool>,
  /// スタイルハンドル（未指定なら既定値を使う）
  #[serde(default)]
  pub class: Option<String>,
}

impl AnnotateLine {
  /// 判定用のリクエストを作る。`show` が未指定なら `show_by_default` を使う。
  pub fn to_request(&self, show_by_default: bool) -> AnnotationRequest {
    AnnotationRequest::new(self.text.clone().unwrap_or_default(), self.reading.clone())
      .with_show(self.show.unwrap_or(show_by_default))
  }
}
