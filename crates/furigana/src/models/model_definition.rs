//! Data Model Definition
use serde::{Deserialize, Deserializer, Serialize};

use crate::alignment::RubySegment;

/// `show` の既定値（指定がなければ読みを表示する）
fn default_show() -> bool {
  true
}

/// `null` を空文字列として読む（欠落時は `#[serde(default)]` が扱う）
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// `null` を `show` の既定値として読む
fn null_as_default_show<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_else(default_show))
}

/// Input of a single annotation decision.
///
/// - `text`: base orthographic form, may mix kanji and kana
/// - `reading`: optional gloss, expected to be kana but possibly dirty
///   (brackets, stray kanji, romaji from imported decks)
/// - `show`: explicit suppression switch, `true` unless stated otherwise
///
/// A missing or `null` `text` deserializes to the empty string and a missing or
/// `null` `show` to `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationRequest {
  /// Base text
  #[serde(default, deserialize_with = "null_as_empty")]
  pub text: String,

  /// Raw reading
  #[serde(default)]
  pub reading: Option<String>,

  /// Whether the reading may be shown at all
  #[serde(default = "default_show", deserialize_with = "null_as_default_show")]
  pub show: bool,
}

impl AnnotationRequest {
  /// Request with `show = true`.
  pub fn new(text: impl Into<String>, reading: Option<impl Into<String>>) -> Self {
    Self {
      text: text.into(),
      reading: reading.map(Into::into),
      show: default_show(),
    }
  }

  /// Shorthand for a request with a present reading.
  pub fn with_reading(text: impl Into<String>, reading: impl Into<String>) -> Self {
    Self::new(text, Some(reading))
  }

  /// Request without a reading.
  pub fn text_only(text: impl Into<String>) -> Self {
    Self::new(text, None::<String>)
  }

  /// Builder that overrides `show`.
  #[must_use]
  pub fn with_show(mut self, show: bool) -> Self {
    self.show = show;
    self
  }
}

/// Render decision.
///
/// Serialized with a `kind` tag: `{"kind":"plain_text","text":..}` or
/// `{"kind":"annotated","base":..,"reading":..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnnotationResult {
  /// Base text only, no reading. `text` is the untouched input text.
  PlainText {
    /// Base text
    text: String,
  },
  /// Base text with a cleaned reading rendered above it.
  Annotated {
    /// Base text
    base: String,
    /// Cleaned reading
    reading: String,
  },
}

impl AnnotationResult {
  /// Whether a reading is to be rendered.
  pub fn is_annotated(&self) -> bool {
    matches!(self, AnnotationResult::Annotated { .. })
  }

  /// The base text in either variant.
  pub fn base_text(&self) -> &str {
    match self {
      AnnotationResult::PlainText { text } => text,
      AnnotationResult::Annotated { base, .. } => base,
    }
  }

  /// The reading, only for `Annotated`.
  pub fn reading(&self) -> Option<&str> {
    match self {
      AnnotationResult::PlainText { .. } => None,
      AnnotationResult::Annotated { reading, .. } => Some(reading),
    }
  }
}

/// A vocabulary entry as sourced from a course/topic deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyItem {
  /// Item ID
  pub id: String,

  /// Base text of the term
  #[serde(default, deserialize_with = "null_as_empty")]
  pub text: String,

  /// Raw reading
  #[serde(default)]
  pub reading: Option<String>,

  /// Per-item display switch. `None` uses the configured default.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub show: Option<bool>,
}

impl VocabularyItem {
  /// Constructor for VocabularyItem
  pub fn new(id: impl Into<String>, text: impl Into<String>, reading: Option<&str>) -> Self {
    Self {
      id: id.into(),
      text: text.into(),
      reading: reading.map(str::to_string),
      show: None,
    }
  }

  /// Builder that sets the per-item display switch
  #[must_use]
  pub fn with_show(mut self, show: bool) -> Self {
    self.show = Some(show);
    self
  }

  /// Builds the annotation request, using `show_by_default` when `show` is unset.
  pub fn to_request(&self, show_by_default: bool) -> AnnotationRequest {
    AnnotationRequest {
      text: self.text.clone(),
      reading: self.reading.clone(),
      show: self.show.unwrap_or(show_by_default),
    }
  }
}

/// Annotation outcome for one vocabulary item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedItem {
  /// Item ID
  pub id: String,

  /// Render decision
  pub result: AnnotationResult,

  /// Ruby groups for the configured alignment mode
  pub segments: Vec<RubySegment>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  // ─── AnnotationRequest ────────────────────────────────────────────────

  #[test]
  fn new_request_shows_by_default() {
    let request = AnnotationRequest::with_reading("漢字", "かんじ");
    assert!(request.show);
    assert_eq!(request.reading.as_deref(), Some("かんじ"));
  }

  #[test]
  fn text_only_request_has_no_reading() {
    let request = AnnotationRequest::text_only("漢字");
    assert_eq!(request.reading, None);
    assert!(request.show);
  }

  #[test]
  fn with_show_overrides_default() {
    let request = AnnotationRequest::with_reading("漢字", "かんじ").with_show(false);
    assert!(!request.show);
  }

  #[test]
  fn deserialize_fills_defaults() {
    let request: AnnotationRequest = serde_json::from_str(r#"{"text": "漢字"}"#).unwrap();
    assert_eq!(request, AnnotationRequest::text_only("漢字"));

    let request: AnnotationRequest = serde_json::from_str("{}").unwrap();
    assert_eq!(request.text, "");
    assert!(request.show);
  }

  #[test]
  fn deserialize_null_reading() {
    let request: AnnotationRequest =
      serde_json::from_str(r#"{"text": "漢字", "reading": null, "show": false}"#).unwrap();
    assert_eq!(request.reading, None);
    assert!(!request.show);
  }

  #[test]
  fn deserialize_null_text_as_empty() {
    let request: AnnotationRequest =
      serde_json::from_str(r#"{"text": null, "reading": "かな"}"#).unwrap();
    assert_eq!(request.text, "");
    assert_eq!(request.reading.as_deref(), Some("かな"));
    assert!(request.show);
  }

  #[test]
  fn deserialize_null_show_as_true() {
    let request: AnnotationRequest =
      serde_json::from_str(r#"{"text": "漢字", "reading": "かんじ", "show": null}"#).unwrap();
    assert!(request.show);
  }

  #[test]
  fn deserialize_wrong_type_is_still_an_error() {
    assert!(serde_json::from_str::<AnnotationRequest>(r#"{"text": 1}"#).is_err());
    assert!(serde_json::from_str::<AnnotationRequest>(r#"{"show": "yes"}"#).is_err());
  }

  // ─── AnnotationResult ─────────────────────────────────────────────────

  #[test]
  fn result_accessors() {
    let plain = AnnotationResult::PlainText {
      text: "こんにちは".to_string(),
    };
    assert!(!plain.is_annotated());
    assert_eq!(plain.base_text(), "こんにちは");
    assert_eq!(plain.reading(), None);

    let annotated = AnnotationResult::Annotated {
      base: "日本語".to_string(),
      reading: "にほんご".to_string(),
    };
    assert!(annotated.is_annotated());
    assert_eq!(annotated.base_text(), "日本語");
    assert_eq!(annotated.reading(), Some("にほんご"));
  }

  #[test]
  fn result_serializes_with_kind_tag() {
    let annotated = AnnotationResult::Annotated {
      base: "日本語".to_string(),
      reading: "にほんご".to_string(),
    };
    let json = serde_json::to_value(&annotated).unwrap();
    assert_eq!(json["kind"], "annotated");
    assert_eq!(json["base"], "日本語");
    assert_eq!(json["reading"], "にほんご");

    let plain = AnnotationResult::PlainText {
      text: "漢字".to_string(),
    };
    let json = serde_json::to_value(&plain).unwrap();
    assert_eq!(json["kind"], "plain_text");
    assert_eq!(json["text"], "漢字");
  }

  // ─── VocabularyItem ───────────────────────────────────────────────────

  #[test]
  fn item_uses_default_show_when_unset() {
    let item = VocabularyItem::new("v1", "漢字", Some("かんじ"));
    assert!(item.to_request(true).show);
    assert!(!item.to_request(false).show);
  }

  #[test]
  fn item_show_overrides_default() {
    let item = VocabularyItem::new("v1", "漢字", Some("かんじ")).with_show(false);
    assert!(!item.to_request(true).show);
  }

  #[test]
  fn item_deserializes_without_optional_fields() {
    let item: VocabularyItem = serde_json::from_str(r#"{"id": "v1", "text": "猫"}"#).unwrap();
    assert_eq!(item, VocabularyItem::new("v1", "猫", None));
  }

  #[test]
  fn item_deserializes_null_text_and_show() {
    let item: VocabularyItem =
      serde_json::from_str(r#"{"id": "v1", "text": null, "reading": "ねこ", "show": null}"#)
        .unwrap();
    assert_eq!(item.text, "");
    assert_eq!(item.show, None);
    assert_eq!(item.to_request(true), AnnotationRequest::with_reading("", "ねこ"));
  }
}
