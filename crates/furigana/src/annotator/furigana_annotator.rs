//! Furigana render decision.
//!
//! [`decide`] is a pure, total function from an [`AnnotationRequest`] to an
//! [`AnnotationResult`]. A reading is shown only when
//!
//! 1. `show` is true,
//! 2. the cleaned reading is non-empty,
//! 3. the base text contains at least one kanji, and
//! 4. the cleaned reading is not romaji.
//!
//! Otherwise the base text is returned untouched as plain text.

use serde::Serialize;
use tracing::debug;

use crate::alignment::{AlignmentMode, RubySegment, align};
use crate::models::{AnnotationRequest, AnnotationResult};
use crate::reading::clean_reading_detailed;
use crate::script::{has_logographic, is_latin_only};

/// Why a request produced plain text, in gate priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuppressReason {
  /// `show` was false
  Hidden,
  /// Nothing left of the reading after cleaning
  EmptyReading,
  /// The base text has no kanji to gloss
  NoLogographic,
  /// The reading is romanized
  LatinReading,
}

impl SuppressReason {
  /// Stable snake_case name (used in logs and reports).
  pub fn as_str(&self) -> &'static str {
    match self {
      SuppressReason::Hidden => "hidden",
      SuppressReason::EmptyReading => "empty_reading",
      SuppressReason::NoLogographic => "no_logographic",
      SuppressReason::LatinReading => "latin_reading",
    }
  }
}

/// Result of [`decide_with_reason`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
  /// Render decision
  pub result: AnnotationResult,
  /// First failing gate, `None` when annotated
  pub reason: Option<SuppressReason>,
  /// Whether cleaning removed brackets or kanji from the reading
  pub reading_cleaned: bool,
}

/// Decides and reports which gate suppressed the reading, if any.
pub fn decide_with_reason(request: &AnnotationRequest) -> Decision {
  let cleaned = clean_reading_detailed(request.reading.as_deref());
  let reading_cleaned = cleaned.was_modified();

  let reason = if !request.show {
    Some(SuppressReason::Hidden)
  } else if cleaned.is_empty() {
    Some(SuppressReason::EmptyReading)
  } else if !has_logographic(&request.text) {
    Some(SuppressReason::NoLogographic)
  } else if is_latin_only(&cleaned.value) {
    Some(SuppressReason::LatinReading)
  } else {
    None
  };

  let result = match reason {
    Some(reason) => {
      debug!(text = %request.text, reason = reason.as_str(), "Reading suppressed");
      AnnotationResult::PlainText {
        text: request.text.clone(),
      }
    }
    None => AnnotationResult::Annotated {
      base: request.text.clone(),
      reading: cleaned.value,
    },
  };

  Decision {
    result,
    reason,
    reading_cleaned,
  }
}

/// Decides whether and how to annotate `request`.
///
/// Never fails; degraded input yields `PlainText` with the original text.
pub fn decide(request: &AnnotationRequest) -> AnnotationResult {
  decide_with_reason(request).result
}

/// Annotator bound to an alignment mode.
///
/// Stateless apart from the mode, `Copy + Send + Sync`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FuriganaAnnotator {
  alignment: AlignmentMode,
}

impl FuriganaAnnotator {
  /// Creates an annotator with the given alignment mode.
  pub fn new(alignment: AlignmentMode) -> Self {
    Self { alignment }
  }

  /// Returns the alignment mode.
  pub fn alignment(&self) -> AlignmentMode {
    self.alignment
  }

  /// Same as [`decide`].
  pub fn annotate(&self, request: &AnnotationRequest) -> AnnotationResult {
    decide(request)
  }

  /// Ruby groups for a decision.
  ///
  /// `PlainText` yields a single segment without a reading. `Annotated` is
  /// distributed according to the alignment mode (whole-string by default).
  pub fn segments(&self, result: &AnnotationResult) -> Vec<RubySegment> {
    match result {
      AnnotationResult::PlainText { text } => vec![RubySegment::plain(text.as_str())],
      AnnotationResult::Annotated { base, reading } => align(base, reading, self.alignment),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn annotated(base: &str, reading: &str) -> AnnotationResult {
    AnnotationResult::Annotated {
      base: base.to_string(),
      reading: reading.to_string(),
    }
  }

  fn plain(text: &str) -> AnnotationResult {
    AnnotationResult::PlainText {
      text: text.to_string(),
    }
  }

  // ─── decide: annotated ────────────────────────────────────────────────

  #[test]
  fn annotates_kanji_with_kana_reading() {
    let request = AnnotationRequest::with_reading("日本語", "にほんご");
    assert_eq!(decide(&request), annotated("日本語", "にほんご"));
  }

  #[test]
  fn annotates_with_cleaned_reading() {
    let request = AnnotationRequest::with_reading("漢字", "【かん字】");
    assert_eq!(decide(&request), annotated("漢字", "かん"));
  }

  #[test]
  fn katakana_reading_is_accepted() {
    let request = AnnotationRequest::with_reading("東京", "トウキョウ");
    assert_eq!(decide(&request), annotated("東京", "トウキョウ"));
  }

  // ─── decide: plain text ───────────────────────────────────────────────

  #[test]
  fn kana_base_needs_no_reading() {
    let request = AnnotationRequest::with_reading("こんにちは", "konnichiwa");
    assert_eq!(decide(&request), plain("こんにちは"));
  }

  #[test]
  fn latin_reading_is_rejected() {
    let request = AnnotationRequest::with_reading("漢字", "kanji");
    assert_eq!(decide(&request), plain("漢字"));
  }

  #[test]
  fn show_false_wins() {
    let request = AnnotationRequest::with_reading("漢字", "かんじ").with_show(false);
    assert_eq!(decide(&request), plain("漢字"));
  }

  #[test]
  fn empty_reading_is_plain() {
    let request = AnnotationRequest::with_reading("漢字", "");
    assert_eq!(decide(&request), plain("漢字"));
  }

  #[test]
  fn missing_reading_is_plain() {
    let request = AnnotationRequest::text_only("漢字");
    assert_eq!(decide(&request), plain("漢字"));
  }

  #[test]
  fn reading_of_only_kanji_is_plain() {
    let request = AnnotationRequest::with_reading("漢字", "[漢字]");
    assert_eq!(decide(&request), plain("漢字"));
  }

  #[test]
  fn empty_text_is_plain_and_preserved() {
    let request = AnnotationRequest::with_reading("", "かな");
    assert_eq!(decide(&request), plain(""));
  }

  #[test]
  fn plain_text_keeps_base_untransformed() {
    // Brackets and surrounding spaces in the base text are never cleaned
    let request = AnnotationRequest::with_reading(" 【漢字】 ", "kanji");
    assert_eq!(decide(&request), plain(" 【漢字】 "));

    let request = AnnotationRequest::with_reading(" 【漢字】 ", "かんじ");
    assert_eq!(decide(&request), annotated(" 【漢字】 ", "かんじ"));
  }

  // ─── decide_with_reason ───────────────────────────────────────────────

  #[test]
  fn reason_follows_gate_priority() {
    // Every gate fails: Hidden is reported first
    let request = AnnotationRequest::with_reading("かな", "").with_show(false);
    assert_eq!(decide_with_reason(&request).reason, Some(SuppressReason::Hidden));

    let request = AnnotationRequest::with_reading("かな", "");
    assert_eq!(decide_with_reason(&request).reason, Some(SuppressReason::EmptyReading));

    let request = AnnotationRequest::with_reading("かな", "kana");
    assert_eq!(decide_with_reason(&request).reason, Some(SuppressReason::NoLogographic));

    let request = AnnotationRequest::with_reading("仮名", "kana");
    assert_eq!(decide_with_reason(&request).reason, Some(SuppressReason::LatinReading));

    let request = AnnotationRequest::with_reading("仮名", "かな");
    assert_eq!(decide_with_reason(&request).reason, None);
  }

  #[test]
  fn decision_reports_reading_cleanup() {
    let decision = decide_with_reason(&AnnotationRequest::with_reading("日本語", "【にほんご】"));
    assert!(decision.reading_cleaned);
    assert_eq!(decision.result, annotated("日本語", "にほんご"));

    let decision = decide_with_reason(&AnnotationRequest::with_reading("日本語", "にほんご"));
    assert!(!decision.reading_cleaned);
  }

  #[test]
  fn suppress_reason_names() {
    assert_eq!(SuppressReason::Hidden.as_str(), "hidden");
    assert_eq!(SuppressReason::LatinReading.as_str(), "latin_reading");
    let json = serde_json::to_string(&SuppressReason::NoLogographic).unwrap();
    assert_eq!(json, "\"no_logographic\"");
  }

  // ─── FuriganaAnnotator ────────────────────────────────────────────────

  #[test]
  fn default_annotator_uses_whole_string_segments() {
    let annotator = FuriganaAnnotator::default();
    let result = annotator.annotate(&AnnotationRequest::with_reading("食べ物", "たべもの"));
    assert_eq!(
      annotator.segments(&result),
      vec![RubySegment::annotated("食べ物", "たべもの")]
    );
  }

  #[test]
  fn per_run_annotator_splits_segments() {
    let annotator = FuriganaAnnotator::new(AlignmentMode::PerRun);
    let result = annotator.annotate(&AnnotationRequest::with_reading("食べ物", "たべもの"));
    assert_eq!(annotator.segments(&result).len(), 3);
  }

  #[test]
  fn plain_text_yields_single_plain_segment() {
    let annotator = FuriganaAnnotator::new(AlignmentMode::PerRun);
    let result = annotator.annotate(&AnnotationRequest::with_reading("漢字", "kanji"));
    assert_eq!(annotator.segments(&result), vec![RubySegment::plain("漢字")]);
  }
}
