// crates/furigana/src/service.rs

//! FuriganaService: furigana クレートの統合ファサード。
//!
//! - 判定 (FuriganaAnnotator)
//! - HTML 出力 (HtmlRenderer)
//! - 単語帳の一括処理と集計 (AnnotationReport)
//!
//! 一覧画面や詳細画面などの呼び出し側は、この構造体だけを意識すればよい。

use tracing::{debug, info};

use crate::annotator::{FuriganaAnnotator, decide_with_reason};
use crate::config::FuriganaConfig;
use crate::errors::error_definition::FuriganaResult;
use crate::markup::HtmlRenderer;
use crate::models::{AnnotatedItem, AnnotationRequest, AnnotationResult, VocabularyItem};
use crate::models::parse_deck_jsonl;
use crate::report::AnnotationReport;

/// furigana クレートの統合ファサード。
///
/// 状態を持たない（設定のみ保持する）ため、スレッド間で共有してよい。
#[derive(Debug, Clone)]
pub struct FuriganaService {
  /// 判定器（整列モードを保持）
  annotator: FuriganaAnnotator,

  /// HTML 出力
  renderer: HtmlRenderer,

  /// 未指定項目の show の既定値
  show_by_default: bool,

  /// 単語帳の最大項目数
  max_items: usize,
}

impl FuriganaService {
  /// 初期化（設定の検証 + 判定器と HTML 出力の構築）
  ///
  /// # エラー
  /// - 設定が不正（括弧が空、max_items が 0 等）
  pub fn init(config: &FuriganaConfig) -> FuriganaResult<Self> {
    // ConfigError は #[from] で FuriganaError に自動変換
    config.validate()?;

    debug!(
      alignment = ?config.alignment(),
      show_by_default = config.show_by_default(),
      max_items = config.max_items(),
      "FuriganaService initialized"
    );

    Ok(Self {
      annotator: FuriganaAnnotator::new(config.alignment()),
      renderer: HtmlRenderer::from_config(config.markup()),
      show_by_default: config.show_by_default(),
      max_items: config.max_items(),
    })
  }

  /// 1 件の判定を行う。
  pub fn annotate(&self, request: &AnnotationRequest) -> AnnotationResult {
    self.annotator.annotate(request)
  }

  /// 1 件を判定し、整列済みの HTML を返す。
  ///
  /// `class` は呼び出し側のスタイルハンドル（解釈せずに出力する）。
  pub fn render_html(&self, request: &AnnotationRequest, class: Option<&str>) -> String {
    let result = self.annotate(request);
    self.render_result(&result, class)
  }

  /// 判定結果を整列モードに従って HTML にする。
  pub fn render_result(&self, result: &AnnotationResult, class: Option<&str>) -> String {
    let segments = self.annotator.segments(result);
    self.renderer.render_segments(&segments, class)
  }

  /// 単語帳の項目を一括で判定する。
  ///
  /// 各項目の `show` が未指定の場合は `annotation.show_by_default` を使う。
  /// 入力順を保った結果と集計を返す。
  pub fn annotate_items(&self, items: &[VocabularyItem]) -> (Vec<AnnotatedItem>, AnnotationReport) {
    let mut report = AnnotationReport::default();
    let mut annotated_items = Vec::with_capacity(items.len());

    for item in items {
      report.record_total();

      let decision = decide_with_reason(&item.to_request(self.show_by_default));
      if decision.reading_cleaned {
        report.record_cleaned();
      }
      match decision.reason {
        Some(reason) => report.record_plain(reason),
        None => report.record_annotated(),
      }

      let segments = self.annotator.segments(&decision.result);
      annotated_items.push(AnnotatedItem {
        id: item.id.clone(),
        result: decision.result,
        segments,
      });
    }

    info!(
      total = report.total,
      annotated = report.annotated,
      plain = report.plain,
      cleaned_readings = report.cleaned_readings,
      "Vocabulary batch annotated"
    );

    (annotated_items, report)
  }

  /// JSON Lines 形式の単語帳を解析して一括判定する。
  ///
  /// # エラー
  /// - 行の JSON が不正
  /// - 項目数が `batch.max_items` を超えた
  pub fn annotate_deck(&self, jsonl: &str) -> FuriganaResult<(Vec<AnnotatedItem>, AnnotationReport)> {
    let items = parse_deck_jsonl(jsonl, self.max_items)?;
    Ok(self.annotate_items(&items))
  }

  // ===== アクセサ =====

  /// 判定器を返す。
  pub fn annotator(&self) -> &FuriganaAnnotator {
    &self.annotator
  }

  /// 未指定項目の `show` の既定値を返す。
  pub fn show_by_default(&self) -> bool {
    self.show_by_default
  }

  /// HTML 出力を返す。
  pub fn renderer(&self) -> &HtmlRenderer {
    &self.renderer
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// テストモジュール
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use crate::alignment::{AlignmentMode, RubySegment};
  use crate::errors::{ConfigError, DeckError, FuriganaError};

  // ─── テスト用ヘルパー関数 ───────────────────────────────────────────────────

  fn create_service() -> FuriganaService {
    FuriganaService::init(&FuriganaConfig::default()).expect("FuriganaService 初期化失敗")
  }

  fn sample_items() -> Vec<VocabularyItem> {
    vec![
      VocabularyItem::new("v1", "日本語", Some("【にほんご】")),
      VocabularyItem::new("v2", "こんにちは", Some("konnichiwa")),
      VocabularyItem::new("v3", "漢字", Some("kanji")),
      VocabularyItem::new("v4", "漢字", Some("かんじ")).with_show(false),
      VocabularyItem::new("v5", "猫", None),
      VocabularyItem::new("v6", "食べ物", Some("たべもの")),
    ]
  }

  // ─── 初期化テスト ──────────────────────────────────────────────────────────

  #[test]
  fn init_rejects_invalid_config() {
    let mut config = FuriganaConfig::default();
    config.batch.max_items = 0;

    let err = FuriganaService::init(&config).unwrap_err();
    assert!(matches!(
      err,
      FuriganaError::Config(ConfigError::InvalidMaxItems { .. })
    ));
  }

  #[test]
  fn init_uses_configured_alignment() {
    let mut config = FuriganaConfig::default();
    config.annotation.alignment = AlignmentMode::PerRun;

    let service = FuriganaService::init(&config).unwrap();
    assert_eq!(service.annotator().alignment(), AlignmentMode::PerRun);
  }

  // ─── 単一判定 ────────────────────────────────────────────────────────────

  #[test]
  fn render_html_annotates_whole_string_by_default() {
    let service = create_service();
    let html = service.render_html(&AnnotationRequest::with_reading("食べ物", "たべもの"), None);
    assert_eq!(html, "<ruby>食べ物<rp>(</rp><rt>たべもの</rt><rp>)</rp></ruby>");
  }

  #[test]
  fn render_html_plain_text() {
    let service = create_service();
    let html = service.render_html(&AnnotationRequest::with_reading("漢字", "kanji"), None);
    assert_eq!(html, "漢字");
  }

  // ─── 一括判定 ────────────────────────────────────────────────────────────

  #[test]
  fn annotate_items_keeps_order_and_counts() {
    let service = create_service();
    let (items, report) = service.annotate_items(&sample_items());

    let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["v1", "v2", "v3", "v4", "v5", "v6"]);

    assert_eq!(report.total, 6);
    assert_eq!(report.annotated, 2);
    assert_eq!(report.plain, 4);
    assert_eq!(report.cleaned_readings, 1);
    assert_eq!(report.suppressed.no_logographic, 1);
    assert_eq!(report.suppressed.latin_reading, 1);
    assert_eq!(report.suppressed.hidden, 1);
    assert_eq!(report.suppressed.empty_reading, 1);
  }

  #[test]
  fn annotate_items_results() {
    let service = create_service();
    let (items, _) = service.annotate_items(&sample_items());

    assert_eq!(
      items[0].result,
      AnnotationResult::Annotated {
        base: "日本語".to_string(),
        reading: "にほんご".to_string(),
      }
    );
    assert_eq!(items[1].segments, vec![RubySegment::plain("こんにちは")]);
    assert_eq!(
      items[5].segments,
      vec![RubySegment::annotated("食べ物", "たべもの")]
    );
  }

  #[test]
  fn show_by_default_false_hides_unset_items() {
    let mut config = FuriganaConfig::default();
    config.annotation.show_by_default = false;
    let service = FuriganaService::init(&config).unwrap();

    let items = vec![
      VocabularyItem::new("a", "漢字", Some("かんじ")),
      VocabularyItem::new("b", "漢字", Some("かんじ")).with_show(true),
    ];
    let (results, report) = service.annotate_items(&items);
    assert!(!results[0].result.is_annotated());
    assert!(results[1].result.is_annotated());
    assert_eq!(report.suppressed.hidden, 1);
  }

  #[test]
  fn per_run_service_splits_segments() {
    let mut config = FuriganaConfig::default();
    config.annotation.alignment = AlignmentMode::PerRun;
    let service = FuriganaService::init(&config).unwrap();

    let (items, _) = service.annotate_items(&[VocabularyItem::new("v", "食べ物", Some("たべもの"))]);
    assert_eq!(items[0].segments.len(), 3);
  }

  // ─── 単語帳 ─────────────────────────────────────────────────────────────

  #[test]
  fn annotate_deck_parses_and_annotates() {
    let service = create_service();
    let jsonl = "{\"id\": \"v1\", \"text\": \"日本語\", \"reading\": \"にほんご\"}\n";
    let (items, report) = service.annotate_deck(jsonl).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(report.annotated, 1);
  }

  #[test]
  fn annotate_deck_enforces_max_items() {
    let mut config = FuriganaConfig::default();
    config.batch.max_items = 1;
    let service = FuriganaService::init(&config).unwrap();

    let jsonl = "{\"id\": \"a\"}\n{\"id\": \"b\"}\n";
    let err = service.annotate_deck(jsonl).unwrap_err();
    assert!(matches!(
      err,
      FuriganaError::Deck(DeckError::TooManyItems { max: 1, actual: 2 })
    ));
  }
}
