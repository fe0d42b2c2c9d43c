//! 一括注釈結果のレポート型定義
//!
//! 単語帳の一括処理で、読みを付けた件数・付けなかった件数とその理由を集計します。

use serde::{Deserialize, Serialize};

use crate::annotator::SuppressReason;

/// 読みを付けなかった理由ごとの件数
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuppressedCounts {
  /// show = false
  pub hidden: usize,
  /// 整形後の読みが空
  pub empty_reading: usize,
  /// 基底テキストに漢字がない
  pub no_logographic: usize,
  /// 読みがローマ字
  pub latin_reading: usize,
}

impl SuppressedCounts {
  /// 合計件数
  pub fn total(&self) -> usize {
    self.hidden + self.empty_reading + self.no_logographic + self.latin_reading
  }
}

/// `annotate_items` の集計結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationReport {
  /// 入力バッチの項目総数
  pub total: usize,
  /// 読みを付けた件数
  pub annotated: usize,
  /// プレーンテキストになった件数
  pub plain: usize,
  /// 読みから括弧や漢字を取り除いた件数
  pub cleaned_readings: usize,
  /// 理由別のプレーンテキスト件数
  pub suppressed: SuppressedCounts,
}

impl AnnotationReport {
  /// 合計件数を記録
  pub fn record_total(&mut self) {
    self.total += 1;
  }

  /// 読みを付けたことを記録
  pub fn record_annotated(&mut self) {
    self.annotated += 1;
  }

  /// プレーンテキストになったことを理由とともに記録
  pub fn record_plain(&mut self, reason: SuppressReason) {
    self.plain += 1;
    match reason {
      SuppressReason::Hidden => self.suppressed.hidden += 1,
      SuppressReason::EmptyReading => self.suppressed.empty_reading += 1,
      SuppressReason::NoLogographic => self.suppressed.no_logographic += 1,
      SuppressReason::LatinReading => self.suppressed.latin_reading += 1,
    }
  }

  /// 読みを整形したことを記録
  pub fn record_cleaned(&mut self) {
    self.cleaned_readings += 1;
  }

  /// 読みを付けた割合（0.0〜1.0）。空バッチでは 0.0
  pub fn annotation_rate(&self) -> f64 {
    if self.total == 0 {
      0.0
    } else {
      self.annotated as f64 / self.total as f64
    }
  }
}
