//! 読み仮名クリーニング
//!
//! インポートされた単語帳の読みフィールドには、括弧（`[]` / `【】`）や
//! 漢字が混入していることがある。ここで読みだけを整形し、基底テキストには触れない。

use serde::Serialize;
use tracing::debug;

use crate::script::{is_logographic, trim_blank};

/// 読みから取り除く括弧文字
const BRACKETS: [char; 4] = ['[', ']', '【', '】'];

/// `clean_reading_detailed` の結果
///
/// 整形後の読みと、何文字取り除いたかを保持する（ログ・集計用）。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleanedReading {
  /// 整形後の読み（空文字列の場合あり）
  pub value: String,
  /// 取り除いた括弧の数
  pub removed_brackets: usize,
  /// 取り除いた漢字の数
  pub removed_logographic: usize,
}

impl CleanedReading {
  /// 括弧または漢字を1文字以上取り除いたか
  ///
  /// 前後の空白のトリムのみの場合は false。
  pub fn was_modified(&self) -> bool {
    self.removed_brackets > 0 || self.removed_logographic > 0
  }

  /// 整形後の読みが空か
  pub fn is_empty(&self) -> bool {
    self.value.is_empty()
  }
}

/// 読みを整形し、取り除いた文字数も返す
///
/// # 処理順
/// 1. `None` は空文字列として扱う
/// 2. `[` `]` `【` `】` を位置に関係なく全て削除
/// 3. 前後の空白（U+FEFF を含む）をトリム
/// 4. 漢字（U+4E00–U+9FAF, U+3400–U+4DBF）を全て削除
/// 5. 再度トリム
///
/// 内部の空白は保持される。結果に対して再適用しても変化しない。
pub fn clean_reading_detailed(raw: Option<&str>) -> CleanedReading {
  let raw = raw.unwrap_or_default();

  let mut removed_brackets = 0;
  let without_brackets: String = raw
    .chars()
    .filter(|c| {
      let keep = !BRACKETS.contains(c);
      if !keep {
        removed_brackets += 1;
      }
      keep
    })
    .collect();

  let mut removed_logographic = 0;
  let without_logographic: String = trim_blank(&without_brackets)
    .chars()
    .filter(|&c| {
      let keep = !is_logographic(c);
      if !keep {
        removed_logographic += 1;
      }
      keep
    })
    .collect();

  let cleaned = CleanedReading {
    value: trim_blank(&without_logographic).to_string(),
    removed_brackets,
    removed_logographic,
  };

  if cleaned.was_modified() {
    debug!(
      raw = %raw,
      cleaned = %cleaned.value,
      removed_brackets,
      removed_logographic,
      "Reading cleaned"
    );
  }

  cleaned
}

/// 読みを整形する
///
/// `clean_reading_detailed(raw).value` と同じ。全ての入力に対して定義されており失敗しない。
pub fn clean_reading(raw: Option<&str>) -> String {
  clean_reading_detailed(raw).value
}
