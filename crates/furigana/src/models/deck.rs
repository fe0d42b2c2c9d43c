//! 単語帳（JSON Lines）の読み込み
//!
//! 1 行に 1 つの `VocabularyItem` を JSON で記述する。空行は無視する。
//!
//! ```text
//! {"id": "v1", "text": "日本語", "reading": "【にほんご】"}
//! {"id": "v2", "text": "こんにちは", "reading": "konnichiwa"}
//! ```

use std::sync::Arc;

use crate::errors::DeckError;
use crate::models::VocabularyItem;

/// JSON Lines 形式の単語帳を解析する
///
/// # 引数
/// - `input`: 単語帳の内容
/// - `max_items`: 許可する最大項目数
///
/// # エラー
/// - 行の JSON が不正（行番号は 1 始まり）
/// - 項目数が `max_items` を超えた
pub fn parse_deck_jsonl(input: &str, max_items: usize) -> Result<Vec<VocabularyItem>, DeckError> {
  let mut items = Vec::new();

  for (idx, line) in input.lines().enumerate() {
    if line.trim().is_empty() {
      continue;
    }

    if items.len() == max_items {
      return Err(DeckError::TooManyItems {
        max: max_items,
        actual: items.len() + 1,
      });
    }

    let item: VocabularyItem = serde_json::from_str(line).map_err(|e| DeckError::Parse {
      line: idx + 1,
      source: Arc::new(e),
    })?;
    items.push(item);
  }

  Ok(items)
}
