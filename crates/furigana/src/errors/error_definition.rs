//! エラー定義
//!
//! 注釈の判定処理（`decide` 等）は全ての入力に対して定義されておりエラーを返さない。
//! ここで定義するエラーは設定の読み込み・検証と、単語帳（JSON Lines）の解析に限られる。

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// 設定（FuriganaConfig）関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// 設定 JSON の解析に失敗
  #[error("設定の解析に失敗しました: {source}")]
  Parse {
    /// 元となった JSON エラー
    #[source]
    source: Arc<serde_json::Error>,
  },

  /// 設定ファイルの読み込みに失敗
  #[error("設定ファイルの読み込みに失敗しました: path={path:?}, error={source}")]
  ReadFile {
    /// 読み込もうとしたパス
    path: PathBuf,
    /// 元となった IO エラー
    #[source]
    source: Arc<io::Error>,
  },

  /// markup.fallback_parenthesis が有効なのに括弧が空
  #[error("markup.fallback_parenthesis が有効な場合、括弧は空にできません: open={open:?}, close={close:?}")]
  EmptyFallbackParenthesis {
    /// 開き括弧
    open: String,
    /// 閉じ括弧
    close: String,
  },

  /// 括弧にマークアップ文字（`<` `>` `&`）が含まれている
  #[error("markup の括弧にマークアップ文字を含めることはできません: {value:?}")]
  MarkupInFallbackParenthesis {
    /// 問題の値
    value: String,
  },

  /// batch.max_items < 1
  #[error("batch.max_items は 1 以上である必要があります: actual={actual}")]
  InvalidMaxItems {
    /// 実際に指定された値
    actual: usize,
  },
}

/// 単語帳（JSON Lines）関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum DeckError {
  /// 行の JSON 解析に失敗
  #[error("単語帳の {line} 行目を解析できません: {source}")]
  Parse {
    /// 1 始まりの行番号
    line: usize,
    /// 元となった JSON エラー
    #[source]
    source: Arc<serde_json::Error>,
  },

  /// 項目数が batch.max_items を超えている
  #[error("単語帳の項目数が上限を超えています: max={max}, actual={actual}")]
  TooManyItems {
    /// 上限
    max: usize,
    /// 実際の項目数（上限を超えた時点での数）
    actual: usize,
  },
}

/// 統合エラー
/// 本クレートの外部に公開するエラー用 API はこのエラーを返すこと
/// `FuriganaResult<T>` = `Result<T, FuriganaError>` として使用する
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum FuriganaError {
  /// 設定エラー
  #[error(transparent)]
  Config(#[from] ConfigError),

  /// 単語帳エラー
  #[error(transparent)]
  Deck(#[from] DeckError),
}

/// furigana クレートの標準 Result 型エイリアス
pub type FuriganaResult<T> = Result<T, FuriganaError>;
