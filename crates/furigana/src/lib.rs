//! furigana ルビ注釈ライブラリー
//!
//! 日本語の語彙（基底テキスト + 読み）に対して、読み仮名を表示するかを判定し、
//! 読みを整形して ruby 注釈用の構造を返す。

/// 整列モジュール - 読みを基底テキストの漢字部分に対応付ける
pub mod alignment;

/// 判定モジュール - FuriganaAnnotator, decide 等の判定ロジック
pub mod annotator;

/// 設定モジュール - FuriganaConfig, LogLevel 等の設定構造体を定義
pub mod config;

/// エラーモジュール - FuriganaError, FuriganaResult 等のエラー型を定義
pub mod errors;

/// ロギングモジュール - tracing subscriber の初期化
pub mod logging;

/// マークアップモジュール - ruby 注釈の HTML 出力
pub mod markup;

/// データモデルモジュール - AnnotationRequest, AnnotationResult 等のデータ構造を定義
pub mod models;

/// 読みモジュール - 単語帳の読みフィールドの整形
pub mod reading;

/// レポートモジュール - 一括処理の集計
pub mod report;

/// 文字種モジュール - 漢字・仮名・ローマ字の判定
pub mod script;

/// サービスモジュール - FuriganaService 等の上位レベルAPIを提供
pub mod service;

/// 再エクスポート
pub use annotator::{FuriganaAnnotator, decide};
pub use config::{FuriganaConfig, LogLevel};
pub use errors::{FuriganaError, FuriganaResult};
pub use models::{AnnotationRequest, AnnotationResult};
pub use reading::clean_reading;
pub use script::{has_logographic, is_latin_only};
pub use service::FuriganaService;
