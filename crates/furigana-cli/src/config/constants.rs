//! CLI 設定の定数定義

/// 入力 1 行の最大長（バイト単位）
///
/// 1MB までの行を許可する。語彙 1 件としては十分に大きい。
pub const MAX_LINE_LENGTH: usize = 1_000_000;

/// デフォルトの出力形式
pub const DEFAULT_OUTPUT_FORMAT: &str = "html";

/// 出力形式を指定する環境変数
pub const ENV_OUTPUT_FORMAT: &str = "FURIGANA_OUTPUT_FORMAT";

/// 既定のクラス（スタイルハンドル）を指定する環境変数
pub const ENV_CLASS: &str = "FURIGANA_CLASS";

/// ライブラリ設定ファイル（JSON）のパスを指定する環境変数
pub const ENV_CONFIG: &str = "FURIGANA_CONFIG";
