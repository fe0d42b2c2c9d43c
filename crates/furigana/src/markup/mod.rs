//! markup モジュール - ruby 注釈の HTML 出力
pub mod html_renderer;

/// 再エクスポート
pub use html_renderer::{HtmlRenderer, escape_html};
