//! HTML ruby 出力
//!
//! 判定結果をそのまま描画するだけの層。判定ロジックは持たない。
//!
//! - `PlainText` → 基底テキストのみ（読みは出力しない）
//! - `Annotated` → `<ruby>基底<rp>(</rp><rt>読み</rt><rp>)</rp></ruby>`
//!
//! `<rp>` は ruby 非対応の環境で読みを括弧書きにするためのもの。
//! クラス指定（スタイルハンドル）は中身を解釈せず、エスケープして属性に出力する。

use crate::alignment::RubySegment;
use crate::config::MarkupConfig;
use crate::models::AnnotationResult;

/// Escapes `& < > " '` for use in text and attribute values.
pub fn escape_html(input: &str) -> String {
  let mut out = String::with_capacity(input.len());
  for c in input.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      _ => out.push(c),
    }
  }
  out
}

/// Ruby HTML renderer
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
  /// `Some((open, close))` when fallback parentheses are emitted
  parenthesis: Option<(String, String)>,
  /// Class used when the caller passes none
  default_class: Option<String>,
}

impl Default for HtmlRenderer {
  fn default() -> Self {
    Self::from_config(&MarkupConfig::default())
  }
}

impl HtmlRenderer {
  /// Builds a renderer from the [markup] configuration.
  pub fn from_config(config: &MarkupConfig) -> Self {
    let parenthesis = config
      .fallback_parenthesis
      .then(|| (config.open_parenthesis.clone(), config.close_parenthesis.clone()));
    Self {
      parenthesis,
      default_class: config.class_name.clone(),
    }
  }

  fn class_attr(&self, class: Option<&str>) -> String {
    match class.or(self.default_class.as_deref()) {
      Some(class) => format!(" class=\"{}\"", escape_html(class)),
      None => String::new(),
    }
  }

  fn push_ruby(&self, out: &mut String, class_attr: &str, base: &str, reading: &str) {
    out.push_str(&format!("<ruby{class_attr}>{}", escape_html(base)));
    let reading = escape_html(reading);
    match &self.parenthesis {
      Some((open, close)) => {
        out.push_str(&format!("<rp>{open}</rp><rt>{reading}</rt><rp>{close}</rp>"));
      }
      None => out.push_str(&format!("<rt>{reading}</rt>")),
    }
    out.push_str("</ruby>");
  }

  /// Renders a decision as a single ruby group.
  ///
  /// `class` is the caller's opaque style handle; when `None` the configured
  /// `class_name` applies.
  pub fn render(&self, result: &AnnotationResult, class: Option<&str>) -> String {
    match result {
      AnnotationResult::PlainText { text } => self.render_plain(text, class),
      AnnotationResult::Annotated { base, reading } => {
        let mut out = String::new();
        self.push_ruby(&mut out, &self.class_attr(class), base, reading);
        out
      }
    }
  }

  fn render_plain(&self, text: &str, class: Option<&str>) -> String {
    let class_attr = self.class_attr(class);
    if class_attr.is_empty() {
      escape_html(text)
    } else {
      format!("<span{class_attr}>{}</span>", escape_html(text))
    }
  }

  /// Renders aligned segments.
  ///
  /// A single annotated segment carries the class on its `<ruby>`; several
  /// segments are wrapped in a `<span>` carrying the class. Segments without
  /// a reading are emitted as bare text.
  pub fn render_segments(&self, segments: &[RubySegment], class: Option<&str>) -> String {
    if let [segment] = segments {
      return match &segment.reading {
        Some(reading) => {
          let mut out = String::new();
          self.push_ruby(&mut out, &self.class_attr(class), &segment.base, reading);
          out
        }
        None => self.render_plain(&segment.base, class),
      };
    }

    let mut inner = String::new();
    for segment in segments {
      match &segment.reading {
        Some(reading) => self.push_ruby(&mut inner, "", &segment.base, reading),
        None => inner.push_str(&escape_html(&segment.base)),
      }
    }

    let class_attr = self.class_attr(class);
    if class_attr.is_empty() {
      inner
    } else {
      format!("<span{class_attr}>{inner}</span>")
    }
  }
}
