//! furigana crate example
//!
//! Annotates a small vocabulary deck and prints the HTML of each item.

use furigana::FuriganaService;
use furigana::alignment::AlignmentMode;
use furigana::config::FuriganaConfig;
use tracing_subscriber::EnvFilter;

/// Application common result type
type AppResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Deck in JSON Lines form, one vocabulary item per line.
const DECK: &str = r#"
{"id": "1", "text": "漢字", "reading": "かんじ"}
{"id": "2", "text": "食べる", "reading": "たべる"}
{"id": "3", "text": "東京", "reading": "【とうきょう】"}
{"id": "4", "text": "ひらがな", "reading": "ひらがな"}
{"id": "5", "text": "漢字", "reading": "kanji"}
{"id": "6", "text": "秘密", "reading": "ひみつ", "show": false}
"#;

/// Prints one annotated item per line.
fn print_deck(service: &FuriganaService, label: &str) -> AppResult<()> {
  let (items, report) = service.annotate_deck(DECK)?;

  println!("\n[{label}]");
  for item in &items {
    let html = service.renderer().render_segments(&item.segments, None);
    println!("  {:>2} | {}", item.id, html);
  }
  println!(
    "  total={}, annotated={}, plain={}, cleaned={}, rate={:.2}",
    report.total,
    report.annotated,
    report.plain,
    report.cleaned_readings,
    report.annotation_rate()
  );

  Ok(())
}

fn main() -> AppResult<()> {
  // Use RUST_LOG environment variable if set
  // Default: info for global, debug for furigana
  let env_filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,furigana=debug"));
  tracing_subscriber::fmt().with_env_filter(env_filter).with_target(true).with_level(true).init();

  // 1. Whole-string annotation (defaults)
  let service = FuriganaService::init(&FuriganaConfig::default())?;
  print_deck(&service, "whole")?;

  // 2. Per-run alignment with a style class
  let mut config = FuriganaConfig::default();
  config.annotation.alignment = AlignmentMode::PerRun;
  config.markup.class_name = Some("furigana".to_string());
  let service = FuriganaService::init(&config)?;
  print_deck(&service, "per_run")?;

  Ok(())
}
