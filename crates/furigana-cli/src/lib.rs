//! furigana-cli crate
//!
//! Line-oriented front end for the furigana library.
//! Reads one JSON object per line from stdin and writes one annotated line per input.
//!
//! ## Input
//! `{"text": "漢字", "reading": "かんじ", "show": true, "class": "ruby-lg"}`
//!
//! ## Usage Example
//! ```bash
//! echo '{"text": "漢字", "reading": "かんじ"}' | furigana-cli
//! FURIGANA_OUTPUT_FORMAT=json furigana-cli < deck.jsonl
//! ```

pub mod config;
pub mod errors;
pub mod models;
pub mod runner;
pub mod service;

pub use config::{Config, OutputFormat};
pub use errors::{CliError, CliErrorKind};
pub use models::{AnnotateLine, AnnotateResponse};
pub use runner::{RunSummary, run};
pub use service::{AnnotateService, FuriganaCliService};
