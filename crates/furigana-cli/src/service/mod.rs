//! サービスモジュール

mod furigana_cli_service;

pub use furigana_cli_service::{AnnotateService, FuriganaCliService};
