//! 行処理モジュール

mod pipeline;

pub use pipeline::{RunSummary, run};
