//! Config module

mod constants;
mod env;

pub use constants::{
  DEFAULT_OUTPUT_FORMAT, ENV_CLASS, ENV_CONFIG, ENV_OUTPUT_FORMAT, MAX_LINE_LENGTH,
};
pub use env::{Config, OutputFormat};
