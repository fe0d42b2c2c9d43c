//! モデルモジュール

mod request;
mod response;

pub use request::AnnotateLine;
pub use response::AnnotateResponse;
