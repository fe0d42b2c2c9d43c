//! models module
pub mod deck;
pub mod model_definition;

/// Re-export major model types
pub use deck::parse_deck_jsonl;
pub use model_definition::{AnnotatedItem, AnnotationRequest, AnnotationResult, VocabularyItem};
