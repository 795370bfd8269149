//! Stateless helpers around the reply pipeline.
//!
//! Each one is a lookup against the shared [`Catalog`](crate::core::catalog::Catalog)
//! and resolves to a defined fallback on a miss.

pub mod cultural;
pub mod improve;
pub mod lexicon;
pub mod questions;
pub mod quick;
pub mod sentiment;

pub use cultural::{cultural_context, CulturalContext};
pub use improve::{improve_message, MessageImprovement};
pub use lexicon::word_meaning;
pub use questions::{predict_next_questions, NextQuestion};
pub use quick::{generate_smart_suggestions, SmartSuggestions};
pub use sentiment::{analyze_sentiment, Sentiment};
