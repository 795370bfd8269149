// File: src/assist/quick.rs
use crate::core::catalog::{strings, Catalog, Table};
use crate::core::types::Platform;
use serde::{Deserialize, Serialize};

const QUICK_REPLY_COUNT: usize = 4;
const QUESTION_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmartSuggestions {
    pub quick_replies: Vec<String>,
    pub questions: Vec<String>,
    pub reactions: Vec<String>,
}

/// Canned one-tap replies, conversation starters and reactions.
///
/// The incoming message does not influence the lists yet; it is part of the
/// signature so a model-backed implementation can use it.
pub fn generate_smart_suggestions(
    catalog: &Catalog,
    _incoming: &str,
    platform: Platform,
) -> SmartSuggestions {
    SmartSuggestions {
        quick_replies: catalog.quick_replies.iter().take(QUICK_REPLY_COUNT).cloned().collect(),
        questions: catalog.starter_questions.iter().take(QUESTION_COUNT).cloned().collect(),
        reactions: catalog.reactions.resolve(&platform).clone(),
    }
}

pub fn standard_quick_replies() -> Vec<String> {
    strings(&[
        "Thanks for letting me know!",
        "That sounds great!",
        "I understand",
        "Let me think about it",
        "Sure, no problem!",
        "That works for me",
    ])
}

pub fn standard_questions() -> Vec<String> {
    strings(&[
        "How was your day?",
        "What are your plans for the weekend?",
        "How's everything going?",
        "What have you been up to?",
        "Any exciting news?",
        "How's work/school?",
    ])
}

pub fn standard_reactions() -> Table<Platform, Vec<String>> {
    Table::new(strings(&["👍", "❤️", "😂", "😮", "😢", "🔥", "💯", "✨"]))
        .with(Platform::WhatsApp, strings(&["👍", "❤️", "😂", "😮", "😢", "🙏"]))
}
