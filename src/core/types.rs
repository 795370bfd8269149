// src/core/types.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique identifier for a message within one session.
pub type MessageId = u64;

/// The closed set of languages the detector can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Hi,
    Ar,
    Zh,
    Es,
    Fr,
    De,
}

impl Language {
    pub const ALL: [Language; 7] = [
        Language::En,
        Language::Hi,
        Language::Ar,
        Language::Zh,
        Language::Es,
        Language::Fr,
        Language::De,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Ar => "ar",
            Language::Zh => "zh",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::De => "de",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

/// The messaging surface a conversation happens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    WhatsApp,
    Instagram,
    Snapchat,
    Telegram,
    Other,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::WhatsApp => "whatsapp",
            Platform::Instagram => "instagram",
            Platform::Snapchat => "snapchat",
            Platform::Telegram => "telegram",
            Platform::Other => "other",
        }
    }

    /// Unknown identifiers are treated as `Other`.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "whatsapp" => Platform::WhatsApp,
            "instagram" => Platform::Instagram,
            "snapchat" => Platform::Snapchat,
            "telegram" => Platform::Telegram,
            _ => Platform::Other,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Social context between the two participants. Selects the reply bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    #[default]
    Friend,
    Family,
    Colleague,
    Romantic,
    Stranger,
}

impl Relationship {
    pub const ALL: [Relationship; 5] = [
        Relationship::Friend,
        Relationship::Family,
        Relationship::Colleague,
        Relationship::Romantic,
        Relationship::Stranger,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Relationship::Friend => "friend",
            Relationship::Family => "family",
            Relationship::Colleague => "colleague",
            Relationship::Romantic => "romantic",
            Relationship::Stranger => "stranger",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|rel| rel.as_str() == name)
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Categorical style label for a reply or a rewrite.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ToneType {
    Funny,
    Romantic,
    Formal,
    #[default]
    Friendly,
    Casual,
    Professional,
}

impl ToneType {
    pub const ALL: [ToneType; 6] = [
        ToneType::Funny,
        ToneType::Romantic,
        ToneType::Formal,
        ToneType::Friendly,
        ToneType::Casual,
        ToneType::Professional,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ToneType::Funny => "funny",
            ToneType::Romantic => "romantic",
            ToneType::Formal => "formal",
            ToneType::Friendly => "friendly",
            ToneType::Casual => "casual",
            ToneType::Professional => "professional",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|tone| tone.as_str() == name)
    }
}

impl fmt::Display for ToneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Incoming,
    Outgoing,
}

/// One chat message. Immutable once appended to a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    pub language: Option<Language>,
    pub platform: Option<Platform>,
    pub is_translated: bool,
    /// The text as received, kept only when `text` holds a translation.
    pub original_text: Option<String>,
}

/// Everything the reply generator gets to see for one request.
#[derive(Debug, Clone)]
pub struct SuggestionContext {
    pub incoming_message: String,
    pub conversation_history: Vec<Message>,
    pub detected_language: Language,
    pub platform: Platform,
    pub relationship: Relationship,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmartReply {
    pub text: String,
    pub tone: ToneType,
    /// Synthetic score in [0, 1]; encodes rank, not a calibrated probability.
    pub confidence: f32,
    pub translated_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub translated_text: String,
    pub source_language: Language,
    pub confidence: f32,
}

/// Static dictionary entry for the word helper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordMeaning {
    pub word: String,
    pub meaning: String,
    pub example: String,
    pub pronunciation: String,
    pub translation: Option<String>,
    pub part_of_speech: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_codes_round_trip_through_parse() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code(" ES "), Some(Language::Es));
        assert_eq!(Language::from_code("ja"), None);
    }

    #[test]
    fn unknown_platform_is_other() {
        assert_eq!(Platform::parse("Snapchat"), Platform::Snapchat);
        assert_eq!(Platform::parse("signal"), Platform::Other);
    }

    #[test]
    fn relationship_and_tone_parsing_is_case_insensitive() {
        assert_eq!(Relationship::parse("Colleague"), Some(Relationship::Colleague));
        assert_eq!(Relationship::parse("boss"), None);
        assert_eq!(ToneType::parse("FUNNY"), Some(ToneType::Funny));
        assert_eq!(ToneType::parse("sarcastic"), None);
    }
}
