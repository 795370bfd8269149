// File: src/assist/cultural.rs
use crate::core::catalog::{strings, Catalog, Table};
use crate::core::types::Language;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CulturalContext {
    pub cultural_notes: Vec<String>,
    pub appropriate_responses: Vec<String>,
    pub etiquette: Vec<String>,
}

/// Etiquette notes for replying to someone writing in `language`.
/// Languages without notes get the generic bank.
pub fn cultural_context(catalog: &Catalog, language: Language, _message: &str) -> CulturalContext {
    catalog.cultural_contexts.resolve(&language).clone()
}

pub fn standard_contexts() -> Table<Language, CulturalContext> {
    let generic = CulturalContext {
        cultural_notes: strings(&["Be respectful and friendly"]),
        appropriate_responses: strings(&["Thank you", "That's great", "I understand"]),
        etiquette: strings(&["Be polite", "Show interest", "Respond appropriately"]),
    };

    Table::new(generic)
        .with(Language::Hi, CulturalContext {
            cultural_notes: strings(&[
                "In Indian culture, respect for elders is very important",
                "Using 'ji' shows respect in Hindi conversations",
                "Family relationships are highly valued",
            ]),
            appropriate_responses: strings(&[
                "धन्यवाद जी (Thank you with respect)",
                "आपका स्वागत है (You're welcome)",
                "नमस्कार (Respectful greeting)",
            ]),
            etiquette: strings(&[
                "Always greet with respect",
                "Ask about family and health",
                "Use formal language with elders",
            ]),
        })
        .with(Language::Es, CulturalContext {
            cultural_notes: strings(&[
                "Spanish speakers often use more expressive language",
                "Family and personal relationships are central",
                "Warmth and friendliness are highly valued",
            ]),
            appropriate_responses: strings(&[
                "¡Qué bueno! (How good!)",
                "Me alegra mucho (I'm very happy)",
                "Un abrazo (A hug - friendly closing)",
            ]),
            etiquette: strings(&[
                "Be warm and expressive",
                "Ask about family",
                "Use appropriate formal/informal address",
            ]),
        })
}
