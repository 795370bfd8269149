// File: src/core/translator.rs
use crate::core::catalog::{Catalog, Table};
use crate::core::detector::LanguageDetector;
use crate::core::types::{Language, TranslationResult};
use crate::error::Result;
use tracing::debug;

/// Confidence reported when a phrase-table entry matched.
pub const MATCHED_CONFIDENCE: f32 = 0.85;
/// Confidence reported on passthrough, meaning "nothing to translate".
pub const PASSTHROUGH_CONFIDENCE: f32 = 0.95;

/// Anything that can turn text into a target language.
///
/// The phrase-table implementation never fails; a networked backend would,
/// which is why the result is fallible.
pub trait Translate {
    fn translate(&self, text: &str, target: Language) -> Result<TranslationResult>;
}

/// Static source phrases mapped to target phrases, per language pair.
/// Keys are stored lowercase; entry order is match priority.
#[derive(Debug, Clone)]
pub struct PhraseBook {
    pairs: Table<(Language, Language), Vec<(String, String)>>,
}

impl PhraseBook {
    pub fn new() -> Self {
        Self { pairs: Table::new(Vec::new()) }
    }

    pub fn with_pair(
        mut self,
        source: Language,
        target: Language,
        entries: &[(&str, &str)],
    ) -> Self {
        let entries = entries
            .iter()
            .map(|(from, to)| (from.to_lowercase(), to.to_string()))
            .collect();
        self.pairs.insert((source, target), entries);
        self
    }

    /// First key (in table order) contained in `text`, case-insensitively.
    pub fn lookup(&self, source: Language, target: Language, text: &str) -> Option<&str> {
        let lower = text.to_lowercase();
        self.pairs
            .resolve(&(source, target))
            .iter()
            .find(|(key, _)| lower.contains(key.as_str()))
            .map(|(_, phrase)| phrase.as_str())
    }
}

impl Default for PhraseBook {
    fn default() -> Self {
        Self::new()
    }
}

/// Translator backed by the catalog's phrase tables.
pub struct PhraseTranslator<'a> {
    detector: &'a LanguageDetector,
    phrases: &'a PhraseBook,
}

impl<'a> PhraseTranslator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            detector: &catalog.detector,
            phrases: &catalog.phrases,
        }
    }

    /// Infallible form of [`Translate::translate`].
    pub fn translate_phrase(&self, text: &str, target: Language) -> TranslationResult {
        let source_language = self.detector.detect(text);
        let result = match self.phrases.lookup(source_language, target, text) {
            Some(phrase) => TranslationResult {
                translated_text: phrase.to_string(),
                source_language,
                confidence: MATCHED_CONFIDENCE,
            },
            None => TranslationResult {
                translated_text: text.to_string(),
                source_language,
                confidence: PASSTHROUGH_CONFIDENCE,
            },
        };
        debug!(
            source = %source_language,
            target = %target,
            confidence = result.confidence,
            "translated"
        );
        result
    }
}

impl Translate for PhraseTranslator<'_> {
    fn translate(&self, text: &str, target: Language) -> Result<TranslationResult> {
        Ok(self.translate_phrase(text, target))
    }
}

/// Translates `text` into `target` with the catalog's phrase tables.
pub fn translate_text(catalog: &Catalog, text: &str, target: Language) -> TranslationResult {
    PhraseTranslator::new(catalog).translate_phrase(text, target)
}

/// Display name for a language code; "Unknown" when the code is not listed.
pub fn language_name<'a>(catalog: &'a Catalog, code: &str) -> &'a str {
    catalog
        .language_names
        .resolve(&code.trim().to_ascii_lowercase())
        .as_str()
}

pub fn standard_phrases() -> PhraseBook {
    PhraseBook::new()
        .with_pair(Language::Hi, Language::En, &[
            ("नमस्ते", "Hello"),
            ("कैसे हैं आप", "How are you"),
            ("धन्यवाद", "Thank you"),
            ("अच्छा", "Good"),
            ("बहुत बढ़िया", "Very good"),
            ("मैं ठीक हूं", "I am fine"),
            ("आप कैसे हैं", "How are you"),
            ("क्या हाल है", "What's up"),
            ("मिलकर खुशी हुई", "Nice to meet you"),
        ])
        .with_pair(Language::Es, Language::En, &[
            ("hola", "hello"),
            ("como estas", "how are you"),
            ("muy bien", "very good"),
            ("gracias", "thank you"),
            ("de nada", "you're welcome"),
            ("buenas noches", "good night"),
            ("hasta luego", "see you later"),
        ])
        .with_pair(Language::Fr, Language::En, &[
            ("bonjour", "hello"),
            ("comment allez-vous", "how are you"),
            ("très bien", "very good"),
            ("merci", "thank you"),
            ("de rien", "you're welcome"),
            ("bonne nuit", "good night"),
            ("à bientôt", "see you soon"),
        ])
        .with_pair(Language::En, Language::Hi, &[
            ("hello", "नमस्ते"),
            ("how are you", "कैसे हैं आप"),
            ("thank you", "धन्यवाद"),
            ("good", "अच्छा"),
            ("very good", "बहुत बढ़िया"),
            ("nice to meet you", "मिलकर खुशी हुई"),
            ("goodbye", "अलविदा"),
            ("yes", "हाँ"),
            ("no", "नहीं"),
        ])
        .with_pair(Language::En, Language::Es, &[
            ("thank you", "gracias"),
            ("thanks", "gracias"),
            ("how are you", "¿cómo estás?"),
            ("good night", "buenas noches"),
            ("see you later", "hasta luego"),
            ("that's awesome", "¡qué genial!"),
            ("sounds great", "¡suena genial!"),
        ])
        .with_pair(Language::En, Language::Fr, &[
            ("thank you", "merci"),
            ("thanks", "merci"),
            ("how are you", "comment allez-vous ?"),
            ("good night", "bonne nuit"),
            ("see you soon", "à bientôt"),
            ("that's awesome", "c'est génial !"),
            ("sounds great", "ça a l'air super !"),
        ])
}

pub fn standard_language_names() -> Table<String, String> {
    [
        ("en", "English"),
        ("hi", "Hindi"),
        ("es", "Spanish"),
        ("fr", "French"),
        ("de", "German"),
        ("ar", "Arabic"),
        ("zh", "Chinese"),
        ("ja", "Japanese"),
        ("ko", "Korean"),
        ("pt", "Portuguese"),
        ("ru", "Russian"),
        ("it", "Italian"),
    ]
    .into_iter()
    .fold(Table::new("Unknown".to_string()), |table, (code, name)| {
        table.with(code.to_string(), name.to_string())
    })
}
