// File: src/core/detector.rs
use crate::core::types::Language;
use std::ops::RangeInclusive;

/// Heuristic language identification.
///
/// Script ranges are checked before keyword lists: a script is unambiguous,
/// while a short message can contain a foreign substring by accident.
#[derive(Debug, Clone)]
pub struct LanguageDetector {
    scripts: Vec<(Language, RangeInclusive<char>)>,
    keywords: Vec<(Language, Vec<String>)>,
    default_language: Language,
}

impl LanguageDetector {
    pub fn new() -> Self {
        Self {
            scripts: vec![
                (Language::Hi, '\u{0900}'..='\u{097F}'),
                (Language::Ar, '\u{0600}'..='\u{06FF}'),
                (Language::Zh, '\u{4E00}'..='\u{9FFF}'),
            ],
            keywords: vec![
                (Language::Es, keywords(&["hola", "como", "estas", "gracias", "por", "favor"])),
                (
                    Language::Fr,
                    keywords(&["bonjour", "comment", "allez", "vous", "merci", "beaucoup"]),
                ),
                (Language::De, keywords(&["hallo", "wie", "geht", "danke", "bitte", "gut"])),
            ],
            default_language: Language::En,
        }
    }

    /// Total: always returns a code, English when no signal fires.
    pub fn detect(&self, text: &str) -> Language {
        for (lang, range) in &self.scripts {
            if text.chars().any(|c| range.contains(&c)) {
                return *lang;
            }
        }

        let lower = text.to_lowercase();
        self.keywords
            .iter()
            .find(|(_, words)| words.iter().any(|w| lower.contains(w.as_str())))
            .map(|(lang, _)| *lang)
            .unwrap_or(self.default_language)
    }
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new()
    }
}

fn keywords(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}
