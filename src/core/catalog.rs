// File: src/core/catalog.rs
use crate::assist::{cultural, improve, lexicon, questions, quick, sentiment};
use crate::core::detector::LanguageDetector;
use crate::core::replies::{self, PlatformPolicy, ToneBank};
use crate::core::translator::{self, PhraseBook};
use crate::core::types::{Language, Platform, Relationship, ToneType, WordMeaning};
use std::collections::HashMap;

/// An ordered lookup table that always resolves.
///
/// Every keyed lookup in the assistant goes through `resolve`, so the
/// fallback policy for a table lives next to its data and nowhere else.
#[derive(Debug, Clone)]
pub struct Table<K, V> {
    entries: Vec<(K, V)>,
    fallback: V,
}

impl<K: PartialEq, V> Table<K, V> {
    pub fn new(fallback: V) -> Self {
        Self { entries: Vec::new(), fallback }
    }

    /// Inserts or replaces `key`, keeping the original position on replace.
    pub fn with(mut self, key: K, value: V) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: K, value: V) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Exact lookup without falling back.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Lookup that degrades to the table's fallback value on a miss.
    pub fn resolve(&self, key: &K) -> &V {
        self.get(key).unwrap_or(&self.fallback)
    }

    pub fn fallback(&self) -> &V {
        &self.fallback
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }
}

/// Immutable reference data shared by every component of a session.
///
/// Built once (usually via [`Catalog::standard`]) and handed around by
/// reference or `Arc`; nothing in here changes at runtime.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub detector: LanguageDetector,
    pub phrases: PhraseBook,
    pub language_names: Table<String, String>,
    pub reply_banks: Table<Relationship, ToneBank>,
    pub platform_policies: Table<Platform, PlatformPolicy>,
    pub tone_replies: Table<ToneType, Vec<String>>,
    pub improvements: Table<ToneType, improve::ImprovementRule>,
    pub quick_replies: Vec<String>,
    pub starter_questions: Vec<String>,
    pub reactions: Table<Platform, Vec<String>>,
    pub next_questions: Vec<questions::NextQuestion>,
    pub cultural_contexts: Table<Language, cultural::CulturalContext>,
    pub words: HashMap<String, WordMeaning>,
    pub sentiments: sentiment::SentimentTable,
}

impl Catalog {
    pub fn standard() -> Self {
        Self {
            detector: LanguageDetector::new(),
            phrases: translator::standard_phrases(),
            language_names: translator::standard_language_names(),
            reply_banks: replies::standard_banks(),
            platform_policies: replies::standard_policies(),
            tone_replies: replies::standard_tone_replies(),
            improvements: improve::standard_rules(),
            quick_replies: quick::standard_quick_replies(),
            starter_questions: quick::standard_questions(),
            reactions: quick::standard_reactions(),
            next_questions: questions::standard_questions(),
            cultural_contexts: cultural::standard_contexts(),
            words: lexicon::standard_words(),
            sentiments: sentiment::standard_sentiments(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
