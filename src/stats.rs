// File: src/stats.rs
use crate::core::types::{Language, Platform, ToneType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Running counters for a session.
///
/// Counters only ever go up. They are changed by the session's pipeline
/// entry points and survive `clear_conversation`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantStats {
    messages_helped: u64,
    words_learned: u64,
    languages_detected: BTreeMap<Language, u64>,
    platforms_used: BTreeMap<Platform, u64>,
    replies_suggested: u64,
    tones_used: BTreeMap<ToneType, u64>,
}

impl AssistantStats {
    pub fn messages_helped(&self) -> u64 {
        self.messages_helped
    }

    pub fn words_learned(&self) -> u64 {
        self.words_learned
    }

    pub fn replies_suggested(&self) -> u64 {
        self.replies_suggested
    }

    pub fn languages_detected(&self) -> &BTreeMap<Language, u64> {
        &self.languages_detected
    }

    pub fn platforms_used(&self) -> &BTreeMap<Platform, u64> {
        &self.platforms_used
    }

    pub fn tones_used(&self) -> &BTreeMap<ToneType, u64> {
        &self.tones_used
    }

    pub fn tone_count(&self, tone: ToneType) -> u64 {
        self.tones_used.get(&tone).copied().unwrap_or(0)
    }

    pub fn language_count(&self, language: Language) -> u64 {
        self.languages_detected.get(&language).copied().unwrap_or(0)
    }

    pub fn platform_count(&self, platform: Platform) -> u64 {
        self.platforms_used.get(&platform).copied().unwrap_or(0)
    }
}

/// The only writer of `AssistantStats`.
pub(crate) struct StatsRecorder {
    increment: u64,
}

impl StatsRecorder {
    pub fn new() -> Self {
        Self { increment: 1 }
    }

    pub fn record_incoming(
        &self,
        stats: &mut AssistantStats,
        language: Language,
        platform: Platform,
    ) {
        stats.messages_helped += self.increment;
        *stats.languages_detected.entry(language).or_insert(0) += self.increment;
        *stats.platforms_used.entry(platform).or_insert(0) += self.increment;
    }

    pub fn record_replies(&self, stats: &mut AssistantStats, count: usize) {
        stats.replies_suggested += count as u64;
    }

    pub fn record_word(&self, stats: &mut AssistantStats) {
        stats.words_learned += self.increment;
    }

    pub fn record_tone(&self, stats: &mut AssistantStats, tone: ToneType) {
        *stats.tones_used.entry(tone).or_insert(0) += self.increment;
    }
}
