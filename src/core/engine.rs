use crate::assist::{self, CulturalContext, MessageImprovement, NextQuestion, SmartSuggestions};
use crate::config::AssistantConfig;
use crate::core::catalog::Catalog;
use crate::core::context::{ContextBuilder, Conversation};
use crate::core::replies::{self, ReplyGenerator};
use crate::core::translator::{PhraseTranslator, Translate};
use crate::core::types::{
    Language, Message, Platform, Relationship, Sender, SmartReply, ToneType, WordMeaning,
};
use crate::error::Result;
use crate::persistence::{load_from_disk, save_to_disk};
use crate::stats::{AssistantStats, StatsRecorder};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// One user's assistant session.
///
/// Owns the conversation, the stats and the random source. The catalog is
/// shared read-only, so independent sessions (or tests) never interfere.
pub struct Assistant {
    catalog: Arc<Catalog>,
    pub(crate) conversation: Conversation,
    pub(crate) stats: AssistantStats,
    pub(crate) platform: Platform,
    pub(crate) relationship: Relationship,
    pub(crate) tone: ToneType,
    context_builder: ContextBuilder,
    recorder: StatsRecorder,
    rng: StdRng,
    session_path: Option<PathBuf>,
}

impl Assistant {
    pub fn new(config: &AssistantConfig) -> Self {
        Self::with_catalog(Arc::new(Catalog::standard()), config)
    }

    pub fn with_catalog(catalog: Arc<Catalog>, config: &AssistantConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            catalog,
            conversation: Conversation::new(),
            stats: AssistantStats::default(),
            platform: config.default_platform,
            relationship: config.default_relationship,
            tone: ToneType::default(),
            context_builder: ContextBuilder::new(config.history_window),
            recorder: StatsRecorder::new(),
            rng,
            session_path: config.session_path.clone(),
        }
    }

    /// Restores the session saved at `config.session_path`, or starts fresh
    /// when there is no path or the file cannot be read.
    pub fn open_or_new(catalog: Arc<Catalog>, config: &AssistantConfig) -> Self {
        let Some(path) = config.session_path.as_deref() else {
            return Self::with_catalog(catalog, config);
        };
        if !path.exists() {
            info!(path = %path.display(), "no saved session, starting fresh");
            return Self::with_catalog(catalog, config);
        }
        match load_from_disk(path, Arc::clone(&catalog), config) {
            Ok(assistant) => {
                info!(
                    path = %path.display(),
                    messages = assistant.conversation.len(),
                    "session restored"
                );
                assistant
            }
            Err(e) => {
                warn!(path = %path.display(), "could not load session, starting fresh: {}", e);
                Self::with_catalog(catalog, config)
            }
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn messages(&self) -> &[Message] {
        self.conversation.messages()
    }

    pub fn stats(&self) -> &AssistantStats {
        &self.stats
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn set_platform(&mut self, platform: Platform) {
        self.platform = platform;
    }

    pub fn relationship(&self) -> Relationship {
        self.relationship
    }

    pub fn set_relationship(&mut self, relationship: Relationship) {
        self.relationship = relationship;
    }

    /// Tone used for tone-keyed replies and credited to sent messages.
    pub fn tone(&self) -> ToneType {
        self.tone
    }

    pub fn set_tone(&mut self, tone: ToneType) {
        self.tone = tone;
    }

    pub fn detect_language(&self, text: &str) -> Language {
        self.catalog.detector.detect(text)
    }

    /// Accepts a message from the other side: detects its language,
    /// translates it to English when needed, records it and updates stats.
    /// Blank input is not accepted.
    pub fn receive(&mut self, text: &str, platform: Platform) -> Option<Message> {
        if text.trim().is_empty() {
            return None;
        }

        let language = self.detect_language(text);
        let (shown, original) = if language == Language::En {
            (text.to_string(), None)
        } else {
            let translator = PhraseTranslator::new(&self.catalog);
            match translator.translate(text, Language::En) {
                Ok(result) => (result.translated_text, Some(text.to_string())),
                Err(e) => {
                    warn!(%language, "incoming translation failed: {}", e);
                    (text.to_string(), None)
                }
            }
        };

        self.recorder.record_incoming(&mut self.stats, language, platform);
        let message = self
            .conversation
            .push(shown, Sender::Incoming, Some(language), Some(platform), original)
            .clone();
        debug!(
            id = message.id,
            %language,
            %platform,
            translated = message.is_translated,
            "received message"
        );
        Some(message)
    }

    /// Records a message the user sent, tagged with its detected language.
    /// Only the session tone's usage counter moves.
    pub fn send(&mut self, text: &str) -> Option<Message> {
        if text.trim().is_empty() {
            return None;
        }
        let language = self.detect_language(text);
        self.recorder.record_tone(&mut self.stats, self.tone);
        let message = self
            .conversation
            .push(text.to_string(), Sender::Outgoing, Some(language), Some(self.platform), None)
            .clone();
        debug!(id = message.id, %language, tone = %self.tone, "sent message");
        Some(message)
    }

    /// Ranked reply candidates for `incoming`, in the current relationship.
    pub fn suggest_replies(&mut self, incoming: &Message) -> Vec<SmartReply> {
        let context = self
            .context_builder
            .build(incoming, self.conversation.messages(), self.relationship);
        let translator = PhraseTranslator::new(&self.catalog);
        let replies =
            ReplyGenerator::new(&self.catalog, &translator).generate(&context, &mut self.rng);
        self.recorder.record_replies(&mut self.stats, replies.len());
        replies
    }

    /// Reply candidates for the most recent incoming message, if any.
    pub fn suggest_for_latest(&mut self) -> Vec<SmartReply> {
        match self.latest_incoming() {
            Some(message) => self.suggest_replies(&message),
            None => Vec::new(),
        }
    }

    /// Replies in the session tone for the most recent incoming message.
    pub fn smart_replies(&mut self) -> Vec<SmartReply> {
        let Some(latest) = self.latest_incoming() else {
            return Vec::new();
        };
        let replies = replies::generate_smart_replies(
            &self.catalog,
            &latest.text,
            self.tone,
            self.conversation.messages(),
            &mut self.rng,
        );
        self.recorder.record_replies(&mut self.stats, replies.len());
        replies
    }

    fn latest_incoming(&self) -> Option<Message> {
        self.conversation
            .messages()
            .iter()
            .rev()
            .find(|m| m.sender == Sender::Incoming)
            .cloned()
    }

    pub fn improve(&self, message: &str, tone: ToneType) -> MessageImprovement {
        assist::improve_message(&self.catalog, message, tone)
    }

    /// Quick actions for the active platform, keyed off the last message.
    pub fn smart_suggestions(&self) -> Option<SmartSuggestions> {
        let last = self.conversation.last()?;
        Some(assist::generate_smart_suggestions(&self.catalog, &last.text, self.platform))
    }

    pub fn next_questions(&mut self) -> Vec<NextQuestion> {
        let history = self.conversation.messages();
        assist::predict_next_questions(&self.catalog, history, &mut self.rng)
    }

    pub fn cultural_help(&self, language: Language, message: &str) -> CulturalContext {
        assist::cultural_context(&self.catalog, language, message)
    }

    /// Looks a word up; a hit counts as a word learned.
    pub fn look_up_word(&mut self, word: &str) -> Option<WordMeaning> {
        let meaning = assist::word_meaning(&self.catalog, word)?.clone();
        self.recorder.record_word(&mut self.stats);
        Some(meaning)
    }

    pub fn emoji_for(&self, text: &str) -> Vec<String> {
        assist::analyze_sentiment(&self.catalog, text)
    }

    /// Empties the history. Stats are kept.
    pub fn clear_conversation(&mut self) {
        info!(dropped = self.conversation.len(), "conversation cleared");
        self.conversation.clear();
    }

    pub fn session_path(&self) -> Option<&Path> {
        self.session_path.as_deref()
    }

    /// Saves to the configured session path; no-op without one.
    pub fn save(&self) -> Result<()> {
        if let Some(path) = &self.session_path {
            save_to_disk(self, path)?;
            info!(path = %path.display(), "session saved");
        }
        Ok(())
    }
}
