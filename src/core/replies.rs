// File: src/core/replies.rs
use crate::core::catalog::{strings, Catalog, Table};
use crate::core::translator::{PhraseTranslator, Translate};
use crate::core::types::{
    Language, Message, Platform, Relationship, SmartReply, SuggestionContext, ToneType,
};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

/// Most replies emitted per request.
pub const MAX_REPLIES: usize = 3;

const SHORT_FORM_LIMIT: usize = 50;
const SHORT_FORM_KEEP: usize = 47;
const ELLIPSIS: &str = "...";

/// Reply templates for one relationship, tones in declaration order.
#[derive(Debug, Clone, Default)]
pub struct ToneBank {
    entries: Vec<(ToneType, Vec<String>)>,
}

impl ToneBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tone(mut self, tone: ToneType, templates: &[&str]) -> Self {
        self.entries.push((tone, strings(templates)));
        self
    }

    pub fn tones(&self) -> Vec<ToneType> {
        self.entries.iter().map(|(tone, _)| *tone).collect()
    }

    /// Templates for `tone`, degrading to the bank's friendly list.
    pub fn templates(&self, tone: ToneType) -> &[String] {
        self.non_empty(tone)
            .or_else(|| self.non_empty(ToneType::Friendly))
            .unwrap_or(&[])
    }

    fn non_empty(&self, tone: ToneType) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(t, templates)| *t == tone && !templates.is_empty())
            .map(|(_, templates)| templates.as_slice())
    }
}

/// Per-platform presentation flags. Only `short` changes output today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlatformPolicy {
    pub emoji: bool,
    pub casual: bool,
    pub trendy: bool,
    pub short: bool,
    pub detailed: bool,
}

/// Produces ranked, tone-labelled reply candidates for a context.
pub struct ReplyGenerator<'a> {
    banks: &'a Table<Relationship, ToneBank>,
    policies: &'a Table<Platform, PlatformPolicy>,
    translator: &'a dyn Translate,
}

impl<'a> ReplyGenerator<'a> {
    pub fn new(catalog: &'a Catalog, translator: &'a dyn Translate) -> Self {
        Self {
            banks: &catalog.reply_banks,
            policies: &catalog.platform_policies,
            translator,
        }
    }

    /// Draws one template per tone of the relationship's bank. Calling again
    /// with the same context may pick different text; the confidence ladder
    /// is always the same.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        context: &SuggestionContext,
        rng: &mut R,
    ) -> Vec<SmartReply> {
        let bank = self.banks.resolve(&context.relationship);
        let policy = self.policies.resolve(&context.platform);

        let mut replies: Vec<SmartReply> = Vec::with_capacity(MAX_REPLIES);
        for tone in bank.tones().into_iter().take(MAX_REPLIES) {
            let Some(template) = bank.templates(tone).choose(rng) else {
                debug!(%tone, "no templates for tone, skipping");
                continue;
            };

            let text = if policy.short {
                shorten(template)
            } else {
                template.clone()
            };

            replies.push(SmartReply {
                text,
                tone,
                confidence: confidence_for_rank(replies.len()),
                translated_text: None,
            });
        }

        if context.detected_language != Language::En {
            for reply in replies.iter_mut() {
                match self.translator.translate(&reply.text, context.detected_language) {
                    Ok(translation) => reply.translated_text = Some(translation.translated_text),
                    Err(e) => warn!(tone = %reply.tone, "reply translation failed: {}", e),
                }
            }
        }

        debug!(
            relationship = %context.relationship,
            platform = %context.platform,
            count = replies.len(),
            "generated replies"
        );
        replies
    }
}

/// Reply candidates for `context` using the catalog's phrase translator.
pub fn generate_contextual_replies<R: Rng + ?Sized>(
    catalog: &Catalog,
    context: &SuggestionContext,
    rng: &mut R,
) -> Vec<SmartReply> {
    let translator = PhraseTranslator::new(catalog);
    ReplyGenerator::new(catalog, &translator).generate(context, rng)
}

/// Replies in one explicitly chosen tone, regardless of relationship.
///
/// The tone's bank is shuffled and the first three kept; every reply
/// carries `tone` even when the bank came from the friendly fallback.
pub fn generate_smart_replies<R: Rng + ?Sized>(
    catalog: &Catalog,
    _message: &str,
    tone: ToneType,
    _history: &[Message],
    rng: &mut R,
) -> Vec<SmartReply> {
    let mut templates = catalog.tone_replies.resolve(&tone).clone();
    templates.shuffle(rng);
    templates.truncate(MAX_REPLIES);

    templates
        .into_iter()
        .enumerate()
        .map(|(rank, text)| SmartReply {
            text,
            tone,
            confidence: confidence_for_rank(rank),
            translated_text: None,
        })
        .collect()
}

/// `0.9 - 0.1 * rank`, computed on tenths so the ladder is exact.
pub fn confidence_for_rank(rank: usize) -> f32 {
    let tenths = 9usize.saturating_sub(rank);
    tenths as f32 / 10.0
}

/// Short-form platforms cap replies at 50 characters.
pub fn shorten(text: &str) -> String {
    if text.chars().count() <= SHORT_FORM_LIMIT {
        return text.to_string();
    }
    let mut short: String = text.chars().take(SHORT_FORM_KEEP).collect();
    short.push_str(ELLIPSIS);
    short
}

pub fn standard_banks() -> Table<Relationship, ToneBank> {
    let friend = ToneBank::new()
        .with_tone(ToneType::Funny, &[
            "Haha, you're hilarious! 😂",
            "LOL! That made my day! 🤣",
            "You always crack me up! 😄",
            "That's so funny, I can't stop laughing! 😆",
        ])
        .with_tone(ToneType::Casual, &[
            "That's awesome! 😊",
            "Cool! Tell me more about it",
            "Sounds great! 👍",
            "Nice! How did that go?",
        ])
        .with_tone(ToneType::Friendly, &[
            "That's really interesting! 😊",
            "Thanks for sharing that with me!",
            "I love hearing about your experiences!",
            "That sounds wonderful!",
        ]);

    let colleague = ToneBank::new()
        .with_tone(ToneType::Professional, &[
            "Thank you for the update.",
            "I appreciate you letting me know.",
            "That sounds like a good approach.",
            "I understand. Let me know if you need anything.",
        ])
        .with_tone(ToneType::Formal, &[
            "Thank you for your message.",
            "I acknowledge your communication.",
            "That's very informative, thank you.",
            "I appreciate your professional approach.",
        ]);

    let romantic = ToneBank::new()
        .with_tone(ToneType::Romantic, &[
            "You always know how to make me smile 💕",
            "I love talking with you ❤️",
            "You're so sweet! 😍",
            "That means so much to me 💖",
        ])
        .with_tone(ToneType::Friendly, &[
            "That's so thoughtful of you! 😊",
            "You're amazing! ✨",
            "I really appreciate you 💫",
            "You make me happy 😊",
        ]);

    // family and stranger have no bank of their own and use the friend one
    Table::new(friend.clone())
        .with(Relationship::Friend, friend)
        .with(Relationship::Colleague, colleague)
        .with(Relationship::Romantic, romantic)
}

pub fn standard_tone_replies() -> Table<ToneType, Vec<String>> {
    let friendly = strings(&[
        "That sounds awesome! Tell me more about it! 😊",
        "Oh wow, that's really cool! I'm excited to hear more! 🎉",
        "That's so nice! You always have the best stories! 👍",
        "I love chatting with you, you're such great company! 🤗",
        "That's wonderful! Thanks for sharing that with me! ✨",
    ]);

    // casual and professional have no bank and get the friendly one
    Table::new(friendly.clone())
        .with(ToneType::Funny, strings(&[
            "Haha, that's hilarious! 😄 You always know how to make me laugh!",
            "LOL! You're killing me with these jokes! 🤣",
            "That's so funny, I almost spit out my coffee! ☕😂",
            "You should do stand-up comedy! That was amazing! 🎭",
            "I'm literally rolling on the floor laughing! 🤣",
        ]))
        .with(ToneType::Romantic, strings(&[
            "Your message just made my heart skip a beat 💕",
            "I love how you express yourself, it's so beautiful ✨",
            "Every word from you feels like poetry to my soul 🌹",
            "You have such a way with words, it's enchanting 💖",
            "Reading your messages is the highlight of my day 🌟",
        ]))
        .with(ToneType::Formal, strings(&[
            "Thank you for sharing that information with me.",
            "I appreciate your thoughtful message and perspective.",
            "That's a very interesting point you've raised.",
            "I understand your position and respect your viewpoint.",
            "Thank you for taking the time to explain that.",
        ]))
        .with(ToneType::Friendly, friendly)
}

pub fn standard_policies() -> Table<Platform, PlatformPolicy> {
    let base = PlatformPolicy::default();
    Table::new(base)
        .with(Platform::WhatsApp, PlatformPolicy { emoji: true, casual: true, ..base })
        .with(Platform::Instagram, PlatformPolicy { emoji: true, trendy: true, ..base })
        .with(Platform::Snapchat, PlatformPolicy { short: true, emoji: true, ..base })
        .with(Platform::Telegram, PlatformPolicy { detailed: true, ..base })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::TranslationResult;
    use crate::error::{Error, Result};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn context(
        relationship: Relationship,
        platform: Platform,
        language: Language,
    ) -> SuggestionContext {
        SuggestionContext {
            incoming_message: "Hey! How was the trip?".to_string(),
            conversation_history: Vec::new(),
            detected_language: language,
            platform,
            relationship,
        }
    }

    struct FailingTranslator;

    impl Translate for FailingTranslator {
        fn translate(&self, _text: &str, _target: Language) -> Result<TranslationResult> {
            Err(Error::Translation("backend offline".to_string()))
        }
    }

    #[test]
    fn confidence_ladder_is_exact() {
        assert_eq!(confidence_for_rank(0), 0.9);
        assert_eq!(confidence_for_rank(1), 0.8);
        assert_eq!(confidence_for_rank(2), 0.7);
        assert_eq!(confidence_for_rank(20), 0.0);
    }

    #[test]
    fn shorten_keeps_short_text() {
        assert_eq!(shorten("Sounds great! 👍"), "Sounds great! 👍");
        let exactly_fifty = "x".repeat(50);
        assert_eq!(shorten(&exactly_fifty), exactly_fifty);
    }

    #[test]
    fn shorten_truncates_on_characters_not_bytes() {
        let long = "é".repeat(60);
        let short = shorten(&long);
        assert_eq!(short.chars().count(), 50);
        assert!(short.ends_with("..."));
    }

    #[test]
    fn friend_bank_yields_three_ranked_replies() {
        let catalog = Catalog::standard();
        let translator = PhraseTranslator::new(&catalog);
        let generator = ReplyGenerator::new(&catalog, &translator);
        let mut rng = StdRng::seed_from_u64(7);

        let ctx = context(Relationship::Friend, Platform::WhatsApp, Language::En);
        let replies = generator.generate(&ctx, &mut rng);
        let tones: Vec<_> = replies.iter().map(|r| r.tone).collect();
        assert_eq!(tones, vec![ToneType::Funny, ToneType::Casual, ToneType::Friendly]);
        let confidences: Vec<_> = replies.iter().map(|r| r.confidence).collect();
        assert_eq!(confidences, vec![0.9, 0.8, 0.7]);
        assert!(replies.iter().all(|r| r.translated_text.is_none()));
    }

    #[test]
    fn unknown_relationship_bank_falls_back_to_friend() {
        let catalog = Catalog::standard();
        let translator = PhraseTranslator::new(&catalog);
        let generator = ReplyGenerator::new(&catalog, &translator);
        let mut rng = StdRng::seed_from_u64(1);

        for rel in [Relationship::Family, Relationship::Stranger] {
            let ctx = context(rel, Platform::Telegram, Language::En);
            let replies = generator.generate(&ctx, &mut rng);
            let tones: Vec<_> = replies.iter().map(|r| r.tone).collect();
            assert_eq!(tones, vec![ToneType::Funny, ToneType::Casual, ToneType::Friendly]);
        }
    }

    #[test]
    fn non_english_context_gets_translations() {
        let catalog = Catalog::standard();
        let translator = PhraseTranslator::new(&catalog);
        let generator = ReplyGenerator::new(&catalog, &translator);
        let mut rng = StdRng::seed_from_u64(3);

        let ctx = context(Relationship::Colleague, Platform::WhatsApp, Language::Hi);
        let replies = generator.generate(&ctx, &mut rng);
        assert_eq!(replies.len(), 2);
        assert!(replies.iter().all(|r| r.translated_text.is_some()));
    }

    #[test]
    fn failed_translation_keeps_the_candidate() {
        let catalog = Catalog::standard();
        let generator = ReplyGenerator::new(&catalog, &FailingTranslator);
        let mut rng = StdRng::seed_from_u64(3);

        let ctx = context(Relationship::Romantic, Platform::WhatsApp, Language::Es);
        let replies = generator.generate(&ctx, &mut rng);
        assert_eq!(replies.len(), 2);
        assert!(replies.iter().all(|r| r.translated_text.is_none()));
    }

    #[test]
    fn tone_replies_carry_the_requested_tone() {
        let catalog = Catalog::standard();
        let mut rng = StdRng::seed_from_u64(5);
        for tone in ToneType::ALL {
            let replies = generate_smart_replies(&catalog, "guess what", tone, &[], &mut rng);
            assert_eq!(replies.len(), MAX_REPLIES);
            assert!(replies.iter().all(|r| r.tone == tone));
            let confidences: Vec<_> = replies.iter().map(|r| r.confidence).collect();
            assert_eq!(confidences, vec![0.9, 0.8, 0.7]);
        }
    }

    #[test]
    fn tone_replies_are_distinct_templates_from_the_bank() {
        let catalog = Catalog::standard();
        let bank = catalog.tone_replies.resolve(&ToneType::Funny);
        let replies = generate_smart_replies(
            &catalog,
            "guess what",
            ToneType::Funny,
            &[],
            &mut StdRng::seed_from_u64(8),
        );
        for reply in &replies {
            assert!(bank.contains(&reply.text));
        }
        assert_ne!(replies[0].text, replies[1].text);
        assert_ne!(replies[1].text, replies[2].text);
    }

    #[test]
    fn tone_replies_repeat_under_a_fixed_seed() {
        let catalog = Catalog::standard();
        let mut rng = StdRng::seed_from_u64(21);
        let first = generate_smart_replies(&catalog, "hi", ToneType::Romantic, &[], &mut rng);
        let mut rng = StdRng::seed_from_u64(21);
        let second = generate_smart_replies(&catalog, "hi", ToneType::Romantic, &[], &mut rng);
        assert_eq!(first, second);
    }

    #[test]
    fn short_tone_bank_yields_fewer_replies() {
        let mut catalog = Catalog::standard();
        catalog
            .tone_replies
            .insert(ToneType::Casual, vec!["Sure thing".to_string()]);
        let mut rng = StdRng::seed_from_u64(2);
        let replies = generate_smart_replies(&catalog, "hi", ToneType::Casual, &[], &mut rng);
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0].confidence, 0.9);
    }

    #[test]
    fn empty_tone_list_uses_friendly_templates() {
        let mut catalog = Catalog::standard();
        catalog.reply_banks.insert(
            Relationship::Stranger,
            ToneBank::new()
                .with_tone(ToneType::Formal, &[])
                .with_tone(ToneType::Friendly, &["Nice to meet you!"]),
        );
        let translator = PhraseTranslator::new(&catalog);
        let generator = ReplyGenerator::new(&catalog, &translator);
        let mut rng = StdRng::seed_from_u64(9);

        let ctx = context(Relationship::Stranger, Platform::Other, Language::En);
        let replies = generator.generate(&ctx, &mut rng);
        assert_eq!(replies[0].tone, ToneType::Formal);
        assert_eq!(replies[0].text, "Nice to meet you!");
    }
}
