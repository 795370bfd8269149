//! End-to-end checks of the suggestion pipeline through the public API.

use rand::rngs::StdRng;
use rand::SeedableRng;
use talkmate_core::assist::{analyze_sentiment, word_meaning};
use talkmate_core::core::replies::{generate_contextual_replies, ReplyGenerator, ToneBank};
use talkmate_core::core::translator::{
    translate_text, PhraseTranslator, Translate, MATCHED_CONFIDENCE, PASSTHROUGH_CONFIDENCE,
};
use talkmate_core::core::types::{
    Language, Platform, Relationship, SmartReply, SuggestionContext, ToneType,
};
use talkmate_core::Catalog;

fn context(
    relationship: Relationship,
    platform: Platform,
    language: Language,
) -> SuggestionContext {
    SuggestionContext {
        incoming_message: "How did the presentation go?".to_string(),
        conversation_history: Vec::new(),
        detected_language: language,
        platform,
        relationship,
    }
}

fn ladder(replies: &[SmartReply]) -> Vec<f32> {
    replies.iter().map(|r| r.confidence).collect()
}

#[test]
fn detection_is_total_over_odd_inputs() {
    let catalog = Catalog::standard();
    let inputs = ["", " ", "1234", "🙂", "\u{0}", "ÀÉÎ", "こんにちは", "Привет", "नमस्ते", "你好"];
    for text in inputs {
        let lang = catalog.detector.detect(text);
        assert!(Language::ALL.contains(&lang), "{:?} -> {:?}", text, lang);
    }
}

#[test]
fn scenario_a_spanish_greeting() {
    let catalog = Catalog::standard();
    let text = "Hola, como estas";
    assert_eq!(catalog.detector.detect(text), Language::Es);

    let result = PhraseTranslator::new(&catalog).translate(text, Language::En).unwrap();
    assert_eq!(result.confidence, MATCHED_CONFIDENCE);
    assert_ne!(result.translated_text, text);
}

#[test]
fn free_functions_match_the_trait_objects() {
    let catalog = Catalog::standard();
    let direct = translate_text(&catalog, "धन्यवाद", Language::En);
    assert_eq!(direct.translated_text, "Thank you");
    assert_eq!(direct.source_language, Language::Hi);

    let ctx = context(Relationship::Romantic, Platform::Instagram, Language::En);
    let replies = generate_contextual_replies(&catalog, &ctx, &mut StdRng::seed_from_u64(11));
    let tones: Vec<_> = replies.iter().map(|r| r.tone).collect();
    assert_eq!(tones, vec![ToneType::Romantic, ToneType::Friendly]);
}

#[test]
fn translating_into_the_source_language_is_identity() {
    let catalog = Catalog::standard();
    let translator = PhraseTranslator::new(&catalog);
    for text in ["Merci beaucoup", "Danke", "مرحبا", "Hello there"] {
        let source = catalog.detector.detect(text);
        let result = translator.translate(text, source).unwrap();
        assert_eq!(result.translated_text, text);
        assert_eq!(result.confidence, PASSTHROUGH_CONFIDENCE);
        assert_eq!(result.source_language, source);
    }
}

#[test]
fn generated_tones_stay_inside_the_resolved_bank() {
    let catalog = Catalog::standard();
    let translator = PhraseTranslator::new(&catalog);
    let generator = ReplyGenerator::new(&catalog, &translator);
    let mut rng = StdRng::seed_from_u64(2024);

    for relationship in Relationship::ALL {
        let allowed = catalog.reply_banks.resolve(&relationship).tones();
        for platform in [Platform::WhatsApp, Platform::Snapchat, Platform::Other] {
            for _ in 0..20 {
                let ctx = context(relationship, platform, Language::En);
                let replies = generator.generate(&ctx, &mut rng);
                assert!(!replies.is_empty() && replies.len() <= 3);
                assert!(replies.iter().all(|r| allowed.contains(&r.tone)));
                assert!(replies.windows(2).all(|w| w[0].confidence > w[1].confidence));
                assert!(replies.iter().all(|r| (0.0..=1.0).contains(&r.confidence)));
            }
        }
    }
}

#[test]
fn scenario_b_colleague_stays_professional() {
    let catalog = Catalog::standard();
    let translator = PhraseTranslator::new(&catalog);
    let generator = ReplyGenerator::new(&catalog, &translator);
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..50 {
        let ctx = context(Relationship::Colleague, Platform::Telegram, Language::En);
        let replies = generator.generate(&ctx, &mut rng);
        let tones: Vec<_> = replies.iter().map(|r| r.tone).collect();
        assert_eq!(tones, vec![ToneType::Professional, ToneType::Formal]);
    }
}

#[test]
fn scenario_c_snapchat_shortens_long_templates() {
    let long = "This reply is deliberately written to be sixty characters!!!";
    assert_eq!(long.chars().count(), 60);

    let mut catalog = Catalog::standard();
    catalog
        .reply_banks
        .insert(Relationship::Friend, ToneBank::new().with_tone(ToneType::Casual, &[long]));
    let translator = PhraseTranslator::new(&catalog);
    let generator = ReplyGenerator::new(&catalog, &translator);
    let mut rng = StdRng::seed_from_u64(0);

    let snap_ctx = context(Relationship::Friend, Platform::Snapchat, Language::En);
    let snap = generator.generate(&snap_ctx, &mut rng);
    assert_eq!(snap.len(), 1);
    assert!(snap[0].text.chars().count() <= 50);
    assert!(snap[0].text.ends_with("..."));

    let whatsapp_ctx = context(Relationship::Friend, Platform::WhatsApp, Language::En);
    let whatsapp = generator.generate(&whatsapp_ctx, &mut rng);
    assert_eq!(whatsapp[0].text, long);
}

#[test]
fn scenario_e_love_beats_excited() {
    let catalog = Catalog::standard();
    let emojis = analyze_sentiment(&catalog, "I love this, it's amazing");
    assert_eq!(emojis[0], "❤️");
    assert!(emojis.contains(&"😍".to_string()));
    assert!(!emojis.contains(&"🚀".to_string()));
}

#[test]
fn scenario_f_confidence_ladder_is_stable_across_calls() {
    let catalog = Catalog::standard();
    let translator = PhraseTranslator::new(&catalog);
    let generator = ReplyGenerator::new(&catalog, &translator);
    let ctx = context(Relationship::Friend, Platform::Instagram, Language::En);

    let mut rng = StdRng::from_entropy();
    let first = generator.generate(&ctx, &mut rng);
    let second = generator.generate(&ctx, &mut rng);

    assert_eq!(ladder(&first), vec![0.9, 0.8, 0.7]);
    assert_eq!(ladder(&second), vec![0.9, 0.8, 0.7]);
}

#[test]
fn same_seed_draws_the_same_templates() {
    let catalog = Catalog::standard();
    let translator = PhraseTranslator::new(&catalog);
    let generator = ReplyGenerator::new(&catalog, &translator);
    let ctx = context(Relationship::Romantic, Platform::WhatsApp, Language::Hi);

    let a = generator.generate(&ctx, &mut StdRng::seed_from_u64(17));
    let b = generator.generate(&ctx, &mut StdRng::seed_from_u64(17));
    assert_eq!(a, b);
}

#[test]
fn word_lookup_returns_the_same_record_for_any_case() {
    let catalog = Catalog::standard();
    assert_eq!(word_meaning(&catalog, "Awesome"), word_meaning(&catalog, "awesome"));
    assert!(word_meaning(&catalog, "Awesome").is_some());
}
