use crossterm::style::Stylize;
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;
use std::sync::Arc;
use talkmate_core::core::translator::language_name;
use talkmate_core::core::types::{Language, Platform, Relationship, SmartReply, ToneType};
use talkmate_core::speech::{NullSpeechBackend, SpeechService};
use talkmate_core::{logging, Assistant, AssistantConfig, Catalog};
use tracing::error;

const DEFAULT_SESSION_PATH: &str = "talkmate_session.bin";

fn main() -> talkmate_core::Result<()> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let mut config = AssistantConfig::load(config_path.as_deref())?;
    if config.session_path.is_none() {
        config.session_path = Some(PathBuf::from(DEFAULT_SESSION_PATH));
    }
    logging::init_logging(&config.log_level)?;

    let mut assistant = Assistant::open_or_new(Arc::new(Catalog::standard()), &config);
    let mut speech = SpeechService::new(NullSpeechBackend);

    let banner = "TalkMate assistant. Type 'help' for commands, 'exit' to save and quit.";
    println!("{}", banner.bold());
    println!("---------------------------------------------------------------");

    loop {
        print!(
            "\n[{} · {} · {}] > ",
            assistant.platform(),
            assistant.relationship(),
            assistant.tone()
        );
        stdout().flush()?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let line = input.trim();
        let (cmd, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        match cmd {
            "exit" | "quit" => break,
            "" => {}
            "help" => print_help(),
            "in" => {
                let Some(message) = assistant.receive(rest, assistant.platform()) else {
                    println!("Nothing to receive.");
                    continue;
                };
                let language = message.language.unwrap_or(Language::En);
                let name = language_name(assistant.catalog(), language.code());
                println!("Detected: {}", name.cyan());
                if let Some(original) = &message.original_text {
                    println!("Original:   {}", original);
                    println!("Translated: {}", message.text.as_str().green());
                }
                let replies = assistant.suggest_replies(&message);
                print_replies(&replies);
                println!("Emoji: {}", assistant.emoji_for(rest).join(" "));
            }
            "out" => match assistant.send(rest) {
                Some(message) => println!("Sent #{}", message.id),
                None => println!("Nothing to send."),
            },
            "replies" => print_replies(&assistant.suggest_for_latest()),
            "smart" => print_replies(&assistant.smart_replies()),
            "tone" => match ToneType::parse(rest) {
                Some(tone) => assistant.set_tone(tone),
                None => println!("Unknown tone '{}'.", rest),
            },
            "improve" => {
                let (tone, text) = rest.split_once(' ').unwrap_or((rest, ""));
                let tone = ToneType::parse(tone).unwrap_or(ToneType::Formal);
                let improvement = assistant.improve(text, tone);
                println!("Improved: {}", improvement.improved_message.as_str().green());
                println!("Tips: {}", improvement.suggestions.join("; "));
                println!("Grammar: {}", improvement.grammar_fixes.join("; "));
            }
            "word" => {
                let word = rest.trim_matches(|c: char| !c.is_alphanumeric());
                match assistant.look_up_word(word) {
                    Some(meaning) => {
                        println!("{} {}", meaning.word.as_str().bold(), meaning.pronunciation);
                        if let Some(pos) = &meaning.part_of_speech {
                            println!("  ({})", pos);
                        }
                        println!("  {}", meaning.meaning);
                        println!("  e.g. {}", meaning.example.as_str().italic());
                        if let Some(translation) = &meaning.translation {
                            println!("  {}", translation);
                        }
                    }
                    None => println!("No entry for '{}'.", word),
                }
            }
            "culture" => {
                let (code, text) = rest.split_once(' ').unwrap_or((rest, ""));
                let language = Language::from_code(code).unwrap_or(Language::En);
                let help = assistant.cultural_help(language, text);
                print_list("Notes", &help.cultural_notes);
                print_list("Responses", &help.appropriate_responses);
                print_list("Etiquette", &help.etiquette);
            }
            "emoji" => println!("{}", assistant.emoji_for(rest).join(" ")),
            "questions" => {
                for q in assistant.next_questions() {
                    println!("  {} ({}, p={:.2})", q.question, q.context, q.probability);
                }
            }
            "quick" => match assistant.smart_suggestions() {
                Some(s) => {
                    print_list("Quick replies", &s.quick_replies);
                    print_list("Questions", &s.questions);
                    println!("Reactions: {}", s.reactions.join(" "));
                }
                None => println!("No messages yet."),
            },
            "platform" => assistant.set_platform(Platform::parse(rest)),
            "relation" => match Relationship::parse(rest) {
                Some(rel) => assistant.set_relationship(rel),
                None => println!("Unknown relationship '{}'.", rest),
            },
            "speak" => {
                if let Err(e) = speech.speak(rest, Language::En) {
                    println!("{}", format!("Voice output unavailable: {}", e).yellow());
                }
            }
            "listen" => match speech.start_listening(Language::En) {
                Ok(transcript) => println!("Heard: {}", transcript),
                Err(e) => println!("{}", format!("Voice input unavailable: {}", e).yellow()),
            },
            "stats" => print_stats(&assistant),
            "history" => {
                for m in assistant.messages() {
                    println!("  #{} {:?} {}", m.id, m.sender, m.text);
                }
            }
            "clear" => {
                assistant.clear_conversation();
                println!("Conversation cleared (stats kept).");
            }
            other => println!("Unknown command '{}'. Type 'help'.", other),
        }
    }

    println!("\nSaving session...");
    if let Err(e) = assistant.save() {
        error!("could not save session: {}", e);
    } else if let Some(path) = assistant.session_path() {
        println!("Session saved to '{}'", path.display());
    }
    Ok(())
}

fn print_help() {
    println!("  in <text>               receive a message and get replies");
    println!("  out <text>              record a message you sent");
    println!("  replies                 suggest replies for the latest message");
    println!("  smart                   replies in the current tone");
    println!("  tone <name>             funny, romantic, formal, friendly, casual, professional");
    println!("  improve <tone> <text>   rewrite a draft in a tone");
    println!("  word <word>             look up a word");
    println!("  culture <code> [text]   cultural notes for a language");
    println!("  emoji <text>            emoji suggestions");
    println!("  questions | quick       predicted questions / quick actions");
    println!("  platform <name>         whatsapp, instagram, snapchat, telegram, other");
    println!("  relation <name>         friend, family, colleague, romantic, stranger");
    println!("  speak <text> | listen   voice output / input");
    println!("  stats | history | clear | exit");
}

fn print_replies(replies: &[SmartReply]) {
    if replies.is_empty() {
        println!("No suggestions.");
        return;
    }
    println!("\nSuggestions:");
    for (i, reply) in replies.iter().enumerate() {
        println!(
            "  :{}: [{}] {} (confidence: {:.1})",
            i + 1,
            reply.tone.as_str().magenta(),
            reply.text,
            reply.confidence
        );
        if let Some(translated) = &reply.translated_text {
            println!("       {}", translated.as_str().dim());
        }
    }
}

fn print_list(title: &str, items: &[String]) {
    println!("{}:", title.bold());
    for item in items {
        println!("  - {}", item);
    }
}

fn print_stats(assistant: &Assistant) {
    let stats = assistant.stats();
    println!("Messages helped:   {}", stats.messages_helped());
    println!("Replies suggested: {}", stats.replies_suggested());
    println!("Words learned:     {}", stats.words_learned());
    for (language, count) in stats.languages_detected() {
        println!("  {:<10} {}", language_name(assistant.catalog(), language.code()), count);
    }
    for (platform, count) in stats.platforms_used() {
        println!("  {:<10} {}", platform, count);
    }
    for (tone, count) in stats.tones_used() {
        println!("  {:<10} {}", tone, count);
    }
}
