//! Speech input/output
//!
//! The engines themselves live behind [`SpeechBackend`]; [`SpeechService`]
//! enforces at most one recognition and one utterance at a time.

use crate::core::types::Language;
use crate::error::{Error, Result};
use tracing::debug;

/// Voice settings for one utterance.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub locale: &'static str,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

/// A host speech engine.
pub trait SpeechBackend {
    fn supports_recognition(&self) -> bool;
    fn supports_synthesis(&self) -> bool;

    /// Starts a single-shot recognition.
    fn start_recognition(&mut self, locale: &str) -> Result<()>;
    /// Blocks until the running recognition yields a transcript.
    fn next_transcript(&mut self) -> Result<String>;
    fn stop_recognition(&mut self);

    /// Speaks the utterance; returns when it has finished.
    fn synthesize(&mut self, utterance: &Utterance) -> Result<()>;
    fn cancel_synthesis(&mut self);
}

/// Backend for hosts without any speech support.
#[derive(Debug, Default)]
pub struct NullSpeechBackend;

impl SpeechBackend for NullSpeechBackend {
    fn supports_recognition(&self) -> bool {
        false
    }

    fn supports_synthesis(&self) -> bool {
        false
    }

    fn start_recognition(&mut self, _locale: &str) -> Result<()> {
        Err(Error::Unsupported("speech recognition"))
    }

    fn next_transcript(&mut self) -> Result<String> {
        Err(Error::Unsupported("speech recognition"))
    }

    fn stop_recognition(&mut self) {}

    fn synthesize(&mut self, _utterance: &Utterance) -> Result<()> {
        Err(Error::Unsupported("speech synthesis"))
    }

    fn cancel_synthesis(&mut self) {}
}

pub struct SpeechService<B: SpeechBackend> {
    backend: B,
    listening: bool,
}

impl<B: SpeechBackend> SpeechService<B> {
    pub fn new(backend: B) -> Self {
        Self { backend, listening: false }
    }

    /// Both directions are available.
    pub fn is_supported(&self) -> bool {
        self.backend.supports_recognition() && self.backend.supports_synthesis()
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Starts listening without waiting for the transcript.
    /// Rejected with [`Error::Busy`] while a recognition is running.
    pub fn begin_listening(&mut self, language: Language) -> Result<()> {
        if !self.backend.supports_recognition() {
            return Err(Error::Unsupported("speech recognition"));
        }
        if self.listening {
            return Err(Error::Busy);
        }

        self.listening = true;
        if let Err(e) = self.backend.start_recognition(locale_for(language)) {
            self.listening = false;
            return Err(e);
        }
        debug!(locale = locale_for(language), "listening");
        Ok(())
    }

    /// Waits for the running recognition. The listening flag is cleared
    /// whether a transcript or an error comes back.
    pub fn transcript(&mut self) -> Result<String> {
        if !self.listening {
            return Err(Error::Speech("not listening".to_string()));
        }
        let result = self.backend.next_transcript();
        self.listening = false;
        result
    }

    pub fn start_listening(&mut self, language: Language) -> Result<String> {
        self.begin_listening(language)?;
        self.transcript()
    }

    pub fn stop_listening(&mut self) {
        if self.listening {
            self.backend.stop_recognition();
            self.listening = false;
        }
    }

    /// Cancels whatever is being spoken, then speaks `text`.
    pub fn speak(&mut self, text: &str, language: Language) -> Result<()> {
        if !self.backend.supports_synthesis() {
            return Err(Error::Unsupported("speech synthesis"));
        }
        self.backend.cancel_synthesis();

        let utterance = Utterance {
            text: text.to_string(),
            locale: locale_for(language),
            rate: 0.9,
            pitch: 1.0,
            volume: 1.0,
        };
        self.backend.synthesize(&utterance)
    }

    pub fn stop_speaking(&mut self) {
        self.backend.cancel_synthesis();
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

fn locale_for(language: Language) -> &'static str {
    match language {
        Language::Hi => "hi-IN",
        _ => "en-US",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    #[derive(Default)]
    struct ScriptedBackend {
        transcripts: VecDeque<Result<String>>,
        started_with: Vec<String>,
        spoken: Vec<Utterance>,
        cancels: usize,
        stops: usize,
    }

    impl SpeechBackend for ScriptedBackend {
        fn supports_recognition(&self) -> bool {
            true
        }

        fn supports_synthesis(&self) -> bool {
            true
        }

        fn start_recognition(&mut self, locale: &str) -> Result<()> {
            self.started_with.push(locale.to_string());
            Ok(())
        }

        fn next_transcript(&mut self) -> Result<String> {
            self.transcripts
                .pop_front()
                .unwrap_or_else(|| Err(Error::Speech("no-speech".to_string())))
        }

        fn stop_recognition(&mut self) {
            self.stops += 1;
        }

        fn synthesize(&mut self, utterance: &Utterance) -> Result<()> {
            self.spoken.push(utterance.clone());
            Ok(())
        }

        fn cancel_synthesis(&mut self) {
            self.cancels += 1;
        }
    }

    fn scripted(transcripts: &[&str]) -> SpeechService<ScriptedBackend> {
        SpeechService::new(ScriptedBackend {
            transcripts: transcripts.iter().map(|t| Ok(t.to_string())).collect(),
            ..Default::default()
        })
    }

    #[test]
    fn null_backend_is_unsupported() {
        let mut speech = SpeechService::new(NullSpeechBackend);
        assert!(!speech.is_supported());
        assert!(matches!(speech.start_listening(Language::En), Err(Error::Unsupported(_))));
        assert!(matches!(speech.speak("hi", Language::En), Err(Error::Unsupported(_))));
        assert!(!speech.is_listening());
    }

    #[test]
    fn second_listen_is_busy() {
        let mut speech = scripted(&["hello there"]);
        speech.begin_listening(Language::En).unwrap();
        assert!(matches!(speech.begin_listening(Language::En), Err(Error::Busy)));
        assert_eq!(speech.transcript().unwrap(), "hello there");
        assert!(!speech.is_listening());
    }

    #[test]
    fn hindi_uses_indian_locale() {
        let mut speech = scripted(&["नमस्ते"]);
        assert_eq!(speech.start_listening(Language::Hi).unwrap(), "नमस्ते");
        assert_eq!(speech.backend().started_with, vec!["hi-IN".to_string()]);
    }

    #[test]
    fn recognition_error_clears_listening() {
        let mut speech = scripted(&[]);
        assert!(matches!(speech.start_listening(Language::Es), Err(Error::Speech(_))));
        assert!(!speech.is_listening());
        // free to listen again
        speech.begin_listening(Language::Es).unwrap();
        speech.stop_listening();
        assert_eq!(speech.backend().stops, 1);
        speech.stop_listening();
        assert_eq!(speech.backend().stops, 1);
    }

    #[test]
    fn speak_cancels_previous_utterance() {
        let mut speech = scripted(&[]);
        speech.speak("first", Language::En).unwrap();
        speech.speak("second", Language::Hi).unwrap();
        assert_eq!(speech.backend().cancels, 2);
        let last = speech.backend().spoken.last().unwrap();
        assert_eq!(last.text, "second");
        assert_eq!(last.locale, "hi-IN");
        assert_eq!(last.rate, 0.9);
    }
}
