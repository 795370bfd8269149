// File: src/assist/sentiment.rs
use crate::core::catalog::{strings, Catalog};
use serde::{Deserialize, Serialize};

const MAX_EMOJIS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Love,
    Excited,
    Negative,
    Positive,
    Neutral,
}

#[derive(Debug, Clone)]
struct SentimentCategory {
    sentiment: Sentiment,
    keywords: Vec<String>,
    emojis: Vec<String>,
}

/// Keyword-triggered categories in priority order, plus the neutral set.
#[derive(Debug, Clone)]
pub struct SentimentTable {
    categories: Vec<SentimentCategory>,
    neutral: Vec<String>,
}

impl SentimentTable {
    /// First category (in priority order) with a keyword in `text`.
    pub fn classify(&self, text: &str) -> Sentiment {
        let lower = text.to_lowercase();
        self.categories
            .iter()
            .find(|c| c.keywords.iter().any(|k| lower.contains(k.as_str())))
            .map(|c| c.sentiment)
            .unwrap_or(Sentiment::Neutral)
    }

    pub fn emojis(&self, sentiment: Sentiment) -> &[String] {
        self.categories
            .iter()
            .find(|c| c.sentiment == sentiment)
            .map(|c| c.emojis.as_slice())
            .unwrap_or(&self.neutral)
    }
}

/// Emoji suggestions for a draft, at most six.
pub fn analyze_sentiment(catalog: &Catalog, text: &str) -> Vec<String> {
    let table = &catalog.sentiments;
    table
        .emojis(table.classify(text))
        .iter()
        .take(MAX_EMOJIS)
        .cloned()
        .collect()
}

fn category(sentiment: Sentiment, keywords: &[&str], emojis: &[&str]) -> SentimentCategory {
    SentimentCategory {
        sentiment,
        keywords: strings(keywords),
        emojis: strings(emojis),
    }
}

pub fn standard_sentiments() -> SentimentTable {
    SentimentTable {
        categories: vec![
            category(
                Sentiment::Love,
                &["love", "heart", "romantic"],
                &["❤️", "💕", "💖", "💝", "😍", "🥰", "💘", "💞"],
            ),
            category(
                Sentiment::Excited,
                &["excited", "amazing", "awesome"],
                &["🎉", "🚀", "⚡", "🔥", "💫", "🌈", "🎊", "🥳"],
            ),
            category(
                Sentiment::Negative,
                &["sad", "sorry", "bad"],
                &["😔", "😢", "😞", "💔", "😕", "😰", "😓", "😪"],
            ),
            category(
                Sentiment::Positive,
                &["good", "great", "happy"],
                &["😊", "😄", "🎉", "👍", "❤️", "✨", "🌟", "🤗"],
            ),
        ],
        neutral: strings(&["😐", "🤔", "😌", "🙂", "😊", "👋", "🤷‍♂️", "💭"]),
    }
}
