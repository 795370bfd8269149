// File: src/assist/lexicon.rs
use crate::core::catalog::Catalog;
use crate::core::types::WordMeaning;
use std::collections::HashMap;

/// Case-insensitive exact lookup. No fuzzy matching: a miss is `None`.
pub fn word_meaning<'a>(catalog: &'a Catalog, word: &str) -> Option<&'a WordMeaning> {
    catalog.words.get(&word.to_lowercase())
}

pub fn standard_words() -> HashMap<String, WordMeaning> {
    [
        (
            "awesome",
            "Extremely impressive or daunting; inspiring awe",
            "The view from the mountain was awesome!",
            "/ˈɔːsəm/",
            "अद्भुत, शानदार",
        ),
        (
            "exciting",
            "Causing great enthusiasm and eagerness",
            "This is an exciting opportunity for growth.",
            "/ɪkˈsaɪtɪŋ/",
            "रोमांचक, उत्साहजनक",
        ),
        (
            "beautiful",
            "Pleasing the senses or mind aesthetically",
            "She has a beautiful smile.",
            "/ˈbjuːtɪfʊl/",
            "सुंदर, खूबसूरत",
        ),
        (
            "wonderful",
            "Inspiring delight, pleasure, or admiration; extremely good",
            "We had a wonderful time at the party.",
            "/ˈwʌndəfʊl/",
            "अद्भुत, बेहतरीन",
        ),
        (
            "amazing",
            "Causing great surprise or wonder; astonishing",
            "The magician's tricks were amazing.",
            "/əˈmeɪzɪŋ/",
            "आश्चर्यजनक, कमाल का",
        ),
    ]
    .into_iter()
    .map(|(word, meaning, example, pronunciation, translation)| {
        (
            word.to_string(),
            WordMeaning {
                word: word.to_string(),
                meaning: meaning.to_string(),
                example: example.to_string(),
                pronunciation: pronunciation.to_string(),
                translation: Some(translation.to_string()),
                part_of_speech: Some("adjective".to_string()),
            },
        )
    })
    .collect()
}
