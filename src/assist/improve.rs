// File: src/assist/improve.rs
use crate::core::catalog::{strings, Catalog, Table};
use crate::core::types::ToneType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageImprovement {
    pub improved_message: String,
    pub suggestions: Vec<String>,
    pub grammar_fixes: Vec<String>,
}

/// How a draft gets rewritten for a tone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite {
    Suffix(String),
    Prefix(String),
    /// Capitalize the first letter and end with terminal punctuation.
    Formalize,
}

impl Rewrite {
    fn apply(&self, message: &str) -> String {
        match self {
            Rewrite::Suffix(suffix) => format!("{}{}", message, suffix),
            Rewrite::Prefix(prefix) => format!("{}{}", prefix, message),
            Rewrite::Formalize => formalize(message),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ImprovementRule {
    pub rewrite: Rewrite,
    pub suggestions: Vec<String>,
    pub grammar_fixes: Vec<String>,
}

/// Rewrites a draft for `tone`. Tones without a rule use the formal one.
///
/// The formal rule normalizes rather than appends: surrounding whitespace is
/// trimmed, the first letter uppercased, and a "." added only when the text
/// does not already end in terminal punctuation.
pub fn improve_message(catalog: &Catalog, message: &str, tone: ToneType) -> MessageImprovement {
    let rule = catalog.improvements.resolve(&tone);
    MessageImprovement {
        improved_message: rule.rewrite.apply(message),
        suggestions: rule.suggestions.clone(),
        grammar_fixes: rule.grammar_fixes.clone(),
    }
}

fn formalize(message: &str) -> String {
    let trimmed = message.trim();
    let mut chars = trimmed.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut out: String = first.to_uppercase().collect();
    out.push_str(chars.as_str());
    if !out.ends_with(&['.', '!', '?'][..]) {
        out.push('.');
    }
    out
}

pub fn standard_rules() -> Table<ToneType, ImprovementRule> {
    let formal = ImprovementRule {
        rewrite: Rewrite::Formalize,
        suggestions: strings(&[
            "Use proper capitalization",
            "Add formal closing",
            "Be more specific",
        ]),
        grammar_fixes: strings(&["Ensure proper punctuation", "Use complete sentences"]),
    };

    Table::new(formal.clone())
        .with(ToneType::Funny, ImprovementRule {
            rewrite: Rewrite::Suffix(" 😄".to_string()),
            suggestions: strings(&["Add more emojis", "Use casual language", "Include humor"]),
            grammar_fixes: strings(&["Consider adding punctuation", "Check spelling"]),
        })
        .with(ToneType::Romantic, ImprovementRule {
            rewrite: Rewrite::Suffix(" 💕".to_string()),
            suggestions: strings(&["Use warmer words", "Add heart emojis", "Be more expressive"]),
            grammar_fixes: strings(&["Perfect grammar for romantic messages"]),
        })
        .with(ToneType::Formal, formal)
        .with(ToneType::Professional, ImprovementRule {
            rewrite: Rewrite::Prefix("Thank you for your message. ".to_string()),
            suggestions: strings(&[
                "Add professional greeting",
                "Use business language",
                "Be concise",
            ]),
            grammar_fixes: strings(&["Check for professional tone", "Ensure clarity"]),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn improved(message: &str, tone: ToneType) -> String {
        improve_message(&Catalog::standard(), message, tone).improved_message
    }

    #[test]
    fn tone_rewrites() {
        assert_eq!(improved("see you", ToneType::Funny), "see you 😄");
        assert_eq!(improved("see you", ToneType::Romantic), "see you 💕");
        assert_eq!(
            improved("see you", ToneType::Professional),
            "Thank you for your message. see you"
        );
        assert_eq!(improved("see you", ToneType::Formal), "See you.");
    }

    #[test]
    fn formal_does_not_double_punctuate() {
        assert_eq!(improved("are you there?", ToneType::Formal), "Are you there?");
        assert_eq!(improved("   ", ToneType::Formal), "");
        assert_eq!(improved("élan", ToneType::Formal), "Élan.");
        assert_eq!(improved("  hi", ToneType::Formal), "Hi.");
        assert_eq!(improved("ok!", ToneType::Formal), "Ok!");
        assert_eq!(improved("done.", ToneType::Formal), "Done.");
    }

    #[test]
    fn tones_without_rule_use_formal() {
        let catalog = Catalog::standard();
        let formal = improve_message(&catalog, "ok then", ToneType::Formal);
        assert_eq!(improve_message(&catalog, "ok then", ToneType::Friendly), formal);
        assert_eq!(improve_message(&catalog, "ok then", ToneType::Casual), formal);
    }
}
