// File: src/assist/questions.rs
use crate::core::catalog::Catalog;
use crate::core::types::Message;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

const PREDICTION_COUNT: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextQuestion {
    pub question: String,
    pub probability: f32,
    pub context: String,
}

/// Questions the other side is likely to ask next.
///
/// The order is a full shuffle; `probability` is informational and is not
/// used for ranking.
pub fn predict_next_questions<R: Rng + ?Sized>(
    catalog: &Catalog,
    _history: &[Message],
    rng: &mut R,
) -> Vec<NextQuestion> {
    let mut questions = catalog.next_questions.clone();
    questions.shuffle(rng);
    questions.truncate(PREDICTION_COUNT);
    questions
}

pub fn standard_questions() -> Vec<NextQuestion> {
    [
        ("What have you been up to today?", 0.8, "daily_activities"),
        ("How was your weekend?", 0.7, "weekend_plans"),
        ("Any exciting plans coming up?", 0.6, "future_plans"),
        ("How's work/school going?", 0.75, "work_life"),
        ("What's your favorite thing to do?", 0.5, "hobbies"),
        ("Have you watched anything good lately?", 0.6, "entertainment"),
        ("What's the weather like there?", 0.4, "weather"),
        ("Do you have any recommendations?", 0.65, "recommendations"),
    ]
    .into_iter()
    .map(|(question, probability, context)| NextQuestion {
        question: question.to_string(),
        probability,
        context: context.to_string(),
    })
    .collect()
}
