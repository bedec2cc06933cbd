//! Scoring: join answer-key entries with resolved choices and aggregate.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{AnswerKey, QuestionId, Scorecard, ScoredResult, Status, Totals};
use crate::resolve::ResolvedChoice;

/// Marks awarded per correct answer.
pub const CORRECT_MARKS: i64 = 4;
/// Marks deducted per incorrect answer.
pub const INCORRECT_PENALTY: i64 = 1;

/// How to classify a question whose chosen index pointed at an option
/// slot that was never extracted from the source text.
///
/// The shipped behavior scores it as a definite wrong answer. That may be
/// a reading of incomplete source text rather than intent, so the choice
/// is a single named policy rather than a branch buried in the scorer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingOptionPolicy {
    /// An answered question with an unextractable option is wrong.
    #[default]
    Incorrect,
    /// Treat it like the question was never attempted.
    Unattempted,
}

impl MissingOptionPolicy {
    fn status(self) -> Status {
        match self {
            MissingOptionPolicy::Incorrect => Status::Incorrect,
            MissingOptionPolicy::Unattempted => Status::Unattempted,
        }
    }
}

/// Score every answer-key entry against the resolved choices.
///
/// Output order follows the key. Questions with no resolved choice (never
/// answered, or their record had no question identifier) default to
/// Unattempted. Response-only questions absent from the key are never
/// scored. An empty key yields an empty scorecard with score 0.
pub fn score(
    key: &AnswerKey,
    resolved: &HashMap<QuestionId, ResolvedChoice>,
    policy: MissingOptionPolicy,
) -> Scorecard {
    let mut results = Vec::with_capacity(key.len());
    let mut totals = Totals::default();

    for (question, correct_option) in key.iter() {
        let choice = resolved
            .get(question)
            .unwrap_or(&ResolvedChoice::Unattempted);

        let status = match choice {
            ResolvedChoice::Unattempted => Status::Unattempted,
            ResolvedChoice::Selected(id) if id == correct_option => Status::Correct,
            ResolvedChoice::Selected(_) => Status::Incorrect,
            ResolvedChoice::MissingOption => policy.status(),
        };

        match status {
            Status::Correct => totals.correct += 1,
            Status::Incorrect => totals.incorrect += 1,
            Status::Unattempted => totals.unattempted += 1,
        }

        results.push(ScoredResult {
            question_id: question.clone(),
            chosen: choice.display().to_string(),
            correct_option: correct_option.clone(),
            status,
        });
    }

    totals.score =
        CORRECT_MARKS * i64::from(totals.correct) - INCORRECT_PENALTY * i64::from(totals.incorrect);

    tracing::info!(
        correct = totals.correct,
        incorrect = totals.incorrect,
        unattempted = totals.unattempted,
        score = totals.score,
        "scored response sheet"
    );

    Scorecard { results, totals }
}
