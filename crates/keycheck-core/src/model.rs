//! Core data model types for keycheck.
//!
//! Every type here is an immutable value record built in one pass over a
//! document and held only for the duration of one scoring run.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// 10-digit identifier of a question instance. Kept as a plain string;
/// the extractor guarantees the digit pattern, nothing else is validated.
pub type QuestionId = String;

/// 10-digit identifier of one answer choice offered for a question.
pub type OptionId = String;

/// Question → correct-option mapping parsed from the answer-key document.
///
/// Insertion-ordered with explicit last-write-wins overwrite: a repeated
/// QuestionId replaces the earlier value in place and keeps its original
/// position. The overwrite policy is deliberate, not an accident of the
/// backing map (the key documents are known to repeat corrected entries).
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnswerKey {
    entries: Vec<(QuestionId, OptionId)>,
    #[serde(skip)]
    index: HashMap<QuestionId, usize>,
}

impl AnswerKey {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pair, overwriting the value of an existing QuestionId.
    pub fn insert(&mut self, question: QuestionId, correct: OptionId) {
        match self.index.get(&question) {
            Some(&pos) => self.entries[pos].1 = correct,
            None => {
                self.index.insert(question.clone(), self.entries.len());
                self.entries.push((question, correct));
            }
        }
    }

    pub fn get(&self, question: &str) -> Option<&OptionId> {
        self.index.get(question).map(|&pos| &self.entries[pos].1)
    }

    /// Entries in order of first appearance in the key document.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &OptionId)> {
        self.entries.iter().map(|(q, o)| (q, o))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The contiguous run of response-sheet lines belonging to one question.
/// Lines are stored trimmed, in document order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseBlock {
    pub lines: Vec<String>,
}

impl ResponseBlock {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Fields extracted from one [`ResponseBlock`]. Any field may be missing
/// when the corresponding line is absent or malformed in the source text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseRecord {
    /// The block's question identifier. A record without one is dropped.
    pub question_id: Option<QuestionId>,
    /// Option identifiers for slots 1..=4, in slot order.
    pub options: [Option<OptionId>; 4],
    /// Raw chosen token: a digit string, the literal "Not Attempted",
    /// or unset when no "Chosen Option" line was found.
    pub chosen: Option<String>,
}

/// Per-question verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Correct,
    Incorrect,
    Unattempted,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Correct => write!(f, "Correct"),
            Status::Incorrect => write!(f, "Incorrect"),
            Status::Unattempted => write!(f, "Unattempted"),
        }
    }
}

/// One scored answer-key entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredResult {
    pub question_id: QuestionId,
    /// What the test-taker's choice resolved to, as shown to the user:
    /// an OptionId, "Unattempted", or "Missing" for an unextracted slot.
    pub chosen: String,
    pub correct_option: OptionId,
    pub status: Status,
}

/// Aggregate counts and the final score for one scoring run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub correct: u32,
    pub incorrect: u32,
    pub unattempted: u32,
    pub score: i64,
}

/// The full outcome of one scoring run: one result per answer-key entry,
/// in key order, plus the totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scorecard {
    pub results: Vec<ScoredResult>,
    pub totals: Totals,
}
