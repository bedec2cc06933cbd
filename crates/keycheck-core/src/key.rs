//! Answer-key document parser.
//!
//! The key document is flat: it renders as a stream of
//! `<question id> <correct option id>` pairs with no per-question block
//! structure, so the parser scans the whole text for adjacent 10-digit
//! pairs and never looks at line boundaries.

use std::sync::OnceLock;

use regex::Regex;

use crate::model::AnswerKey;

fn pair_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([0-9]{10})\s+([0-9]{10})").unwrap())
}

/// Build the QuestionId → correct OptionId map from the key document text.
///
/// Pairs are taken in order of appearance, non-overlapping; a repeated
/// QuestionId overwrites the earlier entry (last write wins). Malformed
/// input never errors: text with no pairs yields an empty key.
pub fn parse_answer_key(text: &str) -> AnswerKey {
    let mut key = AnswerKey::new();
    for caps in pair_re().captures_iter(text) {
        key.insert(caps[1].to_string(), caps[2].to_string());
    }
    tracing::debug!(entries = key.len(), "parsed answer key");
    key
}
