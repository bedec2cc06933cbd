//! Choice resolution: raw chosen tokens to concrete option identifiers.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{OptionId, QuestionId, ResponseRecord};

/// What a test-taker's raw chosen token resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolvedChoice {
    /// No usable selection: unset token, "Not Attempted", a non-numeric
    /// token, or an index outside the four option slots.
    Unattempted,
    /// A valid 1-based index pointing at an extracted option.
    Selected(OptionId),
    /// A valid 1-based index pointing at a slot whose identifier was
    /// never extracted from the source text. Distinct from Unattempted:
    /// the test-taker did answer, we just cannot name the option.
    MissingOption,
}

impl ResolvedChoice {
    /// User-facing rendering, matching the report column values.
    pub fn display(&self) -> &str {
        match self {
            ResolvedChoice::Unattempted => "Unattempted",
            ResolvedChoice::Selected(id) => id,
            ResolvedChoice::MissingOption => "Missing",
        }
    }
}

/// Resolve one record's raw chosen token against its four option slots.
///
/// Total: every record yields exactly one `ResolvedChoice`. The token is
/// read as a 1-based option index; anything that cannot be read that way
/// (including an index of 0, an overflowing digit run, or an index past
/// slot 4) resolves to Unattempted.
pub fn resolve_choice(record: &ResponseRecord) -> ResolvedChoice {
    let token = match &record.chosen {
        Some(t) => t,
        None => return ResolvedChoice::Unattempted,
    };
    if token.to_lowercase().starts_with("not") || !token.chars().all(|c| c.is_ascii_digit()) {
        return ResolvedChoice::Unattempted;
    }

    let index = match token.parse::<usize>().ok().and_then(|n| n.checked_sub(1)) {
        Some(i) if i < record.options.len() => i,
        _ => return ResolvedChoice::Unattempted,
    };

    match &record.options[index] {
        Some(id) => ResolvedChoice::Selected(id.clone()),
        None => ResolvedChoice::MissingOption,
    }
}

/// Build the QuestionId → ResolvedChoice map for a whole sheet's records,
/// dropping records that never yielded a question identifier. Duplicate
/// question identifiers overwrite (last block wins), consistent with the
/// rest of the parsing layer.
pub fn resolve_records(records: &[ResponseRecord]) -> HashMap<QuestionId, ResolvedChoice> {
    let mut resolved = HashMap::new();
    for record in records {
        if let Some(qid) = &record.question_id {
            resolved.insert(qid.clone(), resolve_choice(record));
        }
    }
    resolved
}
