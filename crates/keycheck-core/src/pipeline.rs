//! One-call pipeline: raw document text in, scorecard out.

use crate::key::parse_answer_key;
use crate::model::Scorecard;
use crate::resolve::resolve_records;
use crate::score::{score, MissingOptionPolicy};
use crate::sheet::parse_response_sheet;

/// Run the full pipeline over extracted key and response-sheet text.
///
/// Pure and deterministic: identical inputs always produce an identical
/// scorecard, and malformed input degrades to Unattempted or Incorrect
/// verdicts instead of erroring. An empty key yields an empty scorecard.
pub fn score_sheet(key_text: &str, sheet_text: &str, policy: MissingOptionPolicy) -> Scorecard {
    let key = parse_answer_key(key_text);
    let records = parse_response_sheet(sheet_text);
    let resolved = resolve_records(&records);
    score(&key, &resolved, policy)
}
