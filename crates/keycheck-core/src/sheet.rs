//! Response-sheet document parser: block segmentation and per-block
//! field extraction.
//!
//! The response sheet renders one question at a time, each rendering
//! opening with a "Question ID" line. Segmentation keys off that marker;
//! field extraction then scans every line of a block independently of
//! order, so shuffled or repeated lines still parse (last match wins).

use crate::extract::{first_choice_token, first_identifier};
use crate::model::{ResponseBlock, ResponseRecord};

/// Marker substring that opens a new question block.
const BLOCK_MARKER: &str = "Question ID";

/// Trigger substrings for the four option slots, in slot order.
const OPTION_LABELS: [&str; 4] = [
    "Option 1 ID",
    "Option 2 ID",
    "Option 3 ID",
    "Option 4 ID",
];

/// Split response-sheet text into one block per question.
///
/// A new block starts at every line containing `"Question ID"`, except
/// when the current block is still empty (so a marker as the very first
/// content does not emit an empty leading block). The final open block is
/// flushed at end of input. Consecutive marker lines produce degenerate
/// one-line blocks, which are kept. Empty text yields no blocks.
pub fn segment_blocks(text: &str) -> Vec<ResponseBlock> {
    let mut blocks = Vec::new();
    let mut block = ResponseBlock::default();

    for line in text.lines() {
        let line = line.trim();
        if line.contains(BLOCK_MARKER) && !block.is_empty() {
            blocks.push(std::mem::take(&mut block));
        }
        block.lines.push(line.to_string());
    }
    if !block.is_empty() {
        blocks.push(block);
    }

    tracing::debug!(blocks = blocks.len(), "segmented response sheet");
    blocks
}

/// Extract the question identifier, the four option identifiers, and the
/// raw chosen token from one block.
///
/// Lines are scanned in order but fields are position-independent; a line
/// matching an already-filled trigger overwrites the earlier extraction.
/// A "Chosen Option" line that matches neither a digit run nor the
/// "Not Attempted" literal defaults the token to "Not Attempted".
pub fn parse_record(block: &ResponseBlock) -> ResponseRecord {
    let mut record = ResponseRecord::default();

    for line in &block.lines {
        if line.contains(BLOCK_MARKER) {
            record.question_id = first_identifier(line).map(str::to_string);
        }
        for (slot, label) in OPTION_LABELS.iter().enumerate() {
            if line.contains(label) {
                record.options[slot] = first_identifier(line).map(str::to_string);
            }
        }
        if line.contains("Chosen Option") {
            record.chosen = Some(
                first_choice_token(line)
                    .unwrap_or("Not Attempted")
                    .to_string(),
            );
        }
    }

    record
}

/// Parse the whole response-sheet text into one record per block.
/// Records without a question identifier are kept here; the pipeline
/// drops them when building the resolved-choice map.
pub fn parse_response_sheet(text: &str) -> Vec<ResponseRecord> {
    segment_blocks(text).iter().map(parse_record).collect()
}
