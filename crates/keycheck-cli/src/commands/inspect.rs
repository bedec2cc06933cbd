//! The `keycheck inspect` command.
//!
//! Shows what the parsers actually see in a document, for diagnosing
//! extraction layouts that do not match the expected markers.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use keycheck_core::key::parse_answer_key;
use keycheck_core::sheet::parse_response_sheet;
use keycheck_extract::extract_document;

pub fn execute(document: PathBuf, kind: String, sample: usize) -> Result<()> {
    let text = extract_document(&document).context("document extraction failed")?;

    match kind.as_str() {
        "key" => {
            let key = parse_answer_key(&text);
            println!("Answer key: {} entries", key.len());
            for (question, correct) in key.iter().take(sample) {
                println!("  {question} -> {correct}");
            }
        }
        "sheet" => {
            let records = parse_response_sheet(&text);
            println!("Found {} question blocks.", records.len());
            for (i, record) in records.iter().take(sample).enumerate() {
                println!("Block {}:", i + 1);
                println!("{}", serde_json::to_string_pretty(record)?);
            }
        }
        other => bail!("unknown document kind: {other} (expected: key, sheet)"),
    }

    Ok(())
}
