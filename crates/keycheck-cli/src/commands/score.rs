//! The `keycheck score` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use keycheck_core::key::parse_answer_key;
use keycheck_core::report::ScoreReport;
use keycheck_core::resolve::resolve_records;
use keycheck_core::score::{score, MissingOptionPolicy};
use keycheck_core::sheet::parse_response_sheet;
use keycheck_extract::extract_document;

pub fn execute(
    sheet_path: PathBuf,
    key_path: PathBuf,
    output: Option<PathBuf>,
    format: String,
    show_blocks: usize,
    policy: MissingOptionPolicy,
) -> Result<()> {
    let sheet_text = extract_document(&sheet_path).context("response sheet extraction failed")?;
    let key_text = extract_document(&key_path).context("answer key extraction failed")?;

    let key = parse_answer_key(&key_text);
    let records = parse_response_sheet(&sheet_text);

    if show_blocks > 0 {
        for (i, record) in records.iter().take(show_blocks).enumerate() {
            println!("Block {}:", i + 1);
            println!("{}", serde_json::to_string_pretty(record)?);
        }
        println!();
    }

    let resolved = resolve_records(&records);
    let scorecard = score(&key, &resolved, policy);
    let report = ScoreReport::new(
        sheet_path.display().to_string(),
        key_path.display().to_string(),
        scorecard,
    );

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        "markdown" | "md" => println!("{}", report.to_markdown()),
        _ => print_table(&report),
    }

    if let Some(path) = output {
        report.save_json(&path)?;
        eprintln!("Report saved to: {}", path.display());
    }

    Ok(())
}

fn print_table(report: &ScoreReport) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec![
        "Question ID",
        "Your Option ID",
        "Correct Option ID",
        "Status",
    ]);

    for r in &report.scorecard.results {
        table.add_row(vec![
            Cell::new(&r.question_id),
            Cell::new(&r.chosen),
            Cell::new(&r.correct_option),
            Cell::new(r.status),
        ]);
    }

    println!("{table}");

    let t = report.scorecard.totals;
    println!();
    println!("Final Score: {}", t.score);
    println!("Correct: {}", t.correct);
    println!("Incorrect: {}", t.incorrect);
    println!("Unattempted: {}", t.unattempted);
}
