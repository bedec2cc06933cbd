//! Score report with JSON persistence and markdown rendering.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::Scorecard;

/// A complete scoring report for one run: the scorecard plus provenance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Where the response-sheet text came from (path or label).
    pub sheet_source: String,
    /// Where the answer-key text came from (path or label).
    pub key_source: String,
    /// The scored results and totals.
    pub scorecard: Scorecard,
}

impl ScoreReport {
    pub fn new(sheet_source: String, key_source: String, scorecard: Scorecard) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            sheet_source,
            key_source,
            scorecard,
        }
    }

    /// Save the report as pretty JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: ScoreReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Format the report as markdown: a summary line plus the full
    /// per-question table.
    pub fn to_markdown(&self) -> String {
        let t = self.scorecard.totals;
        let mut md = String::new();

        md.push_str(&format!(
            "**Score: {}** — {} correct, {} incorrect, {} unattempted\n\n",
            t.score, t.correct, t.incorrect, t.unattempted
        ));

        if !self.scorecard.results.is_empty() {
            md.push_str("| Question ID | Your Option ID | Correct Option ID | Status |\n");
            md.push_str("|-------------|----------------|-------------------|--------|\n");
            for r in &self.scorecard.results {
                md.push_str(&format!(
                    "| {} | {} | {} | {} |\n",
                    r.question_id, r.chosen, r.correct_option, r.status
                ));
            }
        }

        md
    }
}
