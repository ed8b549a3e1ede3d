//! Result formatting, coloring, and table-file lookups.

use std::path::Path;

use bones_core::SetResult;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

/// Print one set's result: a green bold tally or spread line.
pub fn print_result(result: &SetResult) {
    println!("{}", result.to_string().green().bold());
}

/// Print a repetition's grand total.
pub fn print_total(total: i64) {
    println!("Total: {}", total.to_string().bold());
}

/// Print the raw per-set face lists (the `--debug` view).
pub fn print_raw(raw: &[Vec<i32>]) {
    let sets: Vec<String> = raw.iter().map(|faces| format!("{faces:?}")).collect();
    println!("{}", sets.join(" ").dimmed());
}

/// Sum a repetition across all sets: tallies as-is, spreads by face.
pub fn grand_total(results: &[SetResult]) -> i64 {
    results
        .iter()
        .map(|result| match result {
            SetResult::Tally(total) => i64::from(*total),
            SetResult::Spread(faces) => faces.iter().map(|&face| i64::from(face)).sum(),
        })
        .sum()
}

/// A line-per-value lookup table read from a text file.
pub struct LookupTable {
    lines: Vec<String>,
}

impl LookupTable {
    /// Read a table file; line N is the entry for rolled value N.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read table {}: {e}", path.display()))?;
        Ok(Self {
            lines: content.lines().map(str::to_string).collect(),
        })
    }

    fn entry(&self, value: i32) -> Option<&str> {
        let index = usize::try_from(value).ok()?.checked_sub(1)?;
        self.lines.get(index).map(String::as_str)
    }
}

/// Print the table entry for every value a result reported.
pub fn print_lookups(table: &LookupTable, result: &SetResult) {
    let values = match result {
        SetResult::Tally(total) => vec![*total],
        SetResult::Spread(faces) => faces.clone(),
    };
    for value in values {
        match table.entry(value) {
            Some(line) => println!("  {value}: {line}"),
            None => println!("  {value}: {}", "(no entry)".dimmed()),
        }
    }
}

/// Print every repetition's results as one JSON document.
pub fn print_json(rolls: &[Vec<SetResult>]) -> Result<(), String> {
    let text = serde_json::to_string_pretty(rolls)
        .map_err(|e| format!("JSON serialization error: {e}"))?;
    println!("{text}");
    Ok(())
}

/// Print the repeat-until-target summary as JSON.
pub fn print_target_json(target: i64, rolls: u64, tally: i64) -> Result<(), String> {
    let summary = serde_json::json!({
        "target": target,
        "rolls": rolls,
        "tally": tally,
    });
    let text = serde_json::to_string_pretty(&summary)
        .map_err(|e| format!("JSON serialization error: {e}"))?;
    println!("{text}");
    Ok(())
}

/// Print a per-repetition summary table for `--repeat --sum` runs.
pub fn print_summary_table(all: &[Vec<SetResult>]) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Roll", "Results", "Total"]);

    for (i, results) in all.iter().enumerate() {
        let rendered: Vec<String> = results.iter().map(ToString::to_string).collect();
        table.add_row(vec![
            (i + 1).to_string(),
            rendered.join(", "),
            grand_total(results).to_string(),
        ]);
    }

    println!("{table}");
}
