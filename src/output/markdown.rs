// Markdown report generation.
//
// Writes the ranking with scores to a file, for keeping alongside the corpus
// or pasting into notes. Pipe characters in file names are escaped so they
// don't break the table.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;

use crate::scoring::ranking::CorpusRanking;

/// Render the ranking as a markdown document.
pub fn render_report(ranking: &CorpusRanking, corpus_dir: &Path) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# Book Similarity Report");
    let _ = writeln!(out);
    let _ = writeln!(out, "- Generated: {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    let _ = writeln!(out, "- Corpus: `{}`", corpus_dir.display());
    let _ = writeln!(out, "- Files compared: {}", ranking.file_count);
    let _ = writeln!(out);

    let _ = writeln!(out, "## Top {} pairs", ranking.pairs.len());
    let _ = writeln!(out);
    let _ = writeln!(out, "| Rank | First | Second | Score |");
    let _ = writeln!(out, "|---:|---|---|---:|");
    for (i, pair) in ranking.pairs.iter().enumerate() {
        let _ = writeln!(
            out,
            "| {} | {} | {} | {:.4} |",
            i + 1,
            escape_cell(&pair.first_name),
            escape_cell(&pair.second_name),
            pair.score
        );
    }

    if !ranking.unreadable.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "## Unreadable files");
        let _ = writeln!(out);
        let _ = writeln!(out, "These files were treated as empty and score 0.0 in every pair.");
        let _ = writeln!(out);
        for err in &ranking.unreadable {
            if let Some(path) = err.path() {
                let _ = writeln!(out, "- `{}`", path.display());
            }
        }
    }

    out
}

/// Write the markdown report to `output_path`.
pub fn generate_report(ranking: &CorpusRanking, corpus_dir: &Path, output_path: &Path) -> Result<()> {
    let report = render_report(ranking, corpus_dir);
    fs::write(output_path, report)
        .with_context(|| format!("Failed to write report to {}", output_path.display()))?;
    Ok(())
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ranking::RankedPair;

    #[test]
    fn test_escape_cell() {
        assert_eq!(escape_cell("a|b.txt"), "a\\|b.txt");
        assert_eq!(escape_cell("plain.txt"), "plain.txt");
    }

    #[test]
    fn test_render_report_table() {
        let ranking = CorpusRanking {
            pairs: vec![RankedPair {
                score: 0.5,
                first: 0,
                second: 1,
                first_name: "a.txt".to_string(),
                second_name: "b|c.txt".to_string(),
            }],
            file_count: 2,
            unreadable: vec![],
        };
        let report = render_report(&ranking, Path::new("BOOKS"));
        assert!(report.contains("# Book Similarity Report"));
        assert!(report.contains("- Files compared: 2"));
        assert!(report.contains("| 1 | a.txt | b\\|c.txt | 0.5000 |"));
        assert!(!report.contains("## Unreadable files"));
    }
}
