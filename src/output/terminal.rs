// Terminal output for rankings.
//
// The ranking itself goes to stdout uncolored, one pair per line, so it can
// be piped or diffed. Diagnostics go to stderr.

use crate::error::SimilarityError;
use crate::scoring::ranking::CorpusRanking;

/// Header line of the text report.
pub fn report_header(top: usize) -> String {
    format!("Top {top} similar pairs of books:")
}

/// Render the text report: the header followed by one line per pair, using
/// base file names only.
pub fn render_ranking(ranking: &CorpusRanking, top: usize) -> Vec<String> {
    let mut lines = Vec::with_capacity(ranking.pairs.len() + 1);
    lines.push(report_header(top));
    for pair in &ranking.pairs {
        lines.push(format!("\"{}\" and \"{}\"", pair.first_name, pair.second_name));
    }
    lines
}

/// Print the text report to stdout.
pub fn display_ranking(ranking: &CorpusRanking, top: usize) {
    for line in render_ranking(ranking, top) {
        println!("{line}");
    }
}

/// Print one diagnostic line per file that could not be read.
pub fn display_unreadable(errors: &[SimilarityError]) {
    for err in errors {
        eprintln!("Error: {err}");
    }
}
