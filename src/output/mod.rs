// Output formatting: the plain text ranking, JSON, and markdown reports.

pub mod markdown;
pub mod terminal;

use anyhow::Result;

use crate::scoring::ranking::CorpusRanking;

/// Serialize the ranked pairs (with scores) as pretty-printed JSON.
pub fn ranking_json(ranking: &CorpusRanking) -> Result<String> {
    Ok(serde_json::to_string_pretty(&ranking.pairs)?)
}
