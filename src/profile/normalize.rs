// Token normalization.
//
// A token is a whitespace-delimited run of characters. Normalizing keeps only
// ASCII letters and digits, uppercased, in their original order. Anything
// else (punctuation, non-ASCII letters) is dropped, so "don't!" becomes
// "DONT" and "¿qué?" becomes "QU".

/// Words ignored in all frequency calculations. Compared after normalization,
/// so the entries are uppercase.
pub const EXCLUDED_WORDS: [&str; 6] = ["A", "AND", "AN", "OF", "IN", "THE"];

/// Normalize a raw token. An empty result means the token should be discarded.
pub fn normalize_word(token: &str) -> String {
    token
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|ch| ch.to_ascii_uppercase())
        .collect()
}

/// Check whether an already-normalized word is in the exclusion set.
pub fn is_excluded(word: &str) -> bool {
    EXCLUDED_WORDS.contains(&word)
}

/// Split text into the words that count toward a frequency profile:
/// normalized, non-empty, and not excluded.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .map(normalize_word)
        .filter(|word| !word.is_empty() && !is_excluded(word))
}
