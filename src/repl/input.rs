//! Input tokenization

/// Splits a line on whitespace and lowercases every word.
///
/// Blank input yields an empty vector.
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}
