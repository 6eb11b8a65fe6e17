//! Whitespace word splitting

/// Split a string into whitespace-delimited words
///
/// # Examples
///
/// ```
/// use cloparser::split_words;
///
/// assert_eq!(split_words("  -n 5\t--fast\n"), vec!["-n", "5", "--fast"]);
/// assert!(split_words("   ").is_empty());
/// ```
#[must_use]
pub fn split_words(s: &str) -> Vec<String> {
    let mut words = Vec::new();
    append_words(s, &mut words);
    words
}

/// Append the whitespace-delimited words of `s` to `words`
pub fn append_words(s: &str, words: &mut Vec<String>) {
    words.extend(s.split_whitespace().map(str::to_string));
}
