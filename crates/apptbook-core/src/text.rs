//! Case-insensitive token matching shared by the predicates.

/// Returns true if `word` equals one of the whitespace-separated tokens of
/// `sentence`, ignoring case. `word` must be a single non-empty token.
pub fn contains_word_ignore_case(sentence: &str, word: &str) -> bool {
    let word = word.trim();
    debug_assert!(!word.is_empty(), "word must not be empty");
    debug_assert!(
        !word.contains(char::is_whitespace),
        "word must be a single token"
    );

    sentence
        .split_whitespace()
        .any(|token| eq_ignore_case(token, word))
}

/// Returns true if the tokens of `phrase` appear as a contiguous run of
/// tokens in `sentence`, ignoring case.
pub fn contains_phrase_ignore_case(sentence: &str, phrase: &str) -> bool {
    let needle: Vec<&str> = phrase.split_whitespace().collect();
    debug_assert!(!needle.is_empty(), "phrase must not be empty");
    if needle.is_empty() {
        return false;
    }

    let haystack: Vec<&str> = sentence.split_whitespace().collect();
    haystack.windows(needle.len()).any(|window| {
        window
            .iter()
            .zip(&needle)
            .all(|(token, word)| eq_ignore_case(token, word))
    })
}

pub fn eq_ignore_case(left: &str, right: &str) -> bool {
    left.chars()
        .flat_map(char::to_lowercase)
        .eq(right.chars().flat_map(char::to_lowercase))
}
