/// Non-empty list of search keywords.
///
/// Building one from an empty list is a programming error: the parsers only
/// construct keywords from input already checked to hold at least one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keywords(Vec<String>);

impl Keywords {
    pub fn new(keywords: Vec<String>) -> Self {
        debug_assert!(!keywords.is_empty(), "keywords must not be empty");
        Self(keywords)
    }

    /// Splits `input` on whitespace runs.
    pub fn split(input: &str) -> Self {
        Self::new(input.split_whitespace().map(str::to_string).collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Keywords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}
