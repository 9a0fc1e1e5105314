use thiserror::Error;

/// A rule pattern that could not be compiled.
///
/// Returned when registering a rule; the rejected rule is never added.
#[derive(Debug, Error)]
#[error("invalid rule pattern `{pattern}`")]
pub struct PatternError {
    pattern: String,
    #[source]
    source: regex::Error,
}

impl PatternError {
    pub(crate) fn new(pattern: &str, source: regex::Error) -> Self {
        Self {
            pattern: pattern.to_string(),
            source,
        }
    }

    /// The pattern as it was supplied.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The underlying regex syntax error.
    pub fn regex_error(&self) -> &regex::Error {
        &self.source
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("empty locale tag")]
    Empty,
    #[error("invalid language subtag `{0}`")]
    InvalidLanguage(String),
}
