use std::{fmt, str::FromStr};

use crate::error::LocaleError;

/// A language tag such as `en`, `tr` or `pt-BR`.
///
/// Only the language and region subtags are kept. The language decides how
/// characters are case mapped; the region only matters when looking up the
/// built-in rule tables.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    region: Option<String>,
}

impl Locale {
    pub fn new(language: &str) -> Self {
        Self {
            language: language.to_ascii_lowercase(),
            region: None,
        }
    }

    pub fn with_region(language: &str, region: &str) -> Self {
        Self {
            language: language.to_ascii_lowercase(),
            region: Some(region.to_ascii_uppercase()),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Languages with a dotted and a dotless `i`.
    fn is_turkic(&self) -> bool {
        matches!(self.language.as_str(), "tr" | "az")
    }

    /// Lowercases `s` using this locale's case mapping.
    ///
    /// ```
    /// use inflection::Locale;
    ///
    /// assert_eq!(Locale::new("en").lowercase("TITLE"), "title");
    /// assert_eq!(Locale::new("tr").lowercase("TITLE"), "tıtle");
    /// ```
    pub fn lowercase(&self, s: &str) -> String {
        if !self.is_turkic() {
            return s.to_lowercase();
        }
        let mut result = String::with_capacity(s.len());
        for c in s.chars() {
            self.push_lowercase(&mut result, c);
        }
        result
    }

    /// Uppercases `s` using this locale's case mapping.
    pub fn uppercase(&self, s: &str) -> String {
        if !self.is_turkic() {
            return s.to_uppercase();
        }
        let mut result = String::with_capacity(s.len());
        for c in s.chars() {
            self.push_uppercase(&mut result, c);
        }
        result
    }

    /// Uppercases the first character of `s` and lowercases the rest.
    ///
    /// ```
    /// use inflection::Locale;
    ///
    /// assert_eq!(Locale::new("en").capitalize("iSTANBUL"), "Istanbul");
    /// assert_eq!(Locale::new("tr").capitalize("iSTANBUL"), "İstanbul");
    /// assert_eq!(Locale::new("en").capitalize(""), "");
    /// ```
    pub fn capitalize(&self, s: &str) -> String {
        let mut chars = s.chars();
        let Some(first) = chars.next() else {
            return String::new();
        };
        let mut result = String::with_capacity(s.len());
        self.push_uppercase(&mut result, first);
        result.push_str(&self.lowercase(chars.as_str()));
        result
    }

    /// Uppercases only the first character of `s`.
    pub(crate) fn uppercase_first(&self, s: &str) -> String {
        let mut chars = s.chars();
        let Some(first) = chars.next() else {
            return String::new();
        };
        let mut result = String::with_capacity(s.len());
        self.push_uppercase(&mut result, first);
        result.push_str(chars.as_str());
        result
    }

    fn push_lowercase(&self, buf: &mut String, c: char) {
        match c {
            'I' if self.is_turkic() => buf.push('ı'),
            'İ' if self.is_turkic() => buf.push('i'),
            _ => buf.extend(c.to_lowercase()),
        }
    }

    fn push_uppercase(&self, buf: &mut String, c: char) {
        match c {
            'i' if self.is_turkic() => buf.push('İ'),
            _ => buf.extend(c.to_uppercase()),
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::new("en")
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    /// Parses tags like `en`, `pt-BR`, `pt_BR` or `zh-Hant-TW`. Script and
    /// variant subtags are accepted and dropped.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let mut subtags = tag.trim().split(['-', '_']);
        let language = match subtags.next() {
            None | Some("") => return Err(LocaleError::Empty),
            Some(language) => language,
        };
        if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(LocaleError::InvalidLanguage(language.to_string()));
        }
        let region = subtags.find(|subtag| {
            (subtag.len() == 2 && subtag.chars().all(|c| c.is_ascii_alphabetic()))
                || (subtag.len() == 3 && subtag.chars().all(|c| c.is_ascii_digit()))
        });
        Ok(match region {
            Some(region) => Locale::with_region(language, region),
            None => Locale::new(language),
        })
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}-{region}", self.language),
            None => write!(f, "{}", self.language),
        }
    }
}
