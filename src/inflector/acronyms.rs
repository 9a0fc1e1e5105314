use std::{
    borrow::Cow,
    collections::{BTreeSet, HashMap},
};

use unicode_normalization::UnicodeNormalization;

use super::case::is_word_boundary;

/// Words kept as a single, case-preserved unit by the structural transforms.
#[derive(Debug, Clone, Default)]
pub struct Acronyms {
    words: BTreeSet<String>,
    /// Lowercased form to registered form. When spellings differ only by
    /// case the smallest one in byte order is kept.
    folded: HashMap<String, String>,
}

impl Acronyms {
    /// Registers `word` in canonically composed form. Returns whether it was
    /// not registered before; the empty string is never registered.
    pub fn insert(&mut self, word: &str) -> bool {
        let word: String = word.nfc().collect();
        if word.is_empty() || self.words.contains(&word) {
            return false;
        }
        self.folded
            .entry(word.to_lowercase())
            .and_modify(|kept| {
                if word < *kept {
                    kept.clone_from(&word);
                }
            })
            .or_insert_with(|| word.clone());
        self.words.insert(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// The registered spelling of `word`, compared without regard to case.
    ///
    /// ```
    /// use inflection::Acronyms;
    ///
    /// let mut acronyms = Acronyms::default();
    /// acronyms.insert("HTML");
    /// assert_eq!(acronyms.get_ignore_case("html"), Some("HTML"));
    /// assert_eq!(acronyms.get_ignore_case("htm"), None);
    /// ```
    pub fn get_ignore_case(&self, word: &str) -> Option<&str> {
        if self.words.is_empty() || word.is_empty() {
            return None;
        }
        self.folded.get(&word.to_lowercase()).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Longest acronym that `text` starts with and that `accept` allows given
    /// the character following it.
    pub(crate) fn longest_prefix(
        &self,
        text: &str,
        accept: impl Fn(&str, Option<char>) -> bool,
    ) -> Option<&str> {
        self.words
            .iter()
            .filter(|word| text.starts_with(word.as_str()))
            .filter(|word| accept(word.as_str(), text[word.len()..].chars().next()))
            .max_by_key(|word| word.len())
            .map(String::as_str)
    }

    /// Puts an underscore in front of every acronym that directly follows an
    /// ASCII letter or digit, so the acronym survives later case splitting as
    /// one word. An acronym must start at a word boundary or after a letter or
    /// digit, and end at a word boundary or before anything but `a-z`.
    ///
    /// The input is scanned once from left to right; each acronym that is
    /// taken is consumed whole, so acronyms never match inside one another.
    pub(crate) fn separate<'a>(&self, term: &'a str) -> Cow<'a, str> {
        if self.words.is_empty() {
            return Cow::Borrowed(term);
        }
        let mut result = String::with_capacity(term.len() + 4);
        let mut prev: Option<char> = None;
        let mut rest = term;
        while let Some(c) = rest.chars().next() {
            let joined = prev.is_some_and(|p| p.is_ascii_alphanumeric());
            if joined || is_word_boundary(prev, Some(c)) {
                if let Some(acronym) = self.longest_prefix(rest, ends_acronym) {
                    if joined {
                        result.push('_');
                    }
                    result.push_str(acronym);
                    prev = acronym.chars().next_back();
                    rest = &rest[acronym.len()..];
                    continue;
                }
            }
            result.push(c);
            prev = Some(c);
            rest = &rest[c.len_utf8()..];
        }
        Cow::Owned(result)
    }
}

fn ends_acronym(acronym: &str, next: Option<char>) -> bool {
    match next {
        Some(c) if !c.is_ascii_lowercase() => true,
        _ => is_word_boundary(acronym.chars().next_back(), next),
    }
}
