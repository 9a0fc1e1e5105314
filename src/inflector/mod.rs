//! A rule based string inflector. Pluralization and singularization are
//! driven by ordered rule lists plus irregular and uncountable tables;
//! camelize, underscore, dasherize, humanize, parameterize and titleize are
//! acronym aware and use the engine's locale for case mapping.
//! ```
//! use inflection::{Inflector, Locale};
//!
//! let mut inflector = Inflector::new(Locale::new("en"));
//! inflector.add_pluralization_rule("$", "s").unwrap();
//! inflector.add_irregular("person", "people");
//! inflector.add_acronym("HTTP");
//!
//! assert_eq!(inflector.pluralize("request"), "requests");
//! assert_eq!(inflector.pluralize("person"), "people");
//! assert_eq!(inflector.camelize("http_request", true), "HTTPRequest");
//! ```

use std::{
    borrow::Cow,
    collections::{HashMap, HashSet},
};

use log::{debug, trace};
use unicode_normalization::UnicodeNormalization;

use crate::{error::PatternError, locale::Locale};

/// Provides the structural transforms as pure functions
/// - Camel case
/// - Snake case and kebab case
/// - Human readable labels
/// - URL parameters
pub mod case;

mod acronyms;
mod ext;
mod rule;

pub use acronyms::Acronyms;
pub use case::{HumanizeOptions, ParameterizeOptions};
pub use ext::Inflect;
pub use rule::{PatternRule, Rule, RuleFn};

/// How table lookups compare words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InflectorOptions {
    /// Compare irregular and uncountable words exactly instead of folding
    /// case. Also makes `add_*_rule` patterns case-sensitive.
    pub case_sensitive: bool,
    /// Compare words code point by code point instead of in composed form.
    pub normalization_sensitive: bool,
}

/// Rule tables plus acronyms for one locale.
///
/// Registration takes `&mut self` and every transform takes `&self`, so an
/// engine is configured first and can then be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct Inflector {
    locale: Locale,
    options: InflectorOptions,
    pluralization_rules: Vec<Rule>,
    singularization_rules: Vec<Rule>,
    humanization_rules: Vec<Rule>,
    irregular_plurals: HashMap<String, String>,
    irregular_singulars: HashMap<String, String>,
    uncountables: HashSet<String>,
    acronyms: Acronyms,
}

impl Inflector {
    pub fn new(locale: Locale) -> Self {
        Self::with_options(locale, InflectorOptions::default())
    }

    pub fn with_options(locale: Locale, options: InflectorOptions) -> Self {
        Self {
            locale,
            options,
            ..Default::default()
        }
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn options(&self) -> InflectorOptions {
        self.options
    }

    pub fn acronyms(&self) -> &Acronyms {
        &self.acronyms
    }

    pub fn pluralization_rules(&self) -> &[Rule] {
        &self.pluralization_rules
    }

    pub fn singularization_rules(&self) -> &[Rule] {
        &self.singularization_rules
    }

    pub fn humanization_rules(&self) -> &[Rule] {
        &self.humanization_rules
    }

    /// Adds a pluralization rule that replaces the single match of `pattern`
    /// with `template`. Nothing is added when the pattern does not compile.
    pub fn add_pluralization_rule(
        &mut self,
        pattern: &str,
        template: &str,
    ) -> Result<(), PatternError> {
        let rule = self.compile(pattern, template)?;
        self.pluralization_rules.push(rule.into());
        Ok(())
    }

    pub fn add_pluralization(&mut self, rule: impl Into<Rule>) {
        self.pluralization_rules.push(rule.into());
    }

    /// Adds a singularization rule, see [`Inflector::add_pluralization_rule`].
    pub fn add_singularization_rule(
        &mut self,
        pattern: &str,
        template: &str,
    ) -> Result<(), PatternError> {
        let rule = self.compile(pattern, template)?;
        self.singularization_rules.push(rule.into());
        Ok(())
    }

    pub fn add_singularization(&mut self, rule: impl Into<Rule>) {
        self.singularization_rules.push(rule.into());
    }

    /// Makes [`Inflector::humanize`] return `replacement` for exactly
    /// `original`.
    pub fn add_humanization_replacement(
        &mut self,
        original: impl Into<String>,
        replacement: impl Into<String>,
    ) {
        self.humanization_rules
            .push(Rule::replace(original, replacement));
    }

    pub fn add_humanization(&mut self, rule: impl Into<Rule>) {
        self.humanization_rules.push(rule.into());
    }

    /// Registers an irregular pair in both directions. Returns whether
    /// neither form was registered before.
    ///
    /// Lookups go through the engine's normalization, the stored forms are
    /// returned exactly as given.
    pub fn add_irregular(&mut self, singular: &str, plural: &str) -> bool {
        let singular_key = self.normalize(singular).into_owned();
        let plural_key = self.normalize(plural).into_owned();
        let inserted = !self.irregular_plurals.contains_key(&singular_key)
            && !self.irregular_singulars.contains_key(&plural_key);
        self.irregular_plurals
            .insert(singular_key, plural.to_string());
        self.irregular_singulars
            .insert(plural_key, singular.to_string());
        inserted
    }

    /// Returns whether `word` was not already uncountable.
    pub fn add_uncountable(&mut self, word: &str) -> bool {
        let word = self.normalize(word).into_owned();
        self.uncountables.insert(word)
    }

    pub fn is_uncountable(&self, word: &str) -> bool {
        self.uncountables.contains(self.normalize(word).as_ref())
    }

    /// Returns whether `word` was not already an acronym.
    pub fn add_acronym(&mut self, word: &str) -> bool {
        self.acronyms.insert(word)
    }

    /// ```
    /// use inflection::locales;
    ///
    /// let en = locales::english();
    /// assert_eq!(en.pluralize("octopus"), "octopi");
    /// assert_eq!(en.pluralize("fish"), "fish");
    /// assert_eq!(en.pluralize("person"), "people");
    /// ```
    pub fn pluralize(&self, word: &str) -> String {
        self.inflect(word, &self.pluralization_rules, &self.irregular_plurals)
    }

    /// ```
    /// use inflection::locales;
    ///
    /// let en = locales::english();
    /// assert_eq!(en.singularize("matrices"), "matrix");
    /// assert_eq!(en.singularize("analyses"), "analysis");
    /// ```
    pub fn singularize(&self, word: &str) -> String {
        self.inflect(word, &self.singularization_rules, &self.irregular_singulars)
    }

    fn inflect(&self, word: &str, rules: &[Rule], irregulars: &HashMap<String, String>) -> String {
        if word.is_empty() {
            return String::new();
        }
        let key = self.normalize(word);
        if self.uncountables.contains(key.as_ref()) {
            trace!("`{word}` is uncountable");
            return word.to_string();
        }
        if let Some(irregular) = irregulars.get(key.as_ref()) {
            trace!("`{word}` is irregular: `{irregular}`");
            return irregular.clone();
        }
        for (index, rule) in rules.iter().enumerate().rev() {
            if let Some(inflected) = rule.apply(word) {
                trace!("rule {index} inflected `{word}` to `{inflected}`");
                return inflected;
            }
        }
        word.to_string()
    }

    pub fn camelize(&self, term: &str, uppercasing_first_letter: bool) -> String {
        case::camelize(term, uppercasing_first_letter, &self.acronyms, &self.locale)
    }

    pub fn underscore(&self, term: &str) -> String {
        case::underscore(term, &self.acronyms, &self.locale)
    }

    pub fn dasherize(&self, term: &str) -> String {
        case::dasherize(term)
    }

    /// Humanizes with capitalized words and without the `_id` suffix.
    pub fn humanize(&self, term: &str) -> String {
        self.humanize_with(term, HumanizeOptions::default())
    }

    /// Humanization rules are tried first, most recently added first; a
    /// matching rule's result is returned as it is.
    pub fn humanize_with(&self, term: &str, options: HumanizeOptions) -> String {
        let humanized = self
            .humanization_rules
            .iter()
            .rev()
            .find_map(|rule| rule.apply(term));
        if let Some(humanized) = humanized {
            return humanized;
        }
        case::humanize(term, options, &self.acronyms, &self.locale)
    }

    pub fn parameterize(&self, string: &str) -> String {
        self.parameterize_with(string, ParameterizeOptions::default())
    }

    pub fn parameterize_with(&self, string: &str, options: ParameterizeOptions) -> String {
        case::parameterize(string, options)
    }

    /// ```
    /// use inflection::{Inflector, Locale};
    ///
    /// let inflector = Inflector::new(Locale::new("en"));
    /// assert_eq!(inflector.titleize("raiders_of_the_lost_ark"), "Raiders Of The Lost Ark");
    /// assert_eq!(inflector.titleize("ActiveRecord"), "Active Record");
    /// ```
    pub fn titleize(&self, term: &str) -> String {
        self.titleize_with(term, false)
    }

    pub fn titleize_with(&self, term: &str, preserving_id_suffix: bool) -> String {
        let options = HumanizeOptions {
            capitalizing: true,
            preserving_id_suffix,
        };
        self.humanize_with(&self.underscore(term), options)
    }

    fn compile(&self, pattern: &str, template: &str) -> Result<PatternRule, PatternError> {
        PatternRule::with_case_sensitivity(pattern, template, self.options.case_sensitive)
            .inspect_err(|err| debug!("rejected rule for {}: {err}", self.locale))
    }

    /// Table lookup key for `word`.
    fn normalize<'a>(&self, word: &'a str) -> Cow<'a, str> {
        let mut word = Cow::Borrowed(word);
        if !self.options.case_sensitive {
            word = Cow::Owned(self.locale.lowercase(&word));
        }
        if !self.options.normalization_sensitive {
            word = Cow::Owned(word.nfc().collect());
        }
        word
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn inflector() -> Inflector {
        Inflector::new(Locale::new("en"))
    }

    #[test]
    fn custom_singularization_and_pluralization() {
        let mut inflector = inflector();
        inflector
            .add_singularization_rule(r"^(MacBook)s (Pro|Air)?$", "$1 $2")
            .unwrap();
        inflector
            .add_pluralization_rule(r"^i(Pod|Pad)( Mini)?$", "i$1s$2")
            .unwrap();
        inflector.add_irregular("lol", "lolz");
        inflector.add_uncountable("Herokai");

        assert_eq!(inflector.singularize("MacBooks Air"), "MacBook Air");
        assert_eq!(inflector.pluralize("iPad Mini"), "iPads Mini");
        assert_eq!(inflector.pluralize("lol"), "lolz");
        assert_eq!(inflector.singularize("lolz"), "lol");
        assert_eq!(inflector.pluralize("Herokai"), "Herokai");
        assert_eq!(inflector.singularize("Herokai"), "Herokai");
    }

    #[test]
    fn latest_rule_wins() {
        let mut inflector = inflector();
        inflector.add_pluralization_rule("$", "s").unwrap();
        inflector.add_pluralization_rule("(ox)$", "$1en").unwrap();
        assert_eq!(inflector.pluralize("ox"), "oxen");
        assert_eq!(inflector.pluralize("cat"), "cats");
    }

    #[test]
    fn uncountable_beats_irregular_and_rules() {
        let mut inflector = inflector();
        inflector.add_pluralization_rule("$", "s").unwrap();
        inflector.add_irregular("sheep", "sheeps");
        inflector.add_uncountable("sheep");
        assert_eq!(inflector.pluralize("sheep"), "sheep");
    }

    #[test]
    fn irregular_beats_rules() {
        let mut inflector = inflector();
        inflector.add_pluralization_rule("$", "s").unwrap();
        inflector.add_irregular("child", "children");
        assert_eq!(inflector.pluralize("child"), "children");
    }

    #[test]
    fn lookups_fold_case_by_default() {
        let mut inflector = inflector();
        inflector.add_irregular("person", "people");
        inflector.add_uncountable("Rice");
        assert_eq!(inflector.pluralize("PERSON"), "people");
        assert!(inflector.is_uncountable("rice"));
    }

    #[test]
    fn case_sensitive_lookups() {
        let options = InflectorOptions {
            case_sensitive: true,
            ..Default::default()
        };
        let mut inflector = Inflector::with_options(Locale::new("en"), options);
        inflector.add_uncountable("Rice");
        inflector.add_pluralization_rule("^ox$", "oxen").unwrap();
        assert!(!inflector.is_uncountable("rice"));
        assert_eq!(inflector.pluralize("OX"), "OX");
    }

    #[test]
    fn lookups_compose_by_default() {
        let mut inflector = inflector();
        inflector.add_uncountable("caf\u{e9}");
        assert!(inflector.is_uncountable("cafe\u{301}"));

        let options = InflectorOptions {
            normalization_sensitive: true,
            ..Default::default()
        };
        let mut inflector = Inflector::with_options(Locale::new("en"), options);
        inflector.add_uncountable("caf\u{e9}");
        assert!(!inflector.is_uncountable("cafe\u{301}"));
    }

    #[test]
    fn registration_reports_new_entries() {
        let mut inflector = inflector();
        assert!(inflector.add_irregular("person", "people"));
        assert!(!inflector.add_irregular("person", "persons"));
        assert!(inflector.add_uncountable("fish"));
        assert!(!inflector.add_uncountable("fish"));
        assert!(inflector.add_acronym("API"));
        assert!(!inflector.add_acronym("API"));
    }

    #[test]
    fn invalid_pattern_is_not_added() {
        let mut inflector = inflector();
        let err = inflector.add_pluralization_rule("(", "s").unwrap_err();
        assert_eq!(err.pattern(), "(");
        assert!(inflector.pluralization_rules().is_empty());
        assert_eq!(inflector.pluralize("cat"), "cat");
    }

    #[test]
    fn custom_rule() {
        let mut inflector = inflector();
        inflector.add_pluralization(Rule::custom(|word| {
            word.ends_with('y').then(|| format!("{}ies", &word[..word.len() - 1]))
        }));
        assert_eq!(inflector.pluralize("city"), "cities");
        assert_eq!(inflector.pluralize("cat"), "cat");
    }

    #[test]
    fn humanization() {
        let mut inflector = inflector();
        inflector.add_acronym("SSL");
        assert_eq!(inflector.humanize("employee_salary"), "Employee Salary");
        assert_eq!(inflector.humanize("ssl_error"), "SSL Error");
        assert_eq!(inflector.humanize("employee_id"), "Employee");
    }

    #[test]
    fn humanization_rules_come_first() {
        let mut inflector = inflector();
        inflector.add_humanization_replacement("col_rpted_bugs", "Reported bugs");
        inflector.add_humanization(Rule::custom(|term| {
            term.starts_with("tmp_").then(|| "Temporary".to_string())
        }));
        assert_eq!(inflector.humanize("col_rpted_bugs"), "Reported bugs");
        assert_eq!(inflector.humanize("tmp_value"), "Temporary");
        assert_eq!(inflector.humanize("rpted_bugs"), "Rpted Bugs");
    }

    #[test]
    fn underscoring() {
        let mut inflector = inflector();
        assert_eq!(inflector.underscore("HTTPRequest"), "http_request");
        assert_eq!(inflector.underscore("NSRegularExpression"), "ns_regular_expression");
        assert_eq!(inflector.underscore("Area51Location"), "area51_location");
        assert_eq!(inflector.underscore("AsyncXMLHTTPRequest"), "async_xmlhttp_request");

        inflector.add_acronym("XML");
        inflector.add_acronym("HTTP");
        assert_eq!(inflector.underscore("AsyncXMLHTTPRequest"), "async_xml_http_request");
    }

    #[test]
    fn acronym_round_trip() {
        let mut inflector = inflector();
        inflector.add_acronym("HTTP");
        assert_eq!(inflector.underscore("HTTPRequest"), "http_request");
        assert_eq!(inflector.camelize("http_request", true), "HTTPRequest");
    }

    #[test]
    fn titleize_is_underscore_then_humanize() {
        let inflector = inflector();
        for term in [
            "raiders_of_the_lost_ark",
            "TheManWithoutAPast",
            "x-men: the last stand",
            "author_id",
        ] {
            let expected = inflector.humanize(&inflector.underscore(term));
            assert_eq!(inflector.titleize(term), expected);
        }
        assert_eq!(inflector.titleize("TheManWithoutAPast"), "The Man Without A Past");
        assert_eq!(inflector.titleize_with("author_id", true), "Author Id");
    }

    #[test]
    fn transforms_are_total_on_empty_input() {
        let inflector = inflector();
        assert_eq!(inflector.pluralize(""), "");
        assert_eq!(inflector.singularize(""), "");
        assert_eq!(inflector.camelize("", true), "");
        assert_eq!(inflector.underscore(""), "");
        assert_eq!(inflector.dasherize(""), "");
        assert_eq!(inflector.humanize(""), "");
        assert_eq!(inflector.parameterize(""), "");
        assert_eq!(inflector.titleize(""), "");
    }

    #[test]
    fn turkish_parameterize_stays_ascii() {
        let inflector = Inflector::new(Locale::new("tr"));
        for (string, slug) in [
            ("ISTANBUL Kitap Listesi", "istanbul-kitap-listesi"),
            ("İstanbul", "istanbul"),
        ] {
            let parameterized = inflector.parameterize(string);
            assert_eq!(parameterized, slug);
            assert!(parameterized.is_ascii());
        }
    }

    #[test]
    fn is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Inflector>();
    }
}
