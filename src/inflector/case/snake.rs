use std::sync::LazyLock;

use regex::Regex;

use crate::{inflector::Acronyms, locale::Locale};

static UPPERCASE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\p{Lu}\d]+)(\p{Lu}\p{Ll})").unwrap());
static LOWER_THEN_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\p{Ll}\d])(\p{Lu})").unwrap());

/// Converts a camel case `&str` to an underscored, lowercase `String`.
///
/// `::` becomes `/` and hyphens become underscores. Registered acronyms are
/// split off as whole words.
///
/// ```
/// use inflection::{inflector::case::underscore, Acronyms, Locale};
///
/// let mut acronyms = Acronyms::default();
/// let en = Locale::new("en");
/// assert_eq!(underscore("HTTPRequest", &acronyms, &en), "http_request");
/// assert_eq!(underscore("ActiveModel::Errors", &acronyms, &en), "active_model/errors");
/// assert_eq!(underscore("AsyncXMLHTTPRequest", &acronyms, &en), "async_xmlhttp_request");
///
/// acronyms.insert("XML");
/// acronyms.insert("HTTP");
/// assert_eq!(underscore("AsyncXMLHTTPRequest", &acronyms, &en), "async_xml_http_request");
/// ```
pub fn underscore(term: &str, acronyms: &Acronyms, locale: &Locale) -> String {
    let term = term.replace("::", "/");
    if !term.chars().any(|c| c.is_uppercase() || c == '-') {
        return term;
    }
    let term = acronyms.separate(&term);
    let term = UPPERCASE_RUN.replace_all(&term, "${1}_${2}");
    let term = LOWER_THEN_UPPER.replace_all(&term, "${1}_${2}");
    locale.lowercase(&term.replace('-', "_"))
}

/// Replaces every underscore with a hyphen.
///
/// ```
/// use inflection::inflector::case::dasherize;
///
/// assert_eq!(dasherize("puni_puni"), "puni-puni");
/// ```
pub fn dasherize(term: &str) -> String {
    term.replace('_', "-")
}
