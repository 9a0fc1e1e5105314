use super::{is_word_boundary, is_word_char};
use crate::{inflector::Acronyms, locale::Locale};

/// Converts an underscored `&str` to a camel case `String`.
///
/// Underscores are dropped and the word after each one is capitalized,
/// unless it spells a registered acronym. Acronyms are matched without
/// regard to case and written in their registered spelling, so `http`,
/// `Http` and `HTTP` all become `HTTP`. A `/` is kept as the `::`
/// namespace separator.
///
/// ```
/// use inflection::{inflector::case::camelize, Acronyms, Locale};
///
/// let mut acronyms = Acronyms::default();
/// let en = Locale::new("en");
/// assert_eq!(camelize("employee_salary", true, &acronyms, &en), "EmployeeSalary");
/// assert_eq!(camelize("employee_salary", false, &acronyms, &en), "employeeSalary");
/// assert_eq!(camelize("active_model/errors", true, &acronyms, &en), "ActiveModel::Errors");
///
/// acronyms.insert("HTTP");
/// assert_eq!(camelize("http_request", true, &acronyms, &en), "HTTPRequest");
/// assert_eq!(camelize("HTTPRequest", false, &acronyms, &en), "httpRequest");
/// ```
pub fn camelize(
    term: &str,
    uppercasing_first_letter: bool,
    acronyms: &Acronyms,
    locale: &Locale,
) -> String {
    let mut head = String::with_capacity(term.len());
    let rest = if uppercasing_first_letter {
        keep_leading_acronym(term, acronyms, &mut head)
    } else {
        lowercase_leading_word(term, acronyms, locale, &mut head)
    };
    head.push_str(rest);

    let camelized = capitalize_words(&head, acronyms, locale).replace('/', "::");
    if uppercasing_first_letter {
        locale.uppercase_first(&camelized)
    } else {
        camelized
    }
}

/// An acronym at the start of a term must be followed by a word boundary, an
/// uppercase letter or an underscore.
fn begins_term(acronym: &str, next: Option<char>) -> bool {
    matches!(next, Some(c) if c.is_uppercase() || c == '_')
        || is_word_boundary(acronym.chars().next_back(), next)
}

/// Copies a leading acronym as it is, or replaces a leading run of lowercase
/// letters and digits with the acronym it spells. Returns the rest of `term`.
fn keep_leading_acronym<'a>(term: &'a str, acronyms: &Acronyms, head: &mut String) -> &'a str {
    if let Some(acronym) = acronyms.longest_prefix(term, begins_term) {
        head.push_str(acronym);
        return &term[acronym.len()..];
    }
    let end = term
        .find(|c: char| !(c.is_lowercase() || c.is_numeric()))
        .unwrap_or(term.len());
    let (run, rest) = term.split_at(end);
    head.push_str(acronyms.get_ignore_case(run).unwrap_or(run));
    rest
}

/// Lowercases a leading acronym, or else the first character. Returns the
/// rest of `term`.
fn lowercase_leading_word<'a>(
    term: &'a str,
    acronyms: &Acronyms,
    locale: &Locale,
    head: &mut String,
) -> &'a str {
    if let Some(acronym) = acronyms.longest_prefix(term, begins_term) {
        head.push_str(&locale.lowercase(acronym));
        return &term[acronym.len()..];
    }
    match term.chars().next() {
        Some(c) if is_word_char(c) => {
            let (first, rest) = term.split_at(c.len_utf8());
            head.push_str(&locale.lowercase(first));
            rest
        }
        _ => term,
    }
}

/// Drops every `_` and capitalizes the letters and digits that follow an
/// `_` or a `/`.
fn capitalize_words(term: &str, acronyms: &Acronyms, locale: &Locale) -> String {
    let mut result = String::with_capacity(term.len());
    let mut rest = term;
    while let Some(index) = rest.find(['_', '/']) {
        result.push_str(&rest[..index]);
        if rest.as_bytes()[index] == b'/' {
            result.push('/');
        }
        let after = &rest[index + 1..];
        let end = after
            .find(|c: char| !c.is_alphanumeric())
            .unwrap_or(after.len());
        let (word, tail) = after.split_at(end);
        match acronyms.get_ignore_case(word) {
            Some(acronym) => result.push_str(acronym),
            None => result.push_str(&locale.capitalize(word)),
        }
        rest = tail;
    }
    result.push_str(rest);
    result
}
