use crate::{inflector::Acronyms, locale::Locale};

/// Options for [`humanize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HumanizeOptions {
    /// Capitalize every word instead of lowercasing it.
    pub capitalizing: bool,
    /// Keep a trailing `_id`.
    pub preserving_id_suffix: bool,
}

impl Default for HumanizeOptions {
    fn default() -> Self {
        Self {
            capitalizing: true,
            preserving_id_suffix: false,
        }
    }
}

/// Converts an underscored `&str` into words suitable for display.
///
/// Leading underscores and a trailing `_id` are removed, then the term is
/// split on everything that is not a letter, a digit or a `:`. Words that
/// uppercase to a registered acronym are written as the acronym.
///
/// This does not apply humanization rules; [`crate::Inflector::humanize`]
/// consults them first.
///
/// ```
/// use inflection::{inflector::case::{humanize, HumanizeOptions}, Acronyms, Locale};
///
/// let mut acronyms = Acronyms::default();
/// acronyms.insert("SSL");
/// let en = Locale::new("en");
/// let options = HumanizeOptions::default();
/// assert_eq!(humanize("employee_salary", options, &acronyms, &en), "Employee Salary");
/// assert_eq!(humanize("employee_id", options, &acronyms, &en), "Employee");
/// assert_eq!(humanize("ssl_error", options, &acronyms, &en), "SSL Error");
/// ```
pub fn humanize(
    term: &str,
    options: HumanizeOptions,
    acronyms: &Acronyms,
    locale: &Locale,
) -> String {
    let term = term.trim_start_matches('_');
    let term = if options.preserving_id_suffix {
        term
    } else {
        term.strip_suffix("_id").unwrap_or(term)
    };

    term.split(|c: char| !(c.is_alphabetic() || c.is_numeric() || c == ':'))
        .filter(|word| !word.is_empty())
        .map(|word| {
            let candidate = locale.uppercase(word);
            if acronyms.contains(&candidate) {
                candidate
            } else if options.capitalizing {
                locale.capitalize(word)
            } else {
                locale.lowercase(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
