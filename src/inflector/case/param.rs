use deunicode::deunicode_with_tofu;

/// Options for [`parameterize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterizeOptions {
    pub separator: char,
    /// Skip the final lowercasing.
    pub preserving_case: bool,
}

impl Default for ParameterizeOptions {
    fn default() -> Self {
        Self {
            separator: '-',
            preserving_case: false,
        }
    }
}

/// Turns a `&str` into something usable as a URL path segment.
///
/// The string is transliterated to ASCII, characters without a Latin
/// rendition are dropped, and every run of other characters becomes a
/// single separator. `-` and `_` are kept unless one of them is the
/// separator. The separator itself always splits, even when it is a letter
/// or a digit.
///
/// Lowercasing ignores the locale so the result stays ASCII.
///
/// ```
/// use inflection::inflector::case::{parameterize, ParameterizeOptions};
///
/// let options = ParameterizeOptions::default();
/// assert_eq!(parameterize("Donald E. Knuth", options), "donald-e-knuth");
/// assert_eq!(parameterize("^très|Jolie-- ", options), "tres-jolie");
/// ```
pub fn parameterize(string: &str, options: ParameterizeOptions) -> String {
    let separator = options.separator;
    let splits = |c: char| c == separator || !(c.is_alphanumeric() || matches!(c, '-' | '_'));

    let mut buf = [0; 4];
    let joiner: &str = separator.encode_utf8(&mut buf);
    let transliterated = deunicode_with_tofu(string, "");
    let parameterized = transliterated
        .split(splits)
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(joiner);

    if options.preserving_case {
        parameterized
    } else {
        parameterized.to_lowercase()
    }
}
