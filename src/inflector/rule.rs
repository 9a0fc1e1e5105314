use std::{fmt, sync::Arc};

use regex::{Captures, Regex, RegexBuilder};

use crate::error::PatternError;

/// A function rule: returns `None` when it does not apply to a word.
pub type RuleFn = dyn Fn(&str) -> Option<String> + Send + Sync;

/// One entry of a pluralization, singularization or humanization list.
#[derive(Clone)]
pub enum Rule {
    /// Regular expression plus replacement template.
    Pattern(PatternRule),
    /// Replaces a whole term that is exactly `original`.
    Replace {
        original: String,
        replacement: String,
    },
    /// Arbitrary predicate and transform.
    Custom(Arc<RuleFn>),
}

impl Rule {
    pub fn custom(f: impl Fn(&str) -> Option<String> + Send + Sync + 'static) -> Self {
        Rule::Custom(Arc::new(f))
    }

    pub fn replace(original: impl Into<String>, replacement: impl Into<String>) -> Self {
        Rule::Replace {
            original: original.into(),
            replacement: replacement.into(),
        }
    }

    /// Applies the rule, returning `None` when it does not match `word`.
    pub fn apply(&self, word: &str) -> Option<String> {
        match self {
            Rule::Pattern(rule) => rule.apply(word),
            Rule::Replace {
                original,
                replacement,
            } => (word == original).then(|| replacement.clone()),
            Rule::Custom(f) => f(word),
        }
    }
}

impl From<PatternRule> for Rule {
    fn from(rule: PatternRule) -> Self {
        Rule::Pattern(rule)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Pattern(rule) => f.debug_tuple("Pattern").field(rule).finish(),
            Rule::Replace {
                original,
                replacement,
            } => f
                .debug_struct("Replace")
                .field("original", original)
                .field("replacement", replacement)
                .finish(),
            Rule::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// A regular expression rule with a replacement template.
///
/// Templates reference capture groups as `$1`, `$2`, ... with `$0` standing
/// for the whole match; `\` escapes the next character. A group that did not
/// participate in the match expands to nothing.
///
/// ```
/// use inflection::PatternRule;
///
/// let rule = PatternRule::new(r"(octop|vir)us$", "$1i").unwrap();
/// assert_eq!(rule.apply("octopus").as_deref(), Some("octopi"));
/// assert_eq!(rule.apply("Virus").as_deref(), Some("Viri"));
/// assert_eq!(rule.apply("cactus"), None);
/// ```
#[derive(Debug, Clone)]
pub struct PatternRule {
    regex: Regex,
    template: Template,
}

impl PatternRule {
    /// Compiles a case-insensitive rule.
    pub fn new(pattern: &str, template: &str) -> Result<Self, PatternError> {
        Self::with_case_sensitivity(pattern, template, false)
    }

    pub fn with_case_sensitivity(
        pattern: &str,
        template: &str,
        case_sensitive: bool,
    ) -> Result<Self, PatternError> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(!case_sensitive)
            .build()
            .map_err(|source| PatternError::new(pattern, source))?;
        let template = Template::parse(template, regex.captures_len() - 1);
        Ok(Self { regex, template })
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Replaces the match in `word`. The rule only applies when the pattern
    /// matches exactly once.
    pub fn apply(&self, word: &str) -> Option<String> {
        let mut matches = self.regex.captures_iter(word);
        let captures = matches.next()?;
        if matches.next().is_some() {
            return None;
        }
        let whole = captures.get(0)?;
        let mut result = String::with_capacity(word.len() + 8);
        result.push_str(&word[..whole.start()]);
        self.template.expand(&captures, &mut result);
        result.push_str(&word[whole.end()..]);
        Some(result)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Literal(String),
    Group(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Template {
    pieces: Vec<Piece>,
}

impl Template {
    /// Group references take as many digits as still name a group no larger
    /// than `max_group`, so `$10` is group 1 followed by `0` in a pattern with
    /// fewer than ten groups.
    fn parse(template: &str, max_group: usize) -> Self {
        let mut pieces = vec![];
        let mut literal = String::new();
        let mut chars = template.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '\\' => literal.push(chars.next().unwrap_or('\\')),
                '$' => {
                    let Some(mut group) = chars.peek().and_then(|c| c.to_digit(10)) else {
                        literal.push('$');
                        continue;
                    };
                    chars.next();
                    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
                        let next = group as usize * 10 + digit as usize;
                        if next > max_group {
                            break;
                        }
                        group = next as u32;
                        chars.next();
                    }
                    if !literal.is_empty() {
                        pieces.push(Piece::Literal(std::mem::take(&mut literal)));
                    }
                    pieces.push(Piece::Group(group as usize));
                }
                _ => literal.push(c),
            }
        }
        if !literal.is_empty() {
            pieces.push(Piece::Literal(literal));
        }
        Self { pieces }
    }

    fn expand(&self, captures: &Captures, out: &mut String) {
        for piece in &self.pieces {
            match piece {
                Piece::Literal(s) => out.push_str(s),
                Piece::Group(i) => {
                    if let Some(m) = captures.get(*i) {
                        out.push_str(m.as_str());
                    }
                }
            }
        }
    }
}
