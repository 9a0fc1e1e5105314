/// Provides conversion from underscored to camel case strings.
///
/// Example string `employeeSalary`
pub mod camel;
pub use camel::camelize;

/// Provides conversion to underscored and dasherized strings.
///
/// Example string `employee_salary`
pub mod snake;
pub use snake::dasherize;
pub use snake::underscore;

/// Provides conversion to human readable labels and titles.
///
/// Example string `Employee Salary`
pub mod human;
pub use human::humanize;
pub use human::HumanizeOptions;

/// Provides conversion to URL path segments.
///
/// Example string `donald-e-knuth`
pub mod param;
pub use param::parameterize;
pub use param::ParameterizeOptions;

/// Word characters in the regular expression sense: letters, digits and the
/// underscore.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whether there is a word boundary between `before` and `after`, where
/// `None` stands for either end of the string.
pub(crate) fn is_word_boundary(before: Option<char>, after: Option<char>) -> bool {
    before.is_some_and(is_word_char) != after.is_some_and(is_word_char)
}

#[test]
fn test_is_word_char_on_underscore() {
    assert!(is_word_char('_'))
}

#[test]
fn test_is_word_char_on_letter_outside_ascii() {
    assert!(is_word_char('ß'))
}

#[test]
fn test_is_word_char_on_hyphen() {
    assert!(!is_word_char('-'))
}

#[test]
fn test_word_boundary_at_start() {
    assert!(is_word_boundary(None, Some('a')))
}

#[test]
fn test_word_boundary_at_end() {
    assert!(is_word_boundary(Some('a'), None))
}

#[test]
fn test_no_word_boundary_inside_word() {
    assert!(!is_word_boundary(Some('a'), Some('_')))
}

#[test]
fn test_no_word_boundary_between_separators() {
    assert!(!is_word_boundary(Some(' '), Some('-')))
}

#[test]
fn test_no_word_boundary_in_empty_string() {
    assert!(!is_word_boundary(None, None))
}
