use super::Inflector;
use crate::{locale::Locale, locales};

/// Inflections on string slices using the built-in engine for a locale.
///
/// Without a built-in engine, `pluralized` and `singularized` return the
/// input unchanged and the other transforms run without rules or acronyms.
///
/// ```
/// use inflection::{Inflect, Locale};
///
/// let en = Locale::new("en");
/// assert_eq!("person".pluralized(&en), "people");
/// assert_eq!("employee_salary".camelized(&en), "employeeSalary");
/// assert_eq!("Donald E. Knuth".parameterized(&en), "donald-e-knuth");
///
/// let unknown = Locale::new("xx");
/// assert_eq!("person".pluralized(&unknown), "person");
/// assert_eq!("employee_salary".humanized(&unknown), "Employee Salary");
/// ```
pub trait Inflect {
    fn pluralized(&self, locale: &Locale) -> String;
    fn singularized(&self, locale: &Locale) -> String;
    /// Lower camel case.
    fn camelized(&self, locale: &Locale) -> String;
    fn underscored(&self, locale: &Locale) -> String;
    fn dasherized(&self, locale: &Locale) -> String;
    fn humanized(&self, locale: &Locale) -> String;
    fn parameterized(&self, locale: &Locale) -> String;
    fn titleized(&self, locale: &Locale) -> String;
}

fn with_engine<T>(locale: &Locale, f: impl FnOnce(&Inflector) -> T) -> T {
    match locales::for_locale(locale) {
        Some(inflector) => f(inflector),
        None => f(&Inflector::new(locale.clone())),
    }
}

impl Inflect for str {
    fn pluralized(&self, locale: &Locale) -> String {
        locales::for_locale(locale).map_or_else(|| self.to_string(), |i| i.pluralize(self))
    }

    fn singularized(&self, locale: &Locale) -> String {
        locales::for_locale(locale).map_or_else(|| self.to_string(), |i| i.singularize(self))
    }

    fn camelized(&self, locale: &Locale) -> String {
        with_engine(locale, |i| i.camelize(self, false))
    }

    fn underscored(&self, locale: &Locale) -> String {
        with_engine(locale, |i| i.underscore(self))
    }

    fn dasherized(&self, locale: &Locale) -> String {
        with_engine(locale, |i| i.dasherize(self))
    }

    fn humanized(&self, locale: &Locale) -> String {
        with_engine(locale, |i| i.humanize(self))
    }

    fn parameterized(&self, locale: &Locale) -> String {
        with_engine(locale, |i| i.parameterize(self))
    }

    fn titleized(&self, locale: &Locale) -> String {
        with_engine(locale, |i| i.titleize(self))
    }
}
