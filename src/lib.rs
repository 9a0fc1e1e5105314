//! Rule based pluralization, singularization and identifier case
//! transforms with locale-aware case mapping.
//!
//! Built-in engines for eleven languages live in [`locales`]; an
//! [`Inflector`] can also be built from scratch or cloned and extended.

pub mod error;
pub mod inflector;
pub mod locale;
pub mod locales;

pub use error::{LocaleError, PatternError};
pub use inflector::{
    Acronyms, HumanizeOptions, Inflect, Inflector, InflectorOptions, ParameterizeOptions,
    PatternRule, Rule, RuleFn,
};
pub use locale::Locale;
