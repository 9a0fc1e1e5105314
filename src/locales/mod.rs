//! Built-in rule tables. Each engine is built on first use and never
//! changes afterwards; clone one to extend it.
//!
//! Only the English tables are thoroughly tested, the others may produce
//! incorrect results for words outside their fixtures.

use std::sync::LazyLock;

use log::debug;

use crate::{inflector::Inflector, locale::Locale};

mod az;
mod en;
mod es;
mod fr;
mod it;
mod kk;
mod la;
mod nb;
mod pt_br;
mod se;
mod tr;

/// Pattern rules in registration order, irregular pairs and uncountable
/// words for one language.
struct Table {
    plurals: &'static [(&'static str, &'static str)],
    singulars: &'static [(&'static str, &'static str)],
    irregulars: &'static [(&'static str, &'static str)],
    uncountables: &'static [&'static str],
}

fn build(locale: Locale, table: &Table) -> Inflector {
    let mut inflector = Inflector::new(locale);
    for (pattern, template) in table.plurals {
        inflector
            .add_pluralization_rule(pattern, template)
            .expect("built-in pluralization rule should compile");
    }
    for (pattern, template) in table.singulars {
        inflector
            .add_singularization_rule(pattern, template)
            .expect("built-in singularization rule should compile");
    }
    for (singular, plural) in table.irregulars {
        inflector.add_irregular(singular, plural);
    }
    for word in table.uncountables {
        inflector.add_uncountable(word);
    }
    debug!(
        "built {} inflector: {} plural rules, {} singular rules",
        inflector.locale(),
        table.plurals.len(),
        table.singulars.len()
    );
    inflector
}

pub static AZ: LazyLock<Inflector> = LazyLock::new(|| build(Locale::new("az"), &az::TABLE));
pub static EN: LazyLock<Inflector> = LazyLock::new(|| build(Locale::new("en"), &en::TABLE));
pub static ES: LazyLock<Inflector> = LazyLock::new(|| build(Locale::new("es"), &es::TABLE));
pub static FR: LazyLock<Inflector> = LazyLock::new(|| build(Locale::new("fr"), &fr::TABLE));
pub static IT: LazyLock<Inflector> = LazyLock::new(|| build(Locale::new("it"), &it::TABLE));
pub static KK: LazyLock<Inflector> = LazyLock::new(|| build(Locale::new("kk"), &kk::TABLE));
pub static LA: LazyLock<Inflector> = LazyLock::new(|| build(Locale::new("la"), &la::TABLE));
pub static NB: LazyLock<Inflector> = LazyLock::new(|| build(Locale::new("nb"), &nb::TABLE));
pub static PT_BR: LazyLock<Inflector> =
    LazyLock::new(|| build(Locale::with_region("pt", "BR"), &pt_br::TABLE));
pub static SE: LazyLock<Inflector> = LazyLock::new(|| build(Locale::new("se"), &se::TABLE));
pub static TR: LazyLock<Inflector> = LazyLock::new(|| build(Locale::new("tr"), &tr::TABLE));

/// The built-in engine for `locale`, if there is one.
///
/// Portuguese is only available for Brazil; every other language ignores
/// the region.
///
/// ```
/// use inflection::{locales, Locale};
///
/// assert!(locales::for_locale(&Locale::with_region("en", "GB")).is_some());
/// assert!(locales::for_locale(&Locale::with_region("pt", "BR")).is_some());
/// assert!(locales::for_locale(&Locale::new("pt")).is_none());
/// assert!(locales::for_locale(&Locale::new("de")).is_none());
/// ```
pub fn for_locale(locale: &Locale) -> Option<&'static Inflector> {
    let inflector: &'static LazyLock<Inflector> = match (locale.language(), locale.region()) {
        ("az", _) => &AZ,
        ("en", _) => &EN,
        ("es", _) => &ES,
        ("fr", _) => &FR,
        ("it", _) => &IT,
        ("kk", _) => &KK,
        ("la", _) => &LA,
        ("nb", _) => &NB,
        ("pt", Some("BR")) => &PT_BR,
        ("se", _) => &SE,
        ("tr", _) => &TR,
        _ => return None,
    };
    Some(LazyLock::force(inflector))
}

pub fn english() -> &'static Inflector {
    &EN
}
