use super::Table;

pub(super) const TABLE: Table = Table {
    plurals: &[
        ("$", "s"),
        ("([^aeéiou])$", "$1es"),
        ("([aeiou]s)$", "$1"),
        ("z$", "ces"),
        ("á([sn])$", "a$1es"),
        ("é([sn])$", "e$1es"),
        ("í([sn])$", "i$1es"),
        ("ó([sn])$", "o$1es"),
        ("ú([sn])$", "u$1es"),
    ],
    singulars: &[
        ("s$", ""),
        ("es$", ""),
        ("([sfj]e)s$", "$1"),
        ("eses$", "és"),
        ("ces$", "z"),
        ("ones$", "ón"),
    ],
    irregulars: &[("el", "los")],
    uncountables: &[],
};
