use super::Table;

pub(super) const TABLE: Table = Table {
    plurals: &[
        // first declension
        ("a$", "ae"),
        // second declension
        ("us$", "i"),
        ("(.*)([^aeiou])e(r)$", "$1$2$3es"),
        ("(.*)([aeiou])er$", "$1$2eri"),
        ("um$", "a"),
        // fourth declension
        ("u$", "ua"),
        ("(curs)(us)", "$1ūs"),
        // fifth declension
        ("es$", "es"),
    ],
    singulars: &[
        ("ae$", "a"),
        ("i$", "us"),
        ("(.*)([^aeiou])e(r)es$", "$1$2$3"),
        ("(.*)([aeiou])eri$", "$1$2er"),
        ("a$", "um"),
        ("ua$", "u"),
        ("(curs)ūs", "$1us"),
        ("es$", "es"),
    ],
    // third declension
    irregulars: &[("pater", "patres"), ("puer", "pueri"), ("nomen", "nomina")],
    uncountables: &[],
};
