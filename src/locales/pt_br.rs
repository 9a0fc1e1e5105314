use super::Table;

pub(super) const TABLE: Table = Table {
    plurals: &[
        ("$", "s"),
        ("(s)$", "$1"),
        ("(z|r)$", "$1es"),
        ("al$", "ais"),
        ("el$", "eis"),
        ("ol$", "ois"),
        ("ul$", "uis"),
        ("([^aeou])il$", "$1is"),
        ("m$", "ns"),
        (
            "^(japon|escoc|ingl|dinamarqu|fregu|portugu)ês$",
            "$1eses",
        ),
        ("^(|g)ás$", "$1ases"),
        ("ão$", "ões"),
        ("^(irm|m)ão$", "$1ãos"),
        ("^(alem|c|p)ão$", "$1ães"),
        ("ao$", "oes"),
        ("^(irm|m)ao$", "$1aos"),
        ("^(alem|c|p)ao$", "$1aes"),
    ],
    singulars: &[
        ("([^ê])s$", "$1"),
        ("^(á|gá)s$", "$1s"),
        ("(r|z)es$", "$1"),
        ("([^p])ais$", "$1al"),
        ("éis$", "el"),
        ("eis$", "ei"),
        ("ois$", "ol"),
        ("uis$", "ul"),
        ("(r|t|f|v)is$", "$1il"),
        ("ns$", "m"),
        ("sses$", "sse"),
        ("^(.*[^s]s)es$", "$1"),
        ("(ãe|ão|õe)s$", "ão"),
        ("(ae|ao|oe)s$", "ao"),
        (
            "(japon|escoc|ingl|dinamarqu|fregu|portugu)eses$",
            "$1ês",
        ),
        ("^(g|)ases$", "$1ás"),
    ],
    irregulars: &[
        ("país", "paises"),
        ("árvore", "árvores"),
        ("cadáver", "cadáveres"),
    ],
    uncountables: &["tórax", "tênis", "ônibus", "lápis", "fênix"],
};
