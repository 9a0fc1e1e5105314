use super::Table;

pub(super) const TABLE: Table = Table {
    plurals: &[
        ("$", "s"),
        (
            "(bijou|caillou|chou|genou|hibou|joujou|pou|au|eu|eau)$",
            "$1x",
        ),
        ("(bleu|émeu|landau|lieu|pneu|sarrau)$", "$1s"),
        ("al$", "aux"),
        ("ail$", "ails"),
        ("(b|cor|ém|gemm|soupir|trav|vant|vitr)ail$", "$1aux"),
        ("(s|x|z)$", "$1"),
    ],
    singulars: &[
        ("s$", ""),
        (
            "(bijou|caillou|chou|genou|hibou|joujou|pou|au|eu|eau)x$",
            "$1",
        ),
        ("(journ|chev)aux$", "$1al"),
        ("ails$", "ail"),
        ("(b|cor|ém|gemm|soupir|trav|vant|vitr)aux$", "$1ail"),
    ],
    irregulars: &[
        ("monsieur", "messieurs"),
        ("madame", "mesdames"),
        ("mademoiselle", "mesdemoiselles"),
    ],
    uncountables: &[],
};
