use super::Table;

pub(super) const TABLE: Table = Table {
    plurals: &[
        ("([aoıu][^aoıueöiü]{0,6})$", "$1lar"),
        ("([eöiü][^aoıueöiü]{0,6})$", "$1ler"),
    ],
    singulars: &[("l[ae]r$", "")],
    irregulars: &[("ben", "biz"), ("sen", "siz"), ("o", "onlar")],
    uncountables: &[],
};
