use super::Table;

pub(super) const TABLE: Table = Table {
    plurals: &[
        ("([aıou][^aeəıiouöü]{0,6})$", "$1lar"),
        ("([eəiöü][^aeəıiouöü]{0,6})$", "$1lər"),
    ],
    singulars: &[("l[aə]r$", "")],
    irregulars: &[("mən", "biz"), ("sən", "siz"), ("o", "onlar")],
    uncountables: &["camaat", "əhali"],
};
