use super::Table;

pub(super) const TABLE: Table = Table {
    plurals: &[("$", "er"), ("r$", "re"), ("e$", "er")],
    singulars: &[
        ("er$", ""),
        ("re$", "r"),
        ("pler$", "ple"),
        ("kker$", "kke"),
    ],
    irregulars: &[("konto", "konti")],
    uncountables: &[],
};
