use super::Table;

pub(super) const TABLE: Table = Table {
    plurals: &[
        ("[oei]$", "i"),
        ("a$", "e"),
        ("[àèìòù]$", "$0"),
        ("^.{2,3}$", "$0"),
        ("go$", "ghi"),
    ],
    singulars: &[
        ("i$", "o"),
        ("e$", "a"),
        ("^.{2,3}$", "$0"),
        ("ghi$", "go"),
    ],
    irregulars: &[
        ("uomo", "uomini"),
        ("bue", "buoi"),
        ("dio", "dèi"),
        ("ampio", "ampi"),
        ("tempio", "templi"),
        ("mio", "miei"),
        ("tuo", "tuoi"),
        ("suo", "suoi"),
        ("belga", "belgi"),
        ("euripiga", "euripigi"),
        ("bello", "belli"),
        ("mano", "mani"),
        ("ala", "ali"),
        ("arma", "armi"),
        ("eco", "echi"),
        ("sinodo", "sinodi"),
        ("centinaio", "centinaia"),
        ("migliaio", "migliaia"),
        ("paio", "paia"),
        ("prelio", "prelia"),
        ("riso", "risa"),
        ("uovo", "uova"),
        ("dito", "dita"),
        ("carcere", "carceri"),
        ("oasi", "oasi"),
        ("mare", "mari"),
    ],
    uncountables: &[],
};
