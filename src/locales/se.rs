use super::Table;

pub(super) const TABLE: Table = Table {
    plurals: &[
        ("([tmnslpr])$", "$1er"), // produkt, produkter
        ("a$", "or"),             // flicka, flickor
        ("e$", "ar"),             // pojke, pojkar
        ("g$", "gar"),
        ("l$", "lar"),    // bil, bilar
        ("el$", "lar"),   // fågel, fåglar
        ("kel$", "kler"), // muskel, muskler
        ("tel$", "tlar"), // titel, titlar
        ("de$", "der"),   // fiende, fiender
        ("le$", "len"),   // äpple, äpplen
        ("ö$", "ön"),     // frö, frön
        ("ok$", "öcker"), // bok, böcker
        ("um$", "a"),     // faktum, fakta
        ("o$", "or"),     // sko, skor
        ("s$", "sor"),    // ros, rosor
        ("man$", "män"),
        ("mus$", "möss"),
        ("d$", "den"), // huvud, huvuden
        ("ad$", "ader"),
        ("ne$", "nen"),     // vittne, vittnen
        ("and$", "änder"), // hand, händer
        ("i$", "ier"),      // kategori, kategorier
        ("mi$", "min"),
    ],
    singulars: &[
        ("([tmnslpr])er$", "$1"),
        ("or$", "a"),
        ("mar$", "me"),
        ("kar$", "ke"),
        ("gar$", "g"),
        ("lar$", "l"),
        ("glar$", "gel"),
        ("ler$", "el"),
        ("der$", "de"),
        ("ader$", "ad"),
        ("en$", "e"),
        ("tlar$", "tel"),
        ("ön$", "ö"),
        ("öcker$", "ok"),
        ("a$", "um"),
        ("män$", "man"),
        ("möss$", "mus"),
        ("den$", "d"),
        ("skor$", "sko"),
        ("änder$", "and"),
        ("sor$", "s"),
        ("rier$", "ri"),
        ("min$", "mi"),
    ],
    irregulars: &[],
    uncountables: &["hus", "kar", "träd", "får", "brev", "namn", "nummer", "kön"],
};
