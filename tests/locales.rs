use inflection::{locales, Locale};
use pretty_assertions::assert_eq;

/// Checks every `(singular, plural)` pair in both directions.
fn assert_pairs(locale: Locale, pairs: &[(&str, &str)]) {
    let inflector = locales::for_locale(&locale)
        .unwrap_or_else(|| panic!("no built-in inflector for {locale}"));
    for (singular, plural) in pairs {
        assert_eq!(
            inflector.pluralize(singular),
            *plural,
            "{locale}: pluralizing {singular:?}"
        );
        assert_eq!(
            inflector.singularize(plural),
            *singular,
            "{locale}: singularizing {plural:?}"
        );
    }
}

#[test]
fn azerbaijani() {
    assert_pairs(
        Locale::new("az"),
        &[
            ("zürafə", "zürafələr"),
            ("insan", "insanlar"),
            ("kitab", "kitablar"),
            ("pişik", "pişiklər"),
            ("inqilabçı", "inqilabçılar"),
            ("kommunist", "kommunistlər"),
            ("kişi", "kişilər"),
            ("qadın", "qadınlar"),
            ("mən", "biz"),
            ("sən", "siz"),
            ("o", "onlar"),
            ("əhali", "əhali"),
            ("camaat", "camaat"),
        ],
    );
}

#[test]
fn brazilian_portuguese() {
    assert_pairs(
        Locale::with_region("pt", "BR"),
        &[
            ("livro", "livros"),
            ("radio", "radios"),
            ("senhor", "senhores"),
            ("lei", "leis"),
            ("rei", "reis"),
            ("casa", "casas"),
            ("árvore", "árvores"),
            ("cor", "cores"),
            ("álbum", "álbuns"),
            ("mulher", "mulheres"),
            ("luz", "luzes"),
            ("juiz", "juizes"),
            ("avião", "aviões"),
            ("cão", "cães"),
            ("interesse", "interesses"),
            ("ás", "ases"),
            ("mão", "mãos"),
            ("peão", "peões"),
            ("nação", "nações"),
            ("país", "paises"),
        ],
    );
}

#[test]
fn english() {
    assert_pairs(
        Locale::new("en"),
        &[
            ("person", "people"),
            ("tomato", "tomatoes"),
            ("matrix", "matrices"),
            ("octopus", "octopi"),
            ("fish", "fish"),
            ("police", "police"),
            ("cow", "cows"),
        ],
    );
}

#[test]
fn english_one_way() {
    let en = locales::english();
    assert_eq!(en.singularize("analyses"), "analysis");
    assert_eq!(en.pluralize("analysis"), "analyses");
    assert_eq!(en.pluralize("wife"), "wives");
    assert_eq!(en.pluralize("half"), "halves");
    assert_eq!(en.pluralize("ox"), "oxen");
    assert_eq!(en.pluralize("oxen"), "oxen");
    assert_eq!(en.pluralize("mouse"), "mice");
    assert_eq!(en.pluralize("query"), "queries");
    assert_eq!(en.pluralize("Person"), "people");
}

#[test]
fn french() {
    assert_pairs(
        Locale::new("fr"),
        &[
            ("ami", "amis"),
            ("fidèle", "fidèles"),
            ("rapport", "rapports"),
            ("tuyau", "tuyaux"),
            ("genou", "genoux"),
            ("aveu", "aveux"),
            ("nouveau", "nouveaux"),
            ("bleu", "bleus"),
            ("landau", "landaus"),
            ("journal", "journaux"),
            ("détail", "détails"),
            ("travail", "travaux"),
            ("bail", "baux"),
            ("émail", "émaux"),
        ],
    );
}

#[test]
fn italian() {
    assert_pairs(
        Locale::new("it"),
        &[
            ("gelato", "gelati"),
            ("donna", "donne"),
            ("mare", "mari"),
            ("città", "città"),
            ("caffè", "caffè"),
            ("ago", "aghi"),
            ("re", "re"),
            ("gru", "gru"),
            ("uomo", "uomini"),
            ("oasi", "oasi"),
        ],
    );
}

#[test]
fn kazakh() {
    assert_pairs(
        Locale::new("kk"),
        &[
            ("сабақ", "сабақтар"),
            ("мектеп", "мектептер"),
            ("қағаз", "қағаздар"),
            ("кілем", "кілемдер"),
            ("гүл", "гүлдер"),
            ("бала", "балалар"),
            ("дәрігер", "дәрігерлер"),
            ("үй", "үйлер"),
            ("ескерту", "ескертулер"),
            ("ауру", "аурулар"),
            ("дәптер", "дәптерлер"),
        ],
    );
}

#[test]
fn latin() {
    assert_pairs(
        Locale::new("la"),
        &[
            ("poeta", "poetae"),
            ("somnus", "somni"),
            ("donum", "dona"),
            ("pater", "patres"),
            ("puer", "pueri"),
            ("nomen", "nomina"),
            ("cursus", "cursūs"),
            ("cornu", "cornua"),
            ("res", "res"),
        ],
    );
}

#[test]
fn norwegian_bokmal() {
    assert_pairs(
        Locale::new("nb"),
        &[
            ("hund", "hunder"),
            ("dag", "dager"),
            ("test", "tester"),
            ("lærer", "lærere"),
            ("kalender", "kalendere"),
            ("bakke", "bakker"),
            ("eple", "epler"),
            ("konto", "konti"),
        ],
    );
}

#[test]
fn spanish() {
    assert_pairs(
        Locale::new("es"),
        &[
            ("libro", "libros"),
            ("radio", "radios"),
            ("señor", "señores"),
            ("ley", "leyes"),
            ("casa", "casas"),
            ("perro", "perros"),
            ("árbol", "árboles"),
            ("álbum", "álbumes"),
            ("mujer", "mujeres"),
            ("mez", "meces"),
            ("luz", "luces"),
            ("avión", "aviones"),
            ("interés", "intereses"),
            ("el", "los"),
            ("mequetrefe", "mequetrefes"),
            ("pasaje", "pasajes"),
            ("fase", "fases"),
            ("pez", "peces"),
        ],
    );
}

#[test]
fn swedish() {
    assert_pairs(
        Locale::new("se"),
        &[
            ("flicka", "flickor"),
            ("pojke", "pojkar"),
            ("fågel", "fåglar"),
            ("bil", "bilar"),
            ("produkt", "produkter"),
            ("muskel", "muskler"),
            ("fiende", "fiender"),
            ("titel", "titlar"),
            ("vittne", "vittnen"),
            ("frö", "frön"),
            ("bok", "böcker"),
            ("faktum", "fakta"),
            ("man", "män"),
            ("mus", "möss"),
            ("huvud", "huvuden"),
            ("sko", "skor"),
            ("hand", "händer"),
            ("ros", "rosor"),
            ("kategori", "kategorier"),
            ("äpple", "äpplen"),
            ("suddgummi", "suddgummin"),
            ("minut", "minuter"),
            ("timme", "timmar"),
            ("dag", "dagar"),
            ("vecka", "veckor"),
            ("månad", "månader"),
        ],
    );
}

#[test]
fn turkish() {
    assert_pairs(
        Locale::new("tr"),
        &[
            ("gün", "günler"),
            ("kiraz", "kirazlar"),
            ("kitap", "kitaplar"),
            ("köpek", "köpekler"),
            ("test", "testler"),
            ("üçgen", "üçgenler"),
            ("ben", "biz"),
            ("sen", "siz"),
            ("o", "onlar"),
        ],
    );
}

#[test]
fn uncountables_are_fixed_points() {
    let en = locales::english();
    for word in ["equipment", "rice", "species", "sheep", "Jeans"] {
        assert_eq!(en.pluralize(word), word);
        assert_eq!(en.singularize(word), word);
    }
}

#[test]
fn unsupported_locale() {
    assert!(locales::for_locale(&Locale::new("de")).is_none());
    assert!(locales::for_locale(&"pt-PT".parse().unwrap()).is_none());
}
