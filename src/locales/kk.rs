use super::Table;

pub(super) const TABLE: Table = Table {
    plurals: &[
        ("[кқпстфхчцшщбвгд]$", "$0тар"),
        ("[өүәіе][^оұаыөүәіе]*[кқпстфхчцшщбвгд]$", "$0тер"),
        ("[лмнңжз]$", "$0дар"),
        ("[өүәіе][^оұаыөүәіе]*[лмнңжз]$", "$0дер"),
        ("[оұаыөүәіеруй]$", "$0лар"),
        ("[өүәіе][^оұаыөүәіе]*[оұаыөүәіеруй]$", "$0лер"),
    ],
    singulars: &[("[тдл][ае]р$", "")],
    irregulars: &[],
    uncountables: &[],
};
