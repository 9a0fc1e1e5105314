use std::{
    error::Error,
    io::{self, BufRead, Write},
    str::FromStr,
};

use clap::{Parser, Subcommand};
use codespan_reporting::{
    diagnostic::{Diagnostic, Label},
    files::SimpleFiles,
    term::{
        self,
        termcolor::{ColorChoice, StandardStream},
    },
};
use inflection::{
    locales, HumanizeOptions, Inflector, Locale, ParameterizeOptions, PatternError,
};
use log::{info, warn};
use thiserror::Error;

/// Inflect words given as arguments, or one per line on stdin.
#[derive(Parser)]
#[command(name = "inflect", disable_help_subcommand = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,
    #[command(flatten)]
    config: ConfigArgs,
}

#[derive(Subcommand)]
enum Command {
    /// Print the plural form of each word.
    Pluralize(Words),
    /// Print the singular form of each word.
    Singularize(Words),
    /// Convert underscored words to camel case, e.g. `active_model/errors` to `ActiveModel::Errors`.
    Camelize {
        /// Lowercase the first letter.
        #[arg(long)]
        lower: bool,
        #[command(flatten)]
        words: Words,
    },
    /// Convert camel case words to underscored words.
    Underscore(Words),
    /// Replace underscores with hyphens.
    Dasherize(Words),
    /// Turn identifiers into readable labels.
    Humanize {
        /// Lowercase every word instead of capitalizing it.
        #[arg(long)]
        lowercase: bool,
        /// Keep a trailing `_id`.
        #[arg(long)]
        keep_id_suffix: bool,
        #[command(flatten)]
        words: Words,
    },
    /// Turn text into URL path segments.
    Parameterize {
        #[arg(long, default_value_t = '-')]
        separator: char,
        #[arg(long)]
        preserve_case: bool,
        #[command(flatten)]
        words: Words,
    },
    /// Underscore, then humanize with every word capitalized.
    Titleize {
        /// Keep a trailing `_id`.
        #[arg(long)]
        keep_id_suffix: bool,
        #[command(flatten)]
        words: Words,
    },
}

#[derive(clap::Args)]
struct Words {
    words: Vec<String>,
}

#[derive(clap::Args)]
struct ConfigArgs {
    /// Language tag selecting the built-in rules, e.g. `en` or `pt-BR`.
    #[arg(long, global = true, default_value = "en")]
    locale: Locale,
    /// Register an acronym.
    #[arg(long = "acronym", global = true, value_name = "WORD")]
    acronyms: Vec<String>,
    /// Register a word without a distinct plural.
    #[arg(long = "uncountable", global = true, value_name = "WORD")]
    uncountables: Vec<String>,
    /// Register an irregular pair.
    #[arg(long = "irregular", global = true, value_name = "SINGULAR:PLURAL")]
    irregulars: Vec<Irregular>,
    /// Add a pluralization rule, tried before the built-in ones.
    #[arg(long = "plural-rule", global = true, value_name = "PATTERN=TEMPLATE")]
    plural_rules: Vec<RuleArg>,
    /// Add a singularization rule, tried before the built-in ones.
    #[arg(long = "singular-rule", global = true, value_name = "PATTERN=TEMPLATE")]
    singular_rules: Vec<RuleArg>,
}

#[derive(Debug, Error, PartialEq, Eq)]
enum ArgsError {
    #[error("expected `SINGULAR:PLURAL`, found `{0}`")]
    MalformedIrregular(String),
    #[error("expected `PATTERN=TEMPLATE`, found `{0}`")]
    MalformedRule(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Irregular {
    singular: String,
    plural: String,
}

impl FromStr for Irregular {
    type Err = ArgsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((singular, plural)) if !singular.is_empty() && !plural.is_empty() => Ok(Self {
                singular: singular.to_string(),
                plural: plural.to_string(),
            }),
            _ => Err(ArgsError::MalformedIrregular(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RuleArg {
    pattern: String,
    template: String,
}

impl FromStr for RuleArg {
    type Err = ArgsError;

    /// Splits on the last `=`, so the template may be empty but cannot
    /// contain `=`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.rsplit_once('=') {
            Some((pattern, template)) if !pattern.is_empty() => Ok(Self {
                pattern: pattern.to_string(),
                template: template.to_string(),
            }),
            _ => Err(ArgsError::MalformedRule(s.to_string())),
        }
    }
}

type FileId = usize;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let mut emitter = Emitter::new();
    let inflector = cli.config.inflector(&mut emitter)?;
    emitter.abort_if_errors();

    let mut stdout = io::stdout().lock();
    let words = cli.command.words();
    if words.is_empty() {
        for line in io::stdin().lock().lines() {
            writeln!(stdout, "{}", cli.command.apply(&inflector, &line?))?;
        }
    } else {
        for word in words {
            writeln!(stdout, "{}", cli.command.apply(&inflector, word))?;
        }
    }

    Ok(())
}

impl Command {
    fn words(&self) -> &[String] {
        match self {
            Command::Pluralize(words)
            | Command::Singularize(words)
            | Command::Underscore(words)
            | Command::Dasherize(words)
            | Command::Camelize { words, .. }
            | Command::Humanize { words, .. }
            | Command::Parameterize { words, .. }
            | Command::Titleize { words, .. } => &words.words,
        }
    }

    fn apply(&self, inflector: &Inflector, word: &str) -> String {
        match self {
            Command::Pluralize(_) => inflector.pluralize(word),
            Command::Singularize(_) => inflector.singularize(word),
            Command::Camelize { lower, .. } => inflector.camelize(word, !lower),
            Command::Underscore(_) => inflector.underscore(word),
            Command::Dasherize(_) => inflector.dasherize(word),
            Command::Humanize {
                lowercase,
                keep_id_suffix,
                ..
            } => inflector.humanize_with(
                word,
                HumanizeOptions {
                    capitalizing: !lowercase,
                    preserving_id_suffix: *keep_id_suffix,
                },
            ),
            Command::Parameterize {
                separator,
                preserve_case,
                ..
            } => inflector.parameterize_with(
                word,
                ParameterizeOptions {
                    separator: *separator,
                    preserving_case: *preserve_case,
                },
            ),
            Command::Titleize { keep_id_suffix, .. } => {
                inflector.titleize_with(word, *keep_id_suffix)
            }
        }
    }
}

impl ConfigArgs {
    /// The built-in engine for the locale extended with the user's entries.
    /// Rules that do not compile are reported to `emitter` and skipped.
    fn inflector(
        &self,
        emitter: &mut Emitter,
    ) -> Result<Inflector, codespan_reporting::files::Error> {
        let mut inflector = match locales::for_locale(&self.locale) {
            Some(builtin) => builtin.clone(),
            None => {
                warn!(
                    "no built-in rules for `{}`, starting from an empty inflector",
                    self.locale
                );
                Inflector::new(self.locale.clone())
            }
        };

        for word in &self.acronyms {
            inflector.add_acronym(word);
        }
        for word in &self.uncountables {
            inflector.add_uncountable(word);
        }
        for Irregular { singular, plural } in &self.irregulars {
            if !inflector.add_irregular(singular, plural) {
                info!("`{singular}:{plural}` replaces an existing irregular");
            }
        }
        for rule in &self.plural_rules {
            if let Err(err) = inflector.add_pluralization_rule(&rule.pattern, &rule.template) {
                emitter.invalid_rule("--plural-rule", rule, &err)?;
            }
        }
        for rule in &self.singular_rules {
            if let Err(err) = inflector.add_singularization_rule(&rule.pattern, &rule.template) {
                emitter.invalid_rule("--singular-rule", rule, &err)?;
            }
        }

        Ok(inflector)
    }
}

struct Emitter {
    writer: StandardStream,
    config: codespan_reporting::term::Config,
    files: SimpleFiles<String, String>,
    has_errors: bool,
}

impl Emitter {
    fn new() -> Self {
        Self {
            writer: StandardStream::stderr(ColorChoice::Auto),
            config: codespan_reporting::term::Config::default(),
            files: SimpleFiles::new(),
            has_errors: false,
        }
    }

    fn abort_if_errors(&self) {
        if self.has_errors {
            std::process::exit(1);
        }
    }

    fn emit(
        &mut self,
        diagnostic: Diagnostic<FileId>,
    ) -> Result<(), codespan_reporting::files::Error> {
        self.has_errors = true;
        term::emit(
            &mut self.writer.lock(),
            &self.config,
            &self.files,
            &diagnostic,
        )
    }

    /// Points at the pattern half of a `PATTERN=TEMPLATE` argument.
    fn invalid_rule(
        &mut self,
        flag: &str,
        rule: &RuleArg,
        err: &PatternError,
    ) -> Result<(), codespan_reporting::files::Error> {
        let source = format!("{}={}", rule.pattern, rule.template);
        let file_id = self.files.add(flag.to_string(), source);
        let diagnostic = Diagnostic::error()
            .with_message(err.to_string())
            .with_labels(vec![
                Label::primary(file_id, 0..rule.pattern.len()).with_message("does not compile")
            ])
            .with_notes(vec![err.regex_error().to_string()]);
        self.emit(diagnostic)
    }
}
