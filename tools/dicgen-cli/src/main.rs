use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use dicgen_entry::{DicgenConfig, EntryRequest};
use dicgen_morph::RuleSet;
use dicgen_protocol::{ConjugationTable, FeatureVector};

#[derive(Parser)]
#[command(author, version, about = "Adds inflected entries to a MeCab user dictionary")]
struct Cli {
    /// JSON config file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Dictionary directory (skips `mecab-config --dicdir`)
    #[arg(long, value_name = "DIR", env = "DICGEN_DICDIR", global = true)]
    dicdir: Option<PathBuf>,

    /// Fail when a label or verb matches no rule
    #[arg(long, global = true)]
    strict: bool,

    /// Accept readings and terms without checking them
    #[arg(long, global = true)]
    no_validate: bool,

    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Append the rows for one entry
    Add(EntryArgs),
    /// Print the rows an entry would produce without writing them
    Preview(EntryArgs),
    /// List accepted part-of-speech labels
    Categories,
    /// Dump the conjugation tables as JSON
    Tables,
}

#[derive(Args)]
struct EntryArgs {
    /// Part-of-speech label, e.g. `名詞,固有名詞`, `動詞`, `〜しい`
    #[arg(short, long)]
    pos: String,

    #[arg(short, long)]
    term: String,

    /// Defaults to the term
    #[arg(short, long)]
    lemma: Option<String>,

    /// Katakana reading
    #[arg(short, long)]
    reading: String,
}

impl EntryArgs {
    fn request(&self) -> EntryRequest {
        let lemma = self.lemma.clone().unwrap_or_else(|| self.term.clone());
        EntryRequest::new(&self.pos, &self.term, lemma, &self.reading)
    }
}

#[derive(Serialize)]
struct TableDump<'a> {
    tables: [&'a ConjugationTable; 4],
    fixed: Vec<FixedCategory<'a>>,
}

#[derive(Serialize)]
struct FixedCategory<'a> {
    label: &'a str,
    template: &'a FeatureVector,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_config(cli: &Cli) -> anyhow::Result<DicgenConfig> {
    let file = match &cli.config {
        Some(path) => DicgenConfig::load(path)?,
        None => DicgenConfig::default(),
    };

    // `--dicdir` already folds in DICGEN_DICDIR through clap.
    let config = file.with_overrides(cli.dicdir.clone(), cli.strict);
    log::debug!("effective config: {:?}", config);
    Ok(config)
}

fn run_entry(cli: &Cli, rules: RuleSet, args: &EntryArgs, write: bool) -> anyhow::Result<()> {
    let config = load_config(cli)?;
    let req = args.request();
    if !cli.no_validate {
        req.validate()?;
    }

    let dispatcher = config.dispatcher(rules);
    let report = if write {
        dispatcher
            .add(&req)
            .with_context(|| format!("failed to add {} [{}]", req.term, req.pos))?
    } else {
        dispatcher.preview(&req)?
    };

    if let Some(reason) = &report.unhandled {
        eprintln!("warning: {}", reason);
    }
    print!("{}", report.message());
    if !report.message().ends_with('\n') && !report.is_empty() {
        println!();
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Tables are validated once, before any entry is touched.
    let rules = RuleSet::builtin().context("built-in conjugation tables are inconsistent")?;

    match &cli.command {
        Command::Add(args) => run_entry(&cli, rules, args, true)?,
        Command::Preview(args) => run_entry(&cli, rules, args, false)?,
        Command::Categories => {
            for label in rules.labels() {
                println!("{}", label);
            }
        }
        Command::Tables => {
            let dump = TableDump {
                tables: rules.tables(),
                fixed: rules
                    .fixed_categories()
                    .map(|(label, template)| FixedCategory { label, template })
                    .collect(),
            };
            println!("{}", serde_json::to_string_pretty(&dump)?);
        }
    }

    Ok(())
}
