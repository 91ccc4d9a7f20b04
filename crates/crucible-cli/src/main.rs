//! `crucible` — command-line front end for the corpus engine.
//!
//! Credentials are read from the environment exactly once, here, and
//! passed down as an explicit `ProviderConfig`; nothing below this file
//! touches ambient state.

mod args;

use anyhow::{bail, Context, Result};
use crucible_core::case::Category;
use crucible_core::config::{CrucibleConfig, ProviderConfig};
use crucible_evolve::{CommandValidator, EvolutionEngine, RunOptions};
use crucible_provider::ProviderAdapter;
use crucible_store::CorpusStore;
use tracing_subscriber::EnvFilter;

use args::{Cli, Command};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("CRUCIBLE_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = match args::parse(std::env::args().skip(1)) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{e}\n");
            eprintln!("{}", args::USAGE);
            std::process::exit(2);
        }
    };

    let config = load_config(&cli)?;
    let store = CorpusStore::new(&config.corpus_path);

    match cli.command {
        Command::Help => println!("{}", args::USAGE),
        Command::Gaps => gaps(&store, &config)?,
        Command::Stats => stats(&store)?,
        Command::Evolve {
            category,
            count,
            dry_run,
            no_validate,
        } => evolve(&store, &config, category, count, dry_run, no_validate).await?,
    }
    Ok(())
}

fn load_config(cli: &Cli) -> Result<CrucibleConfig> {
    let mut config = match &cli.config_path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            toml::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))?
        }
        None => match std::fs::read_to_string("crucible.toml") {
            Ok(raw) => toml::from_str(&raw).context("parsing crucible.toml")?,
            Err(_) => CrucibleConfig::default(),
        },
    };
    if let Some(corpus) = &cli.corpus_path {
        config.corpus_path = corpus.clone();
    }
    Ok(config)
}

async fn evolve(
    store: &CorpusStore,
    config: &CrucibleConfig,
    category: Option<String>,
    count: Option<usize>,
    dry_run: bool,
    no_validate: bool,
) -> Result<()> {
    let target = match (category, count) {
        (Some(name), count) => {
            let category = Category::parse(&name);
            if !category.is_fixed() {
                bail!("unknown category `{name}`; valid categories: {}", category_list());
            }
            Some((category, count.unwrap_or(config.evolve.batch_cap)))
        }
        (None, Some(_)) => bail!("--count requires --category"),
        (None, None) => None,
    };

    // The single place credentials are read.
    let provider_config = ProviderConfig::new(config.provider.clone())
        .with_anthropic_key(std::env::var("ANTHROPIC_API_KEY").ok())
        .with_openai_key(std::env::var("OPENAI_API_KEY").ok());
    let adapter = ProviderAdapter::new(provider_config);

    let validator = match (&config.validator.command, no_validate) {
        (Some(command), false) => Some(CommandValidator::new(
            command.clone(),
            config.validator.timeout_secs,
        )),
        _ => None,
    };

    let engine = EvolutionEngine::new(config.evolve.clone(), &adapter, validator.as_ref());
    let options = RunOptions { target, dry_run };
    let report = engine.run(store, &options).await?;

    for result in &report.categories {
        match &result.failure {
            Some(reason) => println!("{:<16} failed: {reason}", result.category.name()),
            None => println!(
                "{:<16} accepted {} of {} requested ({} rejected)",
                result.category.name(),
                result.accepted,
                result.requested,
                result.rejected
            ),
        }
    }

    if report.dry_run {
        println!("\ndry run: {} case(s) generated, corpus untouched", report.cases.len());
        println!("{}", serde_json::to_string_pretty(&report.cases)?);
    } else {
        println!("\n{} case(s) merged into {}", report.merged, store.path().display());
    }
    Ok(())
}

fn gaps(store: &CorpusStore, config: &CrucibleConfig) -> Result<()> {
    let corpus = store.load()?;
    let report = crucible_evolve::gaps::analyze(&corpus, config.evolve.target_per_category);

    println!(
        "{:<16} {:>6} {:>7} {:>5}",
        "category", "count", "target", "gap"
    );
    for coverage in &report.coverage {
        println!(
            "{:<16} {:>6} {:>7} {:>5}",
            coverage.category.name(),
            coverage.count,
            config.evolve.target_per_category,
            coverage.gap
        );
    }
    if report.deficits.is_empty() {
        println!("\nall categories at target");
    }
    Ok(())
}

fn stats(store: &CorpusStore) -> Result<()> {
    let corpus = store.load()?;
    println!("cases:    {}", corpus.cases.len());
    println!("evolved:  {}", corpus.evolved_count);
    println!("updated:  {}", corpus.updated);

    for category in &Category::FIXED {
        let count = corpus.count_of(category);
        if count > 0 {
            println!("  {:<16} {count}", category.name());
        }
    }
    let unknown = corpus
        .cases
        .iter()
        .filter(|c| !c.category.is_fixed())
        .count();
    if unknown > 0 {
        println!("  {:<16} {unknown}", "(unknown)");
    }
    Ok(())
}

fn category_list() -> String {
    Category::FIXED
        .iter()
        .map(Category::name)
        .collect::<Vec<_>>()
        .join(", ")
}
