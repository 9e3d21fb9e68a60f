use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dsamatch::{Engine, EngineConfig, QueryLog, RankPolicy, RankedMatch, Record};

mod cli;
use cli::{display, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let policy = RankPolicy {
        max_alternates: cli.alternates,
        ..RankPolicy::default()
    };
    let config = EngineConfig::default().with_policy(policy);
    let engine = Engine::load(&cli.catalog, config)
        .with_context(|| format!("could not load catalog {}", cli.catalog.display()))?;

    if engine.is_empty() {
        println!("No questions loaded. Check your data file.");
        return Ok(());
    }

    let query = match cli.inline_query() {
        Some(query) => query,
        None => prompt(engine.len())?,
    };
    if query.trim().is_empty() {
        println!("No input provided.");
        return Ok(());
    }

    let ranked = engine.query(&query);

    if let (Some(path), Some(best)) = (&cli.log, &ranked.best) {
        if let Err(e) = QueryLog::new(path).append(&query, best) {
            tracing::warn!("{}", e);
        }
    }

    if cli.json {
        let json = serde_json::to_string_pretty(&ranked).context("could not encode result")?;
        println!("{}", json);
        return Ok(());
    }

    print_result(&engine, &query, &ranked, cli.explain);
    Ok(())
}

/// `RUST_LOG` wins; otherwise `--verbose` means debug, else warnings only.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "dsamatch=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn prompt(loaded: usize) -> Result<String> {
    println!("Loaded {} questions.", loaded);
    print!("Enter your DSA question (or keywords): ");
    io::stdout().flush().context("could not write prompt")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("could not read query from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn print_result(engine: &Engine, query: &str, ranked: &RankedMatch, explain: bool) {
    let Some(best) = &ranked.best else {
        print!("{}", display::no_match_block());
        return;
    };
    let Some(record) = engine.resolve(best) else {
        return;
    };

    print!("{}", display::best_match_block(record, ranked.confidence));

    let alternates: Vec<&Record> = ranked
        .alternates
        .iter()
        .filter_map(|c| engine.resolve(c))
        .collect();
    print!("{}", display::alternates_block(&alternates));

    if explain {
        if let Some(breakdown) = engine.explain(query, best.index) {
            print!("{}", display::breakdown_block(&breakdown));
        }
    }
}
