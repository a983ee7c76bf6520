mod logic;

use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;
use log::info;
use taverncraft_game::{ReferenceData, decode_to_seed};

use logic::{
    BarkeepStrategy, ShiftRunner, SimulationConfig, generate_console_report, generate_json_report,
};

#[derive(Debug, Parser)]
#[command(name = "taverncraft-tester", version)]
#[command(about = "Automated QA testing for TavernCraft - headless bar-shift simulation")]
struct Args {
    /// Seeds to run: decimal numbers or BAR-WORD42 share codes, comma-separated
    #[arg(long, default_value = "1337")]
    seeds: String,

    /// Strategies to run (comma-separated keys; see --list-strategies)
    #[arg(long, default_value = "perfect")]
    strategies: String,

    /// Days to simulate per run
    #[arg(long, default_value_t = 3)]
    days: u32,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "console"])]
    report: String,

    /// List all available strategies and exit
    #[arg(long)]
    list_strategies: bool,
}

fn split_csv(input: &str) -> Vec<&str> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

fn resolve_seed(input: &str) -> Result<u64> {
    if let Ok(seed) = input.parse::<u64>() {
        return Ok(seed);
    }
    if let Some(seed) = decode_to_seed(input) {
        return Ok(seed);
    }
    bail!("seed {input:?} is neither a number nor a BAR-WORD42 share code")
}

fn resolve_strategies(input: &str) -> Result<Vec<BarkeepStrategy>> {
    split_csv(input)
        .into_iter()
        .map(|key| {
            if key.eq_ignore_ascii_case("all") {
                return Ok(BarkeepStrategy::ALL.to_vec());
            }
            BarkeepStrategy::from_key(key)
                .map(|s| vec![s])
                .with_context(|| format!("unknown strategy {key:?}"))
        })
        .collect::<Result<Vec<_>>>()
        .map(|nested| nested.into_iter().flatten().collect())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.list_strategies {
        println!("Available strategies:");
        for strategy in BarkeepStrategy::ALL {
            println!("  {} - {}", strategy.key().bold(), strategy.label());
        }
        return Ok(());
    }

    if args.days == 0 {
        bail!("--days must be at least 1");
    }

    let seeds = split_csv(&args.seeds)
        .into_iter()
        .map(resolve_seed)
        .collect::<Result<Vec<_>>>()?;
    if seeds.is_empty() {
        bail!("no seeds supplied");
    }
    let strategies = resolve_strategies(&args.strategies)?;
    if strategies.is_empty() {
        bail!("no strategies supplied");
    }

    let started = Instant::now();
    let mut summaries = Vec::with_capacity(seeds.len() * strategies.len());
    for strategy in &strategies {
        for &seed in &seeds {
            info!("running {} seed {seed} for {} days", strategy.key(), args.days);
            let config = SimulationConfig::new(*strategy, seed, args.days);
            let mut runner = ShiftRunner::new(config, ReferenceData::builtin());
            summaries.push(runner.run());
        }
    }
    let total_duration = started.elapsed();

    match args.report.as_str() {
        "json" => generate_json_report(&summaries)?,
        _ => generate_console_report(&summaries, total_duration),
    }

    Ok(())
}
