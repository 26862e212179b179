//! slot-rules CLI
//!
//! Usage:
//!   slot-rules evaluate 1 0 1 5 6          - Winning combinations on one payline
//!   slot-rules cadence                     - Cadence for the built-in rounds
//!   slot-rules cadence --rounds r.json     - Cadence for rounds loaded from a file
//!   slot-rules --config variant.yaml ...   - Use a non-standard game variant

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indexmap::IndexMap;

use slot_rules::parser::ConfigParser;
use slot_rules::rounds::default_rounds;
use slot_rules::{GameConfig, SlotRules, SymbolCode, WinningCombination};

#[derive(Parser)]
#[command(name = "slot-rules", about = "Payline wins and reel-stop cadence")]
struct Cli {
    /// Game variant config (JSON or YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print plain text instead of JSON
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find winning combinations on a payline
    Evaluate {
        /// Symbol codes, left to right
        #[arg(required = true, num_args = 1..)]
        symbols: Vec<SymbolCode>,
    },
    /// Compute reel-stop cadence per round
    Cadence {
        /// Rounds file (JSON or YAML); defaults to the built-in rounds
        #[arg(short, long)]
        rounds: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let parser = ConfigParser::new();

    let config = match &cli.config {
        Some(path) => parser
            .load_config(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => GameConfig::default(),
    };
    let rules = SlotRules::new(config).context("Invalid game config")?;

    match cli.command {
        Commands::Evaluate { symbols } => {
            let combinations = rules
                .evaluate(&symbols)
                .with_context(|| format!("Failed to evaluate payline {symbols:?}"))?;
            print_combinations(&combinations, cli.plain)
        }
        Commands::Cadence { rounds } => {
            let rounds = match rounds {
                Some(path) => parser
                    .load_rounds(&path)
                    .with_context(|| format!("Failed to load rounds {}", path.display()))?,
                None => default_rounds(),
            };
            let cadences = rules
                .compute_cadences(&rounds)
                .context("Failed to compute cadence")?;
            print_cadences(&cadences, cli.plain)
        }
    }
}

fn print_combinations(combinations: &[WinningCombination], plain: bool) -> Result<()> {
    if !plain {
        println!("{}", serde_json::to_string_pretty(combinations)?);
        return Ok(());
    }

    if combinations.is_empty() {
        println!("no win");
    }
    for win in combinations {
        println!("symbol {:>3}  positions {:?}", win.symbol, win.positions);
    }
    Ok(())
}

fn print_cadences(cadences: &IndexMap<String, Vec<f64>>, plain: bool) -> Result<()> {
    if !plain {
        println!("{}", serde_json::to_string_pretty(cadences)?);
        return Ok(());
    }

    for (name, cadence) in cadences {
        let values: Vec<String> = cadence.iter().map(|c| format!("{c:.2}")).collect();
        println!("{name:<12} {}", values.join("  "));
    }
    Ok(())
}
