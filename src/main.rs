use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use budget_ledger::{load_journal, read_journal, replay, CategoryRegistry, JournalEntry, Settings};

const DEMO_JOURNAL: &str = "\
category,action,amount,description,target
food,deposit,1000,initial deposit,
food,withdraw,10.15,groceries,
food,withdraw,15.89,restaurant and more food for dessert,
food,transfer,50,,clothing
clothing,withdraw,25.55,,
clothing,withdraw,100,,
auto,deposit,1000,initial deposit,
auto,withdraw,15,,
";

#[derive(Debug, Parser)]
#[command(name = "budget-ledger", version, about = "Category ledgers and spend charts")]
struct Cli {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Log every ledger operation.
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print every ledger followed by the spend chart
    Report { journal: PathBuf },
    /// Print the spend chart only
    Chart { journal: PathBuf },
    /// Print a JSON snapshot of balances and spending
    Export { journal: PathBuf },
    /// Replay a built-in sample journal and print the report
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;

    let level = if cli.verbose { "debug" } else { settings.log_level.as_str() };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("budget_ledger={level}"))),
        )
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Command::Report { journal } => {
            let registry = replay_file(journal)?;
            print_report(&registry, &settings);
        }
        Command::Chart { journal } => {
            let registry = replay_file(journal)?;
            println!("{}", registry.spend_chart(&settings.chart));
        }
        Command::Export { journal } => {
            let registry = replay_file(journal)?;
            let json = serde_json::to_string_pretty(&registry.snapshot())
                .context("Failed to serialize snapshot")?;
            println!("{json}");
        }
        Command::Demo => {
            let entries = read_journal(DEMO_JOURNAL.as_bytes()).context("Failed to read demo journal")?;
            let registry = replay_entries(&entries);
            print_report(&registry, &settings);
        }
    }

    Ok(())
}

fn replay_file(path: &Path) -> Result<CategoryRegistry> {
    let entries = load_journal(path)
        .with_context(|| format!("Failed to load journal {}", path.display()))?;
    Ok(replay_entries(&entries))
}

fn replay_entries(entries: &[JournalEntry]) -> CategoryRegistry {
    let mut registry = CategoryRegistry::new();
    let report = replay(entries, &mut registry);

    if !report.refused.is_empty() {
        eprintln!("❌ {}", report.summary());
        for refusal in &report.refused {
            eprintln!("   line {}: {}", refusal.line, refusal.reason);
        }
    }

    registry
}

fn print_report(registry: &CategoryRegistry, settings: &Settings) {
    if !registry.is_empty() {
        println!("{}\n", registry.render_ledgers(&settings.layout));
    }
    println!("{}", registry.spend_chart(&settings.chart));
}
