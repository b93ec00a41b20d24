use anyhow::{Context, Result};
use clap::Parser;
use dialoguer::Confirm;
use std::io::IsTerminal;
use std::path::PathBuf;
use stylesort::{Config, Reorganizer, Summary};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stylesort")]
#[command(about = "Sort flat component stylesheets into category folders and update their imports")]
#[command(version)]
struct Cli {
    /// Project root the configured paths are resolved against
    #[arg(long, value_name = "DIR", default_value = ".")]
    root: PathBuf,

    /// Settings file (defaults to config/settings.toml when present)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Dry run (preview only, don't move files or rewrite imports)
    #[arg(long)]
    dry_run: bool,

    /// Skip confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    let config = Config::load(cli.config.as_deref())?;
    let table = config.category_table()?;
    let layout = config.layout(&cli.root)?;
    let dry_run = cli.dry_run || config.organizer.dry_run_default;

    println!("\n🚀 Starting CSS reorganization...\n");
    println!("Organizing directory: {}", layout.components_dir.display());

    let reorganizer = Reorganizer::new(layout, table, config.root_rewrites());
    let plan = reorganizer.plan();
    println!("{}\n", plan);

    let interactive = std::io::stdin().is_terminal();
    if !dry_run && !cli.yes && !config.organizer.skip_confirmation && interactive {
        let proceed = Confirm::new()
            .with_prompt("Proceed with stylesheet reorganization?")
            .default(false)
            .interact()
            .context("Failed to read user input")?;

        if !proceed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let report = reorganizer.run_plan(plan, dry_run)?;
    println!("{}", Summary::new(reorganizer.table(), &report));

    Ok(())
}
