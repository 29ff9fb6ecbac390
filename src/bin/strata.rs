use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "strata", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve one key (optionally `layer.part`) and print the result as JSON.
    Resolve(ResolveArgs),
    /// Print every resolved unit of a layer set in ordinal order.
    Table(TableArgs),
    /// Validate a layer set and report how many ordinals it uses.
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
struct ResolveArgs {
    /// Input layer set JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Layer key, or `layer.part` for a single part.
    #[arg(long)]
    key: String,

    /// Slot index (0-based) for layers that declare slots.
    #[arg(long)]
    slot: Option<u32>,
}

#[derive(Parser, Debug)]
struct TableArgs {
    /// Input layer set JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Emit the table as a JSON array instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Input layer set JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Resolve(args) => cmd_resolve(args),
        Command::Table(args) => cmd_table(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn read_layer_set(path: &Path) -> anyhow::Result<strata::Resolver> {
    let f = File::open(path).with_context(|| format!("open layer set '{}'", path.display()))?;
    let config = strata::LayerSetConfig::from_reader(BufReader::new(f))
        .with_context(|| "parse layer set JSON")?;
    let resolver = strata::Resolver::from_config(&config)
        .with_context(|| format!("invalid layer set '{}'", path.display()))?;
    Ok(resolver)
}

fn cmd_resolve(args: ResolveArgs) -> anyhow::Result<()> {
    let resolver = read_layer_set(&args.in_path)?;
    let resolved = resolver.resolve(&args.key, args.slot)?;
    println!("{}", serde_json::to_string_pretty(&resolved)?);
    Ok(())
}

fn cmd_table(args: TableArgs) -> anyhow::Result<()> {
    let resolver = read_layer_set(&args.in_path)?;
    let units = resolver.units();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&units)?);
        return Ok(());
    }

    for unit in &units {
        match unit.slot {
            Some(slot) => println!("{:>6}  {}@{slot}", unit.ordinal.get(), unit.query_key()),
            None => println!("{:>6}  {}", unit.ordinal.get(), unit.query_key()),
        }
    }
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let resolver = read_layer_set(&args.in_path)?;
    let total = resolver.total_units();
    let first = resolver.start();
    eprintln!(
        "ok: {} layers, {total} ordinals ({first}..={})",
        resolver.layers().len(),
        u64::from(first.get()) + total - 1
    );
    Ok(())
}
