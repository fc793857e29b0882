//! `topo` - inspect topology specs produced from a configuration file

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use topo_config::Config;
use topo_factory::{ConfigBasedTopologySpecFactory, TopologySpecFactory};
use tracing_subscriber::EnvFilter;

mod report;

use report::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "topo")]
#[command(version, about = "Produce topology specs from configuration", long_about = None)]
struct Cli {
    /// Configuration file (.json, .yaml, .yml or .toml)
    #[arg(short, long)]
    config: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Build every topology and print it
    List,
    /// Print the declared topology names
    Names,
    /// Build every topology and report success or the first failure
    Check,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let config = Config::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    tracing::debug!("Loaded config from {}", cli.config.display());
    let factory = ConfigBasedTopologySpecFactory::new(config);

    match cli.cmd {
        Commands::List => {
            let specs = factory.topologies()?;
            report::write_topologies(out, &specs, cli.format)?;
        }
        Commands::Names => {
            let names = factory.topology_names()?;
            report::write_names(out, &names, cli.format)?;
        }
        Commands::Check => {
            let specs = factory.topologies().context("topology check failed")?;
            writeln!(out, "ok ({} topologies)", specs.len())?;
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let stdout = std::io::stdout();
    run(&cli, &mut stdout.lock())
}
