//! hashfront-maps -- preview, encode, and register Hashfront battle maps.
//!
//! Command output goes to stdout; logs go to stderr and are filtered with
//! `RUST_LOG` (default `info`).

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use hashfront_maps::board::MapDefinition;
use hashfront_maps::codec::Calldata;
use hashfront_maps::config::SubmitConfig;
use hashfront_maps::encode_map;
use hashfront_maps::maps;
use hashfront_maps::render::render_map;
use hashfront_maps::submit::{register_all, ControllerCli, DryRun};

#[derive(Parser, Debug)]
#[command(name = "hashfront-maps")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the authored maps
    List,

    /// Print previews of authored maps (all when none are named)
    Preview {
        names: Vec<String>,
    },

    /// Print the register_map calldata of one map
    Calldata {
        /// Authored map name
        #[arg(required_unless_present = "map_file")]
        name: Option<String>,

        /// Encode a map definition stored as JSON instead
        #[arg(long, conflicts_with = "name")]
        map_file: Option<PathBuf>,

        /// Emit `{ "name", "tokens" }` JSON instead of comma-joined tokens
        #[arg(long)]
        json: bool,
    },

    /// Print an authored map definition as JSON
    Export {
        name: String,
    },

    /// Register maps on-chain, one at a time, stopping at the first failure
    Register {
        /// Maps to register (all authored maps when none are named)
        names: Vec<String>,

        /// Preview and encode without submitting
        #[arg(long)]
        dry_run: bool,

        /// JSON file with submission settings
        #[arg(long)]
        config: Option<PathBuf>,

        /// Contract address exposing register_map
        #[arg(long, env = "HASHFRONT_CONTRACT")]
        contract: Option<String>,

        /// RPC endpoint
        #[arg(long, env = "HASHFRONT_RPC_URL")]
        rpc_url: Option<String>,
    },
}

#[derive(Serialize)]
struct CalldataOutput<'a> {
    name: &'a str,
    tokens: &'a Calldata,
}

/// Builds one authored map by name.
fn authored(name: &str) -> Result<MapDefinition> {
    let Some(layout) = maps::find(name) else {
        let known: Vec<_> = maps::names().collect();
        bail!("unknown map '{}' (known: {})", name, known.join(", "));
    };
    layout
        .build()
        .with_context(|| format!("failed to build map '{}'", name))
}

/// Builds the named maps, or every authored map when `names` is empty.
fn authored_many(names: &[String]) -> Result<Vec<MapDefinition>> {
    if names.is_empty() {
        return maps::build_all().context("failed to build authored maps");
    }
    names.iter().map(|n| authored(n)).collect()
}

fn load_map_file(path: &Path) -> Result<MapDefinition> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read map file {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid map file {}", path.display()))
}

fn run<W: Write>(command: Commands, out: &mut W) -> Result<()> {
    match command {
        Commands::List => {
            for name in maps::names() {
                writeln!(out, "{}", name)?;
            }
        }
        Commands::Preview { names } => {
            for map in authored_many(&names)? {
                render_map(&map, out)?;
            }
        }
        Commands::Calldata {
            name,
            map_file,
            json,
        } => {
            let map = match (name, map_file) {
                (_, Some(path)) => load_map_file(&path)?,
                (Some(name), None) => authored(&name)?,
                (None, None) => bail!("a map name or --map-file is required"),
            };
            let calldata =
                encode_map(&map).with_context(|| format!("failed to encode '{}'", map.name))?;
            if json {
                let payload = CalldataOutput {
                    name: &map.name,
                    tokens: &calldata,
                };
                serde_json::to_writer(&mut *out, &payload)?;
                writeln!(out)?;
            } else {
                writeln!(out, "{}", calldata.join(","))?;
            }
        }
        Commands::Export { name } => {
            let map = authored(&name)?;
            serde_json::to_writer_pretty(&mut *out, &map)?;
            writeln!(out)?;
        }
        Commands::Register {
            names,
            dry_run,
            config,
            contract,
            rpc_url,
        } => {
            let batch = authored_many(&names)?;
            for map in &batch {
                render_map(map, out)?;
            }
            out.flush()?;

            if dry_run {
                let mut dry = DryRun::default();
                register_all(&batch, &mut dry)?;
                writeln!(out)?;
                writeln!(out, "[dry-run] No maps registered. Remove --dry-run to submit.")?;
                return Ok(());
            }

            let mut settings = match config {
                Some(path) => SubmitConfig::load(&path)?,
                None => SubmitConfig::default(),
            };
            if let Some(contract) = contract {
                settings.contract = contract;
            }
            if let Some(rpc_url) = rpc_url {
                settings.rpc_url = rpc_url;
            }

            let mut cli = ControllerCli::new(settings);
            let registered = register_all(&batch, &mut cli)?;
            writeln!(out)?;
            for r in &registered {
                writeln!(out, "OK {}: {}", r.map, r.report)?;
            }
            writeln!(out, "All {} maps registered.", registered.len())?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run(args.command, &mut out)?;
    out.flush()?;
    Ok(())
}
