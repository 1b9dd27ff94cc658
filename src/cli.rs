//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::fmt::Write as _;
use std::process::ExitCode;

use crate::adapters::embedded_presets::EmbeddedPresets;
use crate::domain::bootstrap::build_registry;
use crate::domain::defaults::DefaultsTable;
use crate::domain::error::ParamsError;
use crate::domain::record::RecordKind;
use crate::domain::registry::ConfigRegistry;
use crate::domain::timeframe::Timeframe;

#[derive(Parser, Debug)]
#[command(name = "bullsparams", about = "Bulls Power parameter presets")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the registry from the built-in presets and report
    Check,
    /// List every registered (symbol, timeframe, kind)
    List,
    /// Print the resolved parameters for one entry
    Show {
        #[arg(short, long)]
        symbol: String,
        #[arg(short, long)]
        timeframe: String,
        #[arg(short, long)]
        kind: String,
    },
    /// Print the field names and baseline values of a record kind
    Fields {
        #[arg(short, long)]
        kind: String,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    let output = match cli.command {
        Command::Check => load_registry().and_then(|r| render_check(&r)),
        Command::List => load_registry().and_then(|r| render_list(&r)),
        Command::Show {
            symbol,
            timeframe,
            kind,
        } => load_registry().and_then(|r| render_show(&r, &symbol, &timeframe, &kind)),
        Command::Fields { kind } => render_fields(&kind),
    };

    match output {
        Ok(text) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

pub fn load_registry() -> Result<ConfigRegistry, ParamsError> {
    build_registry(&EmbeddedPresets::new())
}

pub fn render_check(registry: &ConfigRegistry) -> Result<String, ParamsError> {
    let mut pairs: Vec<(String, Timeframe)> = registry
        .entries()?
        .map(|(key, _)| (key.symbol.clone(), key.timeframe))
        .collect();
    pairs.dedup();
    Ok(format!(
        "OK: {} entries across {} symbol/timeframe pairs\n",
        registry.len(),
        pairs.len()
    ))
}

pub fn render_list(registry: &ConfigRegistry) -> Result<String, ParamsError> {
    let mut out = String::new();
    for (key, _) in registry.entries()? {
        let _ = writeln!(out, "{:<8} {:<4} {}", key.symbol, key.timeframe, key.kind);
    }
    Ok(out)
}

pub fn render_show(
    registry: &ConfigRegistry,
    symbol: &str,
    timeframe: &str,
    kind: &str,
) -> Result<String, ParamsError> {
    let timeframe: Timeframe = timeframe.parse()?;
    let kind: RecordKind = kind.parse()?;
    let record = registry.lookup(symbol, timeframe, kind)?;
    Ok(record.to_string())
}

pub fn render_fields(kind: &str) -> Result<String, ParamsError> {
    let defaults = DefaultsTable::for_kind(kind)?;
    let mut out = format!("# {}\n", defaults.name());
    out.push_str(&defaults.record().to_string());
    Ok(out)
}
