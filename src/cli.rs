// src/cli.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use tracing::info;

use crate::adapter;
use crate::engine::Engine;
use crate::functions::{Func, Group};
use crate::params;

#[derive(Parser)]
#[command(name = "talib-inspect")]
#[command(about = "Inspect and run TA-Lib functions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List available functions
    List {
        /// Only functions of this group (e.g. "momentum", "overlap_studies")
        #[arg(short, long)]
        group: Option<String>,
    },

    /// Print the metadata of a function as JSON
    Describe {
        /// Function name (e.g. "SMA" or "ht_sine")
        name: String,
    },

    /// Print the lookback of a function
    Lookback {
        name: String,

        /// Parameter as name=value; omitted parameters take their default
        #[arg(short, long = "param", value_name = "NAME=VALUE")]
        params: Vec<String>,
    },

    /// Run a function on comma-separated input series
    Run {
        name: String,

        /// Input series, once per declared input, e.g. "1,2,3,4,5"
        #[arg(short, long = "input", value_name = "VALUES")]
        inputs: Vec<String>,

        /// Parameter as name=value; omitted parameters take their default
        #[arg(short, long = "param", value_name = "NAME=VALUE")]
        params: Vec<String>,
    },

    /// Print the engine version
    Version,
}

/// Parse `name=value` pairs into named parameters
pub fn parse_params(raw: &[String]) -> Result<Vec<(String, Value)>> {
    raw.iter()
        .map(|pair| -> Result<(String, Value)> {
            let (name, value) = pair
                .split_once('=')
                .with_context(|| format!("Parameter `{}` is not of the form name=value", pair))?;
            Ok((name.trim().to_string(), Value::String(value.trim().to_string())))
        })
        .collect()
}

/// Parse a comma-separated series of numbers
pub fn parse_series(raw: &str) -> Result<Vec<f64>> {
    raw.split(',')
        .map(|value| {
            value
                .trim()
                .parse::<f64>()
                .with_context(|| format!("Invalid number `{}` in input series", value.trim()))
        })
        .collect()
}

/// Run `f` against the native engine
#[cfg(feature = "talib")]
fn with_engine(f: impl FnOnce(&dyn Engine) -> Result<()>) -> Result<()> {
    let settings = crate::config::Settings::load().context("Failed to load settings")?;
    let engine = crate::engine::TaLib::initialize_with(&settings.engine)
        .context("Failed to initialize TA-Lib")?;
    f(engine)
}

#[cfg(not(feature = "talib"))]
fn with_engine(_f: impl FnOnce(&dyn Engine) -> Result<()>) -> Result<()> {
    anyhow::bail!("This binary was built without the `talib` feature; rebuild with --features talib")
}

/// Execute a command from the CLI
pub fn execute_command(command: Commands) -> Result<()> {
    match command {
        Commands::List { group } => {
            let group = group
                .map(|g| g.parse::<Group>())
                .transpose()
                .map_err(anyhow::Error::msg)?;

            println!("{:<20} | {:<22} | {}", "Name", "Group", "Description");
            println!("{:-<20}-+-{:-<22}-+-{:-<40}", "", "", "");
            let mut count = 0;
            for func in Func::ALL.iter().filter(|f| group.map_or(true, |g| f.group() == g)) {
                let info = func.info();
                println!("{:<20} | {:<22} | {}", info.name, info.group.label(), info.hint);
                count += 1;
            }
            println!("{} functions", count);
        }

        Commands::Describe { name } => {
            let func: Func = name.parse()?;
            let json = serde_json::to_string_pretty(func.info())?;
            println!("{}", json);
        }

        Commands::Lookback { name, params } => {
            let func: Func = name.parse()?;
            let values = params::resolve(func, &parse_params(&params)?)?;
            with_engine(|engine| {
                let lookback = adapter::lookback(engine, func, &values)?;
                println!("{}", lookback);
                Ok(())
            })?;
        }

        Commands::Run { name, inputs, params } => {
            let func: Func = name.parse()?;
            let values = params::resolve(func, &parse_params(&params)?)?;
            let series = inputs
                .iter()
                .map(|raw| parse_series(raw))
                .collect::<Result<Vec<_>>>()?;
            let slices: Vec<&[f64]> = series.iter().map(Vec::as_slice).collect();

            with_engine(|engine| {
                let outcome = adapter::evaluate_fresh(engine, func, &slices, &values)
                    .with_context(|| format!("Failed to evaluate {}", func))?;
                info!("{} returned {} samples from index {}", func, outcome.count, outcome.begin);

                let outputs: serde_json::Map<String, Value> = func
                    .info()
                    .outputs
                    .iter()
                    .zip(&outcome.values)
                    .map(|(spec, series)| -> Result<(String, Value)> {
                        Ok((spec.name.to_string(), serde_json::to_value(series)?))
                    })
                    .collect::<Result<_>>()?;
                let report = json!({
                    "function": func,
                    "begin": outcome.begin,
                    "count": outcome.count,
                    "outputs": outputs,
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
                Ok(())
            })?;
        }

        Commands::Version => {
            println!("talib-inspect {}", env!("CARGO_PKG_VERSION"));
            with_engine(|engine| {
                println!("{}", engine.name());
                Ok(())
            })?;
        }
    }

    Ok(())
}
