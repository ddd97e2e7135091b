//! `doorline-quote`: price a catalog from the command line.
//!
//! Loads a catalog JSON document and an optional pricing config, then writes
//! quotes to stdout as JSON.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use doorline_catalog::{Catalog, Color};
use doorline_observability::LogFormat;
use doorline_pricing::{PricingConfig, PricingEngine};

#[derive(Debug, Parser)]
#[command(name = "doorline-quote")]
#[command(about = "Compute retail and full-set prices for the door catalog")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the catalog document (JSON array of doors)
    #[arg(short, long)]
    pub catalog: PathBuf,

    /// Path to the pricing config; the shipped rules apply when omitted
    #[arg(long, env = "DOORLINE_PRICING_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log output format (logs go to stderr)
    #[arg(long, value_enum, default_value_t = LogFormatArg::Json)]
    pub log_format: LogFormatArg,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Quote every door in every color
    Quote,

    /// Quote a single door
    Door {
        /// Door id
        #[arg(long)]
        id: String,

        /// Color name; omit to price the door uncolored
        #[arg(long)]
        color: Option<String>,
    },

    /// Lowest unit price of each door across its colors
    From,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Json,
    Pretty,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Json => LogFormat::Json,
            LogFormatArg::Pretty => LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FromPrice<'a> {
    door_id: &'a str,
    from_price: u64,
}

/// Build the engine from the configured (or shipped) rules.
pub fn load_engine(config: Option<&Path>) -> anyhow::Result<PricingEngine> {
    let config = match config {
        Some(path) => PricingConfig::load(path)
            .with_context(|| format!("loading pricing config {}", path.display()))?,
        None => {
            tracing::info!("no pricing config given; using shipped rules");
            PricingConfig::default()
        }
    };
    Ok(PricingEngine::new(config))
}

/// Execute `cli`, writing JSON to `out`.
pub fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let catalog = Catalog::load(&cli.catalog)
        .with_context(|| format!("loading catalog {}", cli.catalog.display()))?;
    let engine = load_engine(cli.config.as_deref())?;

    let json = match &cli.command {
        Command::Quote => serde_json::to_string_pretty(&engine.quote_catalog(&catalog))?,
        Command::Door { id, color } => {
            let door = catalog.find(id)?;
            let color = color.as_deref().map(|name| {
                door.color(name).cloned().unwrap_or_else(|| {
                    tracing::warn!(door = %door.id, color = name, "color not offered for door; pricing by name");
                    Color::named(name)
                })
            });
            serde_json::to_string_pretty(&engine.quote(door, color.as_ref()))?
        }
        Command::From => {
            let prices: Vec<FromPrice<'_>> = catalog
                .doors()
                .iter()
                .map(|door| FromPrice {
                    door_id: &door.id,
                    from_price: engine.from_price(door),
                })
                .collect();
            serde_json::to_string_pretty(&prices)?
        }
    };

    writeln!(out, "{json}").context("writing output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(name: &str) -> String {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../pricing/tests/fixtures")
            .join(name)
            .display()
            .to_string()
    }

    fn run_args(args: &[&str]) -> anyhow::Result<serde_json::Value> {
        let cli = Cli::try_parse_from(args)?;
        let mut out = Vec::new();
        run(&cli, &mut out)?;
        Ok(serde_json::from_slice(&out)?)
    }

    #[test]
    fn quotes_whole_catalog_with_shipped_rules() {
        let catalog = fixture("catalog.json");
        let json = run_args(&["doorline-quote", "--catalog", &catalog, "quote"]).unwrap();
        let quotes = json.as_array().unwrap();
        assert_eq!(quotes.len(), 7);
        assert_eq!(quotes[0]["doorId"], "innova-01");
        assert_eq!(quotes[0]["unitPrice"], 10000);
    }

    #[test]
    fn quotes_single_door_with_config() {
        let catalog = fixture("catalog.json");
        let config = fixture("pricing.json");
        let json = run_args(&[
            "doorline-quote",
            "--catalog",
            &catalog,
            "--config",
            &config,
            "door",
            "--id",
            "innova-01",
            "--color",
            "Графит",
        ])
        .unwrap();
        assert_eq!(json["unitPrice"], 12480);
        assert_eq!(json["setPrice"], 18720);
        assert_eq!(json["color"], "Графит");
    }

    #[test]
    fn unlisted_color_is_classified_by_name() {
        let catalog = fixture("catalog.json");
        let json = run_args(&[
            "doorline-quote",
            "--catalog",
            &catalog,
            "door",
            "--id",
            "innova-01",
            "--color",
            "Ivory White",
        ])
        .unwrap();
        assert_eq!(json["unitPrice"], 10000);
    }

    #[test]
    fn from_prices_per_door() {
        let catalog = fixture("catalog.json");
        let json = run_args(&["doorline-quote", "--catalog", &catalog, "from"]).unwrap();
        let prices = json.as_array().unwrap();
        assert_eq!(prices.len(), 4);
        assert_eq!(prices[0]["fromPrice"], 10000);
        assert_eq!(prices[3]["doorId"], "loft-01");
        assert_eq!(prices[3]["fromPrice"], 5000);
    }

    #[test]
    fn unknown_door_fails() {
        let catalog = fixture("catalog.json");
        let err = run_args(&["doorline-quote", "--catalog", &catalog, "door", "--id", "nope"])
            .unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn missing_catalog_fails_with_context() {
        let err = run_args(&["doorline-quote", "--catalog", "/no/such/catalog.json", "quote"])
            .unwrap_err();
        assert!(format!("{err:#}").contains("loading catalog"));
    }
}
