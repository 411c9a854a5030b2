//! Resolution Engine Binary
//!
//! Runs one resolution pass over a strategy document: extracts the
//! pipeline's user-configurable inputs, derives the referenced symbols,
//! resolves their prices, and prints the result as JSON.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p resolution-engine -- strategy.json
//! ```
//!
//! # Environment Variables
//!
//! ## Required
//! - `QUOTE_SOURCE_URL`: Base URL of the quote service
//!
//! ## Optional
//! - `QUOTE_SOURCE_KEY`: API key sent as `X-API-Key`
//! - `QUOTE_SOURCE_TIMEOUT_MS`: Per-request timeout (default: 5000)
//! - `RUST_LOG`: Log level (default: info)

use std::sync::Arc;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use resolution_engine::infrastructure::telemetry;
use resolution_engine::{
    FallbackPrices, HttpQuoteSource, PipelineGraph, PipelineInputDef, PriceMap, PriceResolver,
    PriceSubscriptionController, ResolverConfig, Transaction, derive_symbols, extract_inputs,
};

/// Strategy document as exported by the strategy store.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StrategyDocument {
    #[serde(default)]
    pipeline: Option<PipelineGraph>,
    #[serde(default)]
    transactions: Vec<Transaction>,
}

/// Output of one resolution pass.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResolutionReport {
    inputs: Vec<PipelineInputDef>,
    prices: PriceMap,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();
    telemetry::init();

    let config = ResolverConfig::from_env()?;
    tracing::debug!(quote_source = ?config.quote_source, "Configuration loaded");

    let path = std::env::args()
        .nth(1)
        .context("usage: resolution-engine <strategy.json>")?;
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("reading strategy document {path}"))?;
    let strategy: StrategyDocument =
        serde_json::from_str(&raw).context("parsing strategy document")?;

    let inputs = extract_inputs(strategy.pipeline.as_ref());
    tracing::info!(count = inputs.len(), "Extracted pipeline inputs");

    let symbols = derive_symbols(&strategy.transactions);
    tracing::info!(count = symbols.len(), "Derived instrument symbols");

    let source = Arc::new(HttpQuoteSource::new(&config.quote_source)?);
    let resolver = Arc::new(PriceResolver::new(source, FallbackPrices::default()));
    let controller = PriceSubscriptionController::new(resolver);

    let mut prices_rx = controller.subscribe();
    controller.update_symbols(&symbols);
    if !symbols.is_empty() {
        prices_rx.changed().await.context("resolution pass ended")?;
    }
    let prices = prices_rx.borrow_and_update().clone();

    let report = ResolutionReport { inputs, prices };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

/// Load `.env` from the working directory or the nearest ancestor.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}
