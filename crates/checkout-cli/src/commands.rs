use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::info;

use checkout_model::{
    BannerLocationOptions, Currency, Customer, FeedConfig, Order, SessionContext,
};
use checkout_normalize::Normalizer;

use crate::cli::NormalizeArgs;

pub fn run_normalize(args: &NormalizeArgs) -> Result<()> {
    let order: Option<Order> = load_fixture(args.order.as_deref())?;
    let customer: Option<Customer> = load_fixture(args.customer.as_deref())?;
    let currency: Option<Currency> = load_fixture(args.currency.as_deref())?;

    let config = FeedConfig {
        enabled: args.enabled,
        traffic_source_number: args.traffic_source,
        traffic_medium_number: args.traffic_medium,
        banner_location: args.banner_location.unwrap_or_default(),
    };
    let session = SessionContext::new(args.session_id.clone());

    let record = Normalizer::new(config).normalize(
        &session,
        order.as_ref(),
        customer.as_ref(),
        currency.as_ref(),
    );
    info!(
        order_id = %record.order_id,
        order_value = record.order_value,
        "normalized checkout record"
    );

    let payload = serde_json::to_string_pretty(&record).context("serialize record")?;
    println!("{payload}");
    Ok(())
}

pub fn run_banner_locations() {
    for (key, slot) in BannerLocationOptions::ENTRIES {
        println!("{key}\t{}", slot.as_str());
    }
}

/// Load an optional JSON fixture; `None` path means the aggregate is absent.
fn load_fixture<T: DeserializeOwned>(path: Option<&Path>) -> Result<Option<T>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value =
        serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(Some(value))
}
