//! CLI argument definitions for the checkout feed.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use checkout_model::BannerLocation;

#[derive(Parser)]
#[command(
    name = "checkout-feed",
    version,
    about = "Normalize checkout data into the marketing feed record",
    long_about = "Flatten order, customer, currency and session data into the\n\
                  record consumed by the marketing/loyalty integration.\n\
                  Aggregates are read from JSON files; absent aggregates fall\n\
                  back to documented defaults."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize checkout aggregates and print the feed record as JSON.
    Normalize(NormalizeArgs),

    /// List the banner placement slots and their option keys.
    BannerLocations,
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Path to an order aggregate JSON file.
    #[arg(long = "order", value_name = "FILE")]
    pub order: Option<PathBuf>,

    /// Path to a customer aggregate JSON file.
    #[arg(long = "customer", value_name = "FILE")]
    pub customer: Option<PathBuf>,

    /// Path to a currency aggregate JSON file.
    #[arg(long = "currency", value_name = "FILE")]
    pub currency: Option<PathBuf>,

    /// Identifier of the shop session.
    #[arg(long = "session-id", value_name = "ID", default_value = "")]
    pub session_id: String,

    /// Mark the feed as enabled in the record.
    #[arg(long = "enabled")]
    pub enabled: bool,

    /// Traffic source number assigned by the integration.
    #[arg(long = "traffic-source", value_name = "N", default_value_t = 0)]
    pub traffic_source: i64,

    /// Traffic medium number assigned by the integration.
    #[arg(long = "traffic-medium", value_name = "N", default_value_t = 0)]
    pub traffic_medium: i64,

    /// Banner placement slot ("above" or "below"; default below).
    #[arg(long = "banner-location", value_name = "SLOT", value_parser = parse_banner_location)]
    pub banner_location: Option<BannerLocation>,
}

fn parse_banner_location(raw: &str) -> Result<BannerLocation, String> {
    raw.parse::<BannerLocation>().map_err(|e| e.to_string())
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
