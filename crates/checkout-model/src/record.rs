//! The flat record handed to the marketing integration.

use chrono::Utc;
use serde::Serialize;

use crate::banner::{BannerLocation, BannerLocationOptions};

/// Static feed configuration defaults.
///
/// These seed the identity fields of the record; the shop operator's plugin
/// configuration is resolved by the caller and passed in here.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FeedConfig {
    pub enabled: bool,
    pub traffic_source_number: i64,
    pub traffic_medium_number: i64,
    pub banner_location: BannerLocation,
}

/// Flat, serializable view of one checkout, consumed by the marketing
/// integration.
///
/// Constructed with documented defaults and overwritten stage by stage
/// during normalization; read-only afterwards. Field names serialize in
/// camelCase to match the integration payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedRecord {
    pub enabled: bool,
    pub traffic_source_number: i64,
    pub traffic_medium_number: i64,
    pub banner_location: BannerLocation,
    pub banner_location_options: BannerLocationOptions,
    pub consumer_city: String,
    pub consumer_country: String,
    pub consumer_email: String,
    pub consumer_first_name: String,
    pub consumer_last_name: String,
    pub consumer_phone: String,
    pub consumer_salutation: String,
    pub consumer_street: String,
    pub consumer_street_number: String,
    pub consumer_zipcode: String,
    pub order_currency: String,
    pub order_id: String,
    pub session_id: String,
    pub used_coupon_code: String,
    /// Net order value excluding shipping, in the order currency.
    pub order_value: f64,
    /// Seconds since the Unix epoch, refreshed on each initialization.
    pub timestamp: i64,
}

impl NormalizedRecord {
    /// A record with all fields at their documented defaults and a fresh
    /// timestamp.
    pub fn new() -> Self {
        Self {
            enabled: false,
            traffic_source_number: 0,
            traffic_medium_number: 0,
            banner_location: BannerLocation::default(),
            banner_location_options: BannerLocationOptions,
            consumer_city: String::new(),
            consumer_country: String::new(),
            consumer_email: String::new(),
            consumer_first_name: String::new(),
            consumer_last_name: String::new(),
            consumer_phone: String::new(),
            consumer_salutation: String::new(),
            consumer_street: String::new(),
            consumer_street_number: String::new(),
            consumer_zipcode: String::new(),
            order_currency: String::new(),
            order_id: String::new(),
            session_id: String::new(),
            used_coupon_code: String::new(),
            order_value: 0.0,
            timestamp: Utc::now().timestamp(),
        }
    }
}

impl Default for NormalizedRecord {
    fn default() -> Self {
        Self::new()
    }
}
