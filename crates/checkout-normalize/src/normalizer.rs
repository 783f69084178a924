//! Stage-wise normalization of checkout aggregates into the feed record.

use tracing::debug;

use checkout_model::{
    Currency, Customer, CustomerAddress, FeedConfig, LineItem, LineItemType, NormalizedRecord,
    Order, SessionContext,
};

use crate::street::split_street;

/// Maps a platform salutation key to the display string the integration
/// expects. Unknown keys map to empty, not to the raw key.
pub fn salutation_display(key: &str) -> &'static str {
    match key {
        "mr" => "Mr.",
        "mrs" => "Mrs.",
        _ => "",
    }
}

/// Net order value excluding shipping.
///
/// The order's net amount still contains the net shipping cost, so the
/// gross shipping total minus its calculated tax is subtracted back out.
/// This isolates the value attributable to goods for attribution in the
/// downstream marketing system.
pub fn net_order_value(order: &Order) -> f64 {
    let shipping_net = order.shipping_costs.total_price - order.shipping_costs.calculated_tax_amount;
    order.amount_net - shipping_net
}

/// First promotion line item carrying a non-empty coupon code, in the
/// iteration order the platform provides. Empty codes are skipped.
pub fn first_coupon_code(line_items: &[LineItem]) -> Option<&str> {
    line_items
        .iter()
        .filter(|item| item.item_type == LineItemType::Promotion)
        .filter_map(|item| item.payload.as_ref()?.code.as_deref())
        .find(|code| !code.is_empty())
}

/// Flattens checkout aggregates into a [`NormalizedRecord`].
///
/// Absent aggregates are the steady-state default, never an error: every
/// field they would have filled keeps its documented default. Each call
/// produces an independent record with a fresh timestamp.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    config: FeedConfig,
}

impl Normalizer {
    pub fn new(config: FeedConfig) -> Self {
        Self { config }
    }

    /// Run all stages over a fresh record: currency, customer (with
    /// salutation and billing address), order, session.
    pub fn normalize(
        &self,
        session: &SessionContext,
        order: Option<&Order>,
        customer: Option<&Customer>,
        currency: Option<&Currency>,
    ) -> NormalizedRecord {
        let mut record = NormalizedRecord::new();
        record.enabled = self.config.enabled;
        record.traffic_source_number = self.config.traffic_source_number;
        record.traffic_medium_number = self.config.traffic_medium_number;
        record.banner_location = self.config.banner_location;

        if let Some(currency) = currency {
            apply_currency(&mut record, currency);
        }
        if let Some(customer) = customer {
            apply_customer(&mut record, customer);
        }
        if let Some(order) = order {
            apply_order(&mut record, order);
        }
        record.session_id = session.current_session_id().to_string();

        debug!(
            order = order.is_some(),
            customer = customer.is_some(),
            currency = currency.is_some(),
            "normalized checkout record"
        );
        record
    }
}

fn apply_currency(record: &mut NormalizedRecord, currency: &Currency) {
    record.order_currency = currency.iso_code.clone();
}

fn apply_customer(record: &mut NormalizedRecord, customer: &Customer) {
    record.consumer_email = customer.email.clone();
    record.consumer_first_name = customer.first_name.clone();
    record.consumer_last_name = customer.last_name.clone();
    if let Some(salutation) = &customer.salutation {
        record.consumer_salutation = salutation_display(&salutation.salutation_key).to_string();
    }
    if let Some(address) = &customer.default_billing_address {
        apply_address(record, address);
    }
}

fn apply_address(record: &mut NormalizedRecord, address: &CustomerAddress) {
    record.consumer_zipcode = address.zipcode.clone();
    record.consumer_city = address.city.clone();

    let parts = split_street(&address.street);
    record.consumer_street = parts.street;
    record.consumer_street_number = parts.number;

    // Only the translated display name is forwarded; no fallback to a
    // country code.
    if let Some(name) = address
        .country
        .as_ref()
        .and_then(|country| country.translated_name.as_deref())
    {
        record.consumer_country = name.to_string();
    }
    if let Some(phone) = &address.phone_number {
        record.consumer_phone = phone.clone();
    }
}

fn apply_order(record: &mut NormalizedRecord, order: &Order) {
    record.order_value = net_order_value(order);
    if let Some(number) = &order.order_number {
        record.order_id = number.clone();
    }
    if let Some(code) = first_coupon_code(&order.line_items) {
        record.used_coupon_code = code.to_string();
    }
}
