//! Checkout aggregates as provided by the host shop platform.
//!
//! These are capability views over already-loaded platform entities, not the
//! platform's own types: only the fields the feed reads are modeled. Every
//! sub-entity the platform may omit is an `Option`; absence is the
//! steady-state default and never an error.

use serde::{Deserialize, Serialize};

/// A placed order, reduced to the fields the feed reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Order {
    /// Order total net of value-added tax, shipping included.
    pub amount_net: f64,
    pub shipping_costs: ShippingCosts,
    pub order_number: Option<String>,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
}

/// Shipping cost summary attached to an order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShippingCosts {
    /// Gross shipping total.
    pub total_price: f64,
    /// Tax amount calculated on the shipping total.
    pub calculated_tax_amount: f64,
}

/// A single order line item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(rename = "type")]
    pub item_type: LineItemType,
    pub payload: Option<LineItemPayload>,
}

/// Line item kind as tagged by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineItemType {
    Product,
    /// Applied discount/coupon rather than a purchased product.
    Promotion,
    Credit,
    Custom,
}

/// Free-form payload the platform attaches to a line item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LineItemPayload {
    /// Coupon code for promotion items; may be absent or empty.
    pub code: Option<String>,
}

/// The customer who placed the order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Customer {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub salutation: Option<Salutation>,
    pub default_billing_address: Option<CustomerAddress>,
}

/// Salutation sub-entity; the key is a platform-defined token such as
/// `mr` or `mrs`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Salutation {
    pub salutation_key: String,
}

/// Billing address attached to a customer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerAddress {
    pub zipcode: String,
    pub city: String,
    /// Free-text street line combining street name and house number.
    pub street: String,
    pub country: Option<Country>,
    pub phone_number: Option<String>,
}

/// Country sub-entity of an address.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Country {
    /// Translated display name for the active shop language, when loaded.
    pub translated_name: Option<String>,
}

/// Order currency.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Currency {
    pub iso_code: String,
}

/// Ambient request/session context of the checkout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionContext {
    session_id: String,
}

impl SessionContext {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
        }
    }

    /// Identifier of the current shop session.
    pub fn current_session_id(&self) -> &str {
        &self.session_id
    }
}
