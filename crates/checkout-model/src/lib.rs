pub mod aggregates;
pub mod banner;
pub mod error;
pub mod record;

pub use aggregates::{
    Country, Currency, Customer, CustomerAddress, LineItem, LineItemPayload, LineItemType, Order,
    Salutation, SessionContext, ShippingCosts,
};
pub use banner::{BannerLocation, BannerLocationOptions};
pub use error::{CheckoutError, Result};
pub use record::{FeedConfig, NormalizedRecord};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_with_payload_field_names() {
        let record = NormalizedRecord::new();
        let json = serde_json::to_value(&record).expect("serialize record");
        assert_eq!(json["bannerLocation"], "below finish teaser");
        assert_eq!(
            json["bannerLocationOptions"]["above"],
            "above finish teaser"
        );
        assert_eq!(
            json["bannerLocationOptions"]["below"],
            "below finish teaser"
        );
        assert_eq!(json["consumerFirstName"], "");
        assert_eq!(json["orderValue"], 0.0);
    }

    #[test]
    fn order_deserializes_from_platform_shape() {
        let order: Order = serde_json::from_str(
            r#"{
                "amount_net": 100.0,
                "shipping_costs": { "total_price": 10.0, "calculated_tax_amount": 1.0 },
                "order_number": "10042",
                "line_items": [
                    { "type": "product", "payload": null },
                    { "type": "promotion", "payload": { "code": "SAVE10" } }
                ]
            }"#,
        )
        .expect("deserialize order");
        assert_eq!(order.order_number.as_deref(), Some("10042"));
        assert_eq!(order.line_items.len(), 2);
        assert_eq!(order.line_items[1].item_type, LineItemType::Promotion);
    }
}
