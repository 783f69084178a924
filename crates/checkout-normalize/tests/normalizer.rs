//! Tests for stage-wise record normalization.

use checkout_model::{
    BannerLocation, Country, Currency, Customer, CustomerAddress, FeedConfig, LineItem,
    LineItemPayload, LineItemType, Order, Salutation, SessionContext, ShippingCosts,
};
use checkout_normalize::Normalizer;

fn session() -> SessionContext {
    SessionContext::new("sess-0815")
}

fn sample_customer() -> Customer {
    Customer {
        email: "erika@example.com".to_string(),
        first_name: "Erika".to_string(),
        last_name: "Mustermann".to_string(),
        salutation: Some(Salutation {
            salutation_key: "mrs".to_string(),
        }),
        default_billing_address: Some(CustomerAddress {
            zipcode: "10117".to_string(),
            city: "Berlin".to_string(),
            street: "Musterstraße 12a".to_string(),
            country: Some(Country {
                translated_name: Some("Germany".to_string()),
            }),
            phone_number: Some("+49 30 123456".to_string()),
        }),
    }
}

fn sample_order() -> Order {
    Order {
        amount_net: 100.0,
        shipping_costs: ShippingCosts {
            total_price: 10.0,
            calculated_tax_amount: 1.0,
        },
        order_number: Some("10042".to_string()),
        line_items: vec![
            LineItem {
                item_type: LineItemType::Product,
                payload: None,
            },
            LineItem {
                item_type: LineItemType::Promotion,
                payload: Some(LineItemPayload {
                    code: Some(String::new()),
                }),
            },
            LineItem {
                item_type: LineItemType::Promotion,
                payload: Some(LineItemPayload {
                    code: Some("SAVE10".to_string()),
                }),
            },
        ],
    }
}

#[test]
fn all_aggregates_absent_keeps_defaults() {
    let record = Normalizer::default().normalize(&session(), None, None, None);
    assert_eq!(record.order_currency, "");
    assert_eq!(record.consumer_email, "");
    assert_eq!(record.consumer_first_name, "");
    assert_eq!(record.consumer_last_name, "");
    assert_eq!(record.consumer_salutation, "");
    assert_eq!(record.consumer_street, "");
    assert_eq!(record.consumer_street_number, "");
    assert_eq!(record.consumer_zipcode, "");
    assert_eq!(record.consumer_city, "");
    assert_eq!(record.consumer_country, "");
    assert_eq!(record.consumer_phone, "");
    assert_eq!(record.order_id, "");
    assert_eq!(record.used_coupon_code, "");
    assert_eq!(record.order_value, 0.0);
    assert_eq!(record.session_id, "sess-0815");
}

#[test]
fn config_seeds_identity_fields() {
    let normalizer = Normalizer::new(FeedConfig {
        enabled: true,
        traffic_source_number: 4711,
        traffic_medium_number: 1,
        banner_location: BannerLocation::AboveFinishTeaser,
    });
    let record = normalizer.normalize(&session(), None, None, None);
    assert!(record.enabled);
    assert_eq!(record.traffic_source_number, 4711);
    assert_eq!(record.traffic_medium_number, 1);
    assert_eq!(record.banner_location, BannerLocation::AboveFinishTeaser);
}

#[test]
fn currency_stage_copies_iso_code() {
    let currency = Currency {
        iso_code: "EUR".to_string(),
    };
    let record = Normalizer::default().normalize(&session(), None, None, Some(&currency));
    assert_eq!(record.order_currency, "EUR");
}

#[test]
fn customer_stage_fills_consumer_fields() {
    let customer = sample_customer();
    let record = Normalizer::default().normalize(&session(), None, Some(&customer), None);
    assert_eq!(record.consumer_email, "erika@example.com");
    assert_eq!(record.consumer_first_name, "Erika");
    assert_eq!(record.consumer_last_name, "Mustermann");
    assert_eq!(record.consumer_salutation, "Mrs.");
    assert_eq!(record.consumer_zipcode, "10117");
    assert_eq!(record.consumer_city, "Berlin");
    assert_eq!(record.consumer_street, "Musterstraße");
    assert_eq!(record.consumer_street_number, "12a");
    assert_eq!(record.consumer_country, "Germany");
    assert_eq!(record.consumer_phone, "+49 30 123456");
}

#[test]
fn unknown_salutation_maps_to_empty() {
    let mut customer = sample_customer();
    customer.salutation = Some(Salutation {
        salutation_key: "dr".to_string(),
    });
    let record = Normalizer::default().normalize(&session(), None, Some(&customer), None);
    assert_eq!(record.consumer_salutation, "");
}

#[test]
fn missing_address_sub_entities_stay_empty() {
    let mut customer = sample_customer();
    let address = customer.default_billing_address.as_mut().unwrap();
    address.country = None;
    address.phone_number = None;
    let record = Normalizer::default().normalize(&session(), None, Some(&customer), None);
    assert_eq!(record.consumer_country, "");
    assert_eq!(record.consumer_phone, "");
}

#[test]
fn country_without_translated_name_stays_empty() {
    // No fallback to a country code.
    let mut customer = sample_customer();
    customer.default_billing_address.as_mut().unwrap().country =
        Some(Country { translated_name: None });
    let record = Normalizer::default().normalize(&session(), None, Some(&customer), None);
    assert_eq!(record.consumer_country, "");
}

#[test]
fn order_value_excludes_net_shipping() {
    let order = sample_order();
    let record = Normalizer::default().normalize(&session(), Some(&order), None, None);
    // 100.00 - (10.00 - 1.00)
    assert_eq!(record.order_value, 91.0);
    assert_eq!(record.order_id, "10042");
}

#[test]
fn first_promotion_with_non_empty_code_wins() {
    let order = sample_order();
    let record = Normalizer::default().normalize(&session(), Some(&order), None, None);
    assert_eq!(record.used_coupon_code, "SAVE10");
}

#[test]
fn order_without_coupon_or_number_keeps_defaults() {
    let mut order = sample_order();
    order.order_number = None;
    order.line_items = vec![LineItem {
        item_type: LineItemType::Product,
        payload: Some(LineItemPayload {
            code: Some("NOT-A-COUPON".to_string()),
        }),
    }];
    let record = Normalizer::default().normalize(&session(), Some(&order), None, None);
    assert_eq!(record.order_id, "");
    assert_eq!(record.used_coupon_code, "");
}

#[test]
fn all_aggregates_present() {
    let order = sample_order();
    let customer = sample_customer();
    let currency = Currency {
        iso_code: "EUR".to_string(),
    };
    let record = Normalizer::default().normalize(
        &session(),
        Some(&order),
        Some(&customer),
        Some(&currency),
    );
    assert_eq!(record.order_currency, "EUR");
    assert_eq!(record.order_value, 91.0);
    assert_eq!(record.consumer_street, "Musterstraße");
    assert_eq!(record.session_id, "sess-0815");
}

#[test]
fn normalization_is_idempotent_modulo_timestamp() {
    let order = sample_order();
    let customer = sample_customer();
    let currency = Currency {
        iso_code: "EUR".to_string(),
    };
    let normalizer = Normalizer::default();
    let first = normalizer.normalize(&session(), Some(&order), Some(&customer), Some(&currency));
    let second = normalizer.normalize(&session(), Some(&order), Some(&customer), Some(&currency));
    let mut a = serde_json::to_value(&first).unwrap();
    let mut b = serde_json::to_value(&second).unwrap();
    a["timestamp"] = 0.into();
    b["timestamp"] = 0.into();
    assert_eq!(a, b);
}
