//! Checkout data normalization for the marketing feed.
//!
//! This crate flattens the platform's checkout aggregates into the record
//! the marketing/loyalty integration consumes:
//!
//! - **normalizer**: stage-wise extraction from order, customer, currency
//!   and session context, with documented defaults for absent aggregates
//! - **street**: heuristic splitting of a free-text street line into
//!   street name and house number

pub mod normalizer;
pub mod street;

pub use normalizer::{Normalizer, first_coupon_code, net_order_value, salutation_display};
pub use street::{StreetParts, split_street};
