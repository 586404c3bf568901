//! Fitout Pricing
//!
//! Quantity-tiered and promotional pricing for van conversion products and accessories.

pub mod catalog;
pub mod config;
pub mod discounts;
pub mod fixtures;
pub mod items;
pub mod observability;
pub mod prelude;
pub mod pricing;
pub mod promotions;
pub mod quotes;
pub mod tiers;
pub mod uuids;
