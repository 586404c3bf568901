//! Fitout Pricing prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    catalog::{CatalogError, InMemoryCatalog, PricingCatalog},
    fixtures::{Fixture, FixtureError},
    items::{ItemKind, ItemUuid, PricedItem},
    pricing::{
        InvalidArgument, PriceSource, PricingError, compute_discounted_price,
        effective_unit_price,
    },
    promotions::{PromotionWindow, resolve_promotion_price},
    quotes::{PriceQuote, QuoteError, QuoteService, quote, table::QuoteRenderError},
    tiers::{PriceTier, TierSchedule, next_tier, select_applicable_tier, units_to_next_tier},
};
