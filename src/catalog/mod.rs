//! Pricing Catalog
//!
//! The read side of whatever stores items, tiers and promotions. Pricing never
//! reaches into storage itself; callers fetch snapshots through this trait and
//! hand them to the resolver.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    items::{ItemUuid, PricedItem},
    promotions::PromotionWindow,
    tiers::PriceTier,
};

pub mod errors;
pub mod memory;

pub use errors::CatalogError;
pub use memory::InMemoryCatalog;

/// Read access to pricing data for products and accessories.
#[automock]
#[async_trait]
pub trait PricingCatalog: Send + Sync {
    /// Retrieve a single priced item.
    async fn get_item(&self, item: ItemUuid) -> Result<PricedItem<'static>, CatalogError>;

    /// Retrieve the volume tiers for an item, in no particular order.
    async fn get_tiers_for_item(&self, item: ItemUuid) -> Result<Vec<PriceTier>, CatalogError>;

    /// Retrieve the promotion attached to an item, if there is one.
    async fn get_promotion_for_item(
        &self,
        item: ItemUuid,
    ) -> Result<Option<PromotionWindow<'static>>, CatalogError>;
}
