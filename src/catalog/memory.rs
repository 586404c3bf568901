//! In-memory catalog.

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{
    catalog::{CatalogError, PricingCatalog},
    items::{ItemUuid, PricedItem},
    promotions::PromotionWindow,
    tiers::{PriceTier, TierSchedule},
};

#[derive(Debug, Clone)]
struct CatalogEntry {
    item: PricedItem<'static>,
    tiers: TierSchedule,
    promotion: Option<PromotionWindow<'static>>,
}

/// Catalog held entirely in memory, keyed by item UUID.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    entries: FxHashMap<ItemUuid, CatalogEntry>,
}

impl InMemoryCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an item with its tiers and optional promotion, replacing any existing entry.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidData`] if two tiers share a minimum quantity.
    pub fn insert(
        &mut self,
        item: PricedItem<'static>,
        tiers: impl IntoIterator<Item = PriceTier>,
        promotion: Option<PromotionWindow<'static>>,
    ) -> Result<(), CatalogError> {
        let uuid = item.uuid();

        let tiers = TierSchedule::new(tiers)
            .map_err(|source| CatalogError::InvalidData { item: uuid, source })?;

        debug!(
            item = %uuid,
            name = item.name(),
            tiers = tiers.len(),
            promotion = promotion.is_some(),
            "storing catalog entry"
        );

        self.entries.insert(
            uuid,
            CatalogEntry {
                item,
                tiers,
                promotion,
            },
        );

        Ok(())
    }

    /// Number of items in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog holds no items.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over stored items.
    pub fn items(&self) -> impl Iterator<Item = &PricedItem<'static>> {
        self.entries.values().map(|entry| &entry.item)
    }

    fn entry(&self, item: ItemUuid) -> Result<&CatalogEntry, CatalogError> {
        self.entries.get(&item).ok_or(CatalogError::NotFound(item))
    }
}

#[async_trait]
impl PricingCatalog for InMemoryCatalog {
    async fn get_item(&self, item: ItemUuid) -> Result<PricedItem<'static>, CatalogError> {
        Ok(self.entry(item)?.item.clone())
    }

    async fn get_tiers_for_item(&self, item: ItemUuid) -> Result<Vec<PriceTier>, CatalogError> {
        Ok(self.entry(item)?.tiers.to_vec())
    }

    async fn get_promotion_for_item(
        &self,
        item: ItemUuid,
    ) -> Result<Option<PromotionWindow<'static>>, CatalogError> {
        Ok(self.entry(item)?.promotion)
    }
}
