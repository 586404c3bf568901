//! Quote service.

use jiff::Timestamp;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::{
    catalog::{CatalogError, PricingCatalog},
    items::ItemUuid,
    pricing::{PricingError, ensure_quantity},
    quotes::{PriceQuote, quote},
};

/// Errors raised while quoting an item from a catalog.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// Fetching pricing data failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The fetched data could not be priced.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// Fetches pricing snapshots from a catalog and resolves quotes against them.
///
/// Products and accessories go through the same path.
#[derive(Debug, Clone)]
pub struct QuoteService<C> {
    catalog: C,
}

impl<C: PricingCatalog> QuoteService<C> {
    /// Create a quote service backed by `catalog`.
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// The backing catalog.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Quote `quantity` units of an item at `now`.
    ///
    /// # Errors
    ///
    /// - [`QuoteError::Catalog`]: the item or its pricing data could not be fetched.
    /// - [`QuoteError::Pricing`]: the quantity is zero or the fetched data could not be priced.
    #[instrument(skip(self), err)]
    pub async fn quote(
        &self,
        item: ItemUuid,
        quantity: u32,
        now: Timestamp,
    ) -> Result<PriceQuote<'static>, QuoteError> {
        ensure_quantity(quantity)?;

        let priced_item = self.catalog.get_item(item).await?;
        let tiers = self.catalog.get_tiers_for_item(item).await?;
        let promotion = self.catalog.get_promotion_for_item(item).await?;

        let priced = quote(&priced_item, &tiers, promotion.as_ref(), quantity, now)?;

        debug!(
            kind = priced_item.kind().as_str(),
            source = ?priced.source(),
            unit_price = %priced.unit_price(),
            "resolved quote"
        );

        Ok(priced)
    }

    /// Resolve just the effective unit price of an item.
    ///
    /// # Errors
    ///
    /// See [`QuoteService::quote`].
    pub async fn unit_price(
        &self,
        item: ItemUuid,
        quantity: u32,
        now: Timestamp,
    ) -> Result<Money<'static, Currency>, QuoteError> {
        Ok(*self.quote(item, quantity, now).await?.unit_price())
    }
}
