//! Catalog errors.

use std::error::Error as StdError;

use thiserror::Error;

use crate::{items::ItemUuid, pricing::PricingError};

/// Errors raised while reading pricing data from a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No item is stored under the requested identifier.
    #[error("item {0} not found")]
    NotFound(ItemUuid),

    /// Stored pricing data failed validation.
    #[error("invalid pricing data for item {item}: {source}")]
    InvalidData {
        /// The item whose data was rejected
        item: ItemUuid,

        /// Why it was rejected
        source: PricingError,
    },

    /// The backing store could not be read.
    #[error("storage error")]
    Storage(#[source] Box<dyn StdError + Send + Sync>),
}
