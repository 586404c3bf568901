//! Volume Discount Tiers
//!
//! A tier is a breakpoint: order at least `min_quantity` units and the unit price
//! drops by `discount_percent`. Tier data arrives from the catalog in no particular
//! order, so every lookup here scans the whole set rather than trusting its order.

use std::ops::Deref;

use rust_decimal::Decimal;
use smallvec::SmallVec;

use crate::pricing::{InvalidArgument, PricingError, ensure_quantity};

/// A single volume-discount breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PriceTier {
    min_quantity: u32,
    discount_percent: Decimal,
}

impl PriceTier {
    /// Create a new tier.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidArgument`] if `min_quantity` is zero or
    /// `discount_percent` lies outside `[0, 100]`.
    pub fn new(min_quantity: u32, discount_percent: Decimal) -> Result<Self, PricingError> {
        if min_quantity == 0 {
            return Err(InvalidArgument::ZeroMinQuantity.into());
        }

        if discount_percent < Decimal::ZERO || discount_percent > Decimal::ONE_HUNDRED {
            return Err(InvalidArgument::DiscountOutOfRange(discount_percent).into());
        }

        Ok(Self {
            min_quantity,
            discount_percent,
        })
    }

    /// Minimum order quantity at which the tier applies.
    pub const fn min_quantity(&self) -> u32 {
        self.min_quantity
    }

    /// Discount in percent points (`10` means 10% off).
    pub const fn discount_percent(&self) -> Decimal {
        self.discount_percent
    }
}

/// Returns the tier with the largest `min_quantity` that `quantity` reaches.
///
/// `tiers` need not be sorted. Should two tiers share a `min_quantity`, the one
/// appearing last in `tiers` is returned.
///
/// # Errors
///
/// Returns [`PricingError::InvalidArgument`] if `quantity` is zero.
pub fn select_applicable_tier(
    tiers: &[PriceTier],
    quantity: u32,
) -> Result<Option<&PriceTier>, PricingError> {
    ensure_quantity(quantity)?;

    Ok(tiers
        .iter()
        .filter(|tier| tier.min_quantity <= quantity)
        .max_by_key(|tier| tier.min_quantity))
}

/// Returns the tier with the smallest `min_quantity` strictly above `quantity`.
///
/// `None` means `quantity` already qualifies for the highest tier (or there are no tiers).
///
/// # Errors
///
/// Returns [`PricingError::InvalidArgument`] if `quantity` is zero.
pub fn next_tier(tiers: &[PriceTier], quantity: u32) -> Result<Option<&PriceTier>, PricingError> {
    ensure_quantity(quantity)?;

    Ok(tiers
        .iter()
        .filter(|tier| tier.min_quantity > quantity)
        .min_by_key(|tier| tier.min_quantity))
}

/// Returns how many more units must be ordered to reach the next tier.
///
/// # Errors
///
/// Returns [`PricingError::InvalidArgument`] if `quantity` is zero.
pub fn units_to_next_tier(tiers: &[PriceTier], quantity: u32) -> Result<Option<u32>, PricingError> {
    Ok(next_tier(tiers, quantity)?.map(|tier| tier.min_quantity - quantity))
}

/// A validated tier set for one priced item.
///
/// Construction rejects duplicate breakpoints and keeps tiers sorted by
/// ascending `min_quantity`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TierSchedule {
    tiers: SmallVec<[PriceTier; 4]>,
}

impl TierSchedule {
    /// Create a schedule from tiers in any order.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::DuplicateTier`] if two tiers share a `min_quantity`.
    pub fn new(tiers: impl IntoIterator<Item = PriceTier>) -> Result<Self, PricingError> {
        let mut tiers: SmallVec<[PriceTier; 4]> = tiers.into_iter().collect();

        tiers.sort_by_key(PriceTier::min_quantity);

        let duplicate = tiers.windows(2).find_map(|pair| match pair {
            [lower, upper] if lower.min_quantity == upper.min_quantity => Some(lower.min_quantity),
            _ => None,
        });

        if let Some(min_quantity) = duplicate {
            return Err(PricingError::DuplicateTier(min_quantity));
        }

        Ok(Self { tiers })
    }

    /// Create a schedule with no tiers.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The tier that applies at `quantity`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidArgument`] if `quantity` is zero.
    pub fn applicable(&self, quantity: u32) -> Result<Option<&PriceTier>, PricingError> {
        select_applicable_tier(&self.tiers, quantity)
    }

    /// The next tier above `quantity`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidArgument`] if `quantity` is zero.
    pub fn next(&self, quantity: u32) -> Result<Option<&PriceTier>, PricingError> {
        next_tier(&self.tiers, quantity)
    }

    /// Copy the tiers out into an owned vector.
    pub fn to_vec(&self) -> Vec<PriceTier> {
        self.tiers.to_vec()
    }
}

impl Deref for TierSchedule {
    type Target = [PriceTier];

    fn deref(&self) -> &Self::Target {
        &self.tiers
    }
}
