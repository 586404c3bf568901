//! Pricing
//!
//! Unit price resolution for priced items. Everything here is pure: callers fetch
//! tiers and promotions themselves and pass immutable snapshots in, along with an
//! explicit `now` for promotion window checks.

use jiff::Timestamp;
use rust_decimal::Decimal;
use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::{
    discounts::discounted_minor,
    items::PricedItem,
    promotions::{PromotionWindow, resolve_promotion_price},
    tiers::{PriceTier, select_applicable_tier},
};

/// Errors that can occur while resolving a price.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// An input broke the pricing contract.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),

    /// Two tiers in the same schedule share a minimum quantity.
    #[error("duplicate tier for minimum quantity {0}")]
    DuplicateTier(u32),

    /// A promotion price is in a different currency to the item's base price.
    #[error("currency mismatch: expected {expected}, found {found}")]
    CurrencyMismatch {
        /// Currency of the base price
        expected: String,

        /// Currency of the conflicting price
        found: String,
    },

    /// Percentage calculation could not be safely converted.
    #[error("percentage conversion overflowed or could not be represented")]
    PercentConversion,

    /// A line total did not fit in minor units.
    #[error("price total overflowed")]
    Overflow,

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Pricing contract violations.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum InvalidArgument {
    /// Quantities start at one.
    #[error("quantity must be at least 1")]
    ZeroQuantity,

    /// Tier breakpoints start at one.
    #[error("tier minimum quantity must be at least 1")]
    ZeroMinQuantity,

    /// Base prices cannot be negative.
    #[error("base price must not be negative, got {0} minor units")]
    NegativeBasePrice(i64),

    /// Promotion prices cannot be negative.
    #[error("promotion price must not be negative, got {0} minor units")]
    NegativePromotionPrice(i64),

    /// Discounts are percent points in `[0, 100]`.
    #[error("discount percent must be within [0, 100], got {0}")]
    DiscountOutOfRange(Decimal),
}

/// Where a resolved unit price came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceSource {
    /// No tier or promotion applied; the base price stands.
    Base,

    /// A volume tier discounted the base price.
    Tier,

    /// A currently valid promotion overrode the price.
    Promotion,
}

/// A resolved unit price along with how it was reached.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Resolution<'a, 't> {
    pub(crate) unit_price: Money<'a, Currency>,
    pub(crate) source: PriceSource,
    pub(crate) tier: Option<&'t PriceTier>,
}

pub(crate) fn ensure_quantity(quantity: u32) -> Result<(), PricingError> {
    if quantity == 0 {
        return Err(InvalidArgument::ZeroQuantity.into());
    }

    Ok(())
}

pub(crate) fn ensure_base_price(price: &Money<'_, Currency>) -> Result<(), PricingError> {
    let minor = price.to_minor_units();

    if minor < 0 {
        return Err(InvalidArgument::NegativeBasePrice(minor).into());
    }

    Ok(())
}

/// Applies the best qualifying tier discount to a base price.
///
/// Returns `base_price` unchanged when no tier qualifies.
///
/// # Errors
///
/// - [`PricingError::InvalidArgument`]: `quantity` is zero or `base_price` is negative.
/// - [`PricingError::PercentConversion`]: the discount could not be represented in minor units.
pub fn compute_discounted_price<'a>(
    base_price: Money<'a, Currency>,
    tiers: &[PriceTier],
    quantity: u32,
) -> Result<Money<'a, Currency>, PricingError> {
    let tier = select_applicable_tier(tiers, quantity)?;

    apply_tier(base_price, tier)
}

fn apply_tier<'a>(
    base_price: Money<'a, Currency>,
    tier: Option<&PriceTier>,
) -> Result<Money<'a, Currency>, PricingError> {
    ensure_base_price(&base_price)?;

    let Some(tier) = tier else {
        return Ok(base_price);
    };

    let minor = discounted_minor(tier.discount_percent(), base_price.to_minor_units())?;

    Ok(Money::from_minor(minor, base_price.currency()))
}

/// Resolves the unit price for an item at a quantity and point in time.
///
/// A currently valid promotion wins outright; otherwise the tiered price applies.
///
/// # Errors
///
/// - [`PricingError::InvalidArgument`]: `quantity` is zero or the base price is negative.
/// - [`PricingError::CurrencyMismatch`]: the promotion is priced in another currency.
/// - [`PricingError::PercentConversion`]: the discount could not be represented in minor units.
pub fn effective_unit_price<'a>(
    item: &PricedItem<'a>,
    tiers: &[PriceTier],
    promotion: Option<&PromotionWindow<'a>>,
    quantity: u32,
    now: Timestamp,
) -> Result<Money<'a, Currency>, PricingError> {
    Ok(resolve(item, tiers, promotion, quantity, now)?.unit_price)
}

pub(crate) fn resolve<'a, 't>(
    item: &PricedItem<'a>,
    tiers: &'t [PriceTier],
    promotion: Option<&PromotionWindow<'a>>,
    quantity: u32,
    now: Timestamp,
) -> Result<Resolution<'a, 't>, PricingError> {
    ensure_quantity(quantity)?;

    let base_price = *item.base_price();

    if let Some(promo_price) = promotion.and_then(|promotion| resolve_promotion_price(promotion, now))
    {
        if promo_price.currency() != base_price.currency() {
            return Err(PricingError::CurrencyMismatch {
                expected: base_price.currency().iso_alpha_code.to_string(),
                found: promo_price.currency().iso_alpha_code.to_string(),
            });
        }

        return Ok(Resolution {
            unit_price: promo_price,
            source: PriceSource::Promotion,
            tier: None,
        });
    }

    let tier = select_applicable_tier(tiers, quantity)?;
    let unit_price = apply_tier(base_price, tier)?;

    Ok(Resolution {
        unit_price,
        source: if tier.is_some() {
            PriceSource::Tier
        } else {
            PriceSource::Base
        },
        tier,
    })
}
