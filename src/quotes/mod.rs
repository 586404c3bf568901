//! Quotes
//!
//! A quote is the full pricing breakdown for one line: the resolved unit price,
//! how it was reached, line totals and the next tier up.

use jiff::Timestamp;
use rusty_money::{Money, MoneyError, iso::Currency};

use crate::{
    items::PricedItem,
    pricing::{PriceSource, PricingError, resolve},
    promotions::PromotionWindow,
    tiers::{PriceTier, next_tier},
};

pub mod service;
pub mod table;

pub use service::{QuoteError, QuoteService};

/// Pricing breakdown for a quantity of one item.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote<'a> {
    item: PricedItem<'a>,
    quantity: u32,
    unit_price: Money<'a, Currency>,
    source: PriceSource,
    applied_tier: Option<PriceTier>,
    next_tier: Option<PriceTier>,
    line_total: Money<'a, Currency>,
    base_total: Money<'a, Currency>,
}

impl<'a> PriceQuote<'a> {
    /// The quoted item.
    pub const fn item(&self) -> &PricedItem<'a> {
        &self.item
    }

    /// Quoted quantity.
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Effective unit price.
    pub const fn unit_price(&self) -> &Money<'a, Currency> {
        &self.unit_price
    }

    /// Where the unit price came from.
    pub const fn source(&self) -> PriceSource {
        self.source
    }

    /// The tier that discounted the unit price, if one did.
    pub const fn applied_tier(&self) -> Option<&PriceTier> {
        self.applied_tier.as_ref()
    }

    /// The next tier up, when ordering more would lower the unit price.
    ///
    /// Always `None` while a promotion sets the price.
    pub const fn next_tier(&self) -> Option<&PriceTier> {
        self.next_tier.as_ref()
    }

    /// Units still needed to reach [`next_tier`](Self::next_tier).
    pub fn units_to_next_tier(&self) -> Option<u32> {
        self.next_tier
            .map(|tier| tier.min_quantity().saturating_sub(self.quantity))
    }

    /// Unit price multiplied by quantity.
    pub const fn line_total(&self) -> &Money<'a, Currency> {
        &self.line_total
    }

    /// Base price multiplied by quantity.
    pub const fn base_total(&self) -> &Money<'a, Currency> {
        &self.base_total
    }

    /// Difference between the base and quoted line totals.
    ///
    /// Negative when a promotion prices the item above its base price.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if the subtraction fails.
    pub fn savings(&self) -> Result<Money<'a, Currency>, MoneyError> {
        self.base_total.sub(self.line_total)
    }
}

/// Quote an item at a quantity and point in time.
///
/// Applies the same rules as [`effective_unit_price`](crate::pricing::effective_unit_price)
/// and adds line totals and next-tier information.
///
/// # Errors
///
/// - [`PricingError::InvalidArgument`]: `quantity` is zero or the base price is negative.
/// - [`PricingError::CurrencyMismatch`]: the promotion is priced in another currency.
/// - [`PricingError::PercentConversion`]: a discount could not be represented in minor units.
/// - [`PricingError::Overflow`]: a line total overflowed.
pub fn quote<'a>(
    item: &PricedItem<'a>,
    tiers: &[PriceTier],
    promotion: Option<&PromotionWindow<'a>>,
    quantity: u32,
    now: Timestamp,
) -> Result<PriceQuote<'a>, PricingError> {
    let resolution = resolve(item, tiers, promotion, quantity, now)?;

    let next = match resolution.source {
        PriceSource::Promotion => None,
        PriceSource::Base | PriceSource::Tier => next_tier(tiers, quantity)?.copied(),
    };

    Ok(PriceQuote {
        item: item.clone(),
        quantity,
        unit_price: resolution.unit_price,
        source: resolution.source,
        applied_tier: resolution.tier.copied(),
        next_tier: next,
        line_total: extend(&resolution.unit_price, quantity)?,
        base_total: extend(item.base_price(), quantity)?,
    })
}

fn extend<'a>(
    unit_price: &Money<'a, Currency>,
    quantity: u32,
) -> Result<Money<'a, Currency>, PricingError> {
    let minor = unit_price
        .to_minor_units()
        .checked_mul(i64::from(quantity))
        .ok_or(PricingError::Overflow)?;

    Ok(Money::from_minor(minor, unit_price.currency()))
}
