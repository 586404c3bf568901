//! Promotions
//!
//! A promotion window is an absolute price override attached to a single priced
//! item, gated by an `active` flag and an optional, inclusive date range.

use jiff::Timestamp;
use rusty_money::{Money, iso::Currency};

use crate::pricing::{InvalidArgument, PricingError};

/// Time-bounded promotional price for an item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PromotionWindow<'a> {
    active: bool,
    promo_price: Money<'a, Currency>,
    start: Option<Timestamp>,
    end: Option<Timestamp>,
}

impl<'a> PromotionWindow<'a> {
    /// Create a new promotion window. Either bound may be absent to leave it open-ended.
    ///
    /// A window whose `start` falls after its `end` is accepted but never valid.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidArgument`] if `promo_price` is negative.
    pub fn new(
        active: bool,
        promo_price: Money<'a, Currency>,
        start: Option<Timestamp>,
        end: Option<Timestamp>,
    ) -> Result<Self, PricingError> {
        let minor = promo_price.to_minor_units();

        if minor < 0 {
            return Err(InvalidArgument::NegativePromotionPrice(minor).into());
        }

        Ok(Self {
            active,
            promo_price,
            start,
            end,
        })
    }

    /// Create an active promotion with no start or end.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidArgument`] if `promo_price` is negative.
    pub fn open_ended(promo_price: Money<'a, Currency>) -> Result<Self, PricingError> {
        Self::new(true, promo_price, None, None)
    }

    /// Whether the promotion is switched on at all.
    pub const fn active(&self) -> bool {
        self.active
    }

    /// The override price.
    pub const fn promo_price(&self) -> &Money<'a, Currency> {
        &self.promo_price
    }

    /// Start of the window, inclusive.
    pub const fn start(&self) -> Option<Timestamp> {
        self.start
    }

    /// End of the window, inclusive.
    pub const fn end(&self) -> Option<Timestamp> {
        self.end
    }

    /// Whether the promotion applies at `now`.
    pub fn is_valid_at(&self, now: Timestamp) -> bool {
        self.active
            && self.start.is_none_or(|start| now >= start)
            && self.end.is_none_or(|end| now <= end)
    }
}

/// Returns the promotion price if the promotion is valid at `now`.
pub fn resolve_promotion_price<'a>(
    promotion: &PromotionWindow<'a>,
    now: Timestamp,
) -> Option<Money<'a, Currency>> {
    promotion
        .is_valid_at(now)
        .then_some(promotion.promo_price)
}
