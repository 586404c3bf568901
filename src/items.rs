//! Items
//!
//! Products and accessories are priced by the same rules; their kind only matters
//! when fetching them from a catalog.

use rusty_money::{Money, iso::Currency};
use serde::Deserialize;

use crate::{
    pricing::{PricingError, ensure_base_price},
    uuids::TypedUuid,
};

/// Marker for priced item identifiers.
#[derive(Debug)]
pub struct ItemRecord;

/// Priced item UUID
pub type ItemUuid = TypedUuid<ItemRecord>;

/// Kind of priced item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// A catalog product (e.g. a leisure battery or a fridge).
    Product,

    /// An accessory sold alongside products (e.g. cabling or brackets).
    Accessory,
}

impl ItemKind {
    /// Lower-case label for display.
    pub const fn as_str(self) -> &'static str {
        match self {
            ItemKind::Product => "product",
            ItemKind::Accessory => "accessory",
        }
    }
}

/// A product or accessory with a base unit price.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedItem<'a> {
    uuid: ItemUuid,
    name: String,
    kind: ItemKind,
    base_price: Money<'a, Currency>,
}

impl<'a> PricedItem<'a> {
    /// Create a new priced item.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidArgument`] if `base_price` is negative.
    pub fn new(
        uuid: ItemUuid,
        name: impl Into<String>,
        kind: ItemKind,
        base_price: Money<'a, Currency>,
    ) -> Result<Self, PricingError> {
        ensure_base_price(&base_price)?;

        Ok(Self {
            uuid,
            name: name.into(),
            kind,
            base_price,
        })
    }

    /// Item identifier
    pub const fn uuid(&self) -> ItemUuid {
        self.uuid
    }

    /// Item name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Item kind
    pub const fn kind(&self) -> ItemKind {
        self.kind
    }

    /// Base unit price, before tiers or promotions
    pub const fn base_price(&self) -> &Money<'a, Currency> {
        &self.base_price
    }

    /// Currency the item is priced in
    pub fn currency(&self) -> &'a Currency {
        self.base_price.currency()
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::GBP;
    use testresult::TestResult;

    use crate::pricing::InvalidArgument;

    use super::*;

    #[test]
    fn new_item_keeps_details() -> TestResult {
        let uuid = ItemUuid::new();
        let item = PricedItem::new(
            uuid,
            "Roof fan",
            ItemKind::Accessory,
            Money::from_minor(24_900, GBP),
        )?;

        assert_eq!(item.uuid(), uuid);
        assert_eq!(item.name(), "Roof fan");
        assert_eq!(item.kind(), ItemKind::Accessory);
        assert_eq!(item.base_price(), &Money::from_minor(24_900, GBP));
        assert_eq!(item.currency(), GBP);

        Ok(())
    }

    #[test]
    fn free_items_are_allowed() -> TestResult {
        let item = PricedItem::new(
            ItemUuid::new(),
            "Cable tie",
            ItemKind::Accessory,
            Money::from_minor(0, GBP),
        )?;

        assert_eq!(item.base_price().to_minor_units(), 0);

        Ok(())
    }

    #[test]
    fn new_rejects_negative_base_price() {
        let result = PricedItem::new(
            ItemUuid::new(),
            "Refund",
            ItemKind::Product,
            Money::from_minor(-500, GBP),
        );

        assert_eq!(
            result,
            Err(PricingError::InvalidArgument(
                InvalidArgument::NegativeBasePrice(-500)
            ))
        );
    }

    #[test]
    fn kind_labels() {
        assert_eq!(ItemKind::Product.as_str(), "product");
        assert_eq!(ItemKind::Accessory.as_str(), "accessory");
    }
}
