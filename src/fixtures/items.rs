//! Item Fixtures

use jiff::Timestamp;
use rustc_hash::FxHashMap;
use rusty_money::Money;
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    fixtures::{
        FixtureError,
        prices::{parse_percentage, parse_price},
    },
    items::{ItemKind, ItemUuid, PricedItem},
    promotions::PromotionWindow,
    tiers::PriceTier,
};

/// Wrapper for catalog items in YAML
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Map of item key -> item fixture
    pub items: FxHashMap<String, ItemFixture>,
}

/// Item Fixture
#[derive(Debug, Deserialize)]
pub struct ItemFixture {
    /// Fixed identifier; generated when absent
    #[serde(default)]
    pub uuid: Option<Uuid>,

    /// Item name
    pub name: String,

    /// Product or accessory
    pub kind: ItemKind,

    /// Base unit price (e.g., "249.00 GBP")
    pub price: String,

    /// Volume discount tiers
    #[serde(default)]
    pub tiers: Vec<TierFixture>,

    /// Optional promotional override
    #[serde(default)]
    pub promotion: Option<PromotionFixture>,
}

/// Tier Fixture
#[derive(Debug, Deserialize)]
pub struct TierFixture {
    /// Minimum order quantity
    pub min_quantity: u32,

    /// Discount (e.g., "10%" or "0.1")
    pub discount: String,
}

/// Promotion Fixture
#[derive(Debug, Deserialize)]
pub struct PromotionFixture {
    /// Whether the promotion is switched on
    #[serde(default = "default_active")]
    pub active: bool,

    /// Promotional unit price (e.g., "199.00 GBP")
    pub price: String,

    /// Inclusive start
    #[serde(default)]
    pub start: Option<Timestamp>,

    /// Inclusive end
    #[serde(default)]
    pub end: Option<Timestamp>,
}

const fn default_active() -> bool {
    true
}

/// Fully parsed catalog entry.
#[derive(Debug)]
pub(crate) struct ParsedItem {
    pub(crate) item: PricedItem<'static>,
    pub(crate) tiers: Vec<PriceTier>,
    pub(crate) promotion: Option<PromotionWindow<'static>>,
}

impl ItemFixture {
    pub(crate) fn parse(self, key: &str) -> Result<ParsedItem, FixtureError> {
        let (minor_units, currency) = parse_price(&self.price)?;
        let uuid = self.uuid.map_or_else(ItemUuid::new, ItemUuid::from_uuid);

        let item = PricedItem::new(
            uuid,
            self.name,
            self.kind,
            Money::from_minor(minor_units, currency),
        )
        .map_err(|source| FixtureError::InvalidItem {
            key: key.to_string(),
            source,
        })?;

        let tiers = self
            .tiers
            .into_iter()
            .map(|tier| {
                PriceTier::new(tier.min_quantity, parse_percentage(&tier.discount)?).map_err(
                    |source| FixtureError::InvalidItem {
                        key: key.to_string(),
                        source,
                    },
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        let promotion = self
            .promotion
            .map(|promotion| promotion.parse(key, &item))
            .transpose()?;

        Ok(ParsedItem {
            item,
            tiers,
            promotion,
        })
    }
}

impl PromotionFixture {
    fn parse(
        self,
        key: &str,
        item: &PricedItem<'static>,
    ) -> Result<PromotionWindow<'static>, FixtureError> {
        let (minor_units, currency) = parse_price(&self.price)?;

        if currency != item.currency() {
            return Err(FixtureError::CurrencyMismatch(
                item.currency().iso_alpha_code.to_string(),
                currency.iso_alpha_code.to_string(),
            ));
        }

        PromotionWindow::new(
            self.active,
            Money::from_minor(minor_units, currency),
            self.start,
            self.end,
        )
        .map_err(|source| FixtureError::InvalidItem {
            key: key.to_string(),
            source,
        })
    }
}
