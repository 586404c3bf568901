//! Fixtures
//!
//! YAML catalog files for demos and tests. Each file maps item keys to an item,
//! its tiers and an optional promotion, and loads into an [`InMemoryCatalog`].

use std::{
    fs,
    path::{Path, PathBuf},
};

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::info;

use crate::{
    catalog::{CatalogError, InMemoryCatalog},
    fixtures::items::CatalogFixture,
    items::ItemUuid,
    pricing::PricingError,
};

pub mod items;
pub mod prices;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Invalid percentage format
    #[error("Invalid percentage format: {0}")]
    InvalidPercentage(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Currency mismatch between an item and its promotion
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// Item data failed pricing validation
    #[error("Invalid item {key}: {source}")]
    InvalidItem {
        /// Fixture key of the offending item
        key: String,

        /// The validation failure
        source: PricingError,
    },

    /// Item not found
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// Catalog rejected an entry
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Directory holding the bundled catalog sets.
const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures");

/// A catalog loaded from YAML, along with its item keys.
#[derive(Debug, Default)]
pub struct Fixture {
    catalog: InMemoryCatalog,
    keys: FxHashMap<String, ItemUuid>,
}

impl Fixture {
    /// Parse a catalog from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or any item, tier or promotion is invalid.
    pub fn from_yaml(contents: &str) -> Result<Self, FixtureError> {
        let fixture: CatalogFixture = serde_norway::from_str(contents)?;
        let mut loaded = Self::default();

        for (key, item_fixture) in fixture.items {
            let parsed = item_fixture.parse(&key)?;
            let uuid = parsed.item.uuid();

            loaded
                .catalog
                .insert(parsed.item, parsed.tiers, parsed.promotion)?;

            loaded.keys.insert(key, uuid);
        }

        Ok(loaded)
    }

    /// Load a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents are invalid.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let fixture = Self::from_yaml(&contents)?;

        info!(
            path = %path.display(),
            items = fixture.catalog.len(),
            "loaded catalog fixture"
        );

        Ok(fixture)
    }

    /// Load a bundled catalog set from `fixtures/catalogs/{name}.yml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the set does not exist or its contents are invalid.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        Self::from_path(
            PathBuf::from(FIXTURES_DIR)
                .join("catalogs")
                .join(format!("{name}.yml")),
        )
    }

    /// Look up the UUID assigned to an item key.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::ItemNotFound`] if the key is not in the fixture.
    pub fn item_uuid(&self, key: &str) -> Result<ItemUuid, FixtureError> {
        self.keys
            .get(key)
            .copied()
            .ok_or_else(|| FixtureError::ItemNotFound(key.to_string()))
    }

    /// The loaded catalog.
    pub fn catalog(&self) -> &InMemoryCatalog {
        &self.catalog
    }

    /// Consume the fixture, keeping only the catalog.
    pub fn into_catalog(self) -> InMemoryCatalog {
        self.catalog
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use jiff::Timestamp;
    use rust_decimal::Decimal;
    use rusty_money::{Money, iso::GBP};
    use testresult::TestResult;

    use crate::{
        catalog::PricingCatalog, items::ItemKind, pricing::InvalidArgument,
        promotions::PromotionWindow,
    };

    use super::*;

    const CATALOG: &str = r#"
items:
  roof-fan:
    name: Roof fan
    kind: accessory
    price: "249.00 GBP"
    tiers:
      - min_quantity: 10
        discount: "15%"
      - min_quantity: 3
        discount: "0.05"
    promotion:
      price: "199.00 GBP"
      start: "2025-01-01T00:00:00Z"
      end: "2025-01-31T23:59:59Z"
  leisure-battery:
    uuid: "0b3f7a52-1c7e-4e2a-9d55-2d0f3c1b8e90"
    name: Leisure battery
    kind: product
    price: "899.99 GBP"
"#;

    #[tokio::test]
    async fn from_yaml_loads_items_tiers_and_promotions() -> TestResult {
        let fixture = Fixture::from_yaml(CATALOG)?;
        let fan = fixture.item_uuid("roof-fan")?;

        let item = fixture.catalog().get_item(fan).await?;
        let tiers = fixture.catalog().get_tiers_for_item(fan).await?;
        let promotion = fixture.catalog().get_promotion_for_item(fan).await?;

        assert_eq!(item.name(), "Roof fan");
        assert_eq!(item.kind(), ItemKind::Accessory);
        assert_eq!(item.base_price(), &Money::from_minor(24_900, GBP));
        assert_eq!(
            tiers
                .iter()
                .map(|tier| (tier.min_quantity(), tier.discount_percent()))
                .collect::<Vec<_>>(),
            vec![(3, Decimal::from(5)), (10, Decimal::from(15))]
        );

        assert_eq!(
            promotion,
            Some(PromotionWindow::new(
                true,
                Money::from_minor(19_900, GBP),
                Some("2025-01-01T00:00:00Z".parse::<Timestamp>()?),
                Some("2025-01-31T23:59:59Z".parse::<Timestamp>()?),
            )?)
        );

        Ok(())
    }

    #[tokio::test]
    async fn fixed_uuids_are_kept() -> TestResult {
        let fixture = Fixture::from_yaml(CATALOG)?;
        let battery = fixture.item_uuid("leisure-battery")?;

        assert_eq!(battery.to_string(), "0b3f7a52-1c7e-4e2a-9d55-2d0f3c1b8e90");
        assert!(fixture.catalog().get_promotion_for_item(battery).await?.is_none());
        assert!(fixture.catalog().get_tiers_for_item(battery).await?.is_empty());

        Ok(())
    }

    #[test]
    fn unknown_key_is_reported() -> TestResult {
        let fixture = Fixture::from_yaml(CATALOG)?;

        let result = fixture.item_uuid("awning");

        assert!(matches!(result, Err(FixtureError::ItemNotFound(key)) if key == "awning"));

        Ok(())
    }

    #[test]
    fn out_of_range_discount_is_rejected() {
        let yaml = r#"
items:
  awning:
    name: Awning
    kind: accessory
    price: "500.00 GBP"
    tiers:
      - min_quantity: 2
        discount: "120%"
"#;

        let result = Fixture::from_yaml(yaml);

        assert!(
            matches!(
                &result,
                Err(FixtureError::InvalidItem {
                    source: PricingError::InvalidArgument(InvalidArgument::DiscountOutOfRange(_)),
                    ..
                })
            ),
            "expected InvalidItem, got {result:?}"
        );
    }

    #[test]
    fn duplicate_tiers_are_rejected() {
        let yaml = r#"
items:
  awning:
    name: Awning
    kind: accessory
    price: "500.00 GBP"
    tiers:
      - min_quantity: 2
        discount: "5%"
      - min_quantity: 2
        discount: "10%"
"#;

        let result = Fixture::from_yaml(yaml);

        assert!(
            matches!(
                &result,
                Err(FixtureError::Catalog(CatalogError::InvalidData {
                    source: PricingError::DuplicateTier(2),
                    ..
                }))
            ),
            "expected duplicate tier error, got {result:?}"
        );
    }

    #[test]
    fn promotion_currency_must_match_item() {
        let yaml = r#"
items:
  awning:
    name: Awning
    kind: accessory
    price: "500.00 GBP"
    promotion:
      price: "450.00 EUR"
"#;

        let result = Fixture::from_yaml(yaml);

        assert!(
            matches!(&result, Err(FixtureError::CurrencyMismatch(expected, found)) if expected == "GBP" && found == "EUR"),
            "expected CurrencyMismatch, got {result:?}"
        );
    }

    #[test]
    fn from_path_reads_file() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(CATALOG.as_bytes())?;

        let fixture = Fixture::from_path(file.path())?;

        let catalog = fixture.into_catalog();
        let products = catalog
            .items()
            .filter(|item| item.kind() == ItemKind::Product)
            .count();

        assert_eq!(catalog.len(), 2);
        assert_eq!(products, 1);

        Ok(())
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = Fixture::from_path("does/not/exist.yml");

        assert!(matches!(result, Err(FixtureError::Io(_))));
    }
}
