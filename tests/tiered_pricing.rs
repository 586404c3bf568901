//! Tier selection and effective pricing through the public API.
//!
//! Uses the canonical ladder of 10% off from 5 units and 20% off from 10 units
//! against a £100.00 base price.

use jiff::Timestamp;
use rust_decimal::Decimal;
use rusty_money::{Money, iso::GBP};
use testresult::TestResult;

use fitout_pricing::prelude::*;

fn ladder() -> Result<Vec<PriceTier>, PricingError> {
    Ok(vec![
        PriceTier::new(10, Decimal::from(20))?,
        PriceTier::new(5, Decimal::from(10))?,
    ])
}

fn panel() -> Result<PricedItem<'static>, PricingError> {
    PricedItem::new(
        ItemUuid::new(),
        "200W solar panel",
        ItemKind::Product,
        Money::from_minor(10_000, GBP),
    )
}

fn january_sale() -> Result<PromotionWindow<'static>, Box<dyn std::error::Error>> {
    Ok(PromotionWindow::new(
        true,
        Money::from_minor(5_999, GBP),
        Some("2025-01-01T00:00:00Z".parse()?),
        Some("2025-01-31T00:00:00Z".parse()?),
    )?)
}

#[test]
fn seven_units_use_the_five_unit_tier() -> TestResult {
    let tiers = ladder()?;

    let tier = select_applicable_tier(&tiers, 7)?;
    let price = compute_discounted_price(Money::from_minor(10_000, GBP), &tiers, 7)?;

    assert_eq!(tier.map(PriceTier::min_quantity), Some(5));
    assert_eq!(price, Money::from_minor(9_000, GBP));

    Ok(())
}

#[test]
fn twelve_units_use_the_ten_unit_tier() -> TestResult {
    let tiers = ladder()?;

    let tier = select_applicable_tier(&tiers, 12)?;
    let price = compute_discounted_price(Money::from_minor(10_000, GBP), &tiers, 12)?;

    assert_eq!(tier.map(PriceTier::min_quantity), Some(10));
    assert_eq!(price, Money::from_minor(8_000, GBP));

    Ok(())
}

#[test]
fn three_units_pay_base_price_and_see_next_tier() -> TestResult {
    let tiers = ladder()?;

    let price = compute_discounted_price(Money::from_minor(10_000, GBP), &tiers, 3)?;
    let next = next_tier(&tiers, 3)?;

    assert!(select_applicable_tier(&tiers, 3)?.is_none());
    assert_eq!(price, Money::from_minor(10_000, GBP));
    assert_eq!(next.map(PriceTier::min_quantity), Some(5));
    assert_eq!(units_to_next_tier(&tiers, 3)?, Some(2));

    Ok(())
}

#[test]
fn promotion_wins_inside_its_window() -> TestResult {
    let item = panel()?;
    let tiers = ladder()?;
    let promotion = january_sale()?;
    let now: Timestamp = "2025-01-15T00:00:00Z".parse()?;

    assert_eq!(
        resolve_promotion_price(&promotion, now),
        Some(Money::from_minor(5_999, GBP))
    );

    for quantity in [1, 7, 12] {
        let price = effective_unit_price(&item, &tiers, Some(&promotion), quantity, now)?;

        assert_eq!(price, Money::from_minor(5_999, GBP), "quantity {quantity}");
    }

    Ok(())
}

#[test]
fn expired_promotion_falls_back_to_tiers() -> TestResult {
    let item = panel()?;
    let tiers = ladder()?;
    let promotion = january_sale()?;
    let now: Timestamp = "2025-02-01T00:00:00Z".parse()?;

    assert_eq!(resolve_promotion_price(&promotion, now), None);
    assert_eq!(
        effective_unit_price(&item, &tiers, Some(&promotion), 7, now)?,
        Money::from_minor(9_000, GBP)
    );

    Ok(())
}

#[test]
fn zero_quantity_is_an_invalid_argument() -> TestResult {
    let item = panel()?;
    let tiers = ladder()?;
    let now = Timestamp::now();

    assert_eq!(
        select_applicable_tier(&tiers, 0),
        Err(PricingError::InvalidArgument(InvalidArgument::ZeroQuantity))
    );
    assert_eq!(
        next_tier(&tiers, 0),
        Err(PricingError::InvalidArgument(InvalidArgument::ZeroQuantity))
    );
    assert_eq!(
        effective_unit_price(&item, &tiers, None, 0, now),
        Err(PricingError::InvalidArgument(InvalidArgument::ZeroQuantity))
    );

    Ok(())
}

#[test]
fn selected_tier_is_the_largest_qualifying_breakpoint() -> TestResult {
    let tiers = vec![
        PriceTier::new(25, Decimal::from(30))?,
        PriceTier::new(1, Decimal::ZERO)?,
        PriceTier::new(10, Decimal::from(20))?,
        PriceTier::new(5, Decimal::from(10))?,
    ];

    for quantity in 1..=40 {
        let selected = select_applicable_tier(&tiers, quantity)?.map(PriceTier::min_quantity);
        let expected = tiers
            .iter()
            .map(PriceTier::min_quantity)
            .filter(|min| *min <= quantity)
            .max();

        assert_eq!(selected, expected, "quantity {quantity}");

        // Applicable and next tiers partition the ladder around the quantity
        if let Some(next) = next_tier(&tiers, quantity)? {
            assert!(next.min_quantity() > quantity);
            assert!(
                tiers
                    .iter()
                    .filter(|tier| tier.min_quantity() > quantity)
                    .all(|tier| tier.min_quantity() >= next.min_quantity())
            );
        } else {
            assert!(tiers.iter().all(|tier| tier.min_quantity() <= quantity));
        }
    }

    Ok(())
}

#[test]
fn unit_price_never_rises_with_quantity_on_an_increasing_ladder() -> TestResult {
    let schedule = TierSchedule::new(ladder()?)?;
    let base = Money::from_minor(12_345, GBP);

    let mut previous = base;

    for quantity in 1..=30 {
        let price = compute_discounted_price(base, &schedule, quantity)?;

        assert!(
            price.to_minor_units() <= previous.to_minor_units(),
            "price rose at quantity {quantity}"
        );

        previous = price;
    }

    Ok(())
}

#[test]
fn tier_thresholds_are_inclusive() -> TestResult {
    let tiers = ladder()?;

    assert_eq!(
        select_applicable_tier(&tiers, 4)?.map(PriceTier::min_quantity),
        None
    );
    assert_eq!(
        select_applicable_tier(&tiers, 5)?.map(PriceTier::min_quantity),
        Some(5)
    );
    assert_eq!(
        select_applicable_tier(&tiers, 10)?.map(PriceTier::min_quantity),
        Some(10)
    );

    Ok(())
}
