//! Quote rendering

use std::io;

use rust_decimal::Decimal;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{pricing::PriceSource, quotes::PriceQuote, tiers::PriceTier};

/// Errors that can occur when rendering a quote.
#[derive(Debug, Error)]
pub enum QuoteRenderError {
    /// Money arithmetic failed while computing savings.
    #[error(transparent)]
    Money(#[from] rusty_money::MoneyError),

    /// Writing to the output failed.
    #[error("failed to write quote")]
    Io(#[from] io::Error),
}

impl PriceQuote<'_> {
    /// Render the quote as a table followed by a tier hint, if there is one.
    ///
    /// # Errors
    ///
    /// Returns a [`QuoteRenderError`] if savings cannot be computed or writing fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), QuoteRenderError> {
        let mut builder = Builder::default();

        builder.push_record([
            "Item",
            "Kind",
            "Qty",
            "Base Price",
            "Unit Price",
            "Line Total",
            "Savings",
            "Pricing",
        ]);

        builder.push_record([
            self.item().name().to_string(),
            self.item().kind().as_str().to_string(),
            self.quantity().to_string(),
            self.item().base_price().to_string(),
            self.unit_price().to_string(),
            self.line_total().to_string(),
            self.savings()?.to_string(),
            source_label(self.source(), self.applied_tier()),
        ]);

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(2..7), Alignment::right());

        writeln!(out, "{table}")?;

        if let (Some(tier), Some(units)) = (self.next_tier(), self.units_to_next_tier()) {
            writeln!(
                out,
                "Order {units} more to unlock {}% off at {} units.",
                percent_label(tier.discount_percent()),
                tier.min_quantity()
            )?;
        }

        Ok(())
    }
}

fn source_label(source: PriceSource, tier: Option<&PriceTier>) -> String {
    match (source, tier) {
        (PriceSource::Promotion, _) => "promotion".to_string(),
        (PriceSource::Tier, Some(tier)) => format!(
            "{}% off ({}+ units)",
            percent_label(tier.discount_percent()),
            tier.min_quantity()
        ),
        (PriceSource::Tier | PriceSource::Base, _) => "base".to_string(),
    }
}

fn percent_label(percent: Decimal) -> String {
    percent.normalize().to_string()
}
