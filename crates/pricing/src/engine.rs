//! Unit, set and "from" price computation.
//!
//! Every operation here is total: a series without a rule, or missing from
//! the set table, prices with a neutral (or fallback) multiplier instead of
//! failing. All results are rounded with [`doorline_core::round_units`].

use serde::{Deserialize, Serialize};

use doorline_catalog::{Catalog, Color, Door, Series};
use doorline_core::{Multiplier, round_units};

use crate::config::{PricingConfig, SetMultipliers};

/// Computed prices of one door in one (optional) color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub door_id: String,
    pub series: Series,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub unit_price: u64,
    pub set_price: u64,
}

/// Pricing engine over an injected, read-only configuration.
///
/// Holds no mutable state; share it behind an `Arc` or a plain reference.
#[derive(Debug, Clone)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new(PricingConfig::default())
    }
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Color multiplier for `door` in `color`.
    ///
    /// Neutral when the series has no rule or no color is selected.
    pub fn color_multiplier(&self, door: &Door, color: Option<&Color>) -> Multiplier {
        let Some(rule) = self.config.series_rule(&door.series) else {
            return Multiplier::NEUTRAL;
        };
        match color {
            Some(c) if c.is_white() => rule.color_multiplier.white,
            Some(_) => rule.color_multiplier.default,
            None => Multiplier::NEUTRAL,
        }
    }

    /// Retail price of a single door leaf:
    /// `round(price * globalMultiplier * colorMultiplier)`.
    pub fn unit_price(&self, door: &Door, color: Option<&Color>) -> u64 {
        let global = self.config.global_multiplier();
        let color_multiplier = self.color_multiplier(door, color);

        let price = round_units(door.price as f64 * global.value() * color_multiplier.value());

        tracing::debug!(
            door = %door.id,
            series = %door.series,
            color = color.map(|c| c.name.as_str()),
            base = door.price,
            %global,
            %color_multiplier,
            price,
            "unit price computed"
        );
        price
    }

    /// Set multiplier for `series`.
    ///
    /// Table precedence: `overrides`, then the configured table, then the
    /// shipped one. Series missing from the chosen table use the fallback.
    pub fn set_multiplier(&self, series: &Series, overrides: Option<&SetMultipliers>) -> Multiplier {
        let table = overrides
            .or(self.config.set_multipliers())
            .unwrap_or(SetMultipliers::shipped());

        match table.lookup(series) {
            Some(multiplier) => multiplier,
            None => {
                let fallback = table.get(series);
                tracing::debug!(%series, %fallback, "no set multiplier for series; using fallback");
                fallback
            }
        }
    }

    /// Price of the door with its full kit (frame, trim, hardware):
    /// `round(unit_price * setMultiplier)`.
    pub fn set_price(
        &self,
        door: &Door,
        color: Option<&Color>,
        overrides: Option<&SetMultipliers>,
    ) -> u64 {
        let unit = self.unit_price(door, color);
        let multiplier = self.set_multiplier(&door.series, overrides);
        round_units(unit as f64 * multiplier.value())
    }

    /// Lowest unit price across the door's colors ("from" price on a
    /// catalog card). A door without colors prices uncolored.
    pub fn from_price(&self, door: &Door) -> u64 {
        door.colors
            .iter()
            .map(|c| self.unit_price(door, Some(c)))
            .min()
            .unwrap_or_else(|| self.unit_price(door, None))
    }

    pub fn quote(&self, door: &Door, color: Option<&Color>) -> PriceQuote {
        PriceQuote {
            door_id: door.id.clone(),
            series: door.series.clone(),
            color: color.map(|c| c.name.clone()),
            unit_price: self.unit_price(door, color),
            set_price: self.set_price(door, color, None),
        }
    }

    /// One quote per (door, color) pair in catalog order; doors without
    /// colors get a single uncolored quote.
    pub fn quote_catalog(&self, catalog: &Catalog) -> Vec<PriceQuote> {
        let quotes: Vec<PriceQuote> = catalog
            .doors()
            .iter()
            .flat_map(|door| -> Vec<PriceQuote> {
                if door.colors.is_empty() {
                    vec![self.quote(door, None)]
                } else {
                    door.colors.iter().map(|c| self.quote(door, Some(c))).collect()
                }
            })
            .collect();

        tracing::info!(doors = catalog.len(), quotes = quotes.len(), "catalog quoted");
        quotes
    }
}
