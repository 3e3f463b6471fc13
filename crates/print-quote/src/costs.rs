//! Cost-table lookups
//!
//! The engine prices against a [`CostTable`] snapshot supplied by the
//! caller (the back office edits it; the engine only reads it). Every
//! getter resolves in two steps: the external table first, then the
//! built-in defaults from [`crate::constants`]. A missing key is a normal
//! steady state while the back office is still being seeded, never an
//! error.

use std::collections::HashMap;

use tracing::debug;

use crate::constants::*;
use crate::types::*;

/// Per-impression press cost for one category, split by color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PressCost {
    pub color: i64,
    pub mono: i64,
}

/// Margin percentages for one category, split by customer tier.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MarginRates {
    pub general: f64,
    pub business: f64,
}

/// Externally supplied price snapshot.
///
/// Keys follow the back-office identifiers: paper prices by stock name and
/// grammage, press/plate costs by category key, additional costs by name
/// (`shipping_<category>`, `coating`), margins by category key.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CostTable {
    pub paper_prices: HashMap<String, HashMap<u32, i64>>,
    pub press_costs: HashMap<String, PressCost>,
    pub plate_costs: HashMap<String, i64>,
    pub additional_costs: HashMap<String, i64>,
    pub margin_rates: HashMap<String, MarginRates>,
}

impl CostTable {
    /// Load a table snapshot from a JSON file.
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let table = serde_json::from_slice(&bytes)
            .map_err(|e| QuoteError::Spec(format!("Failed to parse cost table: {}", e)))?;
        Ok(table)
    }

    /// Save the table snapshot to a JSON file.
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| QuoteError::Spec(format!("Failed to serialize cost table: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Per-ream price for a paper stock, or `None` when the stock is
    /// unknown to both the table and the built-in defaults.
    pub fn paper_unit_price(&self, name: &str, gram: u32) -> Option<i64> {
        if let Some(price) = self
            .paper_prices
            .get(name)
            .and_then(|grams| grams.get(&gram))
        {
            return Some(*price);
        }
        let price = DEFAULT_PAPER_PRICES
            .iter()
            .find(|(stock, _)| *stock == name)
            .and_then(|(_, grams)| grams.iter().find(|(g, _)| *g == gram))
            .map(|(_, price)| *price);
        if price.is_some() {
            debug!(stock = name, gram, "paper price from built-in defaults");
        }
        price
    }

    /// Per-impression press cost for a category and color mode.
    pub fn press_cost(&self, category: ProductionCategory, mode: ColorMode) -> i64 {
        if let Some(cost) = self.press_costs.get(category.key()) {
            return match mode {
                ColorMode::Color => cost.color,
                ColorMode::Mono => cost.mono,
            };
        }
        debug!(category = category.key(), "press cost from built-in defaults");
        default_press_cost(category, mode)
    }

    /// Cost of one printing plate for a category.
    pub fn plate_cost(&self, category: ProductionCategory) -> i64 {
        match self.plate_costs.get(category.key()) {
            Some(price) => *price,
            None => DEFAULT_PLATE_PRICE,
        }
    }

    /// Named additional cost. Shipping keys default to the standard box
    /// price, `coating` to the per-copy coating surcharge, anything else
    /// to zero.
    pub fn surcharge(&self, key: &str) -> i64 {
        if let Some(cost) = self.additional_costs.get(key) {
            return *cost;
        }
        if key.starts_with("shipping_") {
            DEFAULT_BOX_PRICE
        } else if key == "coating" {
            DEFAULT_COATING_PER_COPY
        } else {
            0
        }
    }

    /// Price of one shipping box for a category.
    pub fn shipping_box_price(&self, category: ProductionCategory) -> i64 {
        self.surcharge(&format!("shipping_{}", category.key()))
    }

    /// Margin percentage for a category and customer tier, 0 when
    /// unconfigured.
    pub fn margin_rate(&self, category: ProductionCategory, member: MemberType) -> f64 {
        match self.margin_rates.get(category.key()) {
            Some(rates) => match member {
                MemberType::General => rates.general,
                MemberType::Business => rates.business,
            },
            None => 0.0,
        }
    }

    /// Merged paper catalog (external entries over built-in defaults),
    /// sorted by stock name then grammage.
    pub fn paper_stocks(&self) -> Vec<(String, u32, i64)> {
        let mut merged: HashMap<(String, u32), i64> = HashMap::new();
        for (name, grams) in DEFAULT_PAPER_PRICES {
            for (gram, price) in *grams {
                merged.insert((name.to_string(), *gram), *price);
            }
        }
        for (name, grams) in &self.paper_prices {
            for (gram, price) in grams {
                merged.insert((name.clone(), *gram), *price);
            }
        }
        let mut stocks: Vec<(String, u32, i64)> = merged
            .into_iter()
            .map(|((name, gram), price)| (name, gram, price))
            .collect();
        stocks.sort();
        stocks
    }
}

fn default_press_cost(category: ProductionCategory, mode: ColorMode) -> i64 {
    match (category, mode) {
        (
            ProductionCategory::SmallDigitalFlyer | ProductionCategory::SmallDigitalColorBook,
            ColorMode::Color,
        ) => DEFAULT_INDIGO_CLICK_COLOR,
        (
            ProductionCategory::SmallDigitalFlyer | ProductionCategory::SmallDigitalColorBook,
            ColorMode::Mono,
        ) => DEFAULT_INDIGO_CLICK_MONO,
        (ProductionCategory::SmallDigitalMonoBook, ColorMode::Color) => DEFAULT_INDIGO_CLICK_COLOR,
        (ProductionCategory::SmallDigitalMonoBook, ColorMode::Mono) => DEFAULT_DIGITAL_CLICK_MONO,
        (ProductionCategory::LargeOffsetFlyer | ProductionCategory::LargeOffsetBook, _) => {
            DEFAULT_OFFSET_PER_COLOR
        }
    }
}

/// Margin percentage for a category and customer tier (0 when the back
/// office has not configured one).
pub fn lookup_margin(costs: &CostTable, category: ProductionCategory, member: MemberType) -> f64 {
    costs.margin_rate(category, member)
}
