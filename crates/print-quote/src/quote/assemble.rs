//! Price assembly - margin, VAT, and currency rounding

use crate::types::*;

/// Pre-shipping cost components produced by a pricing pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CostComponents {
    pub paper: i64,
    pub press: i64,
    pub plate: i64,
    pub coating: i64,
    pub binding: i64,
}

impl CostComponents {
    /// Pre-margin subtotal, shipping excluded.
    pub fn subtotal(self) -> i64 {
        self.paper + self.press + self.plate + self.coating + self.binding
    }
}

/// Fold margin, shipping, and VAT into a [`PriceBreakdown`].
///
/// The rounding order is fixed: the margin-adjusted supply cost is
/// truncated to a whole unit, VAT is truncated from one tenth of
/// supply + shipping, and the sum drops to the nearest 10. Reordering any
/// of these changes totals and breaks parity with issued invoices.
pub fn assemble(
    category: ProductionCategory,
    quantity: u32,
    components: CostComponents,
    margin_rate: f64,
    shipping_cost: i64,
) -> PriceBreakdown {
    let subtotal = components.subtotal();
    let supply_cost = (subtotal as f64 * (100.0 + margin_rate) / 100.0).floor() as i64;
    let vat = (supply_cost + shipping_cost) / 10;
    let total = (supply_cost + shipping_cost + vat) / 10 * 10;

    PriceBreakdown {
        category,
        quantity,
        paper_cost: components.paper,
        press_cost: components.press,
        plate_cost: components.plate,
        coating_cost: components.coating,
        binding_cost: components.binding,
        shipping_cost,
        subtotal,
        supply_cost,
        vat,
        total,
    }
}
