//! Quote computation - pricing a print job
//!
//! This module orchestrates one calculation:
//! 1. Validate the job specification
//! 2. Run the pipeline for the production category
//! 3. Estimate shipping for the physical run
//! 4. Assemble margin, VAT, and the rounded total
//!
//! The cost table is read once per call and treated as a snapshot, so a
//! concurrent price edit cannot mix old and new values inside one quote.

mod assemble;
mod book;
mod flyer;

pub use assemble::{CostComponents, assemble};

use tracing::debug;

use crate::costs::CostTable;
use crate::options::JobSpecification;
use crate::shipping::estimate_shipping;
use crate::types::*;

/// Price an unbound sheet job.
///
/// `margin_rate` is a percentage (e.g. 10.0). Rejects a zero quantity and
/// any category that is not a flyer route.
pub fn compute_flyer_price(
    category: ProductionCategory,
    quantity: u32,
    margin_rate: f64,
    spec: &JobSpecification,
    costs: &CostTable,
) -> Result<PriceBreakdown> {
    spec.validate()?;
    if quantity == 0 {
        return Err(QuoteError::ZeroQuantity);
    }

    let components = match category {
        ProductionCategory::SmallDigitalFlyer => flyer::digital_components(quantity, spec, costs)?,
        ProductionCategory::LargeOffsetFlyer => flyer::offset_components(quantity, spec, costs)?,
        other => {
            return Err(QuoteError::Spec(format!(
                "{} is not a flyer category",
                other.key()
            )));
        }
    };

    let shipping = estimate_shipping(category, quantity, spec, costs);
    let breakdown = assemble(category, quantity, components, margin_rate, shipping.cost);
    debug!(
        category = category.key(),
        quantity,
        total = breakdown.total,
        "flyer quote"
    );
    Ok(breakdown)
}

/// Price a bound multi-page job.
///
/// `margin_rate` is a percentage. Rejects a zero quantity and any
/// category that is not a book route.
pub fn compute_book_price(
    category: ProductionCategory,
    quantity: u32,
    margin_rate: f64,
    spec: &JobSpecification,
    costs: &CostTable,
) -> Result<PriceBreakdown> {
    spec.validate()?;
    if quantity == 0 {
        return Err(QuoteError::ZeroQuantity);
    }

    let components = match category {
        ProductionCategory::SmallDigitalColorBook | ProductionCategory::SmallDigitalMonoBook => {
            book::digital_components(category, quantity, spec, costs)?
        }
        ProductionCategory::LargeOffsetBook => book::offset_components(quantity, spec, costs)?,
        other => {
            return Err(QuoteError::Spec(format!(
                "{} is not a book category",
                other.key()
            )));
        }
    };

    let shipping = estimate_shipping(category, quantity, spec, costs);
    let breakdown = assemble(category, quantity, components, margin_rate, shipping.cost);
    debug!(
        category = category.key(),
        quantity,
        total = breakdown.total,
        "book quote"
    );
    Ok(breakdown)
}
