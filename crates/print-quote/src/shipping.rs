//! Shipping estimation
//!
//! Translates a physical job description into a box count and cost. One
//! box is filled up to whichever cap is hit first: stack height against
//! the box interior, or total weight against the 20 kg carrier limit.
//! This is the shop's packing approximation, not an optimal packer, and
//! the box-count it produces is what invoices have always carried.

use crate::constants::*;
use crate::costs::CostTable;
use crate::options::JobSpecification;
use crate::types::*;

/// Result of a shipping estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShippingEstimate {
    /// How many finished pieces fit in one box
    pub pieces_per_box: u32,
    /// Boxes needed for the full run
    pub boxes: u32,
    /// Total shipping cost
    pub cost: i64,
}

/// Estimate boxes and shipping cost for a run.
///
/// Flyers pack flat in the wide box; books stack spine-up in the narrow
/// one. A piece with unknown weight or thickness ships one per box rather
/// than dividing by zero.
pub fn estimate_shipping(
    category: ProductionCategory,
    quantity: u32,
    spec: &JobSpecification,
    costs: &CostTable,
) -> ShippingEstimate {
    let weight_g = piece_weight_g(category, spec);
    let thickness_mm = piece_thickness_mm(category, spec);

    let (_, _, box_height_mm) = if category.is_flyer() {
        FLYER_BOX_MM
    } else {
        BOOK_BOX_MM
    };
    let layer = pieces_per_layer(category, spec.size);

    let max_by_volume = if thickness_mm > 0.0 {
        (((box_height_mm / thickness_mm).floor() as u32) * layer).max(1)
    } else {
        1
    };
    let max_by_weight = if weight_g > 0.0 {
        ((BOX_WEIGHT_LIMIT_G / weight_g).floor() as u32).max(1)
    } else {
        1
    };

    let pieces_per_box = max_by_volume.min(max_by_weight);
    let boxes = quantity.div_ceil(pieces_per_box).max(1);
    let cost = boxes as i64 * costs.shipping_box_price(category);

    ShippingEstimate {
        pieces_per_box,
        boxes,
        cost,
    }
}

/// Weight of one finished piece in grams: planar area times grammage,
/// summed over every physical sheet. A book piece is its inner leaves
/// plus two cover leaves at double area (the cover wraps the block).
fn piece_weight_g(category: ProductionCategory, spec: &JobSpecification) -> f64 {
    let (w_mm, h_mm) = spec.size.dimensions_mm();
    let area_m2 = (w_mm / 1000.0) * (h_mm / 1000.0);

    if category.is_flyer() {
        area_m2 * spec.inner_paper.gram as f64
    } else {
        let inner_leaves = spec.inner_pages.div_ceil(2);
        let inner = inner_leaves as f64 * area_m2 * spec.inner_paper.gram as f64;
        let cover = 2.0 * (2.0 * area_m2) * spec.cover_paper.gram as f64;
        inner + cover
    }
}

/// Stacked thickness of one finished piece in millimeters, summed over
/// the same sheets as the weight.
fn piece_thickness_mm(category: ProductionCategory, spec: &JobSpecification) -> f64 {
    if category.is_flyer() {
        caliper_mm(spec.inner_paper.gram)
    } else {
        let inner_leaves = spec.inner_pages.div_ceil(2);
        inner_leaves as f64 * caliper_mm(spec.inner_paper.gram)
            + 2.0 * caliper_mm(spec.cover_paper.gram)
    }
}

fn caliper_mm(gram: u32) -> f64 {
    PAPER_CALIPER_MM
        .iter()
        .find(|(g, _)| *g == gram)
        .map(|(_, mm)| *mm)
        .unwrap_or(DEFAULT_CALIPER_MM)
}

/// Pieces laid side by side in one layer of the box. Smaller trims pack
/// more per layer; these counts were measured against the actual boxes.
fn pieces_per_layer(category: ProductionCategory, size: SheetSize) -> u32 {
    if category.is_flyer() {
        match size {
            SheetSize::A4 => 2,
            SheetSize::B5 => 2,
            SheetSize::A5 => 4,
        }
    } else {
        match size {
            SheetSize::A4 => 1,
            SheetSize::B5 => 1,
            SheetSize::A5 => 2,
        }
    }
}
