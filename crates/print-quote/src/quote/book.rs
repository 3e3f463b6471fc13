//! Book pricing - bound multi-page jobs
//!
//! Cover and inner block are costed independently, then binding and
//! coating are added. Digital runs bill per copy and per click; offset
//! runs bill per press form (daesu), with plate counts and the stepped
//! perfect-binding formula carried over from the shop's rate card.

use super::assemble::CostComponents;
use crate::constants::*;
use crate::costs::CostTable;
use crate::options::JobSpecification;
use crate::types::*;

/// Small-batch digital books (color or monochrome route).
pub(super) fn digital_components(
    category: ProductionCategory,
    quantity: u32,
    spec: &JobSpecification,
    costs: &CostTable,
) -> Result<CostComponents> {
    let cover_price = paper_price(costs, &spec.cover_paper)?;
    let inner_price = paper_price(costs, &spec.inner_paper)?;

    // Cover: one source sheet per copy. The monochrome route still
    // prints covers at the color click.
    let cover_paper = (quantity as f64 * cover_price as f64 / DIGITAL_REAM_SHEETS).round() as i64;
    let cover_click = match category {
        ProductionCategory::SmallDigitalColorBook => costs.press_cost(category, spec.cover_color),
        _ => costs.press_cost(category, ColorMode::Color),
    };
    let cover_click = if spec.cover_pages == 4 {
        cover_click as f64
    } else {
        cover_click as f64 / 2.0
    };
    let cover_press = (quantity as f64 * cover_click).round() as i64;

    let coating = if spec.coating.applied() {
        quantity as i64 * costs.surcharge("coating")
    } else {
        0
    };

    // Inner block: pages gang up on the source sheet by trim size.
    let sheets_per_copy = spec.inner_pages.div_ceil(inner_leaf_divisor(spec.size));
    let sheets_total = sheets_per_copy as f64 * quantity as f64;
    let inner_paper = (sheets_total * inner_price as f64 / DIGITAL_REAM_SHEETS).round() as i64;
    let inner_click = match category {
        ProductionCategory::SmallDigitalColorBook => costs.press_cost(category, spec.inner_color),
        _ => costs.press_cost(category, ColorMode::Mono),
    };
    let inner_press = (sheets_total * inner_click as f64).round() as i64;

    let binding = quantity as i64
        * match spec.bind {
            BindType::Saddle => DIGITAL_SADDLE_PER_COPY,
            BindType::Perfect => DIGITAL_PERFECT_PER_COPY,
        };

    Ok(CostComponents {
        paper: cover_paper + inner_paper,
        press: cover_press + inner_press,
        plate: 0,
        coating,
        binding,
    })
}

/// Large-batch offset books.
pub(super) fn offset_components(
    quantity: u32,
    spec: &JobSpecification,
    costs: &CostTable,
) -> Result<CostComponents> {
    let cover_price = paper_price(costs, &spec.cover_paper)?;
    let inner_price = paper_price(costs, &spec.inner_paper)?;
    let plate_price = costs.plate_cost(ProductionCategory::LargeOffsetBook);

    // Press forms per copy, rounded up to the nearest half form.
    let daesu =
        (spec.inner_pages as f64 / pages_per_form(spec.size) as f64 * 2.0).ceil() / 2.0;

    // Cover: cut several covers from each press sheet, bought in reams
    // of 1000. Plate count is 8 for a 4-page cover, 4 for a 2-page one.
    let cover_sheets = quantity / covers_per_sheet(spec.size) + BOOK_MAKEREADY_SHEETS;
    let cover_yeon = cover_sheets as f64 / COVER_REAM_SHEETS;
    let cover_paper = (cover_yeon * cover_price as f64).round() as i64;
    let cover_plates: i64 = if spec.cover_pages == 4 { 8 } else { 4 };
    let cover_plate = cover_plates * plate_price;
    let cover_per_color =
        costs.press_cost(ProductionCategory::LargeOffsetBook, spec.cover_color) as f64;
    let cover_press = (cover_yeon.max(1.0) * cover_plates as f64 * cover_per_color).round() as i64;

    let coating = if spec.coating.applied() {
        if quantity <= 500 {
            OFFSET_COATING_TIER1
        } else if quantity <= 1000 {
            OFFSET_COATING_TIER2
        } else {
            OFFSET_COATING_TIER3
        }
    } else {
        0
    };

    // Inner block: daesu forms per copy plus makeready, in reams of 500.
    let inner_sheets = daesu * quantity as f64 + daesu * BOOK_MAKEREADY_SHEETS as f64;
    let inner_yeon = inner_sheets / OFFSET_REAM_SHEETS;
    let inner_paper = (inner_yeon * inner_price as f64).round() as i64;
    let inner_plate_count = match spec.inner_color {
        ColorMode::Color => 8,
        ColorMode::Mono => 2,
    };
    let inner_plate = (daesu * inner_plate_count as f64 * plate_price as f64).round() as i64;
    let inner_per_color =
        costs.press_cost(ProductionCategory::LargeOffsetBook, spec.inner_color) as f64;
    let inner_press =
        (inner_yeon.max(1.0) * inner_plate_count as f64 * inner_per_color).round() as i64;

    let binding = match spec.bind {
        BindType::Saddle => OFFSET_SADDLE_BASE + quantity as i64 * OFFSET_SADDLE_PER_COPY,
        BindType::Perfect => {
            let steps =
                spec.inner_pages as i64 * quantity as i64 / 2 / perfect_step_divisor(spec.size);
            OFFSET_PERFECT_BASE
                + (steps - OFFSET_PERFECT_FREE_STEPS).max(0) * OFFSET_PERFECT_STEP
        }
    };

    Ok(CostComponents {
        paper: cover_paper + inner_paper,
        press: cover_press + inner_press,
        plate: cover_plate + inner_plate,
        coating,
        binding,
    })
}

fn paper_price(costs: &CostTable, paper: &PaperStock) -> Result<i64> {
    costs
        .paper_unit_price(&paper.name, paper.gram)
        .ok_or_else(|| QuoteError::UnknownPaper {
            name: paper.name.clone(),
            gram: paper.gram,
        })
}

/// Inner pages ganged on one digital source sheet.
fn inner_leaf_divisor(size: SheetSize) -> u32 {
    match size {
        SheetSize::A4 | SheetSize::B5 => 4,
        SheetSize::A5 => 8,
    }
}

/// Book pages imposed on one offset press form.
fn pages_per_form(size: SheetSize) -> u32 {
    match size {
        SheetSize::A4 | SheetSize::B5 => 16,
        SheetSize::A5 => 32,
    }
}

/// Covers cut from one offset press sheet.
fn covers_per_sheet(size: SheetSize) -> u32 {
    match size {
        SheetSize::A4 | SheetSize::B5 => 2,
        SheetSize::A5 => 4,
    }
}

/// Divisor of the perfect-binding volume step. Rate-card constant.
fn perfect_step_divisor(size: SheetSize) -> i64 {
    match size {
        SheetSize::A4 | SheetSize::B5 => 4_000,
        SheetSize::A5 => 8_000,
    }
}
