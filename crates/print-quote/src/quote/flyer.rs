//! Flyer pricing - unbound sheet jobs
//!
//! Small batches run on the digital click press and are billed per source
//! sheet; large batches go to the offset press, where plates dominate and
//! paper is bought by the yeon with a fixed makeready allowance.

use super::assemble::CostComponents;
use crate::constants::*;
use crate::costs::CostTable;
use crate::options::JobSpecification;
use crate::types::*;

/// Small-batch digital flyers.
pub(super) fn digital_components(
    quantity: u32,
    spec: &JobSpecification,
    costs: &CostTable,
) -> Result<CostComponents> {
    let paper = &spec.inner_paper;
    let unit_price = costs
        .paper_unit_price(&paper.name, paper.gram)
        .ok_or_else(|| QuoteError::UnknownPaper {
            name: paper.name.clone(),
            gram: paper.gram,
        })?;

    let sheets = quantity.div_ceil(digital_yield(spec.size)) as f64;
    let paper_cost = (sheets * unit_price as f64 / DIGITAL_REAM_SHEETS).round() as i64;

    let click = costs.press_cost(ProductionCategory::SmallDigitalFlyer, spec.inner_color) as f64;
    let click = if spec.double_sided { click } else { click / 2.0 };
    let press_cost = (sheets * click).round() as i64;

    Ok(CostComponents {
        paper: paper_cost,
        press: press_cost,
        ..Default::default()
    })
}

/// Large-batch offset flyers.
pub(super) fn offset_components(
    quantity: u32,
    spec: &JobSpecification,
    costs: &CostTable,
) -> Result<CostComponents> {
    let paper = &spec.inner_paper;
    let unit_price = costs
        .paper_unit_price(&paper.name, paper.gram)
        .ok_or_else(|| QuoteError::UnknownPaper {
            name: paper.name.clone(),
            gram: paper.gram,
        })?;

    // One plate per color per printed side, independent of run length.
    let plates = plate_count(spec.inner_color, spec.double_sided);
    let plate_cost = plates as i64 * costs.plate_cost(ProductionCategory::LargeOffsetFlyer);

    let sheets = quantity / offset_yield(spec.size) + FLYER_MAKEREADY_SHEETS;
    let yeon = sheets as f64 / OFFSET_REAM_SHEETS;
    let paper_cost = (yeon * unit_price as f64).round() as i64;

    let per_color = costs.press_cost(ProductionCategory::LargeOffsetFlyer, spec.inner_color) as f64;
    let press_cost = (yeon.max(1.0) * plates as f64 * per_color).round() as i64;

    Ok(CostComponents {
        paper: paper_cost,
        press: press_cost,
        plate: plate_cost,
        ..Default::default()
    })
}

/// Flyer pieces cut from one digital source sheet.
fn digital_yield(size: SheetSize) -> u32 {
    match size {
        SheetSize::A4 => 2,
        SheetSize::B5 => 2,
        SheetSize::A5 => 4,
    }
}

/// Flyer pieces cut from one offset press sheet.
fn offset_yield(size: SheetSize) -> u32 {
    match size {
        SheetSize::A4 => 8,
        SheetSize::B5 => 8,
        SheetSize::A5 => 16,
    }
}

fn plate_count(color: ColorMode, double_sided: bool) -> u32 {
    let colors = match color {
        ColorMode::Color => 4,
        ColorMode::Mono => 1,
    };
    let sides = if double_sided { 2 } else { 1 };
    colors * sides
}
