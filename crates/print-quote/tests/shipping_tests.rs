use print_quote::*;

fn flyer_spec(gram: u32) -> JobSpecification {
    JobSpecification {
        inner_paper: PaperStock::new("woodfree", gram),
        ..Default::default()
    }
}

#[test]
fn test_flyer_run_fits_one_box() {
    // A4 80g flyers: 0.21 x 0.297 m at 80 gsm is just under 5 g a piece,
    // so the 20 kg limit caps a box at 4008 pieces.
    let costs = CostTable::default();
    let estimate = estimate_shipping(
        ProductionCategory::SmallDigitalFlyer,
        1000,
        &flyer_spec(80),
        &costs,
    );

    assert_eq!(estimate.pieces_per_box, 4008);
    assert_eq!(estimate.boxes, 1);
    assert_eq!(estimate.cost, 3_000);
}

#[test]
fn test_flyer_weight_cap_governs() {
    // Heavier stock lowers the weight cap below the volume cap.
    let costs = CostTable::default();
    let estimate = estimate_shipping(
        ProductionCategory::LargeOffsetFlyer,
        10_000,
        &flyer_spec(100),
        &costs,
    );

    // 6.237 g/piece -> 3206 by weight vs 4200 by volume
    assert_eq!(estimate.pieces_per_box, 3206);
    assert_eq!(estimate.boxes, 4);
    assert_eq!(estimate.cost, 12_000);
}

#[test]
fn test_book_thickness_cap_governs() {
    // 128-page A4 book: 64 inner leaves at 0.10 mm plus the cover stack
    // to 6.8 mm, so 39 copies fill the box height before weight matters.
    let costs = CostTable::default();
    let spec = JobSpecification {
        inner_pages: 128,
        ..Default::default()
    };
    let estimate = estimate_shipping(ProductionCategory::LargeOffsetBook, 500, &spec, &costs);

    assert_eq!(estimate.pieces_per_box, 39);
    assert_eq!(estimate.boxes, 13);
    assert_eq!(estimate.cost, 39_000);
}

#[test]
fn test_zero_weight_ships_one_per_box() {
    // A grammage of zero gives an undefined piece weight; the estimator
    // clamps to one piece per box instead of dividing by zero.
    let costs = CostTable::default();
    let estimate = estimate_shipping(
        ProductionCategory::SmallDigitalFlyer,
        25,
        &flyer_spec(0),
        &costs,
    );

    assert_eq!(estimate.pieces_per_box, 1);
    assert_eq!(estimate.boxes, 25);
}

#[test]
fn test_at_least_one_box() {
    let costs = CostTable::default();
    let estimate = estimate_shipping(
        ProductionCategory::SmallDigitalFlyer,
        1,
        &flyer_spec(100),
        &costs,
    );

    assert_eq!(estimate.boxes, 1);
    assert!(estimate.pieces_per_box >= 1);
}

#[test]
fn test_box_count_never_decreases_with_quantity() {
    let costs = CostTable::default();
    let spec = JobSpecification {
        inner_pages: 64,
        ..Default::default()
    };

    let mut last = 0;
    for quantity in (100..=3000).step_by(100) {
        let estimate = estimate_shipping(
            ProductionCategory::SmallDigitalColorBook,
            quantity,
            &spec,
            &costs,
        );
        assert!(estimate.boxes >= last);
        // Enough boxes for the whole run
        assert!(estimate.boxes as u64 * estimate.pieces_per_box as u64 >= quantity as u64);
        last = estimate.boxes;
    }
}

#[test]
fn test_box_price_tier_by_category() {
    let mut costs = CostTable::default();
    costs
        .additional_costs
        .insert("shipping_flyer_small".to_string(), 3_500);

    let small = estimate_shipping(
        ProductionCategory::SmallDigitalFlyer,
        100,
        &flyer_spec(100),
        &costs,
    );
    let large = estimate_shipping(
        ProductionCategory::LargeOffsetFlyer,
        100,
        &flyer_spec(100),
        &costs,
    );

    assert_eq!(small.boxes, 1);
    assert_eq!(small.cost, 3_500);
    assert_eq!(large.cost, 3_000);
}

#[test]
fn test_a5_books_pack_two_per_layer() {
    // Same job in A5 packs two stacks per layer, so each box takes
    // double what a single stack would.
    let costs = CostTable::default();
    let a4 = JobSpecification {
        inner_pages: 200,
        ..Default::default()
    };
    let a5 = JobSpecification {
        size: SheetSize::A5,
        inner_pages: 200,
        ..Default::default()
    };

    let a4_estimate = estimate_shipping(ProductionCategory::LargeOffsetBook, 1000, &a4, &costs);
    let a5_estimate = estimate_shipping(ProductionCategory::LargeOffsetBook, 1000, &a5, &costs);

    // 100 inner leaves -> 10.4 mm stack; 25 per stack, one stack for A4,
    // two for A5 (weight caps are far higher at these grammages).
    assert_eq!(a4_estimate.pieces_per_box, 25);
    assert_eq!(a5_estimate.pieces_per_box, 50);
}
