use print_quote::*;

fn components(paper: i64, press: i64, plate: i64, coating: i64, binding: i64) -> CostComponents {
    CostComponents {
        paper,
        press,
        plate,
        coating,
        binding,
    }
}

#[test]
fn test_rounding_order_is_pinned() {
    // supply truncates, VAT truncates, total drops to the nearest 10.
    // 1001 * 1.10 = 1101.1 -> 1101 (not 1102), VAT of 1101 -> 110,
    // 1211 -> 1210.
    let breakdown = assemble(
        ProductionCategory::SmallDigitalFlyer,
        10,
        components(1001, 0, 0, 0, 0),
        10.0,
        0,
    );

    assert_eq!(breakdown.subtotal, 1001);
    assert_eq!(breakdown.supply_cost, 1101);
    assert_eq!(breakdown.vat, 110);
    assert_eq!(breakdown.total, 1210);
}

#[test]
fn test_zero_margin_keeps_subtotal() {
    let breakdown = assemble(
        ProductionCategory::SmallDigitalColorBook,
        100,
        components(50_000, 30_000, 0, 0, 20_000),
        0.0,
        6_000,
    );

    assert_eq!(breakdown.subtotal, 100_000);
    assert_eq!(breakdown.supply_cost, 100_000);
    assert_eq!(breakdown.vat, 10_600);
    assert_eq!(breakdown.total, 116_600);
}

#[test]
fn test_vat_truncates() {
    // supply + shipping = 999 -> VAT 99, not 100
    let breakdown = assemble(
        ProductionCategory::SmallDigitalFlyer,
        1,
        components(999, 0, 0, 0, 0),
        0.0,
        0,
    );

    assert_eq!(breakdown.vat, 99);
    assert_eq!(breakdown.total, 1090);
}

#[test]
fn test_shipping_excluded_from_margin() {
    // Margin applies to the subtotal only; shipping joins afterwards.
    let with_shipping = assemble(
        ProductionCategory::LargeOffsetBook,
        100,
        components(100_000, 0, 0, 0, 0),
        20.0,
        9_000,
    );

    assert_eq!(with_shipping.supply_cost, 120_000);
    assert_eq!(with_shipping.vat, 12_900);
    assert_eq!(with_shipping.total, 141_900);
}

#[test]
fn test_total_is_multiple_of_ten() {
    for subtotal in [1, 7, 99, 1_234, 56_789, 1_000_003] {
        for margin in [0.0, 7.0, 10.0, 33.0] {
            for shipping in [0, 3_000, 9_001] {
                let breakdown = assemble(
                    ProductionCategory::SmallDigitalFlyer,
                    1,
                    components(subtotal, 0, 0, 0, 0),
                    margin,
                    shipping,
                );
                assert_eq!(breakdown.total % 10, 0);
                assert!(breakdown.vat >= 0);
                assert!(breakdown.total >= breakdown.supply_cost + breakdown.shipping_cost - 9);
            }
        }
    }
}

#[test]
fn test_margin_monotonicity() {
    let mut last = 0;
    for margin in 0..=50 {
        let breakdown = assemble(
            ProductionCategory::LargeOffsetFlyer,
            500,
            components(300_000, 150_000, 64_000, 0, 0),
            margin as f64,
            12_000,
        );
        assert!(breakdown.total >= last);
        last = breakdown.total;
    }
}

#[test]
fn test_breakdown_echoes_inputs() {
    let breakdown = assemble(
        ProductionCategory::SmallDigitalMonoBook,
        250,
        components(10, 20, 30, 40, 50),
        0.0,
        3_000,
    );

    assert_eq!(breakdown.category, ProductionCategory::SmallDigitalMonoBook);
    assert_eq!(breakdown.quantity, 250);
    assert_eq!(breakdown.paper_cost, 10);
    assert_eq!(breakdown.press_cost, 20);
    assert_eq!(breakdown.plate_cost, 30);
    assert_eq!(breakdown.coating_cost, 40);
    assert_eq!(breakdown.binding_cost, 50);
    assert_eq!(breakdown.shipping_cost, 3_000);
    assert_eq!(breakdown.subtotal, 150);
}
