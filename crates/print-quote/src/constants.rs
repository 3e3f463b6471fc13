//! Built-in price defaults and production constants
//!
//! The admin back-office seeds the cost table lazily, so every lookup in
//! this crate falls back to the values here when a key is absent. The
//! binding and coating figures are the shop's invoicing constants and are
//! pinned as-is; tests assert them rather than re-derive them.

// =============================================================================
// Paper Prices
// =============================================================================

/// Fallback per-ream (yeon) prices by stock name and grammage.
pub const DEFAULT_PAPER_PRICES: &[(&str, &[(u32, i64)])] = &[
    (
        "snow",
        &[
            (100, 62_000),
            (120, 75_000),
            (150, 95_000),
            (180, 114_000),
            (200, 127_000),
        ],
    ),
    (
        "art",
        &[
            (100, 62_000),
            (120, 75_000),
            (150, 95_000),
            (180, 114_000),
            (200, 127_000),
        ],
    ),
    (
        "woodfree",
        &[(80, 51_000), (100, 63_000), (120, 75_000), (150, 94_000)],
    ),
];

/// Source sheets per ream when paper is quoted for the digital press.
pub const DIGITAL_REAM_SHEETS: f64 = 2000.0;

/// Sheets per yeon for offset inner blocks and flyers.
pub const OFFSET_REAM_SHEETS: f64 = 500.0;

/// Sheets per yeon for offset cover stock (heavier stock, larger ream unit).
pub const COVER_REAM_SHEETS: f64 = 1000.0;

// =============================================================================
// Press Defaults
// =============================================================================

/// Default click cost per color impression on the small-batch color press.
pub const DEFAULT_INDIGO_CLICK_COLOR: i64 = 200;

/// Default click cost per monochrome impression on the small-batch color press.
pub const DEFAULT_INDIGO_CLICK_MONO: i64 = 40;

/// Default click cost per monochrome impression on the monochrome digital press.
pub const DEFAULT_DIGITAL_CLICK_MONO: i64 = 20;

/// Default offset press cost per color per yeon of large sheets.
pub const DEFAULT_OFFSET_PER_COLOR: i64 = 8_000;

/// Default cost of one offset printing plate.
pub const DEFAULT_PLATE_PRICE: i64 = 8_000;

// =============================================================================
// Makeready
// =============================================================================

/// Extra sheets added to every offset flyer run for press setup waste.
pub const FLYER_MAKEREADY_SHEETS: u32 = 100;

/// Extra sheets added to offset book covers and inner blocks.
pub const BOOK_MAKEREADY_SHEETS: u32 = 130;

// =============================================================================
// Binding
// =============================================================================

/// Per-copy saddle-stitch cost on the digital route.
pub const DIGITAL_SADDLE_PER_COPY: i64 = 200;

/// Per-copy perfect-binding cost on the digital route.
pub const DIGITAL_PERFECT_PER_COPY: i64 = 400;

/// Base saddle-stitch charge for an offset run.
pub const OFFSET_SADDLE_BASE: i64 = 50_000;

/// Per-copy saddle-stitch charge on top of the base for an offset run.
pub const OFFSET_SADDLE_PER_COPY: i64 = 300;

/// Base perfect-binding charge for an offset run.
pub const OFFSET_PERFECT_BASE: i64 = 120_000;

/// Charge per volume step past the free allowance.
pub const OFFSET_PERFECT_STEP: i64 = 20_000;

/// Volume steps included in the base perfect-binding charge.
pub const OFFSET_PERFECT_FREE_STEPS: i64 = 6;

// =============================================================================
// Coating
// =============================================================================

/// Default per-copy coating surcharge on the digital route.
pub const DEFAULT_COATING_PER_COPY: i64 = 300;

/// Flat offset coating fee for runs up to 500 copies.
pub const OFFSET_COATING_TIER1: i64 = 45_000;

/// Flat offset coating fee for runs up to 1000 copies.
pub const OFFSET_COATING_TIER2: i64 = 80_000;

/// Flat offset coating fee for larger runs.
pub const OFFSET_COATING_TIER3: i64 = 120_000;

// =============================================================================
// Shipping
// =============================================================================

/// Default price of one shipping box, any category.
pub const DEFAULT_BOX_PRICE: i64 = 3_000;

/// Weight limit of a packed box in grams.
pub const BOX_WEIGHT_LIMIT_G: f64 = 20_000.0;

/// Flyer box interior: width x depth x height in millimeters.
pub const FLYER_BOX_MM: (f64, f64, f64) = (450.0, 305.0, 210.0);

/// Book box interior: width x depth x height in millimeters.
pub const BOOK_BOX_MM: (f64, f64, f64) = (315.0, 220.0, 270.0);

/// Stacked caliper in millimeters per sheet, by grammage.
pub const PAPER_CALIPER_MM: &[(u32, f64)] = &[
    (80, 0.09),
    (100, 0.10),
    (120, 0.12),
    (150, 0.15),
    (180, 0.18),
    (200, 0.20),
    (220, 0.22),
    (250, 0.25),
    (300, 0.31),
];

/// Caliper assumed for grammages not in the table.
pub const DEFAULT_CALIPER_MM: f64 = 0.10;
