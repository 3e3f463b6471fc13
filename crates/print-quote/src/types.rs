use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid job specification: {0}")]
    Spec(String),
    #[error("Unknown paper stock: {name} {gram}g")]
    UnknownPaper { name: String, gram: u32 },
    #[error("Quantity must be at least 1")]
    ZeroQuantity,
}

pub type Result<T> = std::result::Result<T, QuoteError>;

/// Production category, selected once at the entry point.
///
/// Each category maps to one press route and one price column in the
/// back-office cost table; the table keys are the original identifiers
/// (`flyer_small`, `flyer_large`, `indigo`, `digital`, `offset`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductionCategory {
    /// Small-batch flyers on the digital click press
    SmallDigitalFlyer,
    /// Large-batch flyers on the offset press
    LargeOffsetFlyer,
    /// Small-batch full-color books on the digital press
    SmallDigitalColorBook,
    /// Small-batch monochrome books on the digital press
    SmallDigitalMonoBook,
    /// Large-batch books on the offset press
    LargeOffsetBook,
}

impl ProductionCategory {
    /// Cost-table key for this category.
    pub fn key(self) -> &'static str {
        match self {
            ProductionCategory::SmallDigitalFlyer => "flyer_small",
            ProductionCategory::LargeOffsetFlyer => "flyer_large",
            ProductionCategory::SmallDigitalColorBook => "indigo",
            ProductionCategory::SmallDigitalMonoBook => "digital",
            ProductionCategory::LargeOffsetBook => "offset",
        }
    }

    /// Parse a cost-table key back into a category.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "flyer_small" => Some(ProductionCategory::SmallDigitalFlyer),
            "flyer_large" => Some(ProductionCategory::LargeOffsetFlyer),
            "indigo" => Some(ProductionCategory::SmallDigitalColorBook),
            "digital" => Some(ProductionCategory::SmallDigitalMonoBook),
            "offset" => Some(ProductionCategory::LargeOffsetBook),
            _ => None,
        }
    }

    pub fn is_flyer(self) -> bool {
        matches!(
            self,
            ProductionCategory::SmallDigitalFlyer | ProductionCategory::LargeOffsetFlyer
        )
    }

    pub fn is_book(self) -> bool {
        !self.is_flyer()
    }
}

/// Finished trim size classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SheetSize {
    #[default]
    A4,
    B5,
    A5,
}

impl SheetSize {
    /// Trim dimensions in millimeters (width, height)
    pub fn dimensions_mm(self) -> (f64, f64) {
        match self {
            SheetSize::A4 => (210.0, 297.0),
            SheetSize::B5 => (182.0, 257.0),
            SheetSize::A5 => (148.0, 210.0),
        }
    }

    /// Classify a custom trim size into the nearest size class.
    ///
    /// Exact trims match directly; anything else snaps by width, so an
    /// odd-sized job is quoted at the class it is cut from.
    pub fn from_dimensions_mm(width_mm: u32, height_mm: u32) -> Self {
        match (width_mm, height_mm) {
            (210, 297) => SheetSize::A4,
            (148, 210) => SheetSize::A5,
            (182, 257) => SheetSize::B5,
            (w, _) if w <= 160 => SheetSize::A5,
            (w, _) if w <= 200 => SheetSize::B5,
            _ => SheetSize::A4,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            SheetSize::A4 => "a4",
            SheetSize::B5 => "b5",
            SheetSize::A5 => "a5",
        }
    }
}

/// Print color mode for one surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorMode {
    #[default]
    Color,
    Mono,
}

impl ColorMode {
    pub fn key(self) -> &'static str {
        match self {
            ColorMode::Color => "color",
            ColorMode::Mono => "mono",
        }
    }
}

/// Binding methods offered for book jobs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BindType {
    /// Saddle-stitch (folded sheets, stapled at the spine)
    Saddle,
    /// Perfect binding (glued spine)
    #[default]
    Perfect,
}

impl BindType {
    pub fn key(self) -> &'static str {
        match self {
            BindType::Saddle => "saddle",
            BindType::Perfect => "perfect",
        }
    }
}

/// Cover coating. The surcharge depends only on whether a coating is
/// applied, not on which finish was picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Coating {
    #[default]
    None,
    Matte,
    Gloss,
}

impl Coating {
    pub fn applied(self) -> bool {
        !matches!(self, Coating::None)
    }

    pub fn key(self) -> &'static str {
        match self {
            Coating::None => "none",
            Coating::Matte => "matte",
            Coating::Gloss => "gloss",
        }
    }
}

/// Customer tier for margin lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemberType {
    #[default]
    General,
    Business,
}

impl MemberType {
    pub fn key(self) -> &'static str {
        match self {
            MemberType::General => "general",
            MemberType::Business => "business",
        }
    }
}

/// A paper choice: stock name plus grammage.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaperStock {
    pub name: String,
    pub gram: u32,
}

impl PaperStock {
    pub fn new(name: impl Into<String>, gram: u32) -> Self {
        Self {
            name: name.into(),
            gram,
        }
    }
}

/// Itemized price breakdown for one calculation.
///
/// All amounts are whole currency units. `subtotal` excludes shipping;
/// `supply_cost` is the margin-adjusted subtotal (truncated); `vat` is
/// truncated from `(supply_cost + shipping_cost) * 0.1`; `total` is
/// `supply_cost + shipping_cost + vat` dropped to the nearest 10.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceBreakdown {
    pub category: ProductionCategory,
    pub quantity: u32,
    pub paper_cost: i64,
    pub press_cost: i64,
    pub plate_cost: i64,
    pub coating_cost: i64,
    pub binding_cost: i64,
    pub shipping_cost: i64,
    pub subtotal: i64,
    pub supply_cost: i64,
    pub vat: i64,
    pub total: i64,
}
