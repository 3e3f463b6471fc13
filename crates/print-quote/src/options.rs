use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-quote job inputs.
///
/// Category, quantity, and margin travel as explicit arguments to the
/// entry points; everything else a quote needs lives here. Flyer jobs use
/// only the inner-surface fields; the cover and binding fields apply to
/// books.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct JobSpecification {
    /// Finished trim size class
    pub size: SheetSize,

    /// Paper for the inner block (the only paper for flyers)
    pub inner_paper: PaperStock,
    /// Cover paper for book jobs
    pub cover_paper: PaperStock,

    /// Color mode of the inner block
    pub inner_color: ColorMode,
    /// Color mode of the cover
    pub cover_color: ColorMode,

    /// Double-sided printing (flyers)
    pub double_sided: bool,

    /// Binding method (books)
    pub bind: BindType,
    /// Cover coating (books)
    pub coating: Coating,

    /// Printed cover pages: 4 (both sides) or 2 (outside only)
    pub cover_pages: u32,
    /// Inner page count (0 for flyers)
    pub inner_pages: u32,
}

impl Default for JobSpecification {
    fn default() -> Self {
        Self {
            size: SheetSize::A4,
            inner_paper: PaperStock::new("woodfree", 100),
            cover_paper: PaperStock::new("art", 200),
            inner_color: ColorMode::Color,
            cover_color: ColorMode::Color,
            double_sided: true,
            bind: BindType::Perfect,
            coating: Coating::None,
            cover_pages: 4,
            inner_pages: 0,
        }
    }
}

impl JobSpecification {
    /// Load a specification from a JSON file.
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let spec = serde_json::from_slice(&bytes)
            .map_err(|e| QuoteError::Spec(format!("Failed to parse specification: {}", e)))?;
        Ok(spec)
    }

    /// Save the specification to a JSON file.
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| QuoteError::Spec(format!("Failed to serialize specification: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the specification.
    pub fn validate(&self) -> Result<()> {
        if self.cover_pages != 2 && self.cover_pages != 4 {
            return Err(QuoteError::Spec(format!(
                "Cover must print 2 or 4 pages, got {}",
                self.cover_pages
            )));
        }
        if self.inner_paper.name.is_empty() {
            return Err(QuoteError::Spec("No inner paper selected".to_string()));
        }
        if self.cover_paper.name.is_empty() {
            return Err(QuoteError::Spec("No cover paper selected".to_string()));
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;

    // The vocabulary enums serialize as the back-office string tokens so
    // snapshots stay readable next to the cost-table keys.

    impl Serialize for ProductionCategory {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.key())
        }
    }

    impl<'de> Deserialize<'de> for ProductionCategory {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            ProductionCategory::from_key(&s).ok_or_else(|| {
                serde::de::Error::unknown_variant(
                    &s,
                    &["flyer_small", "flyer_large", "indigo", "digital", "offset"],
                )
            })
        }
    }

    impl Serialize for SheetSize {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.key())
        }
    }

    impl<'de> Deserialize<'de> for SheetSize {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            match s.as_str() {
                "a4" => Ok(SheetSize::A4),
                "b5" => Ok(SheetSize::B5),
                "a5" => Ok(SheetSize::A5),
                _ => Err(serde::de::Error::unknown_variant(&s, &["a4", "b5", "a5"])),
            }
        }
    }

    impl Serialize for ColorMode {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.key())
        }
    }

    impl<'de> Deserialize<'de> for ColorMode {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            match s.as_str() {
                "color" => Ok(ColorMode::Color),
                "mono" => Ok(ColorMode::Mono),
                _ => Err(serde::de::Error::unknown_variant(&s, &["color", "mono"])),
            }
        }
    }

    impl Serialize for BindType {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.key())
        }
    }

    impl<'de> Deserialize<'de> for BindType {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            match s.as_str() {
                "saddle" => Ok(BindType::Saddle),
                "perfect" => Ok(BindType::Perfect),
                _ => Err(serde::de::Error::unknown_variant(&s, &["saddle", "perfect"])),
            }
        }
    }

    impl Serialize for Coating {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.key())
        }
    }

    impl<'de> Deserialize<'de> for Coating {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            match s.as_str() {
                "none" => Ok(Coating::None),
                "matte" => Ok(Coating::Matte),
                "gloss" => Ok(Coating::Gloss),
                _ => Err(serde::de::Error::unknown_variant(
                    &s,
                    &["none", "matte", "gloss"],
                )),
            }
        }
    }

    impl Serialize for MemberType {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.key())
        }
    }

    impl<'de> Deserialize<'de> for MemberType {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            match s.as_str() {
                "general" => Ok(MemberType::General),
                "business" => Ok(MemberType::Business),
                _ => Err(serde::de::Error::unknown_variant(
                    &s,
                    &["general", "business"],
                )),
            }
        }
    }
}
