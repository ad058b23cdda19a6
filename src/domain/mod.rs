/// Domain models for catalog queries
use serde::{Deserialize, Serialize};

/// One discoverable product, as named by the source catalog.
///
/// `title` is the provider's display name; `download_url` is an absolute
/// URL handed to the downstream download-job submitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Granule {
    pub title: String,
    pub download_url: String,
}

/// Calendar date pulled out of a product title.
///
/// Components are zero-padded strings taken verbatim from the title; no
/// calendar validation is performed. [`ProductDate::sentinel`] stands in
/// when no date can be extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDate {
    pub year: String,
    pub month: String,
    pub day: String,
}

impl ProductDate {
    pub fn new(year: &str, month: &str, day: &str) -> Self {
        Self {
            year: year.to_string(),
            month: month.to_string(),
            day: day.to_string(),
        }
    }

    /// The "no date found" value: `("0000", "00", "00")`.
    pub fn sentinel() -> Self {
        Self::new("0000", "00", "00")
    }

    pub fn is_sentinel(&self) -> bool {
        self.year == "0000" && self.month == "00" && self.day == "00"
    }
}

/// Product family / processing level a query targets.
///
/// The set is closed: tags outside it resolve to `None` and the adapter
/// treats that as a silent no-op, matching long-standing caller behavior.
/// Callers that typo a tag get an empty result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductMapping {
    /// Single-look-complex SAR products, polygon-filtered.
    S1IwSlc,
    /// Ground-range-detected products, no spatial filter.
    S1Grd,
}

impl ProductMapping {
    /// Resolve a caller-supplied mapping tag. Unknown tags are not errors.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "S1_IW_SLC" => Some(ProductMapping::S1IwSlc),
            "S1_GRD" => Some(ProductMapping::S1Grd),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            ProductMapping::S1IwSlc => "S1_IW_SLC",
            ProductMapping::S1Grd => "S1_GRD",
        }
    }

    /// Server-side processing-level filter for this mapping.
    pub fn processing_level(&self) -> &'static str {
        match self {
            ProductMapping::S1IwSlc => "SLC",
            ProductMapping::S1Grd => "GRD_HS,GRD_HD",
        }
    }

    /// Whether the compiled query carries a polygon filter.
    pub fn polygon_filtered(&self) -> bool {
        matches!(self, ProductMapping::S1IwSlc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_resolve() {
        assert_eq!(
            ProductMapping::from_tag("S1_IW_SLC"),
            Some(ProductMapping::S1IwSlc)
        );
        assert_eq!(ProductMapping::from_tag("S1_GRD"), Some(ProductMapping::S1Grd));
    }

    #[test]
    fn unknown_tag_is_none() {
        assert_eq!(ProductMapping::from_tag("S1_BOGUS"), None);
        assert_eq!(ProductMapping::from_tag(""), None);
    }

    #[test]
    fn tags_round_trip() {
        for mapping in [ProductMapping::S1IwSlc, ProductMapping::S1Grd] {
            assert_eq!(ProductMapping::from_tag(mapping.tag()), Some(mapping));
        }
    }

    #[test]
    fn sentinel_date() {
        let d = ProductDate::sentinel();
        assert!(d.is_sentinel());
        assert_eq!(d, ProductDate::new("0000", "00", "00"));
        assert!(!ProductDate::new("2021", "05", "01").is_sentinel());
    }
}
