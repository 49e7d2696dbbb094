//! Business segment identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Business vertical a company operates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentId {
    Sales,
    Health,
    Education,
    Ecommerce,
    Manufacturing,
    Services,
    Food,
}

impl SegmentId {
    pub const ALL: [SegmentId; 7] = [
        SegmentId::Sales,
        SegmentId::Health,
        SegmentId::Education,
        SegmentId::Ecommerce,
        SegmentId::Manufacturing,
        SegmentId::Services,
        SegmentId::Food,
    ];

    /// Returns the stored identifier for this segment.
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentId::Sales => "sales",
            SegmentId::Health => "health",
            SegmentId::Education => "education",
            SegmentId::Ecommerce => "ecommerce",
            SegmentId::Manufacturing => "manufacturing",
            SegmentId::Services => "services",
            SegmentId::Food => "food",
        }
    }

    /// Parses a stored segment identifier.
    ///
    /// Unknown identifiers are not an error: a company may simply not have
    /// picked a segment yet, so callers get `None` and show the
    /// "configure your segment" state.
    pub fn parse(raw: &str) -> Option<SegmentId> {
        let segment = match raw.trim().to_ascii_lowercase().as_str() {
            "sales" => SegmentId::Sales,
            "health" => SegmentId::Health,
            "education" => SegmentId::Education,
            "ecommerce" | "e-commerce" => SegmentId::Ecommerce,
            "manufacturing" => SegmentId::Manufacturing,
            "services" => SegmentId::Services,
            "food" => SegmentId::Food,
            _ => return None,
        };
        Some(segment)
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_stored_identifier() {
        for segment in SegmentId::ALL {
            assert_eq!(SegmentId::parse(segment.as_str()), Some(segment));
        }
    }

    #[test]
    fn accepts_hyphenated_ecommerce() {
        assert_eq!(SegmentId::parse("E-Commerce"), Some(SegmentId::Ecommerce));
    }

    #[test]
    fn unknown_segment_is_none() {
        assert_eq!(SegmentId::parse("nonexistent-segment"), None);
        assert_eq!(SegmentId::parse(""), None);
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&SegmentId::Manufacturing).unwrap();
        assert_eq!(json, "\"manufacturing\"");
    }
}
