//! Banner placement slots for the marketing widget.
//!
//! The downstream integration knows exactly two placement slots on the
//! checkout finish page. They are exchanged as fixed display strings, so the
//! enum serializes to those strings rather than to variant names.

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::CheckoutError;

/// Placement slot for the marketing banner on the checkout finish page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BannerLocation {
    /// Rendered above the finish-page teaser block.
    AboveFinishTeaser,
    /// Rendered below the finish-page teaser block (the default slot).
    BelowFinishTeaser,
}

impl BannerLocation {
    /// Returns the display constant exchanged with the integration.
    pub fn as_str(&self) -> &'static str {
        match self {
            BannerLocation::AboveFinishTeaser => "above finish teaser",
            BannerLocation::BelowFinishTeaser => "below finish teaser",
        }
    }

    /// Returns the short option key used in configuration.
    pub fn option_key(&self) -> &'static str {
        match self {
            BannerLocation::AboveFinishTeaser => "above",
            BannerLocation::BelowFinishTeaser => "below",
        }
    }
}

impl Default for BannerLocation {
    fn default() -> Self {
        BannerLocation::BelowFinishTeaser
    }
}

impl fmt::Display for BannerLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BannerLocation {
    type Err = CheckoutError;

    /// Parse a slot from either the short option key or the full display
    /// string (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "above" | "above finish teaser" => Ok(BannerLocation::AboveFinishTeaser),
            "below" | "below finish teaser" => Ok(BannerLocation::BelowFinishTeaser),
            _ => Err(CheckoutError::UnknownBannerLocation(s.to_string())),
        }
    }
}

impl Serialize for BannerLocation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BannerLocation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Static option-key-to-slot table exposed alongside the record.
///
/// Fixed at compile time and never mutated; serializes as a two-entry map
/// from option key to display constant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BannerLocationOptions;

impl BannerLocationOptions {
    pub const ENTRIES: [(&'static str, BannerLocation); 2] = [
        ("above", BannerLocation::AboveFinishTeaser),
        ("below", BannerLocation::BelowFinishTeaser),
    ];

    /// Look up a slot by its short option key.
    pub fn get(key: &str) -> Option<BannerLocation> {
        Self::ENTRIES
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, slot)| *slot)
    }
}

impl Serialize for BannerLocationOptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Self::ENTRIES.len()))?;
        for (key, slot) in Self::ENTRIES {
            map.serialize_entry(key, slot.as_str())?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_option_keys_and_display_strings() {
        assert_eq!(
            "above".parse::<BannerLocation>().unwrap(),
            BannerLocation::AboveFinishTeaser
        );
        assert_eq!(
            "Below Finish Teaser".parse::<BannerLocation>().unwrap(),
            BannerLocation::BelowFinishTeaser
        );
        assert!("sidebar".parse::<BannerLocation>().is_err());
    }

    #[test]
    fn options_table_is_closed() {
        assert_eq!(BannerLocationOptions::ENTRIES.len(), 2);
        assert_eq!(
            BannerLocationOptions::get("above"),
            Some(BannerLocation::AboveFinishTeaser)
        );
        assert_eq!(
            BannerLocationOptions::get("below"),
            Some(BannerLocation::BelowFinishTeaser)
        );
        assert_eq!(BannerLocationOptions::get("left"), None);
    }

    #[test]
    fn default_slot_is_below() {
        assert_eq!(BannerLocation::default(), BannerLocation::BelowFinishTeaser);
    }
}
