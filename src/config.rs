use crate::error::{ListingError, Result};
use crate::listing::LeadingRows;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Where listings live on the provider's site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteRules {
    /// Host of the listing provider; subdomains also match
    pub host: String,

    /// Path fragment present on individual listing pages
    pub listing_path: String,
}

impl Default for SiteRules {
    fn default() -> Self {
        Self {
            host: "realtor.ca".to_string(),
            listing_path: "/real-estate/".to_string(),
        }
    }
}

/// Structural markers used to find the room table on a listing page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMarkers {
    /// Element id of the rooms section
    pub rooms_section_id: String,

    /// Class of the container whose children are the room rows
    pub room_content_class: String,

    /// Class of the floor-label field inside a row
    pub floor_class: String,

    /// Class of the room-name field inside a row
    pub room_class: String,

    /// Element id of the imperial/metric checkbox
    pub unit_toggle_id: String,
}

impl Default for PageMarkers {
    fn default() -> Self {
        Self {
            rooms_section_id: "propertyDetailsRoomsSection".to_string(),
            room_content_class: "propertyDetailsRoomContent".to_string(),
            floor_class: "listingDetailsRoomDetails_Floor".to_string(),
            room_class: "listingDetailsRoomDetails_Room".to_string(),
            unit_toggle_id: "chkMeasurements".to_string(),
        }
    }
}

/// Settings for one extraction run
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    pub site: SiteRules,
    pub markers: PageMarkers,

    /// Policy for rooms listed before the first floor label
    pub leading_rows: LeadingRows,
}

impl ExtractionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the leading-rows policy
    pub fn leading_rows(mut self, policy: LeadingRows) -> Self {
        self.leading_rows = policy;
        self
    }

    /// Builder method: set the site rules
    pub fn site(mut self, site: SiteRules) -> Self {
        self.site = site;
        self
    }

    /// Load a configuration from a JSON file; missing keys keep their defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ListingError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_json(&contents)
    }

    /// Parse a configuration from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ListingError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_target_realtor() {
        let config = ExtractionConfig::default();

        assert_eq!(config.site.host, "realtor.ca");
        assert_eq!(config.site.listing_path, "/real-estate/");
        assert_eq!(config.markers.unit_toggle_id, "chkMeasurements");
        assert_eq!(config.leading_rows, LeadingRows::Unlabeled);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ExtractionConfig::from_json(r#"{"leading_rows": "reject", "markers": {"floor_class": "floor"}}"#).unwrap();

        assert_eq!(config.leading_rows, LeadingRows::Reject);
        assert_eq!(config.markers.floor_class, "floor");
        assert_eq!(config.markers.room_class, "listingDetailsRoomDetails_Room");
        assert_eq!(config.site, SiteRules::default());
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = ExtractionConfig::from_json(r#"{"leading_rows": "sometimes"}"#).unwrap_err();
        assert!(matches!(err, ListingError::Config(_)));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = ExtractionConfig::from_file("/nonexistent/floor-tally.json").unwrap_err();
        assert!(matches!(err, ListingError::Config(_)));
    }

    #[test]
    fn test_builder() {
        let config = ExtractionConfig::new().leading_rows(LeadingRows::Reject).site(SiteRules {
            host: "example.com".to_string(),
            listing_path: "/homes/".to_string(),
        });

        assert_eq!(config.leading_rows, LeadingRows::Reject);
        assert_eq!(config.site.host, "example.com");
    }
}
