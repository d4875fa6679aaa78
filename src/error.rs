use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, ListingError>;

/// The user-visible state an outcome maps onto.
///
/// Exactly one panel is shown per run: the rendered listing, or one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    /// The active tab is not on the listing provider's site
    InvalidSite,
    /// The site matches but the page is not an individual listing
    InvalidListing,
    /// Extraction finished but the listing has no rooms
    Empty,
    /// Anything else went wrong while talking to the page
    Problem,
}

impl Panel {
    /// Message shown to the user for this panel
    pub fn message(&self) -> &'static str {
        match self {
            Panel::InvalidSite => "This page is not on a supported listing site.",
            Panel::InvalidListing => "Open an individual property listing to see its rooms.",
            Panel::Empty => "No rooms were found on this listing.",
            Panel::Problem => "There was a problem reading the rooms on this page.",
        }
    }
}

/// Errors that can occur while reading and totalling a listing
#[derive(Debug, Error)]
pub enum ListingError {
    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    #[error("Failed to connect to browser: {0}")]
    ConnectionFailed(String),

    #[error("Tab operation failed: {0}")]
    TabOperationFailed(String),

    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    #[error("Script evaluation failed: {0}")]
    EvaluationFailed(String),

    #[error("Unexpected payload from page script '{script}': {reason}")]
    UnexpectedPayload { script: String, reason: String },

    #[error("Page host '{host}' is not a supported listing site")]
    WrongSite { host: String },

    #[error("Page path '{path}' is not an individual listing")]
    WrongPageType { path: String },

    #[error("No rooms found on the listing")]
    NoRoomsFound,

    #[error("Rooms section not found on the page")]
    RoomsSectionMissing,

    #[error("Row {row} has no {field} field")]
    MissingRowField { row: usize, field: String },

    #[error("Row {row} appears before any floor label")]
    UnlabeledRow { row: usize },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Tool '{tool}' failed: {reason}")]
    ToolExecutionFailed { tool: String, reason: String },

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ListingError {
    /// Map this error onto the panel the user sees
    pub fn panel(&self) -> Panel {
        match self {
            ListingError::WrongSite { .. } => Panel::InvalidSite,
            ListingError::WrongPageType { .. } => Panel::InvalidListing,
            ListingError::NoRoomsFound => Panel::Empty,
            _ => Panel::Problem,
        }
    }

    /// Whether this is a genuine failure rather than an expected page state
    pub fn is_failure(&self) -> bool {
        self.panel() == Panel::Problem
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_errors_map_to_their_panels() {
        let site = ListingError::WrongSite { host: "example.com".to_string() };
        let page = ListingError::WrongPageType { path: "/map".to_string() };

        assert_eq!(site.panel(), Panel::InvalidSite);
        assert_eq!(page.panel(), Panel::InvalidListing);
        assert!(!site.is_failure());
        assert!(!page.is_failure());
    }

    #[test]
    fn test_no_rooms_is_not_a_failure() {
        let err = ListingError::NoRoomsFound;
        assert_eq!(err.panel(), Panel::Empty);
        assert!(!err.is_failure());
    }

    #[test]
    fn test_structural_errors_are_problems() {
        assert_eq!(ListingError::RoomsSectionMissing.panel(), Panel::Problem);
        assert_eq!(
            ListingError::MissingRowField { row: 2, field: "room name".to_string() }.panel(),
            Panel::Problem
        );
        assert!(ListingError::EvaluationFailed("boom".to_string()).is_failure());
    }

    #[test]
    fn test_error_messages() {
        let err = ListingError::MissingRowField { row: 4, field: "Metric".to_string() };
        assert_eq!(err.to_string(), "Row 4 has no Metric field");

        let err = ListingError::UnlabeledRow { row: 0 };
        assert_eq!(err.to_string(), "Row 0 appears before any floor label");
    }
}
