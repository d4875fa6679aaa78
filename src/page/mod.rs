//! Page-context access
//!
//! Everything that runs inside the listing tab goes through [`PageHost`]:
//! one script in, one JSON value out. The scripts themselves live next to
//! this module as `.js` files and only read the rendered page; all grouping
//! and arithmetic happens on the Rust side.

pub mod gate;
pub mod scripts;

pub use gate::{PageKind, PageLocation, classify_page, ensure_listing};

use crate::config::PageMarkers;
use crate::error::{ListingError, Result};
use crate::listing::{RowSnapshot, Unit};
use headless_chrome::Tab;
use serde::de::DeserializeOwned;

/// Runs a script inside a page and hands back its single result value
pub trait PageHost {
    fn run_script(&self, script: &str) -> Result<serde_json::Value>;
}

impl PageHost for Tab {
    fn run_script(&self, script: &str) -> Result<serde_json::Value> {
        let result = self
            .evaluate(script, false)
            .map_err(|e| ListingError::EvaluationFailed(e.to_string()))?;

        result
            .value
            .ok_or_else(|| ListingError::EvaluationFailed("No value returned from page script".to_string()))
    }
}

/// Run a script that answers with JSON and decode the answer
fn run_json<T: DeserializeOwned>(host: &dyn PageHost, name: &str, script: &str) -> Result<T> {
    log::debug!("Running page script '{}'", name);
    let value = host.run_script(script)?;

    let unexpected = |reason: String| ListingError::UnexpectedPayload { script: name.to_string(), reason };

    // Scripts return a JSON string; accept an already-decoded value too
    match value.as_str() {
        Some(json_str) => serde_json::from_str(json_str).map_err(|e| unexpected(e.to_string())),
        None => serde_json::from_value(value).map_err(|e| unexpected(e.to_string())),
    }
}

/// Read the host and path of the page
pub fn read_location(host: &dyn PageHost) -> Result<PageLocation> {
    run_json(host, "read_location", &scripts::location_script())
}

/// Read which unit system the page's toggle is showing
pub fn read_unit(host: &dyn PageHost, markers: &PageMarkers) -> Result<Unit> {
    run_json(host, "read_unit", &scripts::unit_script(markers)?)
}

/// Read the text of every room row in document order
pub fn read_rows(host: &dyn PageHost, markers: &PageMarkers) -> Result<Vec<RowSnapshot>> {
    let rows: Option<Vec<RowSnapshot>> = run_json(host, "read_rows", &scripts::rows_script(markers)?)?;
    rows.ok_or(ListingError::RoomsSectionMissing)
}
