//! Extraction orchestration
//!
//! One run walks the page in a fixed sequence of round trips: check the page
//! location, read the unit toggle, read the room rows. Each call completes
//! before the next is issued and the first failure ends the run.

use crate::config::ExtractionConfig;
use crate::error::{ListingError, Result};
use crate::listing::{Listing, summarize};
use crate::page::{self, PageHost};
use crate::render::Renderer;

/// Runs one extraction against a page host
pub struct Extractor<'a> {
    config: &'a ExtractionConfig,
}

impl<'a> Extractor<'a> {
    pub fn new(config: &'a ExtractionConfig) -> Self {
        Self { config }
    }

    /// Read and total the listing open in the page.
    ///
    /// Returns [`ListingError::NoRoomsFound`] when the rooms section exists
    /// but holds no floors; a missing rooms section is an extraction failure.
    pub fn run(&self, host: &dyn PageHost) -> Result<Listing> {
        let location = page::read_location(host)?;
        page::ensure_listing(&location, &self.config.site)?;
        log::debug!("Listing page {}{}", location.host, location.path);

        let unit = page::read_unit(host, &self.config.markers)?;
        log::debug!("Page shows {} measurements", unit);

        let rows = page::read_rows(host, &self.config.markers)?;
        log::debug!("Read {} room rows", rows.len());

        let listing = summarize(&rows, unit, self.config.leading_rows)?;
        if listing.is_empty() {
            return Err(ListingError::NoRoomsFound);
        }

        log::info!(
            "Found {} rooms on {} floors, {:.1} {} total",
            listing.room_count(),
            listing.buckets().len(),
            listing.total_area(),
            unit.area_suffix()
        );
        Ok(listing)
    }
}

/// Turn a run's outcome into the text shown to the user.
///
/// Failures are logged with their cause before being reduced to a panel
/// message.
pub fn present(outcome: &Result<Listing>, renderer: &dyn Renderer) -> String {
    match outcome {
        Ok(listing) => renderer.render(listing),
        Err(err) => {
            if err.is_failure() {
                log::error!("Extraction failed: {}", err);
            } else {
                log::info!("Nothing to show: {}", err);
            }
            err.panel().message().to_string()
        }
    }
}
