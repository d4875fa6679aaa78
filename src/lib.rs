//! # floor-tally
//!
//! Reads the room table of a real-estate listing open in Chrome, groups the
//! rooms by floor and totals their areas.
//!
//! ## Features
//!
//! - **Floor grouping**: a flat list of room rows is split into floors using the
//!   floor labels that appear on some rows
//! - **Dimension parsing**: `"10 x 12"`, `"4.11 m x 3.38 m"` and friends become
//!   width, height and area
//! - **Totals**: per-floor and whole-listing areas, in imperial or metric as the
//!   page shows them
//! - **Browser integration**: talks to Chrome over the DevTools Protocol, either
//!   launching it or attaching to a running instance
//! - **MCP Server**: exposes the same operations as Model Context Protocol tools
//!
//! ## CLI
//!
//! ```bash
//! # Launch Chrome, open a listing and print its floors
//! cargo run --bin floor-tally -- https://www.realtor.ca/real-estate/12345678/some-street
//!
//! # Read whatever listing is open in a Chrome started with --remote-debugging-port
//! cargo run --bin floor-tally -- --ws-endpoint ws://127.0.0.1:9222/devtools/browser/<id>
//! ```
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use floor_tally::{BrowserSession, LaunchOptions};
//! use floor_tally::render::{Renderer, SymbolRenderer};
//!
//! # fn main() -> floor_tally::Result<()> {
//! let session = BrowserSession::launch(LaunchOptions::default())?;
//! session.navigate("https://www.realtor.ca/real-estate/12345678/some-street")?;
//! session.wait_for_navigation()?;
//!
//! let listing = session.extract_listing()?;
//! println!("{}", SymbolRenderer.render(&listing));
//! # Ok(())
//! # }
//! ```
//!
//! The extraction core does not need a browser at all:
//!
//! ```rust
//! use floor_tally::listing::{LeadingRows, RowSnapshot, Unit, summarize};
//!
//! let rows = vec![
//!     RowSnapshot::room("Living Room").with_label("Main Floor").with_dimensions(Unit::Imperial, "10 x 12"),
//!     RowSnapshot::room("Kitchen").with_dimensions(Unit::Imperial, "8 x 10"),
//! ];
//! let listing = summarize(&rows, Unit::Imperial, LeadingRows::Unlabeled).unwrap();
//! assert_eq!(listing.total_area(), 200.0);
//! ```
//!
//! ## Module Overview
//!
//! - [`listing`]: rows, dimension parsing, floor grouping and totals
//! - [`page`]: scripts run inside the listing tab and the site/page gate
//! - [`extract`]: the end-to-end extraction sequence
//! - [`render`]: text and JSON presentation of a listing
//! - [`browser`]: Chrome session management
//! - [`tools`]: tool registry shared by the CLI and MCP server
//! - [`config`]: site rules, page markers and extraction policy
//! - [`error`]: error types, result alias and user-facing panels
//! - [`mcp`]: Model Context Protocol server (requires `mcp-handler` feature)

pub mod browser;
pub mod config;
pub mod error;
pub mod extract;
pub mod listing;
pub mod page;
pub mod render;
pub mod tools;

#[cfg(feature = "mcp-handler")]
pub mod mcp;

pub use browser::{BrowserSession, ConnectionOptions, LaunchOptions};
pub use config::ExtractionConfig;
pub use error::{ListingError, Panel, Result};
pub use extract::{Extractor, present};
pub use listing::{FloorBucket, Listing, Room, Unit};
pub use page::PageHost;
pub use tools::{Tool, ToolContext, ToolRegistry, ToolResult};

#[cfg(feature = "mcp-handler")]
pub use mcp::FloorPlanServer;
#[cfg(feature = "mcp-handler")]
pub use rmcp::ServiceExt;
