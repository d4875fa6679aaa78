//! Presentation of a totalled listing
//!
//! Renderers only walk an already computed [`Listing`]; they never change
//! what was extracted.

pub mod category;
pub mod text;

pub use category::RoomCategory;
pub use text::{PlainRenderer, SymbolRenderer};

use crate::listing::Listing;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Turns a listing into display text
pub trait Renderer {
    fn render(&self, listing: &Listing) -> String;
}

/// Pretty-printed JSON of the whole listing
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, listing: &Listing) -> String {
        serde_json::to_string_pretty(listing).unwrap_or_else(|e| {
            log::error!("Failed to serialize listing: {}", e);
            String::new()
        })
    }
}

/// Available output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Symbol-annotated list
    #[default]
    Symbols,
    /// Flat list without symbols
    Plain,
    /// JSON document
    Json,
}

impl OutputFormat {
    pub fn renderer(&self) -> Box<dyn Renderer> {
        match self {
            OutputFormat::Symbols => Box::new(SymbolRenderer),
            OutputFormat::Plain => Box::new(PlainRenderer),
            OutputFormat::Json => Box::new(JsonRenderer),
        }
    }
}
