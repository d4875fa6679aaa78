use crate::listing::{Listing, Room, SummaryRow, Unit};
use crate::render::Renderer;
use crate::render::category::RoomCategory;
use std::fmt::Write;

const FLOOR_SYMBOL: &str = "☰";
const TOTAL_SYMBOL: &str = "⌂";
const NOT_AVAILABLE: &str = "n/a";
const NAME_WIDTH: usize = 36;

/// Areas are rounded to whole units on display only
fn rounded(area: f64) -> String {
    format!("{}", area.round())
}

fn area_text(area: f64, unit: Unit) -> String {
    format!("{} {}", rounded(area), unit.area_suffix())
}

fn room_columns(room: &Room, unit: Unit) -> (String, String) {
    if room.has_area() {
        let dims = room.dimensions();
        (format!("{} ({} x {})", room.name(), dims.width, dims.height), area_text(room.area(), unit))
    } else {
        (room.name().to_string(), NOT_AVAILABLE.to_string())
    }
}

/// Flat list: floors, their rooms indented beneath, then the total
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainRenderer;

impl Renderer for PlainRenderer {
    fn render(&self, listing: &Listing) -> String {
        let unit = listing.unit();
        let mut out = String::new();

        for row in listing.summary_rows() {
            let _ = writeln!(out, "{:<width$} {:>10}", row.label(), area_text(row.area(), unit), width = NAME_WIDTH + 2);
            if let SummaryRow::Floor(bucket) = row {
                for room in bucket.rooms() {
                    let (name, area) = room_columns(room, unit);
                    let _ = writeln!(out, "  {:<width$} {:>10}", name, area, width = NAME_WIDTH);
                }
            }
        }

        out
    }
}

/// List annotated with a symbol per floor and per room category,
/// with separators between floors
#[derive(Debug, Default, Clone, Copy)]
pub struct SymbolRenderer;

impl Renderer for SymbolRenderer {
    fn render(&self, listing: &Listing) -> String {
        let unit = listing.unit();
        let mut out = String::new();

        for (idx, row) in listing.summary_rows().into_iter().enumerate() {
            if idx != 0 {
                let _ = writeln!(out, "{}", "─".repeat(NAME_WIDTH + 15));
            }
            match row {
                SummaryRow::Floor(bucket) => {
                    let _ = writeln!(out, "{} {:<width$} {:>10}", FLOOR_SYMBOL, bucket.label(), area_text(bucket.area(), unit), width = NAME_WIDTH + 2);
                    for room in bucket.rooms() {
                        let symbol = RoomCategory::from_name(room.name()).symbol();
                        let (name, area) = room_columns(room, unit);
                        let _ = writeln!(out, "  {} {:<width$} {:>10}", symbol, name, area, width = NAME_WIDTH);
                    }
                }
                SummaryRow::Total { area } => {
                    let _ = writeln!(out, "{} {:<width$} {:>10}", TOTAL_SYMBOL, row.label(), area_text(area, unit), width = NAME_WIDTH + 2);
                }
            }
        }

        out
    }
}
