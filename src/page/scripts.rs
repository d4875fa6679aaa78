use crate::config::PageMarkers;
use crate::error::Result;
use crate::listing::Unit;
use serde::Serialize;

const READ_LOCATION_JS: &str = include_str!("read_location.js");
const READ_UNIT_JS: &str = include_str!("read_unit.js");
const READ_ROWS_JS: &str = include_str!("read_rows.js");

#[derive(Serialize)]
struct UnitArgs<'a> {
    toggle_id: &'a str,
}

#[derive(Serialize)]
struct RowArgs<'a> {
    rooms_section_id: &'a str,
    room_content_class: &'a str,
    floor_class: &'a str,
    room_class: &'a str,
    unit_markers: Vec<String>,
}

/// Script returning the page's host and path
pub fn location_script() -> String {
    format!("({})()", READ_LOCATION_JS.trim())
}

/// Script returning `"imperial"` or `"metric"` from the unit toggle
pub fn unit_script(markers: &PageMarkers) -> Result<String> {
    invoke(READ_UNIT_JS, &UnitArgs { toggle_id: &markers.unit_toggle_id })
}

/// Script returning the text of every room row, or `null` without a rooms section
pub fn rows_script(markers: &PageMarkers) -> Result<String> {
    let args = RowArgs {
        rooms_section_id: &markers.rooms_section_id,
        room_content_class: &markers.room_content_class,
        floor_class: &markers.floor_class,
        room_class: &markers.room_class,
        unit_markers: Unit::ALL.iter().map(Unit::field_marker).collect(),
    };
    invoke(READ_ROWS_JS, &args)
}

/// Wrap a function expression into a call with JSON-encoded arguments
fn invoke<A: Serialize>(function: &str, args: &A) -> Result<String> {
    Ok(format!("({})({})", function.trim(), serde_json::to_string(args)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_script_is_called() {
        let script = location_script();
        assert!(script.starts_with("((function"));
        assert!(script.ends_with(")()"));
        assert!(script.contains("window.location.host"));
    }

    #[test]
    fn test_unit_script_embeds_toggle_id() {
        let script = unit_script(&PageMarkers::default()).unwrap();
        assert!(script.ends_with(r#"({"toggle_id":"chkMeasurements"})"#));
    }

    #[test]
    fn test_rows_script_embeds_markers() {
        let markers = PageMarkers {
            floor_class: "floor\"name".to_string(),
            ..PageMarkers::default()
        };
        let script = rows_script(&markers).unwrap();

        assert!(script.contains(r#""unit_markers":["Imperial","Metric"]"#));
        assert!(script.contains(r#""rooms_section_id":"propertyDetailsRoomsSection""#));
        // markers are JSON-escaped, never spliced raw
        assert!(script.contains(r#""floor_class":"floor\"name""#));
    }
}
