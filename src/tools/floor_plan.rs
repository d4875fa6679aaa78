use crate::error::{ListingError, Result};
use crate::listing::Listing;
use crate::render::OutputFormat;
use crate::tools::{Tool, ToolContext, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the floor_plan tool
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct FloorPlanParams {
    /// How to render the summary text (default: symbols)
    #[serde(default)]
    pub format: OutputFormat,
}

/// Tool reading the rooms of the listing in the active tab, grouped by floor
#[derive(Default)]
pub struct FloorPlanTool;

impl Tool for FloorPlanTool {
    type Params = FloorPlanParams;

    fn name(&self) -> &str {
        "floor_plan"
    }

    fn description(&self) -> &str {
        "Read the room table of the listing in the active tab, grouped by floor with per-floor and total areas"
    }

    fn execute_typed(&self, params: FloorPlanParams, context: &mut ToolContext) -> Result<ToolResult> {
        floor_plan_result(context.session.extract_listing(), params.format)
    }
}

/// Shape an extraction outcome into a tool result.
///
/// Page states the user can fix (wrong site, wrong page, no rooms) come back
/// as unsuccessful results; anything else is an error.
pub fn floor_plan_result(outcome: Result<Listing>, format: OutputFormat) -> Result<ToolResult> {
    match outcome {
        Ok(listing) => Ok(ToolResult::success_with(serde_json::json!({
            "unit": listing.unit(),
            "floors": listing.buckets().len(),
            "rooms": listing.room_count(),
            "total_area": listing.total_area(),
            "summary": format.renderer().render(&listing),
            "listing": listing,
        }))),
        Err(err) if !err.is_failure() => Ok(ToolResult::failure(err.panel().message())),
        Err(err) => Err(ListingError::ToolExecutionFailed {
            tool: "floor_plan".to_string(),
            reason: err.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Panel;
    use crate::listing::{LeadingRows, RowSnapshot, Unit, summarize};

    #[test]
    fn test_params_default_format() {
        let params: FloorPlanParams = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(params.format, OutputFormat::Symbols);

        let params: FloorPlanParams = serde_json::from_value(serde_json::json!({"format": "json"})).unwrap();
        assert_eq!(params.format, OutputFormat::Json);
    }

    #[test]
    fn test_result_for_listing() {
        let rows = vec![
            RowSnapshot::room("Kitchen").with_label("Main Floor").with_dimensions(Unit::Metric, "3 x 4"),
            RowSnapshot::room("Bath").with_dimensions(Unit::Metric, "2 x 2"),
        ];
        let listing = summarize(&rows, Unit::Metric, LeadingRows::Reject).unwrap();

        let result = floor_plan_result(Ok(listing), OutputFormat::Plain).unwrap();
        assert!(result.success);
        let data = result.data.unwrap();
        assert_eq!(data["unit"], "metric");
        assert_eq!(data["rooms"], 2);
        assert_eq!(data["total_area"], 16.0);
        assert!(data["summary"].as_str().unwrap().contains("16 m²"));
        assert_eq!(data["listing"]["buckets"][0]["area"], 16.0);
    }

    #[test]
    fn test_page_states_are_soft_failures() {
        let result = floor_plan_result(Err(ListingError::NoRoomsFound), OutputFormat::Symbols).unwrap();
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some(Panel::Empty.message()));

        let result = floor_plan_result(
            Err(ListingError::WrongSite { host: "example.com".to_string() }),
            OutputFormat::Symbols,
        )
        .unwrap();
        assert_eq!(result.error.as_deref(), Some(Panel::InvalidSite.message()));
    }

    #[test]
    fn test_extraction_failure_is_error() {
        let err = floor_plan_result(Err(ListingError::RoomsSectionMissing), OutputFormat::Symbols).unwrap_err();
        assert!(matches!(err, ListingError::ToolExecutionFailed { ref tool, .. } if tool == "floor_plan"));
        assert!(err.to_string().contains("Rooms section not found"));
    }
}
