use crate::error::Result;
use crate::page::{self, classify_page};
use crate::tools::{Tool, ToolContext, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the check_page tool (none needed)
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CheckPageParams {}

/// Tool reporting whether the active tab shows a supported listing
#[derive(Default)]
pub struct CheckPageTool;

impl Tool for CheckPageTool {
    type Params = CheckPageParams;

    fn name(&self) -> &str {
        "check_page"
    }

    fn description(&self) -> &str {
        "Check whether the active tab is an individual listing page on a supported site"
    }

    fn execute_typed(&self, _params: CheckPageParams, context: &mut ToolContext) -> Result<ToolResult> {
        let tab = context.session.tab()?;
        let location = page::read_location(&*tab)?;
        let kind = classify_page(&location, &context.session.config().site);

        Ok(ToolResult::success_with(serde_json::json!({
            "kind": kind,
            "host": location.host,
            "path": location.path
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_page_params_accept_empty_object() {
        let params = serde_json::from_value::<CheckPageParams>(serde_json::json!({}));
        assert!(params.is_ok());
    }

    #[test]
    fn test_check_page_tool_name() {
        assert_eq!(CheckPageTool.name(), "check_page");
    }
}
