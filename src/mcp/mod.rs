//! MCP (Model Context Protocol) server for floor-plan extraction
//!
//! This module provides rmcp-compatible tools by wrapping the tool registry.

pub mod handler;
pub use handler::FloorPlanServer;

use crate::tools::{CheckPageParams, FloorPlanParams, NavigateParams, ToolContext, ToolResult as InternalToolResult};
use rmcp::{
    tool_router, tool,
    ErrorData as McpError,
    model::{CallToolResult, Content},
    handler::server::wrapper::Parameters,
};
use serde::Serialize;

/// Convert internal ToolResult to MCP CallToolResult
fn convert_result(result: InternalToolResult) -> Result<CallToolResult, McpError> {
    if result.success {
        let text = match result.data {
            Some(data) => serde_json::to_string_pretty(&data).unwrap_or_else(|_| data.to_string()),
            None => "Success".to_string(),
        };
        Ok(CallToolResult::success(vec![Content::text(text)]))
    } else {
        // Page states (wrong site, no rooms) are answers, not protocol errors
        let message = result.error.unwrap_or_else(|| "Unknown error".to_string());
        Ok(CallToolResult::error(vec![Content::text(message)]))
    }
}

#[tool_router]
impl FloorPlanServer {
    fn run_tool(&self, name: &str, params: impl Serialize) -> Result<CallToolResult, McpError> {
        let params = serde_json::to_value(params).map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        let session = self.session();
        let mut context = ToolContext::new(&*session);
        let result = session
            .tool_registry()
            .execute(name, params, &mut context)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        convert_result(result)
    }

    /// Open a listing URL
    #[tool(description = "Open a real-estate listing URL in the active browser tab")]
    fn listing_navigate(&self, params: Parameters<NavigateParams>) -> Result<CallToolResult, McpError> {
        self.run_tool("navigate", params.0)
    }

    /// Check the page in the active tab
    #[tool(description = "Check whether the active tab is an individual listing page on a supported site")]
    fn listing_check_page(&self, params: Parameters<CheckPageParams>) -> Result<CallToolResult, McpError> {
        self.run_tool("check_page", params.0)
    }

    /// Read rooms grouped by floor
    #[tool(description = "Read the listing's rooms grouped by floor, with per-floor and total areas")]
    fn listing_floor_plan(&self, params: Parameters<FloorPlanParams>) -> Result<CallToolResult, McpError> {
        self.run_tool("floor_plan", params.0)
    }
}
