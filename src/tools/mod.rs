//! Tool system shared by the CLI and the MCP server
//!
//! Each tool takes typed, JSON-schema described parameters and returns a
//! [`ToolResult`]. Tools run against a [`ToolContext`] wrapping the browser
//! session.

pub mod check_page;
pub mod floor_plan;
pub mod navigate;
pub mod utils;

pub use check_page::{CheckPageParams, CheckPageTool};
pub use floor_plan::{FloorPlanParams, FloorPlanTool};
pub use navigate::{NavigateParams, NavigateTool};

use crate::browser::BrowserSession;
use crate::error::{ListingError, Result};
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Outcome of a tool call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolResult {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ToolResult {
    /// Successful result carrying data
    pub fn success_with(data: serde_json::Value) -> Self {
        Self { success: true, data: Some(data), error: None }
    }

    /// Unsuccessful result with a message for the caller
    pub fn failure(message: impl Into<String>) -> Self {
        Self { success: false, data: None, error: Some(message.into()) }
    }
}

/// State available to a running tool
pub struct ToolContext<'a> {
    pub session: &'a BrowserSession,
}

impl<'a> ToolContext<'a> {
    pub fn new(session: &'a BrowserSession) -> Self {
        Self { session }
    }
}

/// A typed browser tool
pub trait Tool: Send + Sync + Default {
    type Params: DeserializeOwned + JsonSchema;

    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// JSON schema of the parameters
    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::to_value(schemars::schema_for!(Self::Params)).unwrap_or_default()
    }

    fn execute_typed(&self, params: Self::Params, context: &mut ToolContext) -> Result<ToolResult>;
}

/// Object-safe view of a [`Tool`] taking raw JSON parameters
pub trait DynTool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn parameters_schema(&self) -> serde_json::Value;
    fn execute(&self, params: serde_json::Value, context: &mut ToolContext) -> Result<ToolResult>;
}

impl<T: Tool> DynTool for T {
    fn name(&self) -> &str {
        Tool::name(self)
    }

    fn description(&self) -> &str {
        Tool::description(self)
    }

    fn parameters_schema(&self) -> serde_json::Value {
        Tool::parameters_schema(self)
    }

    fn execute(&self, params: serde_json::Value, context: &mut ToolContext) -> Result<ToolResult> {
        let typed = serde_json::from_value(params)
            .map_err(|e| ListingError::InvalidParams(format!("{}: {}", Tool::name(self), e)))?;
        self.execute_typed(typed, context)
    }
}

/// Registered tools, kept in registration order
#[derive(Default)]
pub struct ToolRegistry {
    tools: IndexMap<String, Box<dyn DynTool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in tool
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(NavigateTool);
        registry.register(CheckPageTool);
        registry.register(FloorPlanTool);
        registry
    }

    /// Add a tool, replacing any tool with the same name
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        self.tools.insert(Tool::name(&tool).to_string(), Box::new(tool));
    }

    pub fn get(&self, name: &str) -> Option<&dyn DynTool> {
        self.tools.get(name).map(|tool| tool.as_ref())
    }

    /// Names of the registered tools
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Execute a tool by name with JSON parameters
    pub fn execute(&self, name: &str, params: serde_json::Value, context: &mut ToolContext) -> Result<ToolResult> {
        let tool = self.get(name).ok_or_else(|| ListingError::UnknownTool(name.to_string()))?;
        log::debug!("Executing tool '{}'", name);
        tool.execute(params, context)
    }
}
