use crate::browser::{BrowserSession, ConnectionOptions, LaunchOptions};
use crate::config::ExtractionConfig;
use crate::error::Result as ListingResult;
use rmcp::{
    ServerHandler, tool_handler,
    handler::server::router::tool::ToolRouter,
    model::{ServerCapabilities, ServerInfo},
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// MCP server exposing floor-plan extraction over a browser session
#[derive(Clone)]
pub struct FloorPlanServer {
    session: Arc<Mutex<BrowserSession>>,
    tool_router: ToolRouter<Self>,
}

impl FloorPlanServer {
    /// Wrap an existing session
    pub fn new(session: BrowserSession) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            tool_router: Self::tool_router(),
        }
    }

    /// Launch a browser and serve it
    pub fn with_options(options: LaunchOptions, config: ExtractionConfig) -> ListingResult<Self> {
        Ok(Self::new(BrowserSession::launch(options)?.with_config(config)))
    }

    /// Attach to a running browser and serve it
    pub fn connect(options: ConnectionOptions, config: ExtractionConfig) -> ListingResult<Self> {
        Ok(Self::new(BrowserSession::connect(options)?.with_config(config)))
    }

    /// Lock the browser session; tool calls run one at a time
    pub fn session(&self) -> MutexGuard<'_, BrowserSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[tool_handler]
impl ServerHandler for FloorPlanServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(
                "Reads the room table of the real-estate listing open in the browser. \
                 Use listing_navigate to open a listing, listing_check_page to confirm it is \
                 a listing page, then listing_floor_plan for rooms grouped by floor with areas."
                    .to_string(),
            ),
            ..Default::default()
        }
    }
}
