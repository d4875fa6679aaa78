use crate::{browser::config::{ConnectionOptions, LaunchOptions},
            config::ExtractionConfig,
            error::{ListingError, Result},
            extract::Extractor,
            listing::Listing,
            tools::{ToolContext, ToolRegistry, ToolResult}};
use headless_chrome::{Browser, Tab};
use std::{ffi::OsStr, sync::Arc, time::Duration};

/// Browser session that manages a Chrome/Chromium instance and reads
/// listings from whichever tab the user is looking at
pub struct BrowserSession {
    /// The underlying headless_chrome Browser instance
    browser: Browser,

    /// Tool registry for the CLI and MCP surfaces
    tool_registry: ToolRegistry,

    /// Settings applied to every extraction
    config: ExtractionConfig,
}

impl BrowserSession {
    /// Launch a new browser instance with the given options
    pub fn launch(options: LaunchOptions) -> Result<Self> {
        let mut launch_opts = headless_chrome::LaunchOptions::default();

        // Listing sites tend to serve a bot wall to automated Chrome
        launch_opts.ignore_default_args.push(OsStr::new("--enable-automation"));
        launch_opts.args.push(OsStr::new("--disable-blink-features=AutomationControlled"));

        // The default idle timeout (30s) closes the browser between commands
        launch_opts.idle_browser_timeout = Duration::from_secs(60 * 60);

        launch_opts.headless = options.headless;
        launch_opts.window_size = Some((options.window_width, options.window_height));
        launch_opts.path = options.chrome_path;
        launch_opts.user_data_dir = options.user_data_dir;
        launch_opts.sandbox = options.sandbox;

        let browser = Browser::new(launch_opts).map_err(|e| ListingError::LaunchFailed(e.to_string()))?;

        browser
            .new_tab()
            .map_err(|e| ListingError::LaunchFailed(format!("Failed to create tab: {}", e)))?;

        Ok(Self::from_browser(browser))
    }

    /// Connect to an existing browser instance via WebSocket
    pub fn connect(options: ConnectionOptions) -> Result<Self> {
        let browser = Browser::connect(options.ws_url).map_err(|e| ListingError::ConnectionFailed(e.to_string()))?;

        Ok(Self::from_browser(browser))
    }

    fn from_browser(browser: Browser) -> Self {
        Self {
            browser,
            tool_registry: ToolRegistry::with_defaults(),
            config: ExtractionConfig::default(),
        }
    }

    /// Builder method: set the extraction settings
    pub fn with_config(mut self, config: ExtractionConfig) -> Self {
        self.config = config;
        self
    }

    /// Extraction settings used by this session
    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Get the active tab
    pub fn tab(&self) -> Result<Arc<Tab>> {
        self.get_active_tab()
    }

    /// Get all tabs
    pub fn get_tabs(&self) -> Result<Vec<Arc<Tab>>> {
        let tabs = self
            .browser
            .get_tabs()
            .lock()
            .map_err(|e| ListingError::TabOperationFailed(format!("Failed to get tabs: {}", e)))?
            .clone();

        Ok(tabs)
    }

    /// Get the tab the user is looking at.
    ///
    /// Prefers a visible and focused tab, then any visible tab.
    pub fn get_active_tab(&self) -> Result<Arc<Tab>> {
        let tabs = self.get_tabs()?;

        ["document.visibilityState === 'visible' && document.hasFocus()", "document.visibilityState === 'visible'"]
            .iter()
            .find_map(|check| tabs.iter().find(|tab| Self::tab_passes(tab, check)).cloned())
            .ok_or_else(|| ListingError::TabOperationFailed("No active tab found".to_string()))
    }

    fn tab_passes(tab: &Tab, check: &str) -> bool {
        match tab.evaluate(check, false) {
            Ok(remote_object) => remote_object.value.and_then(|v| v.as_bool()).unwrap_or(false),
            Err(e) => {
                log::debug!("Failed to check tab status: {}", e);
                false
            }
        }
    }

    /// Navigate the active tab to a URL
    pub fn navigate(&self, url: &str) -> Result<()> {
        self.tab()?
            .navigate_to(url)
            .map_err(|e| ListingError::NavigationFailed(format!("Failed to navigate to {}: {}", url, e)))?;

        Ok(())
    }

    /// Wait for navigation to complete
    pub fn wait_for_navigation(&self) -> Result<()> {
        self.tab()?
            .wait_until_navigated()
            .map_err(|e| ListingError::NavigationFailed(format!("Navigation timeout: {}", e)))?;

        Ok(())
    }

    /// Read and total the listing open in the active tab
    pub fn extract_listing(&self) -> Result<Listing> {
        let tab = self.tab()?;
        Extractor::new(&self.config).run(&*tab)
    }

    /// Get the underlying Browser instance
    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    /// Get the tool registry
    pub fn tool_registry(&self) -> &ToolRegistry {
        &self.tool_registry
    }

    /// Execute a tool by name
    pub fn execute_tool(&self, name: &str, params: serde_json::Value) -> Result<ToolResult> {
        let mut context = ToolContext::new(self);
        self.tool_registry.execute(name, params, &mut context)
    }

    /// Close every tab; the browser process ends when the session is dropped
    pub fn close(&self) -> Result<()> {
        for tab in self.get_tabs()? {
            if let Err(e) = tab.close(false) {
                log::debug!("Failed to close tab: {}", e);
            }
        }
        Ok(())
    }
}
