use std::path::PathBuf;

/// Options for launching a local Chrome/Chromium
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    /// Run without a visible window
    pub headless: bool,

    pub window_width: u32,
    pub window_height: u32,

    /// Chrome binary to use instead of the one found on the system
    pub chrome_path: Option<PathBuf>,

    /// Profile directory, e.g. to reuse an existing login or cookie consent
    pub user_data_dir: Option<PathBuf>,

    pub sandbox: bool,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            headless: true,
            window_width: 1280,
            window_height: 1024,
            chrome_path: None,
            user_data_dir: None,
            sandbox: true,
        }
    }
}

impl LaunchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set headless mode
    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Builder method: set window size
    pub fn window_size(mut self, width: u32, height: u32) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }

    /// Builder method: set Chrome binary path
    pub fn chrome_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.chrome_path = Some(path.into());
        self
    }

    /// Builder method: set profile directory
    pub fn user_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.user_data_dir = Some(dir.into());
        self
    }

    /// Builder method: set sandbox mode
    pub fn sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }
}

/// Options for attaching to a Chrome that is already running
/// (started with `--remote-debugging-port`)
#[derive(Debug, Clone)]
pub struct ConnectionOptions {
    /// DevTools WebSocket URL of the browser
    pub ws_url: String,
}

impl ConnectionOptions {
    pub fn new(ws_url: impl Into<String>) -> Self {
        Self { ws_url: ws_url.into() }
    }
}
