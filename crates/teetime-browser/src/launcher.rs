use crate::{ChromeDriver, Error, Result};
use chromiumoxide::browser::BrowserConfig;
use std::path::PathBuf;

/// Builds the Chrome configuration used for a booking run
pub struct ChromeLauncher {
    chrome_path: PathBuf,
    headless: bool,
    window_size: (u32, u32),
}

impl ChromeLauncher {
    /// Create a launcher for the given Chrome binary (headless by default)
    pub fn new(chrome_path: PathBuf) -> Self {
        Self {
            chrome_path,
            headless: true,
            window_size: (1280, 900),
        }
    }

    /// Show the browser window instead of running headless
    pub fn headed(mut self, headed: bool) -> Self {
        self.headless = !headed;
        self
    }

    /// Launch Chrome and return a driver for its first page
    pub async fn launch(&self) -> Result<ChromeDriver> {
        tracing::debug!(
            "Starting {} (headless: {})",
            self.chrome_path.display(),
            self.headless
        );
        ChromeDriver::launch(self.build_config()?).await
    }

    fn build_config(&self) -> Result<BrowserConfig> {
        let (width, height) = self.window_size;
        let mut builder = BrowserConfig::builder()
            .chrome_executable(&self.chrome_path)
            .window_size(width, height)
            .args(self.build_args());

        if !self.headless {
            builder = builder.with_head();
        }

        builder
            .build()
            .map_err(|e| Error::Browser(format!("Invalid Chrome configuration: {}", e)))
    }

    /// Extra Chrome command-line arguments
    fn build_args(&self) -> Vec<String> {
        vec![
            "--no-first-run".to_string(),
            "--no-default-browser-check".to_string(),
            "--disable-popup-blocking".to_string(),
        ]
    }
}
