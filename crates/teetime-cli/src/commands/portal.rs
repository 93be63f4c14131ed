//! Shared plumbing for commands that talk to the booking portal: portal
//! settings from flags or environment, Chrome startup and shutdown.

use anyhow::{Context, Result, anyhow};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use teetime_browser::{BookingSession, ChromeDriver, ChromeFinder, ChromeLauncher};
use teetime_core::PortalConfig;

/// Portal location and credentials
#[derive(Args, Debug, Clone)]
pub struct PortalArgs {
    /// Login page URL
    #[arg(long, env = "TEETIME_LOGIN_URL", global = true)]
    pub login_url: Option<String>,

    /// Tee time listing page URL, opened after login
    #[arg(long, env = "TEETIME_LISTING_URL", global = true)]
    pub listing_url: Option<String>,

    /// Booking page URL with a {date} placeholder (rendered as MM/DD/YYYY)
    #[arg(long, env = "TEETIME_BOOKING_URL", global = true)]
    pub booking_url: Option<String>,

    /// Portal username
    #[arg(long, env = "TEETIME_USERNAME", global = true)]
    pub username: Option<String>,

    /// Portal password
    #[arg(long, env = "TEETIME_PASSWORD", hide_env_values = true, global = true)]
    pub password: Option<String>,

    /// Milliseconds to wait for the booking confirmation button
    #[arg(long, env = "TEETIME_CONFIRM_TIMEOUT_MS", default_value_t = 5000, global = true)]
    pub confirm_timeout_ms: u64,
}

impl PortalArgs {
    /// Build and validate the portal configuration
    pub fn into_config(self) -> Result<PortalConfig> {
        let config = PortalConfig::new(
            required(self.login_url, "login URL", "--login-url", "TEETIME_LOGIN_URL")?,
            required(self.listing_url, "listing URL", "--listing-url", "TEETIME_LISTING_URL")?,
            required(self.booking_url, "booking URL", "--booking-url", "TEETIME_BOOKING_URL")?,
            required(self.username, "username", "--username", "TEETIME_USERNAME")?,
            required(self.password, "password", "--password", "TEETIME_PASSWORD")?,
        )
        .with_confirm_timeout(Duration::from_millis(self.confirm_timeout_ms));

        config.validate()?;
        Ok(config)
    }
}

fn required(value: Option<String>, what: &str, flag: &str, env: &str) -> Result<String> {
    value.ok_or_else(|| anyhow!("Missing {}: pass {} or set {}", what, flag, env))
}

/// Chrome options
#[derive(Args, Debug, Clone)]
pub struct BrowserArgs {
    /// Path to the Chrome binary
    #[arg(long, value_name = "PATH", global = true)]
    pub chrome_path: Option<PathBuf>,

    /// Show the browser window instead of running headless
    #[arg(long, global = true)]
    pub headed: bool,
}

/// Build the single-threaded runtime that drives the browser
pub fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")
}

/// Spinner on stderr for long browser steps
pub fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}

/// Locate and launch Chrome, then log in to the portal
pub async fn open_session(
    config: PortalConfig,
    browser: &BrowserArgs,
) -> Result<BookingSession<ChromeDriver>> {
    let chrome_binary = ChromeFinder::new(browser.chrome_path.clone()).find()?;
    tracing::debug!("Using Chrome at {}", chrome_binary.display());

    let progress = spinner("Launching Chrome...");
    let driver = ChromeLauncher::new(chrome_binary)
        .headed(browser.headed)
        .launch()
        .await;
    let driver = match driver {
        Ok(driver) => driver,
        Err(e) => {
            progress.finish_and_clear();
            return Err(e).context("Failed to launch Chrome");
        }
    };

    progress.set_message(format!("Logging in as {}...", config.username));
    let session = BookingSession::new(driver, config);
    let signed_in = session.sign_in().await;
    progress.finish_and_clear();

    if let Err(e) = signed_in {
        close_session(session).await;
        return Err(e).context("Login failed");
    }
    Ok(session)
}

/// Close the browser behind a session, logging rather than failing
pub async fn close_session(session: BookingSession<ChromeDriver>) {
    if let Err(e) = session.into_driver().close().await {
        tracing::warn!("Failed to close Chrome cleanly: {}", e);
    }
}
