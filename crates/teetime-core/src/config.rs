use crate::{Error, Result};
use chrono::NaiveDate;
use std::fmt;
use std::time::Duration;
use url::Url;

/// Placeholder substituted with the booking date in `booking_url_template`
pub const DATE_PLACEHOLDER: &str = "{date}";

/// Date format the portal expects in booking URLs
pub const BOOKING_DATE_FORMAT: &str = "%m/%d/%Y";

/// How long to wait for the confirmation button after picking a slot
pub const DEFAULT_CONFIRM_TIMEOUT: Duration = Duration::from_secs(5);

/// Everything needed to talk to the booking portal
#[derive(Clone)]
pub struct PortalConfig {
    pub login_url: String,
    pub listing_url: String,
    /// Booking page URL containing a `{date}` placeholder
    pub booking_url_template: String,
    pub username: String,
    pub password: String,
    pub confirm_timeout: Duration,
}

impl PortalConfig {
    pub fn new(
        login_url: impl Into<String>,
        listing_url: impl Into<String>,
        booking_url_template: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            login_url: login_url.into(),
            listing_url: listing_url.into(),
            booking_url_template: booking_url_template.into(),
            username: username.into(),
            password: password.into(),
            confirm_timeout: DEFAULT_CONFIRM_TIMEOUT,
        }
    }

    pub fn with_confirm_timeout(mut self, timeout: Duration) -> Self {
        self.confirm_timeout = timeout;
        self
    }

    /// Check that all fields are present and the URLs are usable
    pub fn validate(&self) -> Result<()> {
        require("username", &self.username)?;
        require("password", &self.password)?;
        require_url("login URL", &self.login_url)?;
        require_url("listing URL", &self.listing_url)?;

        if !self.booking_url_template.contains(DATE_PLACEHOLDER) {
            return Err(Error::Config(format!(
                "booking URL template must contain {}: {}",
                DATE_PLACEHOLDER, self.booking_url_template
            )));
        }
        let sample = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default();
        require_url("booking URL template", &self.booking_url(sample))?;

        if self.confirm_timeout.is_zero() {
            return Err(Error::Config(
                "confirmation timeout must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Booking page URL for the given date
    pub fn booking_url(&self, date: NaiveDate) -> String {
        self.booking_url_template.replace(
            DATE_PLACEHOLDER,
            &date.format(BOOKING_DATE_FORMAT).to_string(),
        )
    }
}

impl fmt::Debug for PortalConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PortalConfig")
            .field("login_url", &self.login_url)
            .field("listing_url", &self.listing_url)
            .field("booking_url_template", &self.booking_url_template)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("confirm_timeout", &self.confirm_timeout)
            .finish()
    }
}

fn require(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::Config(format!("{} is empty", name)));
    }
    Ok(())
}

fn require_url(name: &str, value: &str) -> Result<()> {
    require(name, value)?;
    Url::parse(value)
        .map(|_| ())
        .map_err(|e| Error::Config(format!("{} '{}' is not a valid URL: {}", name, value, e)))
}
