use crate::{Error, Result};
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::Instant;

/// How often `wait_for_element` re-queries the page
pub const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// The page operations a booking session needs from a browser.
///
/// Implementations own a single page; every call acts on whatever that page
/// currently shows.
#[async_trait]
pub trait BrowserDriver: Send + Sync {
    /// Handle to an element on the current page
    type Element: Send + Sync;

    /// Load `url` and wait for the page to finish loading
    async fn navigate(&self, url: &str) -> Result<()>;

    /// All elements matching a CSS selector, in document order
    async fn find_elements(&self, selector: &str) -> Result<Vec<Self::Element>>;

    /// Value of an HTML attribute, `None` when absent
    async fn attribute(&self, element: &Self::Element, name: &str) -> Result<Option<String>>;

    /// Rendered text of the element
    async fn text(&self, element: &Self::Element) -> Result<Option<String>>;

    /// Focus the element and type into it
    async fn type_text(&self, element: &Self::Element, text: &str) -> Result<()>;

    async fn click(&self, element: &Self::Element) -> Result<()>;

    /// Wait for a navigation started by the previous action
    async fn wait_for_navigation(&self) -> Result<()> {
        Ok(())
    }

    /// First element matching a CSS selector
    async fn find_element(&self, selector: &str) -> Result<Self::Element> {
        self.find_elements(selector)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| Error::ElementNotFound(selector.to_string()))
    }

    /// Poll until an element matching `selector` exists or `timeout` elapses
    async fn wait_for_element(&self, selector: &str, timeout: Duration) -> Result<Self::Element> {
        let deadline = Instant::now() + timeout;
        loop {
            if let Some(element) = self.find_elements(selector).await?.into_iter().next() {
                return Ok(element);
            }

            let now = Instant::now();
            if now >= deadline {
                tracing::debug!("Gave up waiting for '{}'", selector);
                return Err(Error::Timeout {
                    selector: selector.to_string(),
                    timeout_ms: timeout.as_millis(),
                });
            }
            tokio::time::sleep(WAIT_POLL_INTERVAL.min(deadline - now)).await;
        }
    }
}
