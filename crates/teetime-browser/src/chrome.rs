use crate::{BrowserDriver, Result};
use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::element::Element;
use chromiumoxide::page::Page;
use futures::StreamExt;
use tokio::task::JoinHandle;

/// Drives a single Chrome page over the DevTools Protocol
pub struct ChromeDriver {
    browser: Browser,
    page: Page,
    handler_task: JoinHandle<()>,
}

impl ChromeDriver {
    /// Launch Chrome with the given configuration and open a blank page
    pub async fn launch(config: BrowserConfig) -> Result<Self> {
        tracing::info!("Launching Chrome");
        let (browser, mut handler) = Browser::launch(config).await?;

        // The handler must be polled for any CDP command to complete
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::debug!("CDP handler event error (continuing): {}", e);
                }
            }
        });

        let page = browser.new_page("about:blank").await?;
        tracing::debug!("Chrome page ready");

        Ok(Self {
            browser,
            page,
            handler_task,
        })
    }

    /// Close the browser and stop the handler task
    pub async fn close(mut self) -> Result<()> {
        tracing::debug!("Closing Chrome");
        self.browser.close().await?;
        if let Err(e) = self.browser.wait().await {
            tracing::debug!("Chrome did not exit cleanly: {}", e);
        }
        self.handler_task.abort();
        Ok(())
    }
}

#[async_trait]
impl BrowserDriver for ChromeDriver {
    type Element = Element;

    async fn navigate(&self, url: &str) -> Result<()> {
        tracing::debug!("Navigating to {}", url);
        self.page.goto(url).await?;
        Ok(())
    }

    async fn find_elements(&self, selector: &str) -> Result<Vec<Element>> {
        let elements = self.page.find_elements(selector).await?;
        tracing::debug!("'{}' matched {} elements", selector, elements.len());
        Ok(elements)
    }

    async fn attribute(&self, element: &Element, name: &str) -> Result<Option<String>> {
        Ok(element.attribute(name).await?)
    }

    async fn text(&self, element: &Element) -> Result<Option<String>> {
        Ok(element.inner_text().await?)
    }

    async fn type_text(&self, element: &Element, text: &str) -> Result<()> {
        element.focus().await?;
        element.type_str(text).await?;
        Ok(())
    }

    async fn click(&self, element: &Element) -> Result<()> {
        element.click().await?;
        Ok(())
    }

    async fn wait_for_navigation(&self) -> Result<()> {
        self.page.wait_for_navigation().await?;
        Ok(())
    }
}
