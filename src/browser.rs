use std::ffi::OsStr;
use std::sync::Arc;
use std::time::Duration;
use headless_chrome::{Browser, Element, LaunchOptions, Tab};
use log::{info, debug};
use serde_json::Value;

use crate::config::ScrapeConfig;
use crate::delay_manager;
use crate::error::{Result, ScrapeError};
use crate::listing::ResultsFeed;

const SEARCH_BOX_SELECTOR: &str = "#searchboxinput";
const FEED_SELECTOR: &str = "div[role='feed']";

/// A Chrome process with one tab. Chrome is shut down when the session drops.
pub struct ChromeSession {
    tab: Arc<Tab>,
    _browser: Browser,
    element_timeout: Duration,
}

impl ChromeSession {
    pub fn launch(config: &ScrapeConfig) -> Result<Self> {
        let args: Vec<&OsStr> = if config.headless {
            Vec::new()
        } else {
            vec![OsStr::new("--start-maximized")]
        };

        let options = LaunchOptions::default_builder()
            .headless(config.headless)
            .window_size(Some((1920, 1080)))
            .args(args)
            .build()
            .map_err(|e| ScrapeError::Launch(e.to_string()))?;

        info!("Launching Chrome (headless: {})", config.headless);
        let browser = Browser::new(options)?;
        let tab = browser.new_tab()?;
        // Element waits pass `element_timeout` explicitly.
        tab.set_default_timeout(config.navigation_timeout);

        Ok(ChromeSession {
            tab,
            _browser: browser,
            element_timeout: config.element_timeout,
        })
    }

    /// Opens the map page and submits `config.search_query`.
    pub fn search(&self, config: &ScrapeConfig) -> Result<()> {
        info!("Navigating to {}", config.maps_url);
        self.tab.navigate_to(&config.maps_url)?.wait_until_navigated()?;

        let search_box = self
            .tab
            .wait_for_element_with_custom_timeout(SEARCH_BOX_SELECTOR, self.element_timeout)?;
        search_box.click()?;
        search_box.type_into(&config.search_query)?;
        self.tab.press_key("Enter")?;
        info!("Searching for '{}'", config.search_query);

        delay_manager::settle(config.search_settle, "search results");
        Ok(())
    }

    pub fn results_feed(&self) -> Result<ChromeFeed<'_>> {
        let element = self
            .tab
            .wait_for_element_with_custom_timeout(FEED_SELECTOR, self.element_timeout)
            .map_err(|e| {
                debug!("Feed lookup failed: {}", e);
                ScrapeError::FeedNotFound(self.element_timeout)
            })?;
        Ok(ChromeFeed { element })
    }
}

/// The live results container of a search page.
pub struct ChromeFeed<'a> {
    element: Element<'a>,
}

impl ChromeFeed<'_> {
    fn call(&self, function: &str) -> Result<Option<Value>> {
        let object = self.element.call_js_fn(function, Vec::new(), false)?;
        Ok(object.value)
    }
}

impl ResultsFeed for ChromeFeed<'_> {
    fn rendered_html(&self) -> Result<String> {
        match self.call("function() { return this.innerHTML; }")? {
            Some(Value::String(html)) => Ok(html),
            other => Err(ScrapeError::Script(format!("innerHTML returned {:?}", other))),
        }
    }

    fn scroll_height(&self) -> Result<u64> {
        let value = self.call("function() { return this.scrollHeight; }")?;
        value
            .as_ref()
            .and_then(Value::as_f64)
            .map(|height| height.max(0.0).round() as u64)
            .ok_or_else(|| ScrapeError::Script(format!("scrollHeight returned {:?}", value)))
    }

    fn scroll_to_bottom(&self) -> Result<()> {
        self.call("function() { this.scrollTo(0, this.scrollHeight); }")?;
        Ok(())
    }
}
