use reqwest::blocking::Client;
use log::{info, warn, debug};
use url::Url;

use crate::business::Business;
use crate::config::ScrapeConfig;
use crate::error::{Result, ScrapeError};
use crate::extractor::Extractor;

/// Fetches each business website once and keeps the first valid email.
pub struct EmailHarvester {
    client: Client,
    extractor: Extractor,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HarvestStats {
    pub attempted: usize,
    pub found: usize,
    pub failed: usize,
}

impl EmailHarvester {
    pub fn new(config: &ScrapeConfig) -> Result<Self> {
        if config.accept_invalid_certs {
            warn!("TLS certificate verification is disabled for website fetches.");
        }

        let client = Client::builder()
            .timeout(config.http_timeout)
            .user_agent(config.user_agent.as_str())
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        Ok(EmailHarvester {
            client,
            extractor: Extractor::new(),
        })
    }

    /// One GET, no retry. The response status is not inspected; error pages
    /// are scanned like any other body.
    pub fn fetch_email(&self, website: &str) -> Result<Option<String>> {
        let url = Url::parse(website).map_err(|_| ScrapeError::InvalidUrl(website.to_string()))?;
        let body = self.visit_page(url)?;
        Ok(self.extractor.first_valid_email(&body))
    }

    fn visit_page(&self, url: Url) -> Result<String> {
        let resp = self.client.get(url).send()?;
        debug!("{} responded {}", resp.url(), resp.status());
        Ok(resp.text()?)
    }

    /// Fills `email` for every business with a website. Failures leave the
    /// email unset and move on to the next business.
    pub fn harvest(&self, businesses: &mut [Business]) -> HarvestStats {
        info!("Starting email extraction from websites...");
        let total = businesses.len();
        let mut stats = HarvestStats::default();

        for (i, business) in businesses.iter_mut().enumerate() {
            let Some(website) = business.website.clone() else {
                continue;
            };
            stats.attempted += 1;

            business.email = match self.fetch_email(&website) {
                Ok(email) => email,
                Err(e) => {
                    warn!("Error processing website {}: {}", website, e);
                    stats.failed += 1;
                    None
                }
            };
            if business.email.is_some() {
                stats.found += 1;
            }

            info!("Processed {}/{}: {} - {}", i + 1, total, business.name, business.display_email());
        }

        stats
    }
}
