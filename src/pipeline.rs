use std::fmt;
use log::{info, warn};

use crate::browser::ChromeSession;
use crate::business::Business;
use crate::config::ScrapeConfig;
use crate::error::{Result, ScrapeError};
use crate::harvester::EmailHarvester;
use crate::listing::{ListingScraper, ResultsFeed};
use crate::output::{self, SaveOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Scraping,
    ExtractingEmails,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Scraping => "scraping",
            Stage::ExtractingEmails => "extracting_emails",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

fn enter(stage: Stage) {
    info!("Stage: {}", stage);
}

#[derive(Debug)]
pub struct RunSummary {
    pub businesses: Vec<Business>,
    pub with_website: usize,
    pub emails_found: usize,
    pub saved: SaveOutcome,
}

/// Scrapes listings in the browser, then hands them to [`finish`].
pub fn run(config: &ScrapeConfig) -> Result<RunSummary> {
    enter(Stage::Scraping);
    let businesses = scrape_listings(config)?;
    finish(config, businesses)
}

fn scrape_listings(config: &ScrapeConfig) -> Result<Vec<Business>> {
    // Chrome lives only for this scope.
    let session = ChromeSession::launch(config)?;
    session.search(config)?;
    let businesses = collect_listings(session.results_feed(), config)?;
    Ok(businesses)
}

/// Scrapes a located feed. A feed that never appeared yields no records;
/// any other lookup error is passed on.
pub fn collect_listings<F: ResultsFeed>(feed: Result<F>, config: &ScrapeConfig) -> Result<Vec<Business>> {
    let feed = match feed {
        Ok(feed) => feed,
        Err(e @ ScrapeError::FeedNotFound(_)) => {
            warn!("{}", e);
            return Ok(Vec::new());
        }
        Err(e) => return Err(e),
    };

    let outcome = ListingScraper::new(config).scrape(&feed);
    info!("Listing scrape stopped after {} scrolls ({:?})", outcome.iterations, outcome.stop);
    Ok(outcome.businesses)
}

/// Email extraction and CSV output. An empty collection skips both.
pub fn finish(config: &ScrapeConfig, mut businesses: Vec<Business>) -> Result<RunSummary> {
    if businesses.is_empty() {
        info!("No data was collected");
        enter(Stage::Done);
        return Ok(RunSummary {
            businesses,
            with_website: 0,
            emails_found: 0,
            saved: SaveOutcome::Empty,
        });
    }

    enter(Stage::ExtractingEmails);
    let harvester = EmailHarvester::new(config)?;
    let stats = harvester.harvest(&mut businesses);

    let saved = output::save_to_csv(&businesses, &config.output_path)?;
    info!("Successfully processed {} businesses", businesses.len());
    enter(Stage::Done);

    Ok(RunSummary {
        with_website: stats.attempted,
        emails_found: stats.found,
        businesses,
        saved,
    })
}
