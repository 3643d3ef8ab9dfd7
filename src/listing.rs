use std::collections::HashSet;
use std::time::Duration;
use log::{info, warn, error, debug};
use scraper::{ElementRef, Html, Selector};

use crate::business::Business;
use crate::config::ScrapeConfig;
use crate::delay_manager;
use crate::error::Result;

pub const CARD_SELECTOR: &str = "div.Nv2PK.tH5CWc.THOPZb";
pub const NAME_SELECTOR: &str = "div.qBF1Pd";
pub const RATING_SELECTOR: &str = "span.MW4etd";
pub const WEBSITE_SELECTOR: &str = "a.lcr4fd.S9kvJb";

/// A scrollable results container that lazily renders more cards.
pub trait ResultsFeed {
    /// Inner HTML of the container as currently rendered.
    fn rendered_html(&self) -> Result<String>;
    fn scroll_height(&self) -> Result<u64>;
    fn scroll_to_bottom(&self) -> Result<()>;
}

/// Raw lookups for one card. Each field is `None` when its element is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingCard {
    pub name: Option<String>,
    pub rating: Option<String>,
    pub href: Option<String>,
}

impl ListingCard {
    /// `None` if the name element is missing. A blank name is kept as is.
    pub fn into_business(self) -> Option<Business> {
        let name = self.name?;
        let mut business = Business::new(name);
        business.rating = self.rating.filter(|r| !r.is_empty());
        business.website = self.href.filter(|href| is_website(href));
        Some(business)
    }
}

/// Phone links share the website slot on some cards.
pub fn is_website(href: &str) -> bool {
    let href = href.trim();
    !href.is_empty() && !href.to_ascii_lowercase().starts_with("tel:")
}

pub struct CardParser {
    card: Selector,
    name: Selector,
    rating: Selector,
    website: Selector,
}

impl Default for CardParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CardParser {
    pub fn new() -> Self {
        CardParser {
            card: Selector::parse(CARD_SELECTOR).unwrap(),
            name: Selector::parse(NAME_SELECTOR).unwrap(),
            rating: Selector::parse(RATING_SELECTOR).unwrap(),
            website: Selector::parse(WEBSITE_SELECTOR).unwrap(),
        }
    }

    pub fn parse_cards(&self, html: &str) -> Vec<ListingCard> {
        let fragment = Html::parse_fragment(html);
        fragment
            .select(&self.card)
            .map(|card| ListingCard {
                name: first_text(card, &self.name),
                rating: first_text(card, &self.rating),
                href: card
                    .select(&self.website)
                    .next()
                    .and_then(|a| a.value().attr("href"))
                    .map(|href| href.trim().to_string()),
            })
            .collect()
    }
}

fn first_text(card: ElementRef<'_>, selector: &Selector) -> Option<String> {
    card.select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// Height did not change after a scroll.
    Exhausted,
    ScrollLimit,
    Aborted(String),
}

#[derive(Debug)]
pub struct ScrapeOutcome {
    pub businesses: Vec<Business>,
    pub iterations: usize,
    pub stop: StopReason,
}

/// Insertion-ordered records, unique by name.
#[derive(Default)]
struct ListingSet {
    seen: HashSet<String>,
    businesses: Vec<Business>,
}

impl ListingSet {
    fn insert(&mut self, business: Business) -> bool {
        if self.seen.contains(&business.name) {
            return false;
        }
        self.seen.insert(business.name.clone());
        self.businesses.push(business);
        true
    }
}

pub struct ListingScraper {
    parser: CardParser,
    scroll_delay: Duration,
    max_scrolls: usize,
}

impl ListingScraper {
    pub fn new(config: &ScrapeConfig) -> Self {
        ListingScraper {
            parser: CardParser::new(),
            scroll_delay: config.scroll_delay,
            // The first rendered page is always read.
            max_scrolls: config.max_scrolls.max(1),
        }
    }

    /// Scrolls the feed until its height stops changing, collecting every
    /// new card along the way. Feed errors end the phase early; whatever was
    /// collected up to that point is returned.
    pub fn scrape<F: ResultsFeed + ?Sized>(&self, feed: &F) -> ScrapeOutcome {
        info!("Starting scroll and data extraction...");
        let mut listings = ListingSet::default();
        let mut iterations = 0;

        let stop = match self.scroll_until_stable(feed, &mut listings, &mut iterations) {
            Ok(reason) => reason,
            Err(e) => {
                error!("Error during scroll and extract: {}", e);
                StopReason::Aborted(e.to_string())
            }
        };

        info!("Found {} unique businesses", listings.businesses.len());
        ScrapeOutcome {
            businesses: listings.businesses,
            iterations,
            stop,
        }
    }

    fn scroll_until_stable<F: ResultsFeed + ?Sized>(
        &self,
        feed: &F,
        listings: &mut ListingSet,
        iterations: &mut usize,
    ) -> Result<StopReason> {
        let mut last_height = feed.scroll_height()?;

        loop {
            if *iterations >= self.max_scrolls {
                warn!("Stopped after {} scrolls without the feed settling.", self.max_scrolls);
                return Ok(StopReason::ScrollLimit);
            }
            *iterations += 1;

            let html = feed.rendered_html()?;
            for card in self.parser.parse_cards(&html) {
                self.collect(card, listings);
            }

            feed.scroll_to_bottom()?;
            delay_manager::settle(self.scroll_delay, "feed scroll");

            let new_height = feed.scroll_height()?;
            debug!("Feed height {} -> {}", last_height, new_height);
            if new_height == last_height {
                return Ok(StopReason::Exhausted);
            }
            last_height = new_height;
        }
    }

    fn collect(&self, card: ListingCard, listings: &mut ListingSet) {
        match card.into_business() {
            Some(business) => {
                let name = business.name.clone();
                let website = business.display_website().to_string();
                if listings.insert(business) {
                    info!("Processed: {}, Website: {}", name, website);
                }
            }
            None => warn!("Skipping listing without a name element."),
        }
    }
}
