use maps_scraper_lib::{logger, pipeline, ScrapeConfig};
use maps_scraper_lib::config::{DEFAULT_MAPS_URL, DEFAULT_OUTPUT, DEFAULT_QUERY};

use std::path::PathBuf;
use std::time::Duration;
use clap::Parser;
use log::{info, error};

/// Scrape business listings from a map search and harvest contact emails.
#[derive(Parser, Debug)]
#[command(name = "maps-business-scraper")]
struct Args {
    /// Search query typed into the map search box
    #[arg(short, long, default_value = DEFAULT_QUERY)]
    query: String,

    /// CSV file to write (overwritten)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    #[arg(long, default_value = DEFAULT_MAPS_URL)]
    maps_url: String,

    /// Run Chrome without a window
    #[arg(long)]
    headless: bool,

    /// Pause after each feed scroll, in milliseconds
    #[arg(long, default_value = "2000")]
    scroll_delay_ms: u64,

    /// Give up scrolling after this many iterations
    #[arg(long, default_value = "500", value_parser = clap::value_parser!(u64).range(1..))]
    max_scrolls: u64,

    /// Timeout for each website fetch, in seconds
    #[arg(long, default_value = "10")]
    timeout_secs: u64,

    /// Skip TLS certificate verification when fetching websites
    #[arg(long)]
    insecure: bool,

    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn into_config(self) -> ScrapeConfig {
        ScrapeConfig::default()
            .with_query(self.query)
            .with_output(self.output)
            .with_maps_url(self.maps_url)
            .with_headless(self.headless)
            .with_scroll_delay(Duration::from_millis(self.scroll_delay_ms))
            .with_max_scrolls(usize::try_from(self.max_scrolls).unwrap_or(usize::MAX))
            .with_http_timeout(Duration::from_secs(self.timeout_secs))
            .accept_invalid_certs(self.insecure)
    }
}

fn main() {
    let args = Args::parse();
    logger::init(args.verbose);
    let config = args.into_config();
    info!("Starting Maps Business Scraper for '{}'...", config.search_query);

    match pipeline::run(&config) {
        Ok(summary) => info!(
            "Run complete: {} businesses, {} with a website, {} emails found.",
            summary.businesses.len(),
            summary.with_website,
            summary.emails_found
        ),
        Err(e) => error!("An error occurred: {}", e),
    }
}
