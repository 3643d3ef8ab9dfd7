pub mod business;
pub mod config;
pub mod error;
pub mod extractor;
pub mod listing;
pub mod browser;
pub mod harvester;
pub mod output;
pub mod pipeline;
pub mod delay_manager;
pub mod logger;

// Exporting types for convenience
pub use business::{Business, BusinessRow, NOT_AVAILABLE};
pub use config::ScrapeConfig;
pub use error::{Result, ScrapeError};
pub use extractor::Extractor;
pub use listing::{ListingScraper, ResultsFeed};
pub use browser::ChromeSession;
pub use harvester::EmailHarvester;
pub use pipeline::{RunSummary, Stage};
