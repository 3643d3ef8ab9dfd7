use std::fs::{File, OpenOptions};
use std::path::Path;
use log::info;

use crate::business::{Business, BusinessRow};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Nothing to write; the target file was left untouched.
    Empty,
    Written(usize),
}

/// Overwrites `path` with a `name,rating,website,email` header and one row
/// per business, in order.
pub fn save_to_csv<P: AsRef<Path>>(businesses: &[Business], path: P) -> Result<SaveOutcome> {
    let path = path.as_ref();
    if businesses.is_empty() {
        info!("No data found to save.");
        return Ok(SaveOutcome::Empty);
    }

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    // Header comes from the `BusinessRow` field names.
    let mut csv_writer = csv::WriterBuilder::new().from_writer(file);
    for business in businesses {
        csv_writer.serialize(BusinessRow::from(business))?;
    }
    csv_writer.flush()?;

    info!("Data successfully saved to {:?}", path);
    Ok(SaveOutcome::Written(businesses.len()))
}

pub fn load_from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Business>> {
    let file = File::open(path.as_ref())?;
    let mut rdr = csv::ReaderBuilder::new().from_reader(file);

    let mut businesses = Vec::new();
    for result in rdr.deserialize::<BusinessRow>() {
        businesses.push(Business::from(result?));
    }
    info!("Loaded {} records from CSV {:?}", businesses.len(), path.as_ref());
    Ok(businesses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> Vec<Business> {
        let mut with_email = Business::new("Gloss Bros, LLC")
            .with_rating("4.9")
            .with_website("https://glossbros.com/");
        with_email.email = Some("hi@glossbros.com".to_string());

        vec![
            with_email,
            Business::new("Bare Listing"),
            Business::new("Rated Only").with_rating("3.7"),
        ]
    }

    #[test]
    fn test_round_trip_preserves_values_and_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let businesses = sample();

        let outcome = save_to_csv(&businesses, &path).unwrap();
        assert_eq!(outcome, SaveOutcome::Written(3));

        let loaded = load_from_csv(&path).unwrap();
        assert_eq!(loaded, businesses);
    }

    #[test]
    fn test_header_and_sentinels_on_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        save_to_csv(&sample(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "name,rating,website,email");
        assert_eq!(lines[2], "Bare Listing,N/A,N/A,N/A");
        assert_eq!(lines.len(), 4);

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        for record in rdr.records() {
            assert_eq!(record.unwrap().len(), 4);
        }
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        std::fs::write(&path, "stale,data\n1,2\n3,4\n5,6\n7,8\n").unwrap();

        save_to_csv(&[Business::new("Fresh")], &path).unwrap();
        let loaded = load_from_csv(&path).unwrap();
        assert_eq!(loaded, vec![Business::new("Fresh")]);
    }

    #[test]
    fn test_empty_collection_writes_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let outcome = save_to_csv(&[], &path).unwrap();
        assert_eq!(outcome, SaveOutcome::Empty);
        assert!(!path.exists());
    }
}
