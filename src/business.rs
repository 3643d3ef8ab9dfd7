use serde::{Deserialize, Serialize};

/// Rendered in place of any field that could not be scraped.
pub const NOT_AVAILABLE: &str = "N/A";

/// One business listing. `None` means the field was not available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Business {
    pub name: String,
    pub rating: Option<String>,
    pub website: Option<String>,
    pub email: Option<String>,
}

impl Business {
    pub fn new(name: impl Into<String>) -> Self {
        Business {
            name: name.into(),
            rating: None,
            website: None,
            email: None,
        }
    }

    pub fn with_rating(mut self, rating: impl Into<String>) -> Self {
        self.rating = Some(rating.into());
        self
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    pub fn has_website(&self) -> bool {
        self.website.is_some()
    }

    pub fn display_rating(&self) -> &str {
        self.rating.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn display_website(&self) -> &str {
        self.website.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn display_email(&self) -> &str {
        self.email.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}

/// Flat CSV row, column order `name, rating, website, email`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessRow {
    pub name: String,
    pub rating: String,
    pub website: String,
    pub email: String,
}

impl From<&Business> for BusinessRow {
    fn from(business: &Business) -> Self {
        BusinessRow {
            name: business.name.clone(),
            rating: business.display_rating().to_string(),
            website: business.display_website().to_string(),
            email: business.display_email().to_string(),
        }
    }
}

impl From<BusinessRow> for Business {
    fn from(row: BusinessRow) -> Self {
        Business {
            name: row.name,
            rating: available(row.rating),
            website: available(row.website),
            email: available(row.email),
        }
    }
}

fn available(value: String) -> Option<String> {
    if value.is_empty() || value == NOT_AVAILABLE {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_render_as_sentinel() {
        let business = Business::new("Shiny Cars");
        let row = BusinessRow::from(&business);
        assert_eq!(row.name, "Shiny Cars");
        assert_eq!(row.rating, NOT_AVAILABLE);
        assert_eq!(row.website, NOT_AVAILABLE);
        assert_eq!(row.email, NOT_AVAILABLE);
    }

    #[test]
    fn test_row_back_to_business() {
        let row = BusinessRow {
            name: "Detail Pros".to_string(),
            rating: "4.8".to_string(),
            website: "N/A".to_string(),
            email: "info@detailpros.com".to_string(),
        };
        let business = Business::from(row);
        assert_eq!(business.rating.as_deref(), Some("4.8"));
        assert!(!business.has_website());
        assert_eq!(business.email.as_deref(), Some("info@detailpros.com"));
    }
}
