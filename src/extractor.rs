use regex::Regex;

const ASSET_SUFFIXES: [&str; 6] = [".png", ".jpg", ".jpeg", ".gif", ".webp", ".svg"];

pub struct Extractor {
    email_regex: Regex,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor {
    pub fn new() -> Self {
        Extractor {
            // Loose on purpose; candidates are filtered by `is_valid_email`.
            email_regex: Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}").unwrap(),
        }
    }

    /// Every email-shaped substring, in document order.
    pub fn extract_emails(&self, text: &str) -> Vec<String> {
        self.email_regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    pub fn is_valid_email(&self, candidate: &str) -> bool {
        let Some((local, domain)) = candidate.split_once('@') else {
            return false;
        };
        if !domain.contains('.') {
            return false;
        }
        if candidate.starts_with('.') || candidate.ends_with('.') {
            return false;
        }
        if local.is_empty() || local.starts_with('.') || local.ends_with('.') {
            return false;
        }
        // Retina assets like `logo@2x.png` look like addresses.
        let lower = candidate.to_lowercase();
        !ASSET_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix))
    }

    pub fn first_valid_email(&self, text: &str) -> Option<String> {
        self.extract_emails(text)
            .into_iter()
            .find(|email| self.is_valid_email(email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_email_from_surrounding_text() {
        let extractor = Extractor::new();
        let email = extractor.first_valid_email("contact: foo.bar@example.co.uk!");
        assert_eq!(email.as_deref(), Some("foo.bar@example.co.uk"));
    }

    #[test]
    fn test_rejects_leading_dot() {
        let extractor = Extractor::new();
        assert_eq!(extractor.first_valid_email(".leading@example.com"), None);
    }

    #[test]
    fn test_rejects_trailing_dot_in_local_part() {
        let extractor = Extractor::new();
        assert_eq!(extractor.first_valid_email("trailing.@example.com"), None);
    }

    #[test]
    fn test_skips_invalid_and_keeps_first_valid() {
        let extractor = Extractor::new();
        let body = r#"<img src="logo@2x.png"> <a href="mailto:Sales@Shine.com">mail</a> ops@shine.com"#;
        assert_eq!(
            extractor.extract_emails(body),
            vec!["logo@2x.png", "Sales@Shine.com", "ops@shine.com"]
        );
        assert_eq!(extractor.first_valid_email(body).as_deref(), Some("Sales@Shine.com"));
    }

    #[test]
    fn test_no_match() {
        let extractor = Extractor::new();
        assert!(extractor.extract_emails("no addresses here, just @ signs").is_empty());
        assert_eq!(extractor.first_valid_email(""), None);
    }
}
