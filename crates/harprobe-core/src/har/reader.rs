use super::types::Har;
use crate::{Error, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub struct HarReader;

impl HarReader {
    /// Read and parse a HAR file from the given path
    pub fn from_file(path: &Path) -> Result<Har> {
        tracing::debug!("Reading HAR file from: {}", path.display());

        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let har: Har = serde_json::from_reader(reader)?;

        tracing::info!(
            "Parsed {} with {} entries",
            path.display(),
            har.log.entries.len()
        );

        Ok(har)
    }

    /// Parse a HAR file from a JSON string
    pub fn from_str(content: &str) -> Result<Har> {
        tracing::debug!("Parsing HAR from string");

        let har: Har = serde_json::from_str(content)?;

        tracing::debug!(
            "Parsed HAR from string with {} entries",
            har.log.entries.len()
        );

        Ok(har)
    }

    /// Check the parts of the capture the analysis depends on.
    ///
    /// This is not schema validation: it only rejects captures that have no
    /// page to take the first-party URL from.
    pub fn validate(har: &Har) -> Result<()> {
        if har.log.pages.is_empty() {
            return Err(Error::InvalidStructure(
                "HAR has no pages; the first page title must hold the page URL".to_string(),
            ));
        }

        if har.log.entries.is_empty() {
            tracing::warn!("HAR file contains no entries");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_har() {
        let har_json = r#"{
            "log": {
                "version": "1.2",
                "pages": [{"id": "page_1", "title": "https://site.org/"}],
                "entries": []
            }
        }"#;

        let har = HarReader::from_str(har_json).unwrap();
        assert_eq!(har.log.version, "1.2");
        assert_eq!(har.log.entries.len(), 0);
        assert_eq!(har.log.page_url(), Some("https://site.org/"));
    }

    #[test]
    fn test_parse_tolerates_missing_optional_fields() {
        let har_json = r#"{
            "log": {
                "creator": {"name": "firefox", "version": "120"},
                "pages": [{"title": "https://site.org/"}],
                "entries": [{
                    "request": {"method": "GET", "url": "https://site.org/"},
                    "response": {"status": 200},
                    "timings": {"send": 0, "wait": 1, "receive": 2}
                }]
            }
        }"#;

        let har = HarReader::from_str(har_json).unwrap();
        let entry = &har.log.entries[0];
        assert!(entry.request.headers.is_empty());
        assert_eq!(entry.response.status, 200);
        assert_eq!(entry.response.redirect_url, "");
    }

    #[test]
    fn test_validate_requires_pages() {
        let har = HarReader::from_str(r#"{"log": {"version": "1.2", "entries": []}}"#).unwrap();
        let result = HarReader::validate(&har);
        assert!(matches!(result, Err(Error::InvalidStructure(_))));
    }

    #[test]
    fn test_from_file_missing_is_io_error() {
        let result = HarReader::from_file(Path::new("/nonexistent/capture.har"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
