use crate::config::SiteRules;
use crate::error::{ListingError, Result};
use serde::{Deserialize, Serialize};

/// Host and path of the page open in the tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLocation {
    pub host: String,
    pub path: String,
}

impl PageLocation {
    pub fn new(host: impl Into<String>, path: impl Into<String>) -> Self {
        Self { host: host.into(), path: path.into() }
    }
}

/// What kind of page the tab is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    Listing,
    WrongSite,
    WrongPageType,
}

/// Classify a page against the provider's site rules
pub fn classify_page(location: &PageLocation, rules: &SiteRules) -> PageKind {
    if !host_matches(&location.host, &rules.host) {
        PageKind::WrongSite
    } else if !location.path.contains(&rules.listing_path) {
        PageKind::WrongPageType
    } else {
        PageKind::Listing
    }
}

/// Fail with the matching gate error unless the page is a listing
pub fn ensure_listing(location: &PageLocation, rules: &SiteRules) -> Result<()> {
    match classify_page(location, rules) {
        PageKind::Listing => Ok(()),
        PageKind::WrongSite => Err(ListingError::WrongSite { host: location.host.clone() }),
        PageKind::WrongPageType => Err(ListingError::WrongPageType { path: location.path.clone() }),
    }
}

fn host_matches(host: &str, expected: &str) -> bool {
    let host = host.split(':').next().unwrap_or_default().to_ascii_lowercase();
    let expected = expected.to_ascii_lowercase();
    host == expected || host.ends_with(&format!(".{}", expected))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(host: &str, path: &str) -> PageKind {
        classify_page(&PageLocation::new(host, path), &SiteRules::default())
    }

    #[test]
    fn test_listing_page() {
        assert_eq!(classify("www.realtor.ca", "/real-estate/26512345/12-main-st"), PageKind::Listing);
        assert_eq!(classify("realtor.ca", "/real-estate/1"), PageKind::Listing);
    }

    #[test]
    fn test_wrong_site() {
        assert_eq!(classify("example.com", "/real-estate/1"), PageKind::WrongSite);
        assert_eq!(classify("notrealtor.ca", "/real-estate/1"), PageKind::WrongSite);
        assert_eq!(classify("", ""), PageKind::WrongSite);
    }

    #[test]
    fn test_wrong_page_type() {
        assert_eq!(classify("www.realtor.ca", "/map"), PageKind::WrongPageType);
        assert_eq!(classify("www.realtor.ca", "/"), PageKind::WrongPageType);
    }

    #[test]
    fn test_host_match_ignores_port_and_case() {
        assert_eq!(classify("WWW.Realtor.CA:443", "/real-estate/1"), PageKind::Listing);
    }

    #[test]
    fn test_ensure_listing_errors() {
        let rules = SiteRules::default();
        let err = ensure_listing(&PageLocation::new("example.com", "/"), &rules).unwrap_err();
        assert!(matches!(err, ListingError::WrongSite { host } if host == "example.com"));

        let err = ensure_listing(&PageLocation::new("www.realtor.ca", "/map"), &rules).unwrap_err();
        assert!(matches!(err, ListingError::WrongPageType { path } if path == "/map"));

        assert!(ensure_listing(&PageLocation::new("www.realtor.ca", "/real-estate/9"), &rules).is_ok());
    }
}
