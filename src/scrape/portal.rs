// scrape/portal.rs
use crate::domain::ComplexListing;
use crate::scrape::details::fetch_complex_listings;
use crate::scrape::markers::{fetch_complexes, MarkerQuery, USER_AGENT};
use crate::scrape::{ComplexSummary, ScrapeError};
use reqwest::blocking::Client;
use std::time::Duration;

/// The collector's view of the portal. The live implementation talks
/// to Naver; tests substitute canned responses.
pub trait Portal {
    /// Complex summaries inside the marker rectangle for one
    /// neighborhood code.
    fn complex_summaries(&self, cortar_no: &str) -> Result<Vec<ComplexSummary>, ScrapeError>;

    /// Detail-page records (complex fields ∪ listing fields) for one
    /// complex id.
    fn complex_listings(&self, complex_no: &str) -> Result<Vec<ComplexListing>, ScrapeError>;
}

pub struct NaverPortal {
    client: Client,
    query: MarkerQuery,
}

impl NaverPortal {
    pub fn with_query(query: MarkerQuery) -> Result<Self, ScrapeError> {
        // One client for the whole run; the cookie store carries the
        // warm-up session cookies into the marker API call. The detail
        // pages don't need them but share the client harmlessly.
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ScrapeError::Network(e.to_string()))?;

        Ok(Self { client, query })
    }
}

impl Portal for NaverPortal {
    fn complex_summaries(&self, cortar_no: &str) -> Result<Vec<ComplexSummary>, ScrapeError> {
        fetch_complexes(&self.client, &self.query, cortar_no)
    }

    fn complex_listings(&self, complex_no: &str) -> Result<Vec<ComplexListing>, ScrapeError> {
        fetch_complex_listings(&self.client, complex_no)
    }
}
