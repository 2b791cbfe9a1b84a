//! HTTP client for the IRS prior-year products catalog.

use std::time::Duration;

use url::Url;

use crate::{
    listing::ListingTable, query::Query, query::RevisionQuery, user_agent::get_user_agent, Error,
};

/// Path of the prior-year products search page.
pub const SEARCH_PATH: &str = "/app/picklist/list/priorFormPublication.html";

/// HTTP client for the prior-year products catalog on `apps.irs.gov`.
///
/// Sends requests with browser-like headers and a randomized user agent to
/// avoid being blocked. Each request builds a fresh `reqwest::Client` with
/// a 30-second timeout.
pub struct Client {
    /// Base URL for the catalog. Defaults to `https://apps.irs.gov`.
    base_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production catalog.
    pub fn new() -> Self {
        Self {
            base_url: "https://apps.irs.gov".to_string(),
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }

    fn get_url(&self, path: &str, query: &impl Query) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::from(e)
        })?;
        Ok(query.add_to_url(&url))
    }

    /// Fetches one catalog search page and extracts its results table.
    ///
    /// A page without a results table, or with no data rows, comes back as an
    /// empty [`ListingTable`]; only transport failures and non-success HTTP
    /// statuses are errors.
    pub async fn search(&self, query: &RevisionQuery) -> Result<ListingTable, Error> {
        let url = self.get_url(SEARCH_PATH, query)?;
        let client = reqwest::Client::builder()
            .user_agent(get_user_agent())
            .timeout(Duration::from_secs(30))
            .build()?;
        let resp = client
            .get(url)
            .header("accept", "text/html,application/xhtml+xml")
            .header("accept-language", "en-US,en;q=0.9")
            .header("upgrade-insecure-requests", "1")
            .header("cache-control", "no-cache")
            .header("pragma", "no-cache")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::from(e)
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::from(e)
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        Ok(ListingTable::parse(&body))
    }
}

/// Cuts a body down to a loggable snippet, stepping back to a char boundary
/// so multi-byte text never splits.
fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut cut = MAX;
    while !body.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...[truncated]", &body[..cut])
}
