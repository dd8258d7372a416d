//! Opinion search and citation lookup.

use serde::Deserialize;

use super::courts::resolve_court;
use super::{opinion_page, ClientError, CourtListenerClient};
use crate::models::{CitationLookup, CitationSummary, OpinionSummary, SearchMode, SearchResults};
use crate::utils::{citation_query, strip_html};

/// Citation lookups return at most this many matches
const MAX_CITATION_MATCHES: usize = 5;

/// Options accepted by [`CourtListenerClient::search_opinions`]
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Court ID or shortcut to restrict the search to
    pub court: Option<String>,

    /// Only opinions filed after this date (YYYY-MM-DD)
    pub date_after: Option<String>,

    /// Only opinions filed before this date (YYYY-MM-DD)
    pub date_before: Option<String>,

    /// Maximum number of results to return
    pub limit: usize,

    /// Match by meaning rather than keywords
    pub semantic: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            court: None,
            date_after: None,
            date_before: None,
            limit: 20,
            semantic: false,
        }
    }
}

impl SearchOptions {
    /// Restrict the search to a court (ID or shortcut)
    pub fn court(mut self, court: impl Into<String>) -> Self {
        self.court = Some(court.into());
        self
    }

    /// Only opinions filed after this date (YYYY-MM-DD)
    pub fn date_after(mut self, date: impl Into<String>) -> Self {
        self.date_after = Some(date.into());
        self
    }

    /// Only opinions filed before this date (YYYY-MM-DD)
    pub fn date_before(mut self, date: impl Into<String>) -> Self {
        self.date_before = Some(date.into());
        self
    }

    /// Set the maximum number of results
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Switch between semantic and keyword matching
    pub fn semantic(mut self, semantic: bool) -> Self {
        self.semantic = semantic;
        self
    }
}

impl CourtListenerClient {
    /// Search for court opinions.
    ///
    /// Results come back in the backend's relevance order. The limit is
    /// applied on our side by truncation; it is never forwarded as a
    /// page-size parameter.
    pub async fn search_opinions(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<SearchResults, ClientError> {
        let url = self.search_url(query, options);
        let page: SearchApiPage = self.get_json(&url).await?;
        let count = page.count.unwrap_or(0);

        let results: Vec<OpinionSummary> = page
            .results
            .unwrap_or_default()
            .into_iter()
            .take(options.limit)
            .map(summarize_hit)
            .collect();

        tracing::debug!("Search returned {} of {} hits", results.len(), count);

        Ok(SearchResults {
            count,
            showing: results.len(),
            results,
            search_type: if options.semantic {
                SearchMode::Semantic
            } else {
                SearchMode::Keyword
            },
        })
    }

    /// Look up a legal citation such as "410 U.S. 113".
    ///
    /// Always returns a result shape, found or not; only transport and
    /// API failures surface as errors.
    pub async fn lookup_citation(&self, citation: &str) -> Result<CitationLookup, ClientError> {
        let query = citation_query(citation);
        let url = self.search_endpoint(&query);
        let page: SearchApiPage = self.get_json(&url).await?;

        let hits = page.results.unwrap_or_default();
        if hits.is_empty() {
            tracing::debug!("No matches for citation {:?}", citation);
            return Ok(CitationLookup::not_found(citation));
        }

        let matches: Vec<CitationSummary> = hits
            .into_iter()
            .take(MAX_CITATION_MATCHES)
            .map(|hit| CitationSummary {
                case_name: hit.case_name.unwrap_or_default(),
                citation: hit.citation.unwrap_or_default(),
                date_filed: hit.date_filed,
                court: hit.court,
                cluster_id: hit.cluster_id,
                opinion_id: hit.id,
                url: hit.cluster_id.map(opinion_page).unwrap_or_default(),
            })
            .collect();

        Ok(CitationLookup::found(citation, matches))
    }

    /// Full search URL for a query and its options. An empty filter value
    /// counts as absent and never reaches the query string.
    fn search_url(&self, query: &str, options: &SearchOptions) -> String {
        let mut url = self.search_endpoint(query);
        if options.semantic {
            url.push_str("&semantic=true");
        }
        if let Some(court) = options.court.as_deref().filter(|c| !c.is_empty()) {
            let resolved = resolve_court(court);
            url.push_str(&format!("&court={}", urlencoding::encode(&resolved)));
        }
        if let Some(after) = options.date_after.as_deref().filter(|d| !d.is_empty()) {
            url.push_str(&format!("&filed_after={}", urlencoding::encode(after)));
        }
        if let Some(before) = options.date_before.as_deref().filter(|d| !d.is_empty()) {
            url.push_str(&format!("&filed_before={}", urlencoding::encode(before)));
        }
        url
    }

    /// Search endpoint URL with the fixed opinion-search parameters applied
    fn search_endpoint(&self, query: &str) -> String {
        format!(
            "{}?q={}&type=o&order_by={}",
            self.config.search_url,
            urlencoding::encode(query),
            urlencoding::encode("score desc"),
        )
    }
}

/// Reshape one raw search hit into the summary form
fn summarize_hit(hit: SearchApiHit) -> OpinionSummary {
    let url = hit.cluster_id.map(opinion_page).unwrap_or_default();
    OpinionSummary {
        case_name: hit.case_name.unwrap_or_default(),
        citation: hit.citation.unwrap_or_default().into_iter().next(),
        date_filed: hit.date_filed,
        court: hit.court,
        cluster_id: hit.cluster_id,
        opinion_id: hit.id,
        snippet: strip_html(hit.snippet.as_deref().unwrap_or_default()),
        url,
    }
}

// ===== CourtListener API Types =====

#[derive(Debug, Deserialize)]
struct SearchApiPage {
    count: Option<u64>,
    results: Option<Vec<SearchApiHit>>,
}

#[derive(Debug, Deserialize)]
struct SearchApiHit {
    id: Option<i64>,
    cluster_id: Option<i64>,
    #[serde(rename = "caseName")]
    case_name: Option<String>,
    citation: Option<Vec<String>>,
    #[serde(rename = "dateFiled")]
    date_filed: Option<String>,
    court: Option<String>,
    snippet: Option<String>,
}
