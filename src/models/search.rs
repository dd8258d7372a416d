//! Result types for opinion search and citation lookup.

use serde::{Deserialize, Serialize};

/// Message returned when a citation lookup matches nothing
pub const NO_MATCH_MESSAGE: &str = "No matching cases found";

/// Which retrieval mode produced a result set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Keyword search with boolean operators
    Keyword,
    /// Meaning-based search over plain-language queries
    Semantic,
}

/// A single opinion hit returned by a search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpinionSummary {
    /// Case name, e.g. "Roe v. Wade"
    pub case_name: String,

    /// First citation reported for the case, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,

    /// Filing date (YYYY-MM-DD)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_filed: Option<String>,

    /// Full name of the deciding court
    #[serde(skip_serializing_if = "Option::is_none")]
    pub court: Option<String>,

    /// Cluster grouping this opinion with its siblings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<i64>,

    /// Opinion ID, usable with the opinion and PDF operations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opinion_id: Option<i64>,

    /// Relevance snippet with markup stripped
    pub snippet: String,

    /// Public page for the case on courtlistener.com
    pub url: String,
}

/// The reshaped result set for a search call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    /// Total hits reported by the backend
    pub count: u64,

    /// Number of results actually returned, after the limit is applied
    pub showing: usize,

    /// The hits themselves, in backend relevance order
    pub results: Vec<OpinionSummary>,

    /// Which retrieval mode produced these results
    pub search_type: SearchMode,
}

/// A case matched during citation lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitationSummary {
    /// Case name
    pub case_name: String,

    /// Every citation reported for the case
    pub citation: Vec<String>,

    /// Filing date (YYYY-MM-DD)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_filed: Option<String>,

    /// Full name of the deciding court
    #[serde(skip_serializing_if = "Option::is_none")]
    pub court: Option<String>,

    /// Cluster grouping this opinion with its siblings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<i64>,

    /// Opinion ID, usable with the opinion and PDF operations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opinion_id: Option<i64>,

    /// Public page for the case on courtlistener.com
    pub url: String,
}

/// Outcome of a citation lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CitationLookup {
    /// At least one case matched the citation
    Found {
        found: bool,
        /// The citation string that was looked up
        query: String,
        /// Number of matches returned (at most 5)
        count: usize,
        matches: Vec<CitationSummary>,
    },
    /// Nothing matched
    NotFound {
        found: bool,
        /// The citation string that was looked up
        query: String,
        message: String,
    },
}

impl CitationLookup {
    /// Create the match-bearing variant
    pub fn found(query: impl Into<String>, matches: Vec<CitationSummary>) -> Self {
        CitationLookup::Found {
            found: true,
            query: query.into(),
            count: matches.len(),
            matches,
        }
    }

    /// Create the no-match variant with its fixed message
    pub fn not_found(query: impl Into<String>) -> Self {
        CitationLookup::NotFound {
            found: false,
            query: query.into(),
            message: NO_MATCH_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_mode_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(SearchMode::Keyword).unwrap(),
            serde_json::json!("keyword")
        );
        assert_eq!(
            serde_json::to_value(SearchMode::Semantic).unwrap(),
            serde_json::json!("semantic")
        );
    }

    #[test]
    fn test_citation_lookup_not_found_shape() {
        let lookup = CitationLookup::not_found("999 Fake 123");
        let value = serde_json::to_value(&lookup).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "found": false,
                "query": "999 Fake 123",
                "message": "No matching cases found",
            })
        );
    }

    #[test]
    fn test_citation_lookup_found_counts_matches() {
        let matches = vec![CitationSummary {
            case_name: "Roe v. Wade".to_string(),
            citation: vec!["410 U.S. 113".to_string(), "93 S. Ct. 705".to_string()],
            date_filed: Some("1973-01-22".to_string()),
            court: Some("Supreme Court of the United States".to_string()),
            cluster_id: Some(108713),
            opinion_id: Some(108713),
            url: "https://www.courtlistener.com/opinion/108713/".to_string(),
        }];
        let lookup = CitationLookup::found("410 U.S. 113", matches);
        let value = serde_json::to_value(&lookup).unwrap();
        assert_eq!(value["found"], serde_json::json!(true));
        assert_eq!(value["count"], serde_json::json!(1));
        assert_eq!(value["matches"][0]["citation"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_opinion_summary_omits_absent_fields() {
        let summary = OpinionSummary {
            case_name: "In re Test".to_string(),
            citation: None,
            date_filed: None,
            court: None,
            cluster_id: Some(42),
            opinion_id: Some(7),
            snippet: String::new(),
            url: "https://www.courtlistener.com/opinion/42/".to_string(),
        };
        let value = serde_json::to_value(&summary).unwrap();
        assert!(value.get("citation").is_none());
        assert!(value.get("date_filed").is_none());
        assert_eq!(value["cluster_id"], serde_json::json!(42));
    }
}
