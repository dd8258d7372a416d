//! Handlers connecting MCP tool calls to the CourtListener client.

use std::path::PathBuf;
use std::sync::Arc;

use serde_json::Value;

use super::tools::ToolHandler;
use crate::client::{CourtListenerClient, SearchOptions};

/// Hard ceiling on results per search call
pub const MAX_SEARCH_LIMIT: u64 = 50;

/// Results per search call when the caller does not say
pub const DEFAULT_SEARCH_LIMIT: u64 = 20;

/// Handler for the search_opinions tool
#[derive(Debug)]
pub struct SearchOpinionsHandler {
    pub client: Arc<CourtListenerClient>,
}

#[async_trait::async_trait]
impl ToolHandler for SearchOpinionsHandler {
    async fn execute(&self, args: Value) -> Result<Value, String> {
        let query = args
            .get("query")
            .and_then(|v| v.as_str())
            .ok_or("Missing 'query' parameter")?;

        let limit = args
            .get("limit")
            .and_then(|v| v.as_u64())
            .unwrap_or(DEFAULT_SEARCH_LIMIT)
            .min(MAX_SEARCH_LIMIT) as usize;

        let options = SearchOptions {
            court: args
                .get("court")
                .and_then(|v| v.as_str())
                .map(|s| s.to_string()),
            date_after: args
                .get("date_after")
                .and_then(|v| v.as_str())
                .map(|s| s.to_string()),
            date_before: args
                .get("date_before")
                .and_then(|v| v.as_str())
                .map(|s| s.to_string()),
            limit,
            semantic: args
                .get("semantic")
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
        };

        let results = self
            .client
            .search_opinions(query, &options)
            .await
            .map_err(|e| e.to_string())?;

        serde_json::to_value(results).map_err(|e| e.to_string())
    }
}

/// Handler for the get_opinion tool
#[derive(Debug)]
pub struct GetOpinionHandler {
    pub client: Arc<CourtListenerClient>,
}

#[async_trait::async_trait]
impl ToolHandler for GetOpinionHandler {
    async fn execute(&self, args: Value) -> Result<Value, String> {
        let opinion_id = args
            .get("opinion_id")
            .and_then(|v| v.as_i64())
            .ok_or("Missing 'opinion_id' parameter")?;

        let opinion = self
            .client
            .get_opinion(opinion_id)
            .await
            .map_err(|e| e.to_string())?;

        serde_json::to_value(opinion).map_err(|e| e.to_string())
    }
}

/// Handler for the lookup_citation tool
#[derive(Debug)]
pub struct LookupCitationHandler {
    pub client: Arc<CourtListenerClient>,
}

#[async_trait::async_trait]
impl ToolHandler for LookupCitationHandler {
    async fn execute(&self, args: Value) -> Result<Value, String> {
        let citation = args
            .get("citation")
            .and_then(|v| v.as_str())
            .ok_or("Missing 'citation' parameter")?;

        let lookup = self
            .client
            .lookup_citation(citation)
            .await
            .map_err(|e| e.to_string())?;

        serde_json::to_value(lookup).map_err(|e| e.to_string())
    }
}

/// Handler for the list_courts tool
#[derive(Debug)]
pub struct ListCourtsHandler {
    pub client: Arc<CourtListenerClient>,
}

#[async_trait::async_trait]
impl ToolHandler for ListCourtsHandler {
    async fn execute(&self, _args: Value) -> Result<Value, String> {
        let listing = self
            .client
            .list_courts()
            .await
            .map_err(|e| e.to_string())?;

        serde_json::to_value(listing).map_err(|e| e.to_string())
    }
}

/// Handler for the get_opinion_pdf tool
#[derive(Debug)]
pub struct GetOpinionPdfHandler {
    pub client: Arc<CourtListenerClient>,
}

#[async_trait::async_trait]
impl ToolHandler for GetOpinionPdfHandler {
    async fn execute(&self, args: Value) -> Result<Value, String> {
        let opinion_id = args
            .get("opinion_id")
            .and_then(|v| v.as_i64())
            .ok_or("Missing 'opinion_id' parameter")?;

        let save_path = args
            .get("save_path")
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let result = self
            .client
            .get_opinion_pdf(opinion_id, save_path.as_deref())
            .await
            .map_err(|e| e.to_string())?;

        serde_json::to_value(result).map_err(|e| e.to_string())
    }
}
