//! Tool registry for MCP tools.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::client::CourtListenerClient;

pub use super::handlers::{
    GetOpinionHandler, GetOpinionPdfHandler, ListCourtsHandler, LookupCitationHandler,
    SearchOpinionsHandler,
};

/// An MCP tool that can be called by the client
#[derive(Clone)]
pub struct Tool {
    /// Tool name (e.g., "search_opinions")
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// JSON Schema for input parameters
    pub input_schema: serde_json::Value,

    /// Handler function to execute the tool
    pub handler: Arc<dyn ToolHandler>,
}

impl std::fmt::Debug for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tool")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("input_schema", &self.input_schema)
            .finish()
    }
}

/// Handler for executing a tool
#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync + std::fmt::Debug {
    /// Execute the tool with the given arguments
    async fn execute(&self, args: Value) -> Result<Value, String>;
}

/// Registry for all MCP tools
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: HashMap<String, Tool>,
}

impl ToolRegistry {
    /// Create a registry with every CourtListener tool registered
    pub fn new(client: Arc<CourtListenerClient>) -> Self {
        let mut registry = Self {
            tools: HashMap::new(),
        };
        registry.register_courtlistener_tools(&client);
        registry
    }

    fn register_courtlistener_tools(&mut self, client: &Arc<CourtListenerClient>) {
        // 1. search_opinions - Full-text and semantic search over opinions
        self.register(Tool {
            name: "search_opinions".to_string(),
            description: "Search CourtListener for court opinions. Use this to find cases by \
                          keyword, topic, legal doctrine, or party names. Supports filtering \
                          by court and date range."
                .to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search terms (e.g., 'qualified immunity', 'first amendment social media')"
                    },
                    "court": {
                        "type": "string",
                        "description": "Court ID or shortcut. Examples: 'scotus' (Supreme Court), 'ca9' (9th Circuit), 'cadc' (DC Circuit)"
                    },
                    "date_after": {
                        "type": "string",
                        "description": "Only cases filed after this date (YYYY-MM-DD)"
                    },
                    "date_before": {
                        "type": "string",
                        "description": "Only cases filed before this date (YYYY-MM-DD)"
                    },
                    "limit": {
                        "type": "integer",
                        "description": "Maximum number of results (default: 20, max: 50)",
                        "default": 20
                    },
                    "semantic": {
                        "type": "boolean",
                        "description": "Use semantic search instead of keyword search. Accepts plain-language queries like 'cases about whether police can search phones without a warrant'.",
                        "default": false
                    }
                },
                "required": ["query"]
            }),
            handler: Arc::new(SearchOpinionsHandler {
                client: client.clone(),
            }),
        });

        // 2. get_opinion - Full text of one opinion
        self.register(Tool {
            name: "get_opinion".to_string(),
            description: "Fetch the full text of a court opinion by its ID. Use this after \
                          searching to retrieve the complete opinion text, syllabus, and \
                          metadata."
                .to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "opinion_id": {
                        "type": "integer",
                        "description": "The opinion ID from a search result"
                    }
                },
                "required": ["opinion_id"]
            }),
            handler: Arc::new(GetOpinionHandler {
                client: client.clone(),
            }),
        });

        // 3. lookup_citation - Resolve "410 U.S. 113" style citations
        self.register(Tool {
            name: "lookup_citation".to_string(),
            description: "Resolve a legal citation to find the corresponding case. Use standard \
                          legal citation formats like '410 U.S. 113' or '347 U.S. 483'."
                .to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "citation": {
                        "type": "string",
                        "description": "Legal citation (e.g., '410 U.S. 113', '123 F.3d 456')"
                    }
                },
                "required": ["citation"]
            }),
            handler: Arc::new(LookupCitationHandler {
                client: client.clone(),
            }),
        });

        // 4. list_courts - Roster of court IDs plus shortcuts
        self.register(Tool {
            name: "list_courts".to_string(),
            description: "List all available courts in CourtListener. Returns court IDs that \
                          can be used to filter searches, along with shortcuts like 'scotus' \
                          for the Supreme Court or 'ca9' for the 9th Circuit."
                .to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {}
            }),
            handler: Arc::new(ListCourtsHandler {
                client: client.clone(),
            }),
        });

        // 5. get_opinion_pdf - Original document access
        self.register(Tool {
            name: "get_opinion_pdf".to_string(),
            description: "Get the PDF URL for a court opinion, and optionally download it. \
                          Not all opinions have PDFs available. Returns the direct PDF URL \
                          for the original court document."
                .to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "opinion_id": {
                        "type": "integer",
                        "description": "The opinion ID from a search result"
                    },
                    "save_path": {
                        "type": "string",
                        "description": "Optional file path to save the PDF (e.g., '/tmp/opinion.pdf')"
                    }
                },
                "required": ["opinion_id"]
            }),
            handler: Arc::new(GetOpinionPdfHandler {
                client: client.clone(),
            }),
        });
    }

    /// Register a tool
    pub fn register(&mut self, tool: Tool) {
        self.tools.insert(tool.name.clone(), tool);
    }

    /// Get all tools
    pub fn all(&self) -> Vec<&Tool> {
        self.tools.values().collect()
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<&Tool> {
        self.tools.get(name)
    }

    /// Execute a tool by name
    pub async fn execute(&self, name: &str, args: Value) -> Result<Value, String> {
        let tool = self
            .get(name)
            .ok_or_else(|| format!("Tool '{}' not found", name))?;

        tool.handler.execute(args).await
    }
}
