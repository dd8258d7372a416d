//! Result types for opinion retrieval and PDF access.

use serde::{Deserialize, Serialize};

/// Message returned when an opinion has no PDF on file
pub const NO_PDF_MESSAGE: &str = "No PDF available for this opinion";

/// A full opinion with its cluster metadata and assembled text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpinionRecord {
    /// Case name, "Unknown" when neither the cluster nor the opinion carries one
    pub case_name: String,

    /// Combined citation string, e.g. "410 U.S. 113, 93 S. Ct. 705"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,

    /// Full name of the deciding court
    #[serde(skip_serializing_if = "Option::is_none")]
    pub court: Option<String>,

    /// Filing date (YYYY-MM-DD)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_filed: Option<String>,

    /// Judges on the panel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub judges: Option<String>,

    /// Authoring judge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Opinion ID
    pub opinion_id: i64,

    /// Cluster ID, absent when the cluster could not be fetched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<i64>,

    /// Syllabus with markup stripped; empty when the cluster has none
    pub syllabus: String,

    /// Opinion text from the best available source field
    pub text: String,

    /// Number of whitespace-separated words in `text`
    pub word_count: usize,

    /// Public page for the case, absent when the cluster is unknown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Outcome of a PDF availability check
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PdfResult {
    /// The opinion has a downloadable PDF
    Available {
        opinion_id: i64,
        has_pdf: bool,
        /// Direct URL of the original court document
        pdf_url: String,
        /// Page count when the API reports one
        #[serde(skip_serializing_if = "Option::is_none")]
        page_count: Option<i64>,
        /// Path the PDF was written to, present only after a download
        #[serde(skip_serializing_if = "Option::is_none")]
        saved_to: Option<String>,
        /// Size of the downloaded file in bytes
        #[serde(skip_serializing_if = "Option::is_none")]
        file_size_bytes: Option<u64>,
    },
    /// No PDF is on file for the opinion
    Unavailable {
        opinion_id: i64,
        has_pdf: bool,
        message: String,
    },
}

impl PdfResult {
    /// Create the no-PDF variant with its fixed message
    pub fn unavailable(opinion_id: i64) -> Self {
        PdfResult::Unavailable {
            opinion_id,
            has_pdf: false,
            message: NO_PDF_MESSAGE.to_string(),
        }
    }

    /// Create the PDF-located variant, before any download
    pub fn available(opinion_id: i64, pdf_url: impl Into<String>, page_count: Option<i64>) -> Self {
        PdfResult::Available {
            opinion_id,
            has_pdf: true,
            pdf_url: pdf_url.into(),
            page_count,
            saved_to: None,
            file_size_bytes: None,
        }
    }

    /// Record where the PDF was saved and how large it was
    pub fn with_download(self, path: impl Into<String>, size: u64) -> Self {
        match self {
            PdfResult::Available {
                opinion_id,
                has_pdf,
                pdf_url,
                page_count,
                ..
            } => PdfResult::Available {
                opinion_id,
                has_pdf,
                pdf_url,
                page_count,
                saved_to: Some(path.into()),
                file_size_bytes: Some(size),
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_result_unavailable_shape() {
        let result = PdfResult::unavailable(123);
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "opinion_id": 123,
                "has_pdf": false,
                "message": "No PDF available for this opinion",
            })
        );
    }

    #[test]
    fn test_pdf_result_available_omits_download_fields() {
        let result = PdfResult::available(123, "https://example.com/op.pdf", Some(12));
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["has_pdf"], serde_json::json!(true));
        assert_eq!(value["page_count"], serde_json::json!(12));
        assert!(value.get("saved_to").is_none());
        assert!(value.get("file_size_bytes").is_none());
    }

    #[test]
    fn test_pdf_result_with_download() {
        let result = PdfResult::available(123, "https://example.com/op.pdf", None)
            .with_download("/tmp/op.pdf", 2048);
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["saved_to"], serde_json::json!("/tmp/op.pdf"));
        assert_eq!(value["file_size_bytes"], serde_json::json!(2048));
        assert!(value.get("page_count").is_none());
    }

    #[test]
    fn test_opinion_record_omits_absent_url() {
        let record = OpinionRecord {
            case_name: "Unknown".to_string(),
            citation: None,
            court: None,
            date_filed: None,
            judges: None,
            author: None,
            opinion_id: 9,
            cluster_id: None,
            syllabus: String::new(),
            text: "Affirmed.".to_string(),
            word_count: 1,
            url: None,
        };
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("url").is_none());
        assert!(value.get("cluster_id").is_none());
        assert_eq!(value["word_count"], serde_json::json!(1));
    }
}
