//! Opinion retrieval and PDF access.

use std::path::Path;

use serde::Deserialize;

use super::{opinion_page, ClientError, CourtListenerClient};
use crate::models::{OpinionRecord, PdfResult};
use crate::utils::strip_html;

impl CourtListenerClient {
    /// Fetch an opinion with its cluster metadata and assembled text.
    ///
    /// The cluster carries the case-level metadata (name, citations,
    /// judges); when its fetch fails the record degrades to opinion-only
    /// data instead of erroring.
    pub async fn get_opinion(&self, opinion_id: i64) -> Result<OpinionRecord, ClientError> {
        let opinion: OpinionApi = self
            .get_json(&self.api_url(&format!("opinions/{}/", opinion_id)))
            .await?;

        let mut cluster = ClusterApi::default();
        let mut cluster_id = None;
        if let Some(segment) = opinion.cluster.as_deref().and_then(last_path_segment) {
            let cluster_url = self.api_url(&format!("clusters/{}/", segment));
            match self.get_json::<ClusterApi>(&cluster_url).await {
                Ok(data) => {
                    cluster_id = data.id;
                    cluster = data;
                }
                Err(e) => {
                    tracing::warn!("Cluster fetch failed for opinion {}: {}", opinion_id, e);
                }
            }
        }

        let text = select_text(&opinion);
        let word_count = text.split_whitespace().count();
        let syllabus = strip_html(cluster.syllabus.as_deref().unwrap_or_default());
        let case_name = cluster
            .case_name
            .filter(|n| !n.is_empty())
            .or(opinion.case_name.filter(|n| !n.is_empty()))
            .unwrap_or_else(|| "Unknown".to_string());

        Ok(OpinionRecord {
            case_name,
            citation: cluster.citation_string.filter(|c| !c.is_empty()),
            court: cluster.court,
            date_filed: cluster.date_filed,
            judges: cluster.judges,
            author: opinion.author_str.filter(|a| !a.is_empty()),
            opinion_id: opinion.id.unwrap_or(opinion_id),
            cluster_id,
            syllabus,
            text,
            word_count,
            url: cluster_id.map(opinion_page),
        })
    }

    /// Locate an opinion's original PDF and optionally download it.
    ///
    /// When the opinion has no PDF on file, the answer says so without any
    /// further network traffic. The download is only attempted when a
    /// non-empty `save_path` is given; an empty path counts as no
    /// destination.
    pub async fn get_opinion_pdf(
        &self,
        opinion_id: i64,
        save_path: Option<&Path>,
    ) -> Result<PdfResult, ClientError> {
        let opinion: OpinionApi = self
            .get_json(&self.api_url(&format!("opinions/{}/", opinion_id)))
            .await?;

        let pdf_url = match opinion.download_url.filter(|u| !u.is_empty()) {
            Some(url) => url,
            None => return Ok(PdfResult::unavailable(opinion_id)),
        };

        let result = PdfResult::available(opinion_id, pdf_url.clone(), opinion.page_count);

        if let Some(path) = save_path.filter(|p| !p.as_os_str().is_empty()) {
            let bytes = self.get_bytes(&pdf_url).await?;
            tokio::fs::write(path, &bytes).await?;
            tracing::info!(
                "Saved PDF for opinion {} to {} ({} bytes)",
                opinion_id,
                path.display(),
                bytes.len()
            );
            return Ok(result.with_download(path.to_string_lossy(), bytes.len() as u64));
        }

        Ok(result)
    }
}

/// Pick the best available text for an opinion.
///
/// Candidates are tried in order of fidelity; HTML variants are stripped
/// down to plain text. An opinion with none of them yields an empty string.
fn select_text(opinion: &OpinionApi) -> String {
    let candidates = [
        (&opinion.plain_text, false),
        (&opinion.html_with_citations, true),
        (&opinion.html, true),
        (&opinion.html_lawbox, true),
    ];

    for (field, is_html) in candidates {
        if let Some(value) = field.as_deref() {
            if !value.is_empty() {
                return if is_html {
                    strip_html(value)
                } else {
                    value.to_string()
                };
            }
        }
    }

    String::new()
}

/// Last non-empty segment of a resource URL, i.e. the ID of a
/// `.../clusters/12345/` style reference
fn last_path_segment(url: &str) -> Option<&str> {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
}

// ===== CourtListener API Types =====

#[derive(Debug, Deserialize)]
struct OpinionApi {
    id: Option<i64>,
    cluster: Option<String>,
    case_name: Option<String>,
    author_str: Option<String>,
    plain_text: Option<String>,
    html: Option<String>,
    html_with_citations: Option<String>,
    html_lawbox: Option<String>,
    download_url: Option<String>,
    page_count: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
struct ClusterApi {
    id: Option<i64>,
    case_name: Option<String>,
    citation_string: Option<String>,
    court: Option<String>,
    date_filed: Option<String>,
    judges: Option<String>,
    syllabus: Option<String>,
}
