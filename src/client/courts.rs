//! Court shortcut resolution and the court roster.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::{ClientError, CourtListenerClient};
use crate::models::{CourtEntry, CourtListing};

/// Aliases accepted wherever a court ID is expected
pub const COURT_SHORTCUTS: &[(&str, &str)] = &[
    ("scotus", "scotus"),
    ("supreme", "scotus"),
    ("1st", "ca1"),
    ("2nd", "ca2"),
    ("3rd", "ca3"),
    ("4th", "ca4"),
    ("5th", "ca5"),
    ("6th", "ca6"),
    ("7th", "ca7"),
    ("8th", "ca8"),
    ("9th", "ca9"),
    ("10th", "ca10"),
    ("11th", "ca11"),
    ("dc", "cadc"),
    ("federal", "cafc"),
];

/// Resolve a court shortcut to a CourtListener court ID.
///
/// Lookup is case-insensitive. Input that is not a known shortcut is
/// assumed to already be a court ID and passes through lower-cased;
/// whether it names a real court is left to the search backend.
pub fn resolve_court(court: &str) -> String {
    let lower = court.to_lowercase();
    COURT_SHORTCUTS
        .iter()
        .find(|(alias, _)| *alias == lower)
        .map(|(_, id)| (*id).to_string())
        .unwrap_or(lower)
}

/// The shortcut table as an ordered map, for inclusion in listings
pub(crate) fn shortcut_table() -> BTreeMap<String, String> {
    COURT_SHORTCUTS
        .iter()
        .map(|(alias, id)| (alias.to_string(), id.to_string()))
        .collect()
}

impl CourtListenerClient {
    /// List every court known to CourtListener.
    ///
    /// Follows the paginated collection to the end, preserving the API's
    /// ordering, and appends the shortcut table.
    pub async fn list_courts(&self) -> Result<CourtListing, ClientError> {
        let mut courts = Vec::new();
        let mut url = Some(self.api_url("courts/"));

        while let Some(page_url) = url {
            let page: CourtsApiPage = self.get_json(&page_url).await?;
            for court in page.results.unwrap_or_default() {
                courts.push(CourtEntry {
                    id: court.id.unwrap_or_default(),
                    name: court.full_name.unwrap_or_default(),
                    short_name: court.short_name.unwrap_or_default(),
                    jurisdiction: court.jurisdiction.unwrap_or_default(),
                });
            }
            url = page.next;
        }

        tracing::debug!("Fetched {} courts", courts.len());

        Ok(CourtListing {
            count: courts.len(),
            courts,
            shortcuts: shortcut_table(),
        })
    }
}

// ===== CourtListener API Types =====

#[derive(Debug, Deserialize)]
struct CourtsApiPage {
    next: Option<String>,
    results: Option<Vec<CourtApi>>,
}

#[derive(Debug, Deserialize)]
struct CourtApi {
    id: Option<String>,
    full_name: Option<String>,
    short_name: Option<String>,
    jurisdiction: Option<String>,
}
