//! Result types for the court roster.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One court in the roster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourtEntry {
    /// Court ID, e.g. "scotus" or "ca9"
    pub id: String,

    /// Full court name
    pub name: String,

    /// Abbreviated court name
    pub short_name: String,

    /// Jurisdiction code, e.g. "F" for federal appellate
    pub jurisdiction: String,
}

/// The full court roster with the shortcut table appended
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourtListing {
    /// Number of courts listed
    pub count: usize,

    /// Every court, in the order the API returned them
    pub courts: Vec<CourtEntry>,

    /// Shortcut aliases accepted wherever a court ID is expected
    pub shortcuts: BTreeMap<String, String>,
}
