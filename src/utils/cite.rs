//! Citation parsing for the lookup operation.

use std::sync::OnceLock;

use regex::Regex;

/// Matches the volume / reporter / page triple of a standard legal citation,
/// e.g. "410 U.S. 113" or "532 F. Supp. 1169", anywhere inside a longer
/// string.
fn citation_regex() -> &'static Regex {
    static CITATION: OnceLock<Regex> = OnceLock::new();
    CITATION.get_or_init(|| {
        Regex::new(r"(\d+)\s+([A-Za-z\.\s]+?)\s+(\d+)").expect("valid citation regex")
    })
}

/// Build the search query for a citation string.
///
/// A recognized volume/reporter/page triple becomes a fielded
/// `citation:"..."` query with the reporter's whitespace normalized.
/// Anything else is wrapped as an exact-phrase query so the lookup still
/// runs and the search backend decides what matches. Second-series
/// abbreviations like "F.3d" carry a digit the reporter class does not
/// cover, so they take the phrase branch too.
pub fn citation_query(citation: &str) -> String {
    match citation_regex().captures(citation) {
        Some(caps) => format!(r#"citation:"{} {} {}""#, &caps[1], caps[2].trim(), &caps[3]),
        None => format!(r#""{}""#, citation),
    }
}
