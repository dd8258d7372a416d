//! Core data models for search results, opinions, and courts.

mod court;
mod opinion;
mod search;

pub use court::{CourtEntry, CourtListing};
pub use opinion::{OpinionRecord, PdfResult, NO_PDF_MESSAGE};
pub use search::{
    CitationLookup, CitationSummary, OpinionSummary, SearchMode, SearchResults, NO_MATCH_MESSAGE,
};
