// src/page_extractor/types.rs
use serde::{Deserialize, Serialize};

/// Everything we pull out of a single page fetch. One record per
/// confirmed URL; never merged across pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub url: String,
    pub title: String,
    pub description: String,
    /// Deduplicated by exact string equality, first-seen order.
    pub contact_info: Vec<String>,
    /// Document order, duplicates retained.
    pub social_links: Vec<String>,
    pub scraped_at: String,
}
