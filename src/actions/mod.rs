pub mod scrape_company;

// Re-export the main types for easy importing
pub use scrape_company::ScrapeCompanyAction;
