pub mod extractor;
pub mod types;

// Re-export the main types for easy importing
pub use extractor::PageExtractor;
pub use types::CompanyInfo;
