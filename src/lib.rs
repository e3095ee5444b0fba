//! Page-marked PDF text extraction and term search
//!
//! This library extracts the text of a PDF page by page into a plain text
//! file, marking each page with a `--- Page <n> ---` line, and searches such
//! files line by line for a set of terms.

mod error;
mod extract;
mod search;
mod types;

// Re-export error type
pub use error::{Error, Result};

// Re-export extraction API
pub use extract::{
    LoadedPdf, PdfExtractor, PdfExtractorBuilder, extract_to_file, from_bytes, from_path,
};

// Re-export search API
pub use search::{DEFAULT_SEARCH_TERMS, Matches, SearchTerms, Searcher};

// Re-export public types
pub use types::{ExtractedPage, ExtractedText, Match};

/// PDF read by the extractor when no input is given.
pub const DEFAULT_PDF_PATH: &str = "docs/SYNAPSE Concepts v2.6.pdf";

/// Text file written by the extractor and read by the searcher by default.
pub const DEFAULT_TEXT_PATH: &str = "docs/synapse_concepts_extracted.txt";
