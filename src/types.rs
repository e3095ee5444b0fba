use std::fmt::{self, Write as _};
use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Result;

/// Text of a single page, as returned by the PDF parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedPage {
    /// 1-based ordinal of the page in document order.
    pub number: u32,
    pub text: String,
}

impl ExtractedPage {
    /// The line that opens this page's block in the extracted text file.
    pub fn marker(&self) -> String {
        format!("--- Page {} ---", self.number)
    }
}

/// Output of PDF text extraction.
/// Holds every page in document order and renders them into the
/// page-marked plain text format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedText {
    pages: Vec<ExtractedPage>,
}

impl ExtractedText {
    /// Get a reference to the extracted pages.
    pub fn pages(&self) -> &[ExtractedPage] {
        &self.pages
    }

    /// Consume self and return the extracted pages.
    pub fn into_pages(self) -> Vec<ExtractedPage> {
        self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Render every page into a single buffer: the page marker line, the
    /// page text, then a newline.
    pub fn render(&self) -> Result<String> {
        let mut buf = String::new();
        write!(buf, "{}", self)?;
        Ok(buf)
    }

    /// Write the rendered text to `path` as UTF-8, replacing anything already
    /// there. The buffer is complete before the file is touched.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let buf = self.render()?;
        fs::write(path, buf.as_bytes())?;
        info!(
            path = %path.display(),
            pages = self.pages.len(),
            bytes = buf.len(),
            "wrote extracted text"
        );
        Ok(())
    }
}

impl fmt::Display for ExtractedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for page in &self.pages {
            writeln!(f, "{}", page.marker())?;
            writeln!(f, "{}", page.text)?;
        }
        Ok(())
    }
}

impl From<Vec<ExtractedPage>> for ExtractedText {
    fn from(pages: Vec<ExtractedPage>) -> Self {
        ExtractedText { pages }
    }
}

/// A line of the extracted text that contains at least one search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// 1-based position of the line in the file.
    pub line_number: usize,
    /// The line with surrounding whitespace stripped.
    pub content: String,
    /// The first term, in search order, found on the line.
    pub term: String,
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.line_number, self.content)
    }
}
