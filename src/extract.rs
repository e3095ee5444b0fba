use std::io::Read;
use std::path::Path;

use lopdf::{Document, ObjectId};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::types::{ExtractedPage, ExtractedText};

/// Collects options for a [`PdfExtractor`].
///
/// # Examples
///
/// ```no_run
/// use pdf_text_search::PdfExtractor;
///
/// let pdf = PdfExtractor::builder()
///     .password("owner-secret")
///     .build()
///     .open("docs/locked.pdf")?;
/// pdf.extract()?.write_to("docs/locked.txt")?;
/// # Ok::<(), pdf_text_search::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PdfExtractorBuilder {
    password: Option<String>,
}

impl PdfExtractorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Password tried when the document cannot be opened with an empty one.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn build(self) -> PdfExtractor {
        PdfExtractor {
            password: self.password,
        }
    }
}

/// Loads PDF documents ready for page-by-page text extraction.
///
/// # Examples
///
/// ```no_run
/// use pdf_text_search::PdfExtractor;
///
/// let pdf = PdfExtractor::default().open("docs/manual.pdf")?;
/// println!("Extracting text from {} pages...", pdf.page_count());
/// pdf.extract()?.write_to("docs/manual.txt")?;
/// # Ok::<(), pdf_text_search::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PdfExtractor {
    password: Option<String>,
}

impl PdfExtractor {
    /// Create a builder for configuring extraction options.
    pub fn builder() -> PdfExtractorBuilder {
        PdfExtractorBuilder::new()
    }

    /// Load the PDF at `path`.
    ///
    /// Fails with [`Error::MissingInput`] before any parsing if the path does
    /// not exist.
    pub fn open<P: AsRef<Path>>(&self, path: P) -> Result<LoadedPdf> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::missing_input(path));
        }

        debug!(path = %path.display(), "loading PDF");
        let mut doc = Document::load(path)?;
        self.prepare(&mut doc)?;
        Ok(LoadedPdf { doc })
    }

    /// Load a PDF held in memory.
    pub fn from_bytes(&self, bytes: &[u8]) -> Result<LoadedPdf> {
        let mut doc = Document::load_mem(bytes)?;
        self.prepare(&mut doc)?;
        Ok(LoadedPdf { doc })
    }

    /// Load a PDF from a reader.
    pub fn from_reader<R: Read>(&self, mut reader: R) -> Result<LoadedPdf> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        self.from_bytes(&bytes)
    }

    fn prepare(&self, doc: &mut Document) -> Result<()> {
        // lopdf already decrypts documents that open with an empty user
        // password while loading; decrypting those again garbles them.
        if !doc.is_encrypted() || doc.encryption_state.is_some() {
            return Ok(());
        }

        debug!("document is encrypted, decrypting");
        doc.decrypt(self.password.as_deref().unwrap_or(""))?;

        // Objects of a document locked by a user password are never parsed
        // by the loader, so a successful decrypt still leaves no pages.
        if doc.get_pages().is_empty() {
            return Err(Error::PasswordProtected);
        }
        Ok(())
    }
}

/// A parsed PDF whose pages have not been extracted yet.
#[derive(Debug)]
pub struct LoadedPdf {
    doc: Document,
}

impl LoadedPdf {
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Extract every page's text in document order.
    ///
    /// The text of a page is whatever the parser yields for it, possibly
    /// empty. A failure on any page aborts the whole extraction.
    pub fn extract(&self) -> Result<ExtractedText> {
        let mut pages = Vec::new();

        for (index, (page_num, page_id)) in self.doc.get_pages().into_iter().enumerate() {
            let number = index as u32 + 1;
            let text = self.page_text(number, page_num, page_id)?;
            if text.trim().is_empty() {
                warn!(page = number, "page has no extractable text");
            } else {
                debug!(page = number, chars = text.chars().count(), "extracted page");
            }
            pages.push(ExtractedPage { number, text });
        }

        info!(pages = pages.len(), "extraction complete");
        Ok(ExtractedText::from(pages))
    }

    /// Text of one page, without the newline lopdf ends every text object
    /// with.
    ///
    /// Content that cannot be decoded fails the page. Text drawn with a font
    /// whose encoding lopdf cannot build is skipped, as are fonts in the
    /// page resources that the page never uses.
    fn page_text(&self, number: u32, page_num: u32, page_id: ObjectId) -> Result<String> {
        self.doc.get_and_decode_page_content(page_id)?;

        let mut text = String::new();
        for chunk in self.doc.extract_text_chunks(&[page_num]) {
            match chunk {
                Ok(chunk) => text.push_str(&chunk),
                Err(e) => warn!(page = number, error = %e, "skipping undecodable text"),
            }
        }

        if text.ends_with('\n') {
            text.pop();
        }
        Ok(text)
    }
}

/// Extract the PDF at `input` and write the page-marked text to `output`
/// using default settings.
///
/// `output` is only written once every page has been extracted, so a failed
/// run leaves any earlier output in place.
///
/// # Examples
///
/// ```no_run
/// let text = pdf_text_search::extract_to_file("docs/manual.pdf", "docs/manual.txt")?;
/// println!("{} pages", text.page_count());
/// # Ok::<(), pdf_text_search::Error>(())
/// ```
pub fn extract_to_file<P, Q>(input: P, output: Q) -> Result<ExtractedText>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let text = PdfExtractor::default().open(input)?.extract()?;
    text.write_to(output)?;
    Ok(text)
}

/// Extract the text of a PDF in memory using default settings.
pub fn from_bytes(bytes: &[u8]) -> Result<ExtractedText> {
    PdfExtractor::default().from_bytes(bytes)?.extract()
}

/// Extract the text of a PDF file using default settings.
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ExtractedText> {
    PdfExtractor::default().open(path)?.extract()
}
