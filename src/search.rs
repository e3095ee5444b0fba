use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::Match;

/// Terms searched for when none are given, in priority order.
pub const DEFAULT_SEARCH_TERMS: [&str; 3] = ["Product Group", "Item Group", "Item Setup"];

/// An ordered set of literal terms matched case-insensitively as substrings.
#[derive(Debug, Clone)]
pub struct SearchTerms {
    terms: Vec<String>,
    folded: Vec<String>,
}

impl SearchTerms {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terms: Vec<String> = terms.into_iter().map(Into::into).collect();
        let folded = terms.iter().map(|t| t.to_lowercase()).collect();
        SearchTerms { terms, folded }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The first term, in order, contained in `line`.
    pub fn first_match(&self, line: &str) -> Option<&str> {
        let line = line.to_lowercase();
        self.folded
            .iter()
            .position(|term| line.contains(term.as_str()))
            .map(|i| self.terms[i].as_str())
    }

    pub fn matches(&self, line: &str) -> bool {
        self.first_match(line).is_some()
    }
}

impl Default for SearchTerms {
    fn default() -> Self {
        SearchTerms::new(DEFAULT_SEARCH_TERMS)
    }
}

/// Line-by-line term search over extracted text.
///
/// # Examples
///
/// ```
/// use pdf_text_search::{SearchTerms, Searcher};
///
/// let text = "--- Page 1 ---\nNothing here.\nAll about ITEM SETUP.\n";
/// let searcher = Searcher::new(SearchTerms::default());
/// let found: Vec<String> = searcher
///     .search(text.as_bytes())
///     .map(|m| m.map(|m| m.to_string()))
///     .collect::<Result<_, _>>()?;
/// assert_eq!(found, ["3: All about ITEM SETUP."]);
/// # Ok::<(), pdf_text_search::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    terms: SearchTerms,
}

impl Searcher {
    pub fn new(terms: SearchTerms) -> Self {
        Searcher { terms }
    }

    pub fn terms(&self) -> &SearchTerms {
        &self.terms
    }

    /// Lazily yield every matching line of `reader` in file order.
    ///
    /// Each line is reported at most once, however many terms it contains.
    pub fn search<R: BufRead>(&self, reader: R) -> Matches<R> {
        Matches {
            terms: self.terms.clone(),
            lines: reader.lines(),
            line_number: 0,
        }
    }

    /// Search the text file at `path`.
    ///
    /// Fails with [`Error::MissingInput`] if the file does not exist.
    pub fn search_path<P: AsRef<Path>>(&self, path: P) -> Result<Matches<BufReader<File>>> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::missing_input(path));
        }
        debug!(path = %path.display(), terms = ?self.terms.as_slice(), "searching");
        let file = File::open(path)?;
        Ok(self.search(BufReader::new(file)))
    }
}

/// Iterator over the matching lines of a reader. Read errors, including
/// invalid UTF-8, are yielded as they occur.
pub struct Matches<R> {
    terms: SearchTerms,
    lines: Lines<R>,
    line_number: usize,
}

impl<R: BufRead> Iterator for Matches<R> {
    type Item = Result<Match>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_number += 1;

            if let Some(term) = self.terms.first_match(&line) {
                debug!(line = self.line_number, term, "match");
                return Some(Ok(Match {
                    line_number: self.line_number,
                    content: line.trim().to_owned(),
                    term: term.to_owned(),
                }));
            }
        }
    }
}
