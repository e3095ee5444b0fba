use std::fmt::Formatter;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum Error {
    /// The input file the operation reads from does not exist.
    MissingInput(PathBuf),
    /// The PDF needs a user password to open.
    PasswordProtected,
    FormatError(std::fmt::Error),
    IoError(std::io::Error),
    PdfError(lopdf::Error),
}

impl Error {
    pub(crate) fn missing_input(path: &Path) -> Self {
        Error::MissingInput(path.to_path_buf())
    }

    /// True when the input path was absent, as opposed to a failure while
    /// parsing, reading or writing.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Error::MissingInput(_))
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Error::MissingInput(path) => write!(f, "file not found at {}", path.display()),
            Error::PasswordProtected => {
                write!(f, "PDF requires a user password, which is not supported")
            }
            Error::FormatError(e) => write!(f, "Formating error: {}", e),
            Error::IoError(e) => write!(f, "IO error: {}", e),
            Error::PdfError(e) => write!(f, "PDF error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::MissingInput(_) | Error::PasswordProtected => None,
            Error::FormatError(e) => Some(e),
            Error::IoError(e) => Some(e),
            Error::PdfError(e) => Some(e),
        }
    }
}

impl From<std::fmt::Error> for Error {
    fn from(e: std::fmt::Error) -> Self {
        Error::FormatError(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::IoError(e)
    }
}

impl From<lopdf::Error> for Error {
    fn from(e: lopdf::Error) -> Self {
        Error::PdfError(e)
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_names_the_path() {
        let err = Error::missing_input(Path::new("docs/absent.pdf"));
        assert!(err.is_missing_input());
        assert_eq!(err.to_string(), "file not found at docs/absent.pdf");
    }

    #[test]
    fn io_errors_are_not_missing_input() {
        let err = Error::from(std::io::Error::other("disk full"));
        assert!(!err.is_missing_input());
        assert_eq!(err.to_string(), "IO error: disk full");
    }
}
