//! Author list input and report output.
//!
//! Both ends are opened before any author is looked up, so a bad path
//! aborts the run without partial work.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::ReportError;

/// Parse an author list: one name per line, blank lines ignored.
#[must_use]
pub fn parse_authors(text: &str) -> Vec<String> {
    text.lines().map(str::trim).filter(|line| !line.is_empty()).map(str::to_string).collect()
}

/// Read an author list from `path`.
pub fn read_authors(path: &Path) -> Result<Vec<String>, ReportError> {
    let text = std::fs::read_to_string(path)
        .map_err(|source| ReportError::ReadAuthors { path: path.to_path_buf(), source })?;
    Ok(parse_authors(&text))
}

/// A report destination, created eagerly.
#[derive(Debug)]
pub struct ReportWriter {
    path: PathBuf,
    file: File,
}

impl ReportWriter {
    /// Create (or truncate) the report file.
    pub fn create(path: &Path) -> Result<Self, ReportError> {
        let file = File::create(path).map_err(|source| ReportError::WriteReport {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { path: path.to_path_buf(), file })
    }

    /// Destination path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the rendered report and flush it.
    pub fn write(mut self, report: &str) -> Result<(), ReportError> {
        self.file
            .write_all(report.as_bytes())
            .and_then(|()| self.file.flush())
            .map_err(|source| ReportError::WriteReport { path: self.path.clone(), source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_authors_skips_blank_lines() {
        let authors = parse_authors("  Ada Lovelace \n\n   \nAlan Turing\r\nAda Lovelace\n");
        assert_eq!(authors, ["Ada Lovelace", "Alan Turing", "Ada Lovelace"]);
    }

    #[test]
    fn test_read_authors_missing_file() {
        let err = read_authors(Path::new("/nonexistent/authors.txt")).unwrap_err();
        assert!(matches!(err, ReportError::ReadAuthors { .. }));
    }

    #[test]
    fn test_writer_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");

        let writer = ReportWriter::create(&path).unwrap();
        assert_eq!(writer.path(), path);
        writer.write("hello\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");
    }

    #[test]
    fn test_writer_bad_directory() {
        let err = ReportWriter::create(Path::new("/nonexistent/dir/report.txt")).unwrap_err();
        assert!(matches!(err, ReportError::WriteReport { .. }));
    }
}
