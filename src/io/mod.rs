pub mod output;

pub use output::{create_writer, export_json, AnalysisReport, OutputFormat, OutputWriter};

use crate::core::{Error, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Extensions of documents that need a text extractor first.
const BINARY_DOCUMENT_EXTENSIONS: &[&str] = &["pdf", "docx", "doc"];

/// Read an RFP as plain text. `-` reads standard input.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so
/// any text file can be classified.
pub fn read_rfp_text(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut bytes = Vec::new();
        std::io::stdin()
            .read_to_end(&mut bytes)
            .map_err(|e| Error::io("Failed to read standard input", path, e))?;
        return Ok(decode_text(&bytes));
    }

    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        let ext = ext.to_ascii_lowercase();
        if BINARY_DOCUMENT_EXTENSIONS.contains(&ext.as_str()) {
            return Err(Error::UnsupportedInput(format!(
                "{} is a .{ext} document; extract its text to a .txt file first",
                path.display()
            )));
        }
    }

    let bytes = fs::read(path).map_err(|e| Error::io("Failed to read RFP", path, e))?;
    tracing::debug!(bytes = bytes.len(), "Read {}", path.display());
    Ok(decode_text(&bytes))
}

pub fn decode_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::io("Failed to write file", path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_rfp_text_tolerates_invalid_utf8() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("rfp.txt");
        fs::write(&path, b"OAuth \xff\xfe endpoint").unwrap();

        let text = read_rfp_text(&path).unwrap();
        assert!(text.starts_with("OAuth "));
        assert!(text.ends_with(" endpoint"));
    }

    #[test]
    fn test_read_rfp_text_rejects_pdf() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("rfp.PDF");
        fs::write(&path, b"%PDF-1.7").unwrap();

        assert!(matches!(
            read_rfp_text(&path),
            Err(Error::UnsupportedInput(_))
        ));
    }

    #[test]
    fn test_read_rfp_text_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = read_rfp_text(&temp.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, Error::Io { path: Some(_), .. }));
    }

    #[test]
    fn test_empty_file_reads_as_empty_text() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty.txt");
        fs::write(&path, b"").unwrap();
        assert_eq!(read_rfp_text(&path).unwrap(), "");
    }
}
