//! Document source — file-type dispatch and text extraction
//!
//! A closed set of document kinds, each turning uploaded bytes into a single
//! string of extracted text. Selection happens by declared MIME type before
//! any bytes are touched; unknown types are rejected up front.

use serde::{Deserialize, Serialize};

use crate::error::StudyError;

/// MIME type for `.docx` uploads.
const MIME_DOCX: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
/// MIME type for legacy `.doc` uploads.
const MIME_DOC: &str = "application/msword";

/// Supported document kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    PlainText,
    Csv,
    WordDoc,
    Pdf,
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::PlainText => "plain text",
            Self::Csv => "CSV",
            Self::WordDoc => "Word",
            Self::Pdf => "PDF",
        })
    }
}

impl DocumentKind {
    /// Look up a kind by declared MIME type.
    ///
    /// Rejection happens here, before any processing of the upload.
    pub fn from_mime(mime: &str) -> Result<Self, StudyError> {
        match mime {
            "text/plain" => Ok(Self::PlainText),
            "text/csv" => Ok(Self::Csv),
            MIME_DOCX | MIME_DOC => Ok(Self::WordDoc),
            "application/pdf" => Ok(Self::Pdf),
            other => Err(StudyError::UnsupportedType(other.to_string())),
        }
    }

    /// Look up a kind by file extension (used when no MIME type is declared).
    pub fn from_extension(ext: &str) -> Result<Self, StudyError> {
        match ext.to_lowercase().as_str() {
            "txt" => Ok(Self::PlainText),
            "csv" => Ok(Self::Csv),
            "doc" | "docx" => Ok(Self::WordDoc),
            "pdf" => Ok(Self::Pdf),
            other => Err(StudyError::UnsupportedType(format!(".{}", other))),
        }
    }

    /// Extract a single text string from uploaded bytes.
    pub fn extract(&self, bytes: &[u8]) -> Result<String, StudyError> {
        match self {
            Self::PlainText => Ok(String::from_utf8_lossy(bytes).into_owned()),
            Self::Csv => extract_csv(bytes).map_err(|e| StudyError::extraction(*self, e)),
            Self::WordDoc => Ok(extract_word_raw(bytes)),
            Self::Pdf => extract_pdf(bytes).map_err(|e| StudyError::extraction(*self, e)),
        }
    }
}

/// Join CSV cells with spaces and records with newlines.
fn extract_csv(bytes: &[u8]) -> Result<String, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut lines = Vec::new();
    for record in reader.records() {
        let record = record?;
        let cells: Vec<&str> = record.iter().map(str::trim).filter(|c| !c.is_empty()).collect();
        if !cells.is_empty() {
            lines.push(cells.join(" "));
        }
    }
    Ok(lines.join("\n"))
}

/// Raw-text extraction for Word uploads: lossy-decode and keep printable
/// runs, dropping binary noise. Runs shorter than four characters are
/// treated as encoding artifacts.
fn extract_word_raw(bytes: &[u8]) -> String {
    let decoded = String::from_utf8_lossy(bytes);
    let mut out = String::new();
    let mut run = String::new();

    for c in decoded.chars() {
        if c == '\u{FFFD}' || (c.is_control() && c != '\n') {
            flush_run(&mut run, &mut out);
        } else {
            run.push(c);
        }
    }
    flush_run(&mut run, &mut out);

    out
}

fn flush_run(run: &mut String, out: &mut String) {
    let trimmed = run.trim();
    if trimmed.chars().count() >= 4 {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(trimmed);
    }
    run.clear();
}

/// Page-by-page PDF text extraction, pages joined with blank lines.
fn extract_pdf(bytes: &[u8]) -> Result<String, lopdf::Error> {
    let doc = lopdf::Document::load_mem(bytes)?;
    let mut pages = Vec::new();
    for page_number in doc.get_pages().keys() {
        let text = doc.extract_text(&[*page_number])?;
        pages.push(text.trim().to_string());
    }
    Ok(pages.join("\n\n"))
}
