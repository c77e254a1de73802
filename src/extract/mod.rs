//! Text extraction from uploaded documents.

mod pdftotext;

pub use pdftotext::{ExtractionError, PdfTextExtractor, REQUIRED_TOOLS};
