//! # pdfexpect
//!
//! A Rust library for validating PDF documents against a small set of
//! expected properties.
//!
//! ## What this crate does
//!
//! 1. **Page count** — checks that the document has exactly the expected
//!    number of pages.
//! 2. **Title** — checks that the `Title` entry declared in the document
//!    metadata equals the expected string. Caution: a headline rendered on
//!    the first page is not the same as the metadata title!
//! 3. **Text phrases** — checks that every expected phrase appears as a
//!    literal substring of some page's text content.
//!
//! All applicable checks run concurrently and every mismatch is collected
//! into a single [`ValidationReport`]. Validation never returns an error:
//! a document that cannot be loaded at all is reported through the
//! report's `general` field instead of failing the call.
//!
//! ## Quick example
//!
//! ```no_run
//! use pdfexpect::{validate_pdf, Expectations};
//!
//! # async fn demo() {
//! let expectations = Expectations {
//!     page_count: Some(3),
//!     title: Some("Invoice 2031-04".into()),
//!     text_phrases: Some(vec!["Total due".into(), "IBAN".into()]),
//! };
//!
//! let report = validate_pdf("invoice.pdf", &expectations).await;
//! if report.is_empty() {
//!     println!("all expectations met");
//! } else if let Some(missing) = &report.text_phrases {
//!     println!("missing phrases: {missing:?}");
//! }
//! # }
//! ```

use thiserror::Error;

mod engine;
mod report;
mod validator;
mod verify;

pub use engine::{LopdfDocument, LopdfEngine, ParsedPdf, PdfEngine};
pub use report::{Expectations, ValidationReport};
pub use verify::{validate_pdf, validate_pdf_bytes, validate_with_engine};

// ── Error type ───────────────────────────────────────────────────────────────

/// Every failure the document engine can produce.
///
/// These are infrastructure failures, not validation findings: a wrong page
/// count is a finding inside [`ValidationReport`], while a document that
/// cannot be parsed at all surfaces as an `EngineError` in the report's
/// `general` field.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The document could not be acquired from its source.
    #[error("document load failed: {0}")]
    Load(String),

    /// The underlying lopdf parser returned an error.
    #[error("PDF parse error: {0}")]
    Parse(#[from] lopdf::Error),

    /// The document metadata could not be read.
    #[error("metadata error: {0}")]
    Metadata(String),

    /// Text content could not be extracted from a page.
    #[error("cannot extract text from page {page}: {reason}")]
    PageText {
        /// 1-indexed number of the page that failed.
        page: u32,
        /// Description of the underlying extraction failure.
        reason: String,
    },
}

/// Convenience alias used throughout this crate.
pub type EngineResult<T> = std::result::Result<T, EngineError>;
