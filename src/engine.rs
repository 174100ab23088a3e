use crate::{EngineError, EngineResult};
use async_trait::async_trait;
use lopdf::Document;
use std::collections::HashMap;

// ── Engine contract ───────────────────────────────────────────────────────────

/// A source of parsed PDF documents.
///
/// The validation pipeline is written against this trait so that the
/// parsing backend can be swapped out (or faked in tests). The crate ships
/// one implementation, [`LopdfEngine`].
#[async_trait]
pub trait PdfEngine: Send + Sync {
    /// The parsed-document handle this engine produces.
    type Document: ParsedPdf;

    /// Load and parse the document identified by `source`.
    ///
    /// The meaning of `source` is up to the engine; [`LopdfEngine`] treats
    /// it as a filesystem path. Fails on malformed or unreachable input.
    async fn load(&self, source: &str) -> EngineResult<Self::Document>;
}

/// A loaded PDF document, as seen by the validators.
#[async_trait]
pub trait ParsedPdf: Send + Sync {
    /// Number of pages. Known synchronously once the document is loaded.
    fn page_count(&self) -> u32;

    /// The document metadata as a key/value map (notably the `Title`
    /// entry). May fail when the metadata is malformed.
    async fn metadata(&self) -> EngineResult<HashMap<String, String>>;

    /// The text fragments of one page, in document order. Page numbers are
    /// 1-indexed. May fail when the page content cannot be decoded.
    async fn page_text(&self, page_number: u32) -> EngineResult<Vec<String>>;
}

// ── LopdfEngine ───────────────────────────────────────────────────────────────

/// The default engine, backed by [`lopdf`]. Treats the validation source as
/// a filesystem path.
pub struct LopdfEngine;

#[async_trait]
impl PdfEngine for LopdfEngine {
    type Document = LopdfDocument;

    async fn load(&self, source: &str) -> EngineResult<LopdfDocument> {
        tracing::debug!(source, "loading document");
        let document = Document::load(source)?;
        Ok(LopdfDocument { document })
    }
}

/// A document parsed by [`LopdfEngine`].
pub struct LopdfDocument {
    document: Document,
}

impl LopdfDocument {
    /// Parse a PDF from an in-memory byte slice.
    pub fn from_bytes(data: &[u8]) -> EngineResult<Self> {
        Ok(Self {
            document: Document::load_mem(data)?,
        })
    }
}

/// Standard document information entries (PDF spec §14.3.3) exposed through
/// [`ParsedPdf::metadata`].
const INFO_KEYS: [&str; 6] = [
    "Title",
    "Author",
    "Subject",
    "Keywords",
    "Creator",
    "Producer",
];

#[async_trait]
impl ParsedPdf for LopdfDocument {
    fn page_count(&self) -> u32 {
        self.document.get_pages().len() as u32
    }

    /// Walk trailer → /Info → dictionary and decode the standard string
    /// entries.
    ///
    /// A document without an /Info dictionary yields an empty map: absent
    /// metadata is a content question for the validators, not an engine
    /// failure. A present but unresolvable /Info entry is a failure.
    async fn metadata(&self) -> EngineResult<HashMap<String, String>> {
        let mut entries = HashMap::new();

        let info_val = match self.document.trailer.get(b"Info") {
            Ok(value) => value,
            Err(_) => return Ok(entries),
        };

        let info_id = info_val.as_reference().map_err(|_| {
            EngineError::Metadata("/Info entry is not an indirect reference".into())
        })?;

        let info = self
            .document
            .get_object(info_id)
            .map_err(|e| EngineError::Metadata(format!("cannot resolve /Info object: {e}")))?
            .as_dict()
            .map_err(|_| EngineError::Metadata("/Info object is not a dictionary".into()))?;

        for key in INFO_KEYS {
            if let Some(value) = string_entry(info, key.as_bytes()) {
                entries.insert(key.to_string(), value);
            }
        }

        Ok(entries)
    }

    async fn page_text(&self, page_number: u32) -> EngineResult<Vec<String>> {
        let text = self
            .document
            .extract_text(&[page_number])
            .map_err(|e| EngineError::PageText {
                page: page_number,
                reason: e.to_string(),
            })?;
        // lopdf concatenates a page's fragments for us, so a page is a
        // single fragment here.
        Ok(vec![text])
    }
}

/// Extract a string value from a PDF dictionary for a given key.
///
/// Returns `Some(String)` if the key exists and contains a valid non-empty
/// string, `None` otherwise.
fn string_entry(dict: &lopdf::Dictionary, key: &[u8]) -> Option<String> {
    dict.get(key)
        .ok()
        .and_then(|v| v.as_str().ok())
        .map(|s| String::from_utf8_lossy(s).into_owned())
        .filter(|s| !s.is_empty())
}
