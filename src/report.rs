use crate::EngineError;

// ── Expectations ─────────────────────────────────────────────────────────────

/// The properties a PDF document is expected to have.
///
/// All fields are optional; only the ones that are set are validated.
///
/// # Example
///
/// ```
/// use pdfexpect::Expectations;
///
/// let expectations = Expectations {
///     page_count: Some(12),
///     ..Default::default()
/// };
/// assert!(!expectations.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Expectations {
    /// Expected number of pages.
    pub page_count: Option<u32>,

    /// Expected metadata `Title` entry. Compared for exact, case-sensitive
    /// equality, with no trimming.
    pub title: Option<String>,

    /// Phrases expected to appear somewhere in the document text. Each
    /// phrase must occur as a literal, case-sensitive substring of a single
    /// page's text; a phrase spanning a page boundary does not count.
    pub text_phrases: Option<Vec<String>>,
}

impl Expectations {
    /// Returns `true` when no field is set, i.e. there is nothing to
    /// validate.
    pub fn is_empty(&self) -> bool {
        self.page_count.is_none() && self.title.is_none() && self.text_phrases.is_none()
    }
}

// ── ValidationReport ─────────────────────────────────────────────────────────

/// The complete result of validating one document.
///
/// Each field mirrors the expectation of the same name and carries an error
/// payload when that expectation was not met, or `None` when it was
/// satisfied (or never requested). `general` is reserved for pipeline
/// failures: when the document cannot be loaded at all, `general` holds the
/// captured [`EngineError`] and no field-level entry is produced, since no
/// validator ran.
///
/// Callers distinguish "validation ran" from "validation could not run" by
/// checking `general`; an entirely empty report means every requested
/// expectation was met.
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// Message describing a page-count mismatch.
    pub page_count: Option<String>,

    /// Message describing a title mismatch, or the description of a
    /// metadata read failure.
    pub title: Option<String>,

    /// The expected phrases that were not found, in the order the caller
    /// supplied them.
    pub text_phrases: Option<Vec<String>>,

    /// Set only when the document failed to load; the other fields are
    /// empty in that case.
    pub general: Option<EngineError>,
}

impl ValidationReport {
    /// Returns `true` when validation ran and found nothing wrong.
    pub fn is_empty(&self) -> bool {
        self.page_count.is_none()
            && self.title.is_none()
            && self.text_phrases.is_none()
            && self.general.is_none()
    }

    pub(crate) fn from_general(error: EngineError) -> Self {
        Self {
            general: Some(error),
            ..Default::default()
        }
    }
}
