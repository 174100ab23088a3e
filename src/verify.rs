use crate::engine::{LopdfDocument, LopdfEngine, ParsedPdf, PdfEngine};
use crate::report::{Expectations, ValidationReport};
use crate::validator::{
    applicable_checks, check_page_count, check_text_phrases, check_title, Check, Finding, Outcome,
};
use futures::future::{self, BoxFuture, FutureExt};

// ── Public entry points ───────────────────────────────────────────────────────

/// Validate the PDF at the filesystem path `source` against `expectations`.
///
/// This never returns an error: content mismatches land in the report's
/// per-field entries, and a document that cannot be loaded at all lands in
/// the report's `general` field. When `expectations` is empty the document
/// is not even opened.
///
/// # Example
///
/// ```no_run
/// use pdfexpect::{validate_pdf, Expectations};
///
/// # async fn demo() {
/// let report = validate_pdf(
///     "report.pdf",
///     &Expectations {
///         page_count: Some(42),
///         ..Default::default()
///     },
/// )
/// .await;
///
/// assert!(report.general.is_none(), "document should at least load");
/// # }
/// ```
pub async fn validate_pdf(source: &str, expectations: &Expectations) -> ValidationReport {
    validate_with_engine(&LopdfEngine, source, expectations).await
}

/// Validate an in-memory PDF against `expectations`.
///
/// Same contract as [`validate_pdf`], for callers that already hold the
/// document bytes (a test fixture, an HTTP response body).
pub async fn validate_pdf_bytes(bytes: &[u8], expectations: &Expectations) -> ValidationReport {
    if expectations.is_empty() {
        return ValidationReport::default();
    }
    match LopdfDocument::from_bytes(bytes) {
        Ok(document) => run_checks(&document, expectations).await,
        Err(error) => ValidationReport::from_general(error),
    }
}

/// Validate against `expectations` using a caller-supplied [`PdfEngine`].
///
/// `source` is passed through to the engine unchanged. This is the
/// generic entry the path-based [`validate_pdf`] delegates to; it exists so
/// that alternative backends (or test doubles) can drive the same pipeline.
pub async fn validate_with_engine<E: PdfEngine>(
    engine: &E,
    source: &str,
    expectations: &Expectations,
) -> ValidationReport {
    // Nothing requested: report success without touching the document.
    if expectations.is_empty() {
        return ValidationReport::default();
    }

    let document = match engine.load(source).await {
        Ok(document) => document,
        Err(error) => {
            tracing::debug!(source, "document acquisition failed: {error}");
            return ValidationReport::from_general(error);
        }
    };

    run_checks(&document, expectations).await
}

// ── Aggregation ───────────────────────────────────────────────────────────────

/// Fan the applicable checks out over the document, await all of them, and
/// fold their outcomes into one report.
///
/// The join collects every outcome; a check that failed under an engine
/// error is downgraded to a finding on its own field, so one broken fetch
/// never discards what the sibling checks produced.
async fn run_checks<D: ParsedPdf>(document: &D, expectations: &Expectations) -> ValidationReport {
    let checks = applicable_checks(expectations);
    tracing::debug!("running {} checks", checks.len());

    let pending: Vec<BoxFuture<'_, Outcome>> = checks
        .into_iter()
        .map(|check| match check {
            Check::PageCount(expected) => check_page_count(document, expected).boxed(),
            Check::Title(expected) => check_title(document, expected).boxed(),
            Check::TextPhrases(expected) => check_text_phrases(document, expected).boxed(),
        })
        .collect();

    let mut report = ValidationReport::default();
    for outcome in future::join_all(pending).await {
        match outcome {
            Outcome::Pass => {}
            Outcome::Mismatch(finding) => record(&mut report, finding),
            Outcome::Failed(field, error) => {
                tracing::warn!("{} check failed: {error}", field.name());
                record(&mut report, field.finding_for_failure(&error));
            }
        }
    }
    report
}

fn record(report: &mut ValidationReport, finding: Finding) {
    match finding {
        Finding::PageCount(message) => report.page_count = Some(message),
        Finding::Title(message) => report.title = Some(message),
        Finding::TextPhrases(missing) => report.text_phrases = Some(missing),
    }
}
