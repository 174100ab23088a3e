use crate::engine::ParsedPdf;
use crate::report::Expectations;
use crate::EngineError;
use futures::future;

// ── Field validators ──────────────────────────────────────────────────────────
//
// These are internal. Callers go through `validate_pdf` and friends, which
// dispatch to the checks below and merge their outcomes.

/// One field of the expectation set, paired with its expected value.
///
/// Dispatch is an exhaustive match over this closed set, so every field has
/// exactly one validator and there is no unknown-field case to handle.
pub(crate) enum Check<'a> {
    PageCount(u32),
    Title(&'a str),
    TextPhrases(&'a [String]),
}

/// The fields a validator can report on.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Field {
    PageCount,
    Title,
    TextPhrases,
}

impl Field {
    pub(crate) fn name(self) -> &'static str {
        match self {
            Field::PageCount => "page_count",
            Field::Title => "title",
            Field::TextPhrases => "text_phrases",
        }
    }

    /// Shape an engine failure as a finding on this field, so that one
    /// broken fetch degrades to a field-level entry instead of discarding
    /// the sibling validators' results.
    pub(crate) fn finding_for_failure(self, error: &EngineError) -> Finding {
        match self {
            Field::PageCount => Finding::PageCount(error.to_string()),
            Field::Title => Finding::Title(error.to_string()),
            Field::TextPhrases => Finding::TextPhrases(vec![error.to_string()]),
        }
    }
}

/// A failed expectation: the field it concerns plus the error payload.
pub(crate) enum Finding {
    PageCount(String),
    Title(String),
    TextPhrases(Vec<String>),
}

/// What one validator produced. Every check resolves to one of these; a
/// check never returns a bare error, so awaiting a batch of checks always
/// yields every sibling's outcome.
pub(crate) enum Outcome {
    /// The expectation was met.
    Pass,
    /// The expectation was not met.
    Mismatch(Finding),
    /// The check itself could not run because the engine failed under it.
    Failed(Field, EngineError),
}

/// Collect the checks that apply: one per expectation field that is set.
pub(crate) fn applicable_checks(expectations: &Expectations) -> Vec<Check<'_>> {
    let Expectations {
        page_count,
        title,
        text_phrases,
    } = expectations;

    let mut checks = Vec::new();
    if let Some(expected) = page_count {
        checks.push(Check::PageCount(*expected));
    }
    if let Some(expected) = title {
        checks.push(Check::Title(expected));
    }
    if let Some(expected) = text_phrases {
        checks.push(Check::TextPhrases(expected));
    }
    checks
}

/// Compare the document's page count against the expected one. The count is
/// known once the document is loaded, so this check cannot fail.
pub(crate) async fn check_page_count<D: ParsedPdf + ?Sized>(document: &D, expected: u32) -> Outcome {
    let actual = document.page_count();
    if actual == expected {
        Outcome::Pass
    } else {
        Outcome::Mismatch(Finding::PageCount(format!(
            "expect pdf has {expected} pages, but has {actual}"
        )))
    }
}

/// Compare the metadata `Title` entry against the expected title. Exact,
/// case-sensitive equality; a document without a declared title is a
/// mismatch. The message names the expected title only and does not echo
/// whatever the document declares.
pub(crate) async fn check_title<D: ParsedPdf + ?Sized>(document: &D, expected: &str) -> Outcome {
    let metadata = match document.metadata().await {
        Ok(metadata) => metadata,
        Err(error) => return Outcome::Failed(Field::Title, error),
    };

    if metadata.get("Title").map(String::as_str) == Some(expected) {
        Outcome::Pass
    } else {
        Outcome::Mismatch(Finding::Title(format!(
            "expect pdf has title {expected}, but it hasn't."
        )))
    }
}

/// Search every page's text for the expected phrases.
///
/// All page fetches are issued up front and awaited together. Each page's
/// fragments are concatenated with no separator in between, so a phrase
/// split across fragments still matches, while a phrase spanning two pages
/// never does. The missing phrases keep the caller's order.
pub(crate) async fn check_text_phrases<D: ParsedPdf + ?Sized>(
    document: &D,
    expected: &[String],
) -> Outcome {
    let page_count = document.page_count();
    let fetches = (1..=page_count).map(|page| document.page_text(page));

    let mut pages = Vec::with_capacity(page_count as usize);
    for fetched in future::join_all(fetches).await {
        match fetched {
            Ok(fragments) => pages.push(fragments.concat()),
            Err(error) => return Outcome::Failed(Field::TextPhrases, error),
        }
    }

    let missing: Vec<String> = expected
        .iter()
        .filter(|phrase| !pages.iter().any(|page| page.contains(phrase.as_str())))
        .cloned()
        .collect();

    if missing.is_empty() {
        Outcome::Pass
    } else {
        Outcome::Mismatch(Finding::TextPhrases(missing))
    }
}
