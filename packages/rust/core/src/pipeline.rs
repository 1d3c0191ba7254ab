//! End-to-end guide pipeline: prompt → generate → extract → assemble → validate.
//!
//! One logical request per call. The generation call is the only suspension
//! point; the N extraction passes are pure and read the same immutable
//! response text, so no state is shared across sections or across requests.

use tracing::{debug, info, instrument};

use agriguide_catalog::{SectionCatalog, build_prompt};
use agriguide_extract::extract_section;
use agriguide_gemini::TextGenerator;
use agriguide_shared::{GuideRecord, Result, Subject};

use crate::{assembler, validate};

/// Per-request options.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Language the generated guide should be written in.
    pub language: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            language: "English".into(),
        }
    }
}

/// Progress callback for reporting pipeline phases.
pub trait ProgressReporter: Send + Sync {
    /// Called when entering a new phase.
    fn phase(&self, name: &str);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn phase(&self, _name: &str) {}
}

/// Fetch a structured guide for `subject` over `catalog`.
///
/// The client is injected per call; retries (if the caller wants any) are
/// fully independent invocations of this function. A transport or
/// empty-response failure propagates before extraction begins; an assembled
/// record in which every field fell back fails with `NoUsableContent`.
#[instrument(skip_all, fields(subject = %subject.name, catalog = catalog.name()))]
pub async fn fetch_guide(
    client: &dyn TextGenerator,
    subject: &Subject,
    catalog: &SectionCatalog,
    opts: &FetchOptions,
    progress: &dyn ProgressReporter,
) -> Result<GuideRecord> {
    progress.phase("Building prompt");
    let prompt = build_prompt(subject, catalog, &opts.language);
    debug!(prompt_len = prompt.len(), "prompt built");

    progress.phase("Requesting guide");
    let text = client.generate(&prompt).await?;

    progress.phase("Extracting sections");
    let raw_sections: Vec<&str> = catalog
        .marker_pairs()
        .map(|(spec, end_marker)| extract_section(&text, spec.marker, end_marker))
        .collect();

    let record = assembler::assemble(subject, catalog, &raw_sections);
    validate::validate(&record)?;

    info!(
        extracted = record.extracted_count(),
        total = catalog.len(),
        "guide complete"
    );

    Ok(record)
}
