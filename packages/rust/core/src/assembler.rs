//! Guide assembler.
//!
//! Maps each catalog field to its extracted content, substituting fallback
//! text where extraction came back empty. This is the only place in the
//! engine that invents text — the extractor itself never does.

use chrono::Utc;
use tracing::debug;

use agriguide_catalog::SectionCatalog;
use agriguide_shared::{GuideRecord, GuideSection, Subject};

/// The placeholder substituted for a section with no extracted content.
pub fn fallback_text(label: &str) -> String {
    format!("information not found for {label}")
}

/// Assemble the final record for `subject` from per-section extraction
/// results, in catalog order.
///
/// `raw_sections` holds one entry per catalog field (the extractor's output,
/// possibly empty). The result always carries exactly one [`GuideSection`]
/// per catalog field.
pub fn assemble(subject: &Subject, catalog: &SectionCatalog, raw_sections: &[&str]) -> GuideRecord {
    debug_assert_eq!(raw_sections.len(), catalog.len());

    let sections: Vec<GuideSection> = catalog
        .sections()
        .iter()
        .zip(raw_sections)
        .map(|(spec, raw)| {
            let fell_back = raw.is_empty();
            GuideSection {
                field: spec.field.to_string(),
                label: spec.label.to_string(),
                content: if fell_back {
                    fallback_text(spec.label)
                } else {
                    (*raw).to_string()
                },
                fell_back,
            }
        })
        .collect();

    let fallback_count = sections.iter().filter(|s| s.fell_back).count();
    debug!(
        subject = %subject.name,
        catalog = catalog.name(),
        fallback_count,
        "record assembled"
    );

    GuideRecord {
        subject: subject.name.clone(),
        kind: subject.kind,
        sections,
        fetched_at: Utc::now(),
    }
}
