//! Usability check for assembled guide records.

use agriguide_shared::{AgriGuideError, GuideRecord, Result};

/// A record is usable when at least one section carries real extracted
/// content. When every field fell back to placeholder text the generator
/// produced nothing the extractor recognized — a systemic failure, surfaced
/// as [`NoUsableContent`](AgriGuideError::NoUsableContent) instead of an
/// empty-looking success.
///
/// Per-field gaps are not errors; only total emptiness is.
pub fn validate(record: &GuideRecord) -> Result<()> {
    if record.sections.iter().any(|s| !s.fell_back) {
        Ok(())
    } else {
        Err(AgriGuideError::NoUsableContent {
            subject: record.subject.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::assemble;
    use agriguide_catalog::crop_essentials;
    use agriguide_shared::Subject;

    #[test]
    fn one_real_section_is_enough() {
        let subject = Subject::crop("Barley");
        let raw = vec!["", "", "cool and dry", "", ""];
        let record = assemble(&subject, crop_essentials(), &raw);
        assert!(validate(&record).is_ok());
    }

    #[test]
    fn all_fallbacks_fail_with_no_usable_content() {
        let subject = Subject::crop("Barley");
        let raw: Vec<&str> = vec![""; crop_essentials().len()];
        let record = assemble(&subject, crop_essentials(), &raw);

        let err = validate(&record).unwrap_err();
        match err {
            AgriGuideError::NoUsableContent { subject } => assert_eq!(subject, "Barley"),
            other => panic!("expected NoUsableContent, got {other:?}"),
        }
    }

    #[test]
    fn fully_extracted_record_is_usable() {
        let subject = Subject::crop("Barley");
        let raw = vec!["a", "b", "c", "d", "e"];
        let record = assemble(&subject, crop_essentials(), &raw);
        assert!(validate(&record).is_ok());
    }
}
