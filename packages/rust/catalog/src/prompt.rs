//! Prompt builder: turns a subject and a section catalog into the
//! instruction string sent to the generation endpoint.

use agriguide_shared::Subject;

use crate::{END_MARKER, SectionCatalog};

/// Build the generation instruction for `subject` over `catalog`.
///
/// The instruction states the subject, enumerates every section marker in
/// catalog order with its expected content, asks the generator to echo each
/// marker verbatim, and terminates with the [`END_MARKER`] sentinel. Every
/// marker label appears exactly once.
///
/// Pure function of its inputs; no I/O.
pub fn build_prompt(subject: &Subject, catalog: &SectionCatalog, language: &str) -> String {
    let mut prompt = String::new();

    prompt.push_str(&format!(
        "Provide detailed agricultural information about the {} \"{}\" in {language}.\n",
        subject.kind.noun(),
        subject.name,
    ));
    prompt.push_str(
        "Structure the response into the sections listed below, in this order. \
         Reproduce every bracketed section marker exactly as written, including \
         the brackets, and close the response with the final marker.\n",
    );

    for spec in catalog.sections() {
        prompt.push('\n');
        prompt.push_str(spec.marker);
        prompt.push('\n');
        prompt.push_str(spec.description);
        prompt.push('\n');
    }

    prompt.push('\n');
    prompt.push_str(END_MARKER);
    prompt.push('\n');

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{animal, crop_essentials, crop_full};

    #[test]
    fn prompt_contains_every_marker_exactly_once() {
        let subject = Subject::crop("Tomato");
        for catalog in [crop_essentials(), crop_full()] {
            let prompt = build_prompt(&subject, catalog, "English");
            for spec in catalog.sections() {
                assert_eq!(
                    prompt.matches(spec.marker).count(),
                    1,
                    "{} in {}",
                    spec.marker,
                    catalog.name()
                );
            }
        }
    }

    #[test]
    fn prompt_terminates_with_end_sentinel() {
        let subject = Subject::animal("Goat");
        let prompt = build_prompt(&subject, animal(), "English");
        assert!(prompt.trim_end().ends_with(END_MARKER));
    }

    #[test]
    fn prompt_states_subject_and_language() {
        let subject = Subject::animal("Goat");
        let prompt = build_prompt(&subject, animal(), "Arabic");
        assert!(prompt.contains("farm animal"));
        assert!(prompt.contains("\"Goat\""));
        assert!(prompt.contains("Arabic"));
    }

    #[test]
    fn markers_appear_in_catalog_order() {
        let subject = Subject::crop("Maize");
        let catalog = crop_full();
        let prompt = build_prompt(&subject, catalog, "English");

        let positions: Vec<usize> = catalog
            .sections()
            .iter()
            .map(|s| prompt.find(s.marker).expect("marker present"))
            .collect();

        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn subject_name_passes_through_unchanged() {
        let subject = Subject::crop("  laitue d'hiver ");
        let prompt = build_prompt(&subject, crop_essentials(), "French");
        assert!(prompt.contains("\"  laitue d'hiver \""));
    }
}
