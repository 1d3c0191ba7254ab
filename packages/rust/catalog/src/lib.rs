//! Fixed section catalogs for crop and animal guides.
//!
//! A catalog is an ordered list of [`SectionSpec`]s. Extraction boundaries are
//! derived from catalog order: each section ends where the next section's
//! marker begins, and the last section ends at the [`END_MARKER`] sentinel.

mod prompt;

pub use prompt::build_prompt;

use agriguide_shared::SubjectKind;

/// End-of-document sentinel. Terminates the last section and never names a
/// section itself.
pub const END_MARKER: &str = "[END]";

// ---------------------------------------------------------------------------
// SectionSpec / SectionCatalog
// ---------------------------------------------------------------------------

/// One section of a guide: its stable field identifier, the literal marker
/// the generator is asked to echo, a display label, and the one-line content
/// description used in the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpec {
    pub field: &'static str,
    pub marker: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

/// A fixed, ordered catalog of sections for one guide variant.
#[derive(Debug, Clone, Copy)]
pub struct SectionCatalog {
    name: &'static str,
    sections: &'static [SectionSpec],
}

impl SectionCatalog {
    /// Catalog name, for logging.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The sections in extraction order.
    pub fn sections(&self) -> &'static [SectionSpec] {
        self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Each section paired with the marker that ends it: the next section's
    /// marker, or [`END_MARKER`] for the last section.
    pub fn marker_pairs(&self) -> impl Iterator<Item = (&'static SectionSpec, &'static str)> {
        let sections = self.sections;
        sections.iter().enumerate().map(move |(i, spec)| {
            let end = sections
                .get(i + 1)
                .map(|next| next.marker)
                .unwrap_or(END_MARKER);
            (spec, end)
        })
    }
}

/// Select the full catalog for a subject kind.
pub fn for_kind(kind: SubjectKind) -> &'static SectionCatalog {
    match kind {
        SubjectKind::Crop => crop_full(),
        SubjectKind::Animal => animal(),
    }
}

// ---------------------------------------------------------------------------
// Crop catalogs
// ---------------------------------------------------------------------------

const CROP_ESSENTIAL_SECTIONS: [SectionSpec; 5] = [
    SectionSpec {
        field: "planting_guide",
        marker: "[PLANTING_GUIDE]",
        label: "Planting guide",
        description: "Best planting seasons, seed preparation, spacing, and sowing technique.",
    },
    SectionSpec {
        field: "harvesting_guide",
        marker: "[HARVESTING_GUIDE]",
        label: "Harvesting guide",
        description: "Harvest timing, ripeness signs, and harvesting techniques.",
    },
    SectionSpec {
        field: "weather_considerations",
        marker: "[WEATHER_CONSIDERATIONS]",
        label: "Weather considerations",
        description: "Climate requirements, temperature ranges, and weather risks.",
    },
    SectionSpec {
        field: "fertilizers",
        marker: "[FERTILIZERS]",
        label: "Fertilizers and soil",
        description: "Recommended fertilizers, application schedule, and soil requirements.",
    },
    SectionSpec {
        field: "best_practices",
        marker: "[BEST_PRACTICES]",
        label: "Best practices",
        description: "General cultivation best practices for a healthy yield.",
    },
];

const CROP_EXTRA_SECTIONS: [SectionSpec; 8] = [
    SectionSpec {
        field: "disease_management",
        marker: "[DISEASE_MANAGEMENT]",
        label: "Disease management",
        description: "Common diseases, symptoms, prevention, and treatment.",
    },
    SectionSpec {
        field: "pest_control",
        marker: "[PEST_CONTROL]",
        label: "Pest control",
        description: "Common pests and control measures, chemical and biological.",
    },
    SectionSpec {
        field: "water_management",
        marker: "[WATER_MANAGEMENT]",
        label: "Water management",
        description: "Irrigation needs, watering schedule, and drainage.",
    },
    SectionSpec {
        field: "soil_preparation",
        marker: "[SOIL_PREPARATION]",
        label: "Soil preparation",
        description: "Soil type, tillage, and bed preparation before planting.",
    },
    SectionSpec {
        field: "storage_guidelines",
        marker: "[STORAGE_GUIDELINES]",
        label: "Storage guidelines",
        description: "Post-harvest handling and storage conditions.",
    },
    SectionSpec {
        field: "market_value",
        marker: "[MARKET_VALUE]",
        label: "Market value",
        description: "Typical market value and economic considerations.",
    },
    SectionSpec {
        field: "environmental_impact",
        marker: "[ENVIRONMENTAL_IMPACT]",
        label: "Environmental impact",
        description: "Environmental footprint and mitigation practices.",
    },
    SectionSpec {
        field: "organic_farming",
        marker: "[ORGANIC_FARMING]",
        label: "Organic farming",
        description: "Organic cultivation methods and certification considerations.",
    },
];

const CROP_FULL_SECTIONS: [SectionSpec; 13] = [
    CROP_ESSENTIAL_SECTIONS[0],
    CROP_ESSENTIAL_SECTIONS[1],
    CROP_ESSENTIAL_SECTIONS[2],
    CROP_ESSENTIAL_SECTIONS[3],
    CROP_ESSENTIAL_SECTIONS[4],
    CROP_EXTRA_SECTIONS[0],
    CROP_EXTRA_SECTIONS[1],
    CROP_EXTRA_SECTIONS[2],
    CROP_EXTRA_SECTIONS[3],
    CROP_EXTRA_SECTIONS[4],
    CROP_EXTRA_SECTIONS[5],
    CROP_EXTRA_SECTIONS[6],
    CROP_EXTRA_SECTIONS[7],
];

static CROP_ESSENTIALS: SectionCatalog = SectionCatalog {
    name: "crop-essentials",
    sections: &CROP_ESSENTIAL_SECTIONS,
};

static CROP_FULL: SectionCatalog = SectionCatalog {
    name: "crop-full",
    sections: &CROP_FULL_SECTIONS,
};

/// The minimal 5-field crop catalog (planting through best practices).
pub fn crop_essentials() -> &'static SectionCatalog {
    &CROP_ESSENTIALS
}

/// The extended 13-field crop catalog.
pub fn crop_full() -> &'static SectionCatalog {
    &CROP_FULL
}

// ---------------------------------------------------------------------------
// Animal catalog
// ---------------------------------------------------------------------------

const ANIMAL_SECTIONS: [SectionSpec; 10] = [
    SectionSpec {
        field: "feeding",
        marker: "[FEEDING]",
        label: "Feeding",
        description: "Appropriate nutrition and required feed.",
    },
    SectionSpec {
        field: "care",
        marker: "[CARE]",
        label: "Daily care",
        description: "Day-to-day care and general husbandry.",
    },
    SectionSpec {
        field: "health",
        marker: "[HEALTH]",
        label: "Health care",
        description: "Health care and disease prevention.",
    },
    SectionSpec {
        field: "housing",
        marker: "[HOUSING]",
        label: "Housing",
        description: "Suitable housing and environmental needs.",
    },
    SectionSpec {
        field: "breeding",
        marker: "[BREEDING]",
        label: "Breeding",
        description: "Raising and reproduction.",
    },
    SectionSpec {
        field: "diseases",
        marker: "[DISEASES]",
        label: "Common diseases",
        description: "Common diseases and their treatment.",
    },
    SectionSpec {
        field: "medications",
        marker: "[MEDICATIONS]",
        label: "Medications",
        description: "Essential medications and treatments.",
    },
    SectionSpec {
        field: "behavior",
        marker: "[BEHAVIOR]",
        label: "Behavior",
        description: "Behavior and training.",
    },
    SectionSpec {
        field: "economics",
        marker: "[ECONOMICS]",
        label: "Economics",
        description: "Economic viability of raising the animal.",
    },
    SectionSpec {
        field: "vaccination",
        marker: "[VACCINATION]",
        label: "Vaccination",
        description: "Required vaccinations and their schedule.",
    },
];

static ANIMAL: SectionCatalog = SectionCatalog {
    name: "animal",
    sections: &ANIMAL_SECTIONS,
};

/// The 10-field animal catalog.
pub fn animal() -> &'static SectionCatalog {
    &ANIMAL
}
