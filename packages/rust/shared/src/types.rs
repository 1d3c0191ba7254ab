//! Core domain types for AgriGuide structured guides.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Subject
// ---------------------------------------------------------------------------

/// The kind of agricultural subject a guide is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectKind {
    Crop,
    Animal,
}

impl SubjectKind {
    /// Noun used when talking about the subject in a prompt.
    pub fn noun(&self) -> &'static str {
        match self {
            Self::Crop => "crop",
            Self::Animal => "farm animal",
        }
    }
}

/// A named subject to fetch a guide for.
///
/// The name is free-form display text and is passed through unchanged —
/// no trimming, no case folding. It keys the final [`GuideRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub name: String,
    pub kind: SubjectKind,
}

impl Subject {
    pub fn crop(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: SubjectKind::Crop,
        }
    }

    pub fn animal(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: SubjectKind::Animal,
        }
    }
}

// ---------------------------------------------------------------------------
// GuideRecord
// ---------------------------------------------------------------------------

/// One extracted (or fallen-back) section of a guide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuideSection {
    /// Stable field identifier (e.g., `planting_guide`).
    pub field: String,
    /// Human-readable display label (e.g., "Planting guide").
    pub label: String,
    /// Extracted content, or the fallback placeholder when nothing was found.
    pub content: String,
    /// Whether `content` is the fallback placeholder rather than real text.
    pub fell_back: bool,
}

/// The final structured guide returned to the caller.
///
/// Carries exactly one section per catalog field, in catalog order —
/// never missing, never null. Owned by the caller; the engine keeps no
/// state across requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuideRecord {
    /// Subject display name, exactly as requested.
    pub subject: String,
    /// Subject kind the catalog was selected for.
    pub kind: SubjectKind,
    /// Sections in catalog order.
    pub sections: Vec<GuideSection>,
    /// When the guide was generated.
    pub fetched_at: DateTime<Utc>,
}

impl GuideRecord {
    /// Look up a section's content by field identifier.
    pub fn content(&self, field: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.field == field)
            .map(|s| s.content.as_str())
    }

    /// Number of sections that carry real extracted content.
    pub fn extracted_count(&self) -> usize {
        self.sections.iter().filter(|s| !s.fell_back).count()
    }
}
