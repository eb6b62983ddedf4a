use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::ActivityTitle;

/// Canonical project entity consumed by the story-map frontend.
///
/// Scalar identity fields are copied verbatim from the source record and are
/// omitted from the serialized output when the source column was absent.
/// Sub-entity fields inside [`Artwork`] and [`Poem`] instead default to the
/// empty string; that asymmetry matches the legacy exporter and is relied on
/// by the frontend.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NormalizedProject {
    /// Project contact name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    /// Project contact title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    /// Institutional affiliation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<Value>,
    /// College or school within the institution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub college: Option<Value>,
    /// Project name shown on the map popup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<Value>,
    /// Hero image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<Value>,
    /// Free-form location description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Value>,
    /// Marker latitude, copied verbatim (string or number).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<Value>,
    /// Marker longitude, copied verbatim (string or number).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<Value>,
    /// Short description shown in the popup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_short: Option<Value>,
    /// Long description shown in the gallery drawer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_long: Option<Value>,
    /// Marker category driving icon and color selection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_category: Option<Value>,
    /// True only when the legacy column held the exact string `"TRUE"`.
    pub has_artwork: bool,
    /// True only when the legacy column held the exact string `"TRUE"`.
    pub has_poems: bool,
    /// True only when the legacy column held the exact string `"TRUE"`.
    pub has_outcomes: bool,
    /// Published outcome. Always present, even when every source field is
    /// absent (it then serializes as an empty object).
    pub outcome: Outcome,
    /// Ordered artwork sub-entities, ascending by source suffix.
    pub artworks: Vec<Artwork>,
    /// Ordered poem sub-entities, ascending by source suffix.
    pub poems: Vec<Poem>,
    /// Deduplicated activities derived from artworks and poems.
    pub activities: Vec<Activity>,
}

/// Published outcome attached to a project.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Outcome {
    /// Outcome type (publication, exhibit, ...).
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<Value>,
    /// Outcome title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    /// Outcome URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Value>,
    /// One-paragraph outcome summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Value>,
}

/// One artwork extracted from a numbered column group.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Artwork {
    /// Activity the artwork was produced at, or empty.
    pub activity_title: ActivityTitle,
    /// Artwork title (the extraction sentinel; never empty).
    pub title: String,
    /// Artwork description, or empty.
    pub description: String,
    /// Artwork image URL, or empty.
    pub image_url: String,
}

/// One poem extracted from a numbered column group.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Poem {
    /// Activity the poem was produced at, or empty.
    pub activity_title: ActivityTitle,
    /// Poem description, or empty.
    pub description: String,
    /// Poem text, or empty.
    pub content: String,
    /// Spanish-language poem text, or empty.
    pub content_spanish: String,
}

/// A deduplicated activity label derived from artworks and poems.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Activity {
    /// Distinct activity title, exact string from the first occurrence.
    pub title: ActivityTitle,
    /// Activity type label assigned by the configured classifier.
    #[serde(rename = "Type")]
    pub kind: String,
}
