use crate::record::IndexedKey;

/// Fixed scalar columns in the legacy spreadsheet export.
pub mod scalar {
    /// Project contact name.
    pub const NAME: &str = "Name";
    /// Project contact title.
    pub const TITLE: &str = "Title";
    /// Institutional affiliation.
    pub const AFFILIATION: &str = "Affiliation";
    /// College or school within the institution.
    pub const COLLEGE: &str = "College";
    /// Project name shown on the map popup.
    pub const PROJECT: &str = "Project";
    /// Hero image URL for the project.
    pub const IMAGE_URL: &str = "ImageUrl";
    /// Free-form location description.
    pub const LOCATION: &str = "Location";
    /// Marker latitude.
    pub const LATITUDE: &str = "Latitude";
    /// Marker longitude.
    pub const LONGITUDE: &str = "Longitude";
    /// Short description shown in the popup.
    pub const DESCRIPTION_SHORT: &str = "DescriptionShort";
    /// Long description shown in the gallery drawer.
    pub const DESCRIPTION_LONG: &str = "DescriptionLong";
    /// Marker category driving icon and color selection.
    pub const PROJECT_CATEGORY: &str = "ProjectCategory";
}

/// Legacy boolean capability columns. Only the exact string `"TRUE"`
/// counts as true (see [`crate::record::SourceRecord::flag`]).
pub mod flags {
    /// Project has artwork sub-entities.
    pub const HAS_ARTWORK: &str = "HasArtwork";
    /// Project has poem sub-entities.
    pub const HAS_POEMS: &str = "HasPoems";
    /// Project has a published outcome.
    pub const HAS_OUTCOMES: &str = "HasOutcomes";
}

/// Flat columns feeding the nested `Outcome` object.
pub mod outcome {
    /// Outcome type (publication, exhibit, ...).
    pub const TYPE: &str = "Outcome Type";
    /// Outcome title.
    pub const TITLE: &str = "Outcome Title";
    /// Outcome URL.
    pub const LINK: &str = "Outcome Link";
    /// One-paragraph outcome summary.
    pub const SUMMARY: &str = "Outcome Summary";
}

/// Numbered column-name templates for repeated sub-entity groups.
///
/// Suffixes are 1-based; `Artwork Title 1` is the first artwork's title.
pub mod columns {
    use super::IndexedKey;

    /// Artwork title. This column is the artwork continuation sentinel:
    /// extraction stops at the first suffix where it is absent or empty.
    pub const ARTWORK_TITLE: IndexedKey = IndexedKey::new("Artwork Title");
    /// Activity title referenced by an artwork.
    pub const ARTWORK_ACTIVITY: IndexedKey = IndexedKey::new("Activity Title");
    /// Artwork description.
    pub const ARTWORK_DESCRIPTION: IndexedKey = IndexedKey::new("Artwork Description");
    /// Artwork image URL.
    pub const ARTWORK_IMAGE: IndexedKey = IndexedKey::new("Artwork Image");

    /// Poem text. Either this column or [`POEM_ACTIVITY`] continues the scan.
    pub const POEM_CONTENT: IndexedKey = IndexedKey::new("Poem");
    /// Activity title referenced by a poem.
    pub const POEM_ACTIVITY: IndexedKey = IndexedKey::new("Activity Title Poem");
    /// Poem description.
    pub const POEM_DESCRIPTION: IndexedKey = IndexedKey::new("Poem Description");
    /// Spanish-language poem text.
    pub const POEM_CONTENT_SPANISH: IndexedKey = IndexedKey::new("Poema");
}

/// Constants used by activity derivation.
pub mod activity {
    /// Placeholder type label carried over from the legacy exporter, which
    /// tagged every derived activity as a workshop.
    pub const TYPE_WORKSHOP: &str = "Workshop";
}
