use crate::constants::{flags, outcome, scalar};
use crate::data::{NormalizedProject, Outcome};
use crate::record::SourceRecord;

/// Map the flat scalar columns of one record onto the canonical schema.
///
/// Identity fields are copied verbatim with no validation or type coercion;
/// absent columns stay absent in the output. The three `Has*` flags use the
/// exact-string `"TRUE"` coercion (see [`SourceRecord::flag`]). The returned
/// project has empty sub-entity collections; the batch driver fills those in.
pub fn normalize_fields(record: &SourceRecord) -> NormalizedProject {
    NormalizedProject {
        name: record.scalar(scalar::NAME),
        title: record.scalar(scalar::TITLE),
        affiliation: record.scalar(scalar::AFFILIATION),
        college: record.scalar(scalar::COLLEGE),
        project: record.scalar(scalar::PROJECT),
        image_url: record.scalar(scalar::IMAGE_URL),
        location: record.scalar(scalar::LOCATION),
        latitude: record.scalar(scalar::LATITUDE),
        longitude: record.scalar(scalar::LONGITUDE),
        description_short: record.scalar(scalar::DESCRIPTION_SHORT),
        description_long: record.scalar(scalar::DESCRIPTION_LONG),
        project_category: record.scalar(scalar::PROJECT_CATEGORY),
        has_artwork: record.flag(flags::HAS_ARTWORK),
        has_poems: record.flag(flags::HAS_POEMS),
        has_outcomes: record.flag(flags::HAS_OUTCOMES),
        outcome: normalize_outcome(record),
        artworks: Vec::new(),
        poems: Vec::new(),
        activities: Vec::new(),
    }
}

/// Build the nested outcome object from its flat columns.
///
/// The outcome is always a populated object, never omitted, even when every
/// source field is absent.
pub fn normalize_outcome(record: &SourceRecord) -> Outcome {
    Outcome {
        kind: record.scalar(outcome::TYPE),
        title: record.scalar(outcome::TITLE),
        link: record.scalar(outcome::LINK),
        summary: record.scalar(outcome::SUMMARY),
    }
}
