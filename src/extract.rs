use crate::constants::columns;
use crate::data::{Artwork, Poem};
use crate::record::SourceRecord;

/// Sub-entity families encoded as numbered column groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupKind {
    /// Artwork group: `Artwork Title {n}` and companions.
    Artwork,
    /// Poem group: `Poem {n}` / `Activity Title Poem {n}` and companions.
    Poem,
}

impl GroupKind {
    /// Continuation predicate for position `n`.
    ///
    /// Artwork extraction continues only while the title column itself is
    /// present. Poem extraction continues while either the poem text or its
    /// activity-title companion is present. The asymmetry is deliberate: a
    /// record with only `Activity Title Poem 1` still yields one poem entry
    /// with empty content, and the frontend relies on that.
    pub fn continues_at(&self, record: &SourceRecord, n: usize) -> bool {
        match self {
            GroupKind::Artwork => record.has_indexed(columns::ARTWORK_TITLE, n),
            GroupKind::Poem => {
                record.has_indexed(columns::POEM_CONTENT, n)
                    || record.has_indexed(columns::POEM_ACTIVITY, n)
            }
        }
    }
}

/// Extract the ordered artwork sequence from one record.
///
/// The scan is strictly prefix-contiguous: it starts at suffix 1 and stops at
/// the first gap, even if higher-numbered columns exist later in the record.
/// A record with no artwork columns yields an empty sequence.
pub fn extract_artworks(record: &SourceRecord) -> Vec<Artwork> {
    let mut artworks = Vec::new();
    let mut n = 1;
    while GroupKind::Artwork.continues_at(record, n) {
        artworks.push(Artwork {
            activity_title: record.text_indexed(columns::ARTWORK_ACTIVITY, n),
            title: record.text_indexed(columns::ARTWORK_TITLE, n),
            description: record.text_indexed(columns::ARTWORK_DESCRIPTION, n),
            image_url: record.text_indexed(columns::ARTWORK_IMAGE, n),
        });
        n += 1;
    }
    artworks
}

/// Extract the ordered poem sequence from one record.
///
/// Same prefix-contiguous scan as [`extract_artworks`], but with the broader
/// dual-column continuation predicate (see [`GroupKind::continues_at`]).
/// Missing companion columns default to the empty string.
pub fn extract_poems(record: &SourceRecord) -> Vec<Poem> {
    let mut poems = Vec::new();
    let mut n = 1;
    while GroupKind::Poem.continues_at(record, n) {
        poems.push(Poem {
            activity_title: record.text_indexed(columns::POEM_ACTIVITY, n),
            description: record.text_indexed(columns::POEM_DESCRIPTION, n),
            content: record.text_indexed(columns::POEM_CONTENT, n),
            content_spanish: record.text_indexed(columns::POEM_CONTENT_SPANISH, n),
        });
        n += 1;
    }
    poems
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn record(value: Value) -> SourceRecord {
        match value {
            Value::Object(map) => SourceRecord::from_map(map),
            other => panic!("fixture must be a JSON object, got {other}"),
        }
    }

    #[test]
    fn artwork_scan_stops_at_the_first_gap() {
        let rec = record(json!({
            "Artwork Title 1": "Mural",
            "Artwork Title 3": "Sculpture",
        }));
        let artworks = extract_artworks(&rec);
        assert_eq!(artworks.len(), 1);
        assert_eq!(artworks[0].title, "Mural");
    }

    #[test]
    fn artwork_scan_treats_empty_title_as_a_gap() {
        let rec = record(json!({
            "Artwork Title 1": "Mural",
            "Artwork Title 2": "",
            "Artwork Title 3": "Sculpture",
        }));
        assert_eq!(extract_artworks(&rec).len(), 1);
    }

    #[test]
    fn artwork_companions_default_to_empty() {
        let rec = record(json!({ "Artwork Title 1": "Mural" }));
        let artworks = extract_artworks(&rec);
        assert_eq!(
            artworks,
            vec![Artwork {
                activity_title: String::new(),
                title: "Mural".to_string(),
                description: String::new(),
                image_url: String::new(),
            }]
        );
    }

    #[test]
    fn artwork_scan_ignores_activity_title_only_columns() {
        // Unlike poems, an activity title alone does not continue the scan.
        let rec = record(json!({ "Activity Title 1": "Paint Day" }));
        assert!(extract_artworks(&rec).is_empty());
    }

    #[test]
    fn poem_scan_continues_on_either_column() {
        let rec = record(json!({
            "Poem 1": "First verse",
            "Activity Title Poem 2": "Ceremony",
            "Poem 3": "Third verse",
        }));
        let poems = extract_poems(&rec);
        assert_eq!(poems.len(), 3);
        assert_eq!(poems[0].content, "First verse");
        assert_eq!(poems[1].content, "");
        assert_eq!(poems[1].activity_title, "Ceremony");
        assert_eq!(poems[2].content, "Third verse");
    }

    #[test]
    fn poem_with_only_activity_title_yields_one_entry() {
        let rec = record(json!({ "Activity Title Poem 1": "Ceremony" }));
        let poems = extract_poems(&rec);
        assert_eq!(poems.len(), 1);
        assert_eq!(poems[0].activity_title, "Ceremony");
        assert_eq!(poems[0].content, "");
    }

    #[test]
    fn poem_companions_are_read_per_suffix() {
        let rec = record(json!({
            "Poem 1": "Verse",
            "Poem Description 1": "About the river",
            "Poema 1": "Verso",
            "Activity Title Poem 1": "Reading",
        }));
        let poems = extract_poems(&rec);
        assert_eq!(
            poems,
            vec![Poem {
                activity_title: "Reading".to_string(),
                description: "About the river".to_string(),
                content: "Verse".to_string(),
                content_spanish: "Verso".to_string(),
            }]
        );
    }

    #[test]
    fn records_without_groups_yield_empty_sequences() {
        let rec = record(json!({ "Name": "P1" }));
        assert!(extract_artworks(&rec).is_empty());
        assert!(extract_poems(&rec).is_empty());
    }
}
