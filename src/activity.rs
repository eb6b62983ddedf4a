use std::borrow::Cow;

use indexmap::IndexSet;

use crate::constants::activity::TYPE_WORKSHOP;
use crate::data::{Activity, Artwork, Poem};
use crate::types::ActivityTitle;

/// Assigns a type label to a derived activity title.
///
/// The legacy exporter tagged every activity as a workshop and left a note
/// that real types were still needed. This trait keeps that behavior as the
/// default while giving callers a seam to plug in actual classification.
pub trait ActivityClassifier {
    /// Type label for the activity with the given title.
    fn classify(&self, title: &str) -> String;
}

/// Classifier that assigns one fixed label to every activity.
///
/// Defaults to the legacy `"Workshop"` placeholder.
#[derive(Clone, Debug)]
pub struct FixedActivityType {
    label: Cow<'static, str>,
}

impl FixedActivityType {
    /// Classifier with a caller-chosen label.
    pub fn new(label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// The label this classifier assigns.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Default for FixedActivityType {
    fn default() -> Self {
        Self::new(TYPE_WORKSHOP)
    }
}

impl ActivityClassifier for FixedActivityType {
    fn classify(&self, _title: &str) -> String {
        self.label.clone().into_owned()
    }
}

/// Collect the deduplicated activity sequence for one project.
///
/// Artworks are scanned before poems; within each, source order is kept.
/// Membership uses exact string equality on the activity title (no case or
/// whitespace normalization), the first occurrence wins its position, and
/// later duplicates are dropped silently. Empty titles are skipped.
pub fn collect_activities(
    artworks: &[Artwork],
    poems: &[Poem],
    classifier: &dyn ActivityClassifier,
) -> Vec<Activity> {
    let mut titles: IndexSet<ActivityTitle> = IndexSet::new();
    for artwork in artworks {
        if !artwork.activity_title.is_empty() {
            titles.insert(artwork.activity_title.clone());
        }
    }
    for poem in poems {
        if !poem.activity_title.is_empty() {
            titles.insert(poem.activity_title.clone());
        }
    }
    titles
        .into_iter()
        .map(|title| {
            let kind = classifier.classify(&title);
            Activity { title, kind }
        })
        .collect()
}
