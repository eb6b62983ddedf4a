#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Activity derivation and the pluggable type classifier.
pub mod activity;
/// Command-line entry point shared by the converter binary.
pub mod app;
/// Column-name constants for the legacy export layout.
pub mod constants;
/// Normalized output entities consumed by the story-map frontend.
pub mod data;
/// Numbered-group extraction from flat records.
pub mod extract;
/// Aggregate conversion counters.
pub mod metrics;
/// Scalar field normalization.
pub mod normalize;
/// Batch conversion driver and validation policy.
pub mod pipeline;
/// Legacy source records and column probing.
pub mod record;
/// File read/write at the batch boundary.
pub mod transport;
/// Shared type aliases.
pub mod types;

mod errors;

pub use activity::{collect_activities, ActivityClassifier, FixedActivityType};
pub use data::{Activity, Artwork, NormalizedProject, Outcome, Poem};
pub use errors::ConvertError;
pub use extract::{extract_artworks, extract_poems, GroupKind};
pub use metrics::{conversion_totals, ConversionTotals};
pub use pipeline::{ConversionOutput, Converter, RecordWarning, ValidationPolicy};
pub use record::{is_present, IndexedKey, SourceRecord};
pub use types::{ActivityTitle, ColumnName, WarningMessage};
