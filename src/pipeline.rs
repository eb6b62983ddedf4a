use serde_json::Value;
use tracing::debug;

use crate::activity::{collect_activities, ActivityClassifier, FixedActivityType};
use crate::constants::scalar;
use crate::data::NormalizedProject;
use crate::extract::{extract_artworks, extract_poems};
use crate::normalize::normalize_fields;
use crate::record::SourceRecord;
use crate::types::WarningMessage;

/// How per-record data problems are handled during conversion.
///
/// The policy never changes the emitted data, only whether diagnostics are
/// collected. Malformed records pass through with absent or empty fields
/// either way, exactly like the legacy exporter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValidationPolicy {
    /// No diagnostics; byte-for-byte legacy pass-through behavior.
    Silent,
    /// Collect per-record warnings for the caller to report.
    #[default]
    Warn,
}

/// A non-fatal data problem found while converting one record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordWarning {
    /// Zero-based position of the record in the input array.
    pub record_index: usize,
    /// What was wrong with the record.
    pub message: WarningMessage,
}

/// Ordered conversion results plus any collected warnings.
#[derive(Clone, Debug, Default)]
pub struct ConversionOutput {
    /// Normalized projects, one per input record, in input order.
    pub projects: Vec<NormalizedProject>,
    /// Warnings collected under [`ValidationPolicy::Warn`]; empty otherwise.
    pub warnings: Vec<RecordWarning>,
}

/// Converts legacy flat records into normalized projects.
///
/// Each record is transformed independently; conversion of one record has no
/// observable effect on any other, and output order always equals input
/// order.
#[derive(Clone, Debug)]
pub struct Converter<C: ActivityClassifier = FixedActivityType> {
    policy: ValidationPolicy,
    classifier: C,
}

impl Converter<FixedActivityType> {
    /// Converter with the default policy and the legacy placeholder
    /// activity classifier.
    pub fn new() -> Self {
        Self {
            policy: ValidationPolicy::default(),
            classifier: FixedActivityType::default(),
        }
    }
}

impl Default for Converter<FixedActivityType> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ActivityClassifier> Converter<C> {
    /// Override the validation policy.
    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Swap in a different activity classifier.
    pub fn with_classifier<D: ActivityClassifier>(self, classifier: D) -> Converter<D> {
        Converter {
            policy: self.policy,
            classifier,
        }
    }

    /// Convert a single record.
    pub fn convert_record(&self, record: &SourceRecord) -> NormalizedProject {
        let artworks = extract_artworks(record);
        let poems = extract_poems(record);
        let activities = collect_activities(&artworks, &poems, &self.classifier);
        let mut project = normalize_fields(record);
        project.artworks = artworks;
        project.poems = poems;
        project.activities = activities;
        project
    }

    /// Convert an ordered batch of records, preserving input order.
    pub fn convert_batch(&self, records: &[SourceRecord]) -> ConversionOutput {
        let mut output = ConversionOutput::default();
        for (index, record) in records.iter().enumerate() {
            if self.policy == ValidationPolicy::Warn {
                validate_record(record, index, &mut output.warnings);
            }
            output.projects.push(self.convert_record(record));
        }
        debug!(
            records = records.len(),
            warnings = output.warnings.len(),
            "converted batch"
        );
        output
    }
}

fn validate_record(record: &SourceRecord, index: usize, warnings: &mut Vec<RecordWarning>) {
    let mut push = |message: WarningMessage| {
        warnings.push(RecordWarning {
            record_index: index,
            message,
        });
    };

    if !record.has(scalar::NAME) {
        push("record has no Name".to_string());
    }
    for key in [scalar::LATITUDE, scalar::LONGITUDE] {
        match record.get(key) {
            None | Some(Value::Null) => push(format!("record has no {key}")),
            Some(Value::Number(_)) => {}
            Some(Value::String(text)) => {
                if text.trim().parse::<f64>().is_err() {
                    push(format!("{key} '{text}' is not numeric"));
                }
            }
            Some(_) => push(format!("{key} is not numeric")),
        }
    }
}
