use crate::data::NormalizedProject;

/// Aggregate counters for one conversion run.
///
/// Computed post hoc over the converted projects; not part of the data model
/// and never serialized into the output file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConversionTotals {
    /// Number of projects converted.
    pub projects: usize,
    /// Total artworks across all projects.
    pub artworks: usize,
    /// Total poems across all projects.
    pub poems: usize,
    /// Total derived activities across all projects.
    pub activities: usize,
}

/// Compute aggregate totals over converted projects.
pub fn conversion_totals(projects: &[NormalizedProject]) -> ConversionTotals {
    let mut totals = ConversionTotals {
        projects: projects.len(),
        ..ConversionTotals::default()
    };
    for project in projects {
        totals.artworks += project.artworks.len();
        totals.poems += project.poems.len();
        totals.activities += project.activities.len();
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Activity, Artwork, Poem};

    fn project(artworks: usize, poems: usize, activities: usize) -> NormalizedProject {
        NormalizedProject {
            artworks: vec![Artwork::default(); artworks],
            poems: vec![Poem::default(); poems],
            activities: vec![
                Activity {
                    title: "A".to_string(),
                    kind: "Workshop".to_string(),
                };
                activities
            ],
            ..NormalizedProject::default()
        }
    }

    #[test]
    fn totals_sum_across_projects() {
        let projects = vec![project(2, 1, 2), project(0, 3, 1)];
        let totals = conversion_totals(&projects);
        assert_eq!(
            totals,
            ConversionTotals {
                projects: 2,
                artworks: 2,
                poems: 4,
                activities: 3,
            }
        );
    }

    #[test]
    fn empty_batch_yields_zero_totals() {
        assert_eq!(conversion_totals(&[]), ConversionTotals::default());
    }
}
