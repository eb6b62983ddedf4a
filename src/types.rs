/// Raw column name in a legacy source record.
/// Examples: `Name`, `Artwork Title 2`, `Activity Title Poem 1`
pub type ColumnName = String;
/// Activity label referenced by artworks and poems.
/// Examples: `Mural Paint Day`, `Ceremony`
pub type ActivityTitle = String;
/// Human-readable message attached to a per-record validation warning.
/// Example: `Latitude 'north-ish' is not numeric`
pub type WarningMessage = String;
