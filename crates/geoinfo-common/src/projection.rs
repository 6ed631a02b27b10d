//! Spatial reference lookup.

use crate::layer::Dataset;

/// Placeholder shown when a dataset has no known spatial reference.
pub const UNKNOWN_PROJECTION: &str = "[unknown]";

/// Produces a human-readable description of a dataset's spatial reference.
pub trait ProjectionResolver {
    /// Describes the dataset's projection. Never fails; unknown references
    /// yield a placeholder.
    fn describe(&self, dataset: &Dataset) -> String;
}

/// Reads the Proj.4 string stored on the dataset.
#[derive(Debug, Clone, Copy, Default)]
pub struct DatasetProjection;

impl ProjectionResolver for DatasetProjection {
    fn describe(&self, dataset: &Dataset) -> String {
        match dataset.crs.as_deref().map(str::trim) {
            Some(crs) if !crs.is_empty() => crs.to_string(),
            _ => UNKNOWN_PROJECTION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_known_crs() {
        let dataset = Dataset::default().with_crs("+proj=longlat +datum=WGS84 +no_defs");
        assert_eq!(
            DatasetProjection.describe(&dataset),
            "+proj=longlat +datum=WGS84 +no_defs"
        );
    }

    #[test]
    fn test_describe_unknown_crs() {
        assert_eq!(DatasetProjection.describe(&Dataset::default()), "[unknown]");
        let blank = Dataset::default().with_crs("  ");
        assert_eq!(DatasetProjection.describe(&blank), "[unknown]");
    }
}
