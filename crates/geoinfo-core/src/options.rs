//! Report configuration.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::ConfigError;

/// Order in which attribute fields are listed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldOrder {
    /// Alphabetical, ignoring case.
    #[default]
    Ascending,
    /// Reverse alphabetical, ignoring case.
    Descending,
    /// As the table reports them.
    Table,
}

impl FieldOrder {
    /// Sorts `fields` in this order.
    ///
    /// Names equal when case is ignored fall back to a byte-wise comparison,
    /// so the result depends only on the set of names.
    #[must_use]
    pub fn apply(self, mut fields: Vec<String>) -> Vec<String> {
        match self {
            FieldOrder::Ascending => fields.sort_by(|a, b| compare_names(a, b)),
            FieldOrder::Descending => fields.sort_by(|a, b| compare_names(b, a)),
            FieldOrder::Table => {},
        }
        fields
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

impl FromStr for FieldOrder {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ascending" | "asc" => Ok(FieldOrder::Ascending),
            "descending" | "desc" => Ok(FieldOrder::Descending),
            "table" | "none" => Ok(FieldOrder::Table),
            other => Err(ConfigError::InvalidOption {
                option: "field_order".to_string(),
                message: format!("unknown order '{other}' (expected ascending, descending or table)"),
            }),
        }
    }
}

/// Options controlling report layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Order of fields in the attribute preview
    pub field_order: FieldOrder,
    /// Text appended to the header of target layers
    pub target_marker: String,
    /// Record shown in the attribute preview; `None` shows the first record
    pub record_index: Option<usize>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            field_order: FieldOrder::Ascending,
            target_marker: " *".to_string(),
            record_index: None,
        }
    }
}

impl ReportOptions {
    #[must_use]
    pub fn with_field_order(mut self, order: FieldOrder) -> Self {
        self.field_order = order;
        self
    }

    #[must_use]
    pub fn with_target_marker(mut self, marker: impl Into<String>) -> Self {
        self.target_marker = marker.into();
        self
    }

    #[must_use]
    pub fn with_record_index(mut self, index: usize) -> Self {
        self.record_index = Some(index);
        self
    }

    /// Checks that the options can produce a well-formed report.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOption`] if the target marker contains a
    /// line break.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_marker.contains(['\n', '\r']) {
            return Err(ConfigError::InvalidOption {
                option: "target_marker".to_string(),
                message: "must not contain line breaks".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_ascending_ignores_case() {
        let sorted = FieldOrder::Ascending.apply(names(&["pop", "Name", "area"]));
        assert_eq!(sorted, names(&["area", "Name", "pop"]));
    }

    #[test]
    fn test_ascending_is_total() {
        let a = FieldOrder::Ascending.apply(names(&["b", "B", "a"]));
        let b = FieldOrder::Ascending.apply(names(&["B", "a", "b"]));
        assert_eq!(a, b);
        assert_eq!(a, names(&["a", "B", "b"]));
    }

    #[test]
    fn test_descending_and_table_order() {
        assert_eq!(
            FieldOrder::Descending.apply(names(&["a", "c", "b"])),
            names(&["c", "b", "a"])
        );
        assert_eq!(
            FieldOrder::Table.apply(names(&["z", "a"])),
            names(&["z", "a"])
        );
    }

    #[test]
    fn test_field_order_from_str() {
        assert_eq!("ascending".parse::<FieldOrder>().unwrap(), FieldOrder::Ascending);
        assert_eq!("DESC".parse::<FieldOrder>().unwrap(), FieldOrder::Descending);
        assert_eq!("table".parse::<FieldOrder>().unwrap(), FieldOrder::Table);
        assert!("random".parse::<FieldOrder>().is_err());
    }

    #[test]
    fn test_default_options() {
        let options = ReportOptions::default();
        assert_eq!(options.field_order, FieldOrder::Ascending);
        assert_eq!(options.target_marker, " *");
        assert_eq!(options.record_index, None);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_multiline_marker() {
        let options = ReportOptions::default().with_target_marker(" *\n");
        assert!(options.validate().is_err());
    }
}
