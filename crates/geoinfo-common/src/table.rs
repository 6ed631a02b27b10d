//! Attribute tables.
//!
//! [`AttributeTable`] is the read-only contract the summary engine queries.
//! [`DataTable`] is the in-memory implementation used by [`crate::Layer`].

use std::collections::HashSet;

use crate::value::Record;

/// Read-only access to a layer's attribute records.
pub trait AttributeTable {
    /// Number of record slots, including null records.
    fn record_count(&self) -> usize;

    /// Field names in table order.
    fn fields(&self) -> Vec<String>;

    /// The record at `index`, or `None` if the slot is null or out of range.
    fn record_at(&self, index: usize) -> Option<&Record>;

    /// Every record slot in order; null slots yield `None`.
    fn records(&self) -> Box<dyn Iterator<Item = Option<&Record>> + '_>;

    /// Returns `true` when the table has no record slots.
    fn is_empty(&self) -> bool {
        self.record_count() == 0
    }
}

/// An attribute table held in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataTable {
    records: Vec<Option<Record>>,
    fields: Option<Vec<String>>,
}

impl DataTable {
    /// Creates a table from record slots. `None` marks a null record.
    #[must_use]
    pub fn new(records: Vec<Option<Record>>) -> Self {
        Self {
            records,
            fields: None,
        }
    }

    /// Pins the table's field list instead of deriving it from the records.
    #[must_use]
    pub fn with_fields<S: Into<String>>(mut self, fields: impl IntoIterator<Item = S>) -> Self {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }
}

impl FromIterator<Record> for DataTable {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Some).collect())
    }
}

impl AttributeTable for DataTable {
    fn record_count(&self) -> usize {
        self.records.len()
    }

    fn fields(&self) -> Vec<String> {
        if let Some(fields) = &self.fields {
            return fields.clone();
        }
        let mut seen: HashSet<&str> = HashSet::new();
        let mut fields: Vec<String> = Vec::new();
        for record in self.records.iter().flatten() {
            for name in record.field_names() {
                if seen.insert(name) {
                    fields.push(name.to_string());
                }
            }
        }
        fields
    }

    fn record_at(&self, index: usize) -> Option<&Record> {
        self.records.get(index).and_then(Option::as_ref)
    }

    fn records(&self) -> Box<dyn Iterator<Item = Option<&Record>> + '_> {
        Box::new(self.records.iter().map(Option::as_ref))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> DataTable {
        DataTable::new(vec![
            Some(Record::new().with("name", "A").with("pop", 1000_i64)),
            None,
            Some(Record::new().with("area", 2.5)),
        ])
    }

    #[test]
    fn test_fields_are_union_in_first_seen_order() {
        let table = sample_table();
        assert_eq!(table.fields(), vec!["name", "pop", "area"]);
    }

    #[test]
    fn test_fields_are_not_repeated_across_records() {
        let table: DataTable = (0..200_i64)
            .map(|i| Record::new().with("id", i).with("name", "x").with("zone", i % 3))
            .collect();
        assert_eq!(table.fields(), vec!["id", "name", "zone"]);
    }

    #[test]
    fn test_explicit_fields_override_records() {
        let table = sample_table().with_fields(["pop"]);
        assert_eq!(table.fields(), vec!["pop"]);
    }

    #[test]
    fn test_record_at_handles_null_and_out_of_range() {
        let table = sample_table();
        assert!(table.record_at(0).is_some());
        assert!(table.record_at(1).is_none());
        assert!(table.record_at(3).is_none());
        assert_eq!(table.record_count(), 3);
    }

    #[test]
    fn test_records_yields_every_slot() {
        let table = sample_table();
        let nulls = table.records().filter(Option::is_none).count();
        assert_eq!(table.records().count(), 3);
        assert_eq!(nulls, 1);
    }

    #[test]
    fn test_empty_table() {
        let table = DataTable::default();
        assert!(table.is_empty());
        assert!(table.fields().is_empty());
    }
}
