//! Null shape and null record detection.
//!
//! Counts walk the whole sequence; there is no early exit.

use geoinfo_common::{AttributeTable, Record, Shape};

/// Returns `true` if a feature has no geometry: the slot is empty or the
/// shape has no parts.
#[must_use]
pub fn is_null_shape(shape: Option<&Shape>) -> bool {
    shape.is_none_or(|s| s.part_count() == 0)
}

/// Returns `true` if the record slot is empty.
///
/// A record whose fields are all empty is not null.
#[must_use]
pub fn is_null_record(record: Option<&Record>) -> bool {
    record.is_none()
}

/// Number of null shapes in a layer's shape list.
#[must_use]
pub fn count_null_shapes(shapes: &[Option<Shape>]) -> usize {
    shapes.iter().filter(|s| is_null_shape(s.as_ref())).count()
}

/// Number of null records in a table.
#[must_use]
pub fn count_null_records<T: AttributeTable + ?Sized>(table: &T) -> usize {
    table.records().filter(|r| is_null_record(*r)).count()
}
