//! Attribute preview rendering.
//!
//! Shows one record of a table as a two-column block of field names and
//! values. Numeric values are padded so their integral parts line up.
//!
//! ```text
//!   Field  First value
//!   a       3
//!   bb     12.5
//! ```

use geoinfo_common::{AttributeTable, Value};

use crate::error::{ReportError, Result};
use crate::format::{count_integral_chars, format_value};
use crate::options::FieldOrder;

/// Header of the field-name column.
pub const FIELD_HEADER: &str = "Field";

const INDENT: &str = "  ";

/// Renders the record at `record_index` (or the first record) of `table`.
///
/// With an explicit index the value column is labelled `Value`; otherwise it
/// is labelled `First value`. A null record shows every field as `null`.
///
/// # Errors
///
/// Returns [`ReportError::RecordOutOfRange`] if an explicit `record_index`
/// is past the end of the table.
pub fn render_attribute_table<T: AttributeTable + ?Sized>(
    table: &T,
    record_index: Option<usize>,
    order: FieldOrder,
) -> Result<String> {
    if let Some(index) = record_index
        && index >= table.record_count()
    {
        return Err(ReportError::RecordOutOfRange {
            index,
            count: table.record_count(),
        });
    }
    let label = if record_index.is_some() {
        "Value"
    } else {
        "First value"
    };
    let record = table.record_at(record_index.unwrap_or(0));
    let fields = order.apply(table.fields());

    let name_width = fields
        .iter()
        .map(|name| name.chars().count())
        .fold(FIELD_HEADER.len(), usize::max)
        + 2;

    let values: Vec<Value> = fields
        .iter()
        .map(|name| {
            record
                .and_then(|r| r.get(name))
                .cloned()
                .unwrap_or(Value::Null)
        })
        .collect();

    let integral_width = values.iter().map(count_integral_chars).max().unwrap_or(0);

    let mut lines = Vec::with_capacity(fields.len() + 1);
    lines.push(format!("{INDENT}{FIELD_HEADER:<name_width$}{label}"));
    for (name, value) in fields.iter().zip(&values) {
        lines.push(format!(
            "{INDENT}{name:<name_width$}{}",
            format_value(value, integral_width)
        ));
    }
    Ok(lines.join("\n"))
}
