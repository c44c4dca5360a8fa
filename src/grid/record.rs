//! Row-to-record mapping rules: binding-attribute resolution, field naming,
//! and text-to-value coercion.
//!
//! The grid renders each data cell with a sub-element carrying a binding
//! attribute whose value names the bound field (e.g. `ng-bind="dataItem.name"`).
//! Records declare an explicit field table instead of relying on runtime
//! reflection; a cell whose resolved field name has no table entry is skipped.

use chrono::NaiveDateTime;

/// Binding attributes recognized on cell sub-elements, in priority order.
/// The first attribute present on a descendant of the cell wins.
pub const BINDING_ATTRIBUTES: [&str; 2] = ["ng-bind", "data-bind"];

/// Literal prefix referring to the current data item in binding expressions.
pub const DATA_ITEM_PREFIX: &str = "dataItem.";

/// The one date format the grid renders; anything else stays text.
const DATE_FORMAT: &str = "%m-%d-%Y %I:%M %p";

/// A value extracted from one grid cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    DateTime(NaiveDateTime),
}

impl CellValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(text) => Some(text),
            CellValue::DateTime(_) => None,
        }
    }

    pub fn as_date_time(&self) -> Option<NaiveDateTime> {
        match self {
            CellValue::Text(_) => None,
            CellValue::DateTime(date_time) => Some(*date_time),
        }
    }
}

/// Assigns one cell value into a record field.
pub type FieldSetter<T> = fn(&mut T, CellValue);

/// A record type that grid rows can be mapped into.
///
/// Fields are matched to grid columns by binding-attribute name, not by column
/// position, so the same record type works across grids with different column
/// ordering, and may cover only a subset of the grid's columns. The `'static`
/// bound is what lets the field table live in a `&'static` slice; record types
/// are plain owned structs, so it costs nothing.
pub trait GridRecord: Default + 'static {
    /// Field table: resolved field name (see [`resolve_field_name`]) to setter.
    fn fields() -> &'static [(&'static str, FieldSetter<Self>)];

    /// Assign `value` into the field named `field`. Returns `false` when the
    /// record declares no such field, which callers treat as a silent skip.
    fn assign(&mut self, field: &str, value: CellValue) -> bool {
        match Self::fields().iter().find(|(name, _)| *name == field) {
            Some((_, setter)) => {
                setter(self, value);
                true
            }
            None => false,
        }
    }
}

/// Resolve a binding-attribute value to a record field name: strip the
/// `dataItem.` prefix if present, then uppercase the first character.
/// `"dataItem.foo"` resolves to `"Foo"`, `"bar"` to `"Bar"`.
pub fn resolve_field_name(binding: &str) -> String {
    let name = binding.strip_prefix(DATA_ITEM_PREFIX).unwrap_or(binding);
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Coerce displayed cell text: a value in the grid's date format becomes a
/// [`CellValue::DateTime`], everything else is kept as raw text.
pub fn coerce(text: &str) -> CellValue {
    match NaiveDateTime::parse_from_str(text, DATE_FORMAT) {
        Ok(date_time) => CellValue::DateTime(date_time),
        Err(_) => CellValue::Text(text.to_string()),
    }
}
