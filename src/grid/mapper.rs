//! Extension trait over [`Element`] that reads the current page of a Kendo
//! grid into typed records.

use chromiumoxide::element::Element;
use log::debug;

use super::record::{coerce, resolve_field_name, GridRecord, BINDING_ATTRIBUTES};
use crate::error::{GridError, Result};

/// Marker attribute identifying a grid container. Its presence (with a
/// non-empty value) is a precondition for every grid operation.
pub const GRID_MARKER_ATTRIBUTE: &str = "kendo-grid";

const ROW_SELECTOR: &str = ".k-grid-content table tr";
pub(crate) const CELL_SELECTOR: &str = "td";

/// Typed read access to a rendered Kendo grid.
///
/// Implemented on [`Element`]; the receiver must be the grid container element
/// (carrying the `kendo-grid` marker attribute), or every method fails with
/// [`GridError::NotAGrid`].
pub trait KendoGridExt {
    /// Map every row on the current page into a record, in document order.
    /// A grid with no rows yields an empty vec. Rows are mapped eagerly, so a
    /// failure on any row fails the whole call.
    async fn grid_data<T: GridRecord>(&self) -> Result<Vec<T>>;

    /// True if any row on the current page maps to a record satisfying the
    /// predicate. All rows are mapped before the predicate is evaluated.
    async fn grid_has_data<T: GridRecord>(
        &self,
        predicate: impl Fn(&T) -> bool,
    ) -> Result<bool>;

    /// Element handle of the first row whose mapped record satisfies the
    /// predicate, for later interaction with that exact row. Rows are mapped
    /// lazily; `None` when no row matches.
    async fn grid_row_matching<T: GridRecord>(
        &self,
        predicate: impl Fn(&T) -> bool,
    ) -> Result<Option<Element>>;

    /// Mapped record of the first row satisfying the predicate, or `None`.
    async fn grid_record_matching<T: GridRecord>(
        &self,
        predicate: impl Fn(&T) -> bool,
    ) -> Result<Option<T>>;

    /// Mapped record of the first row, or `None` on an empty grid.
    async fn grid_first_record<T: GridRecord>(&self) -> Result<Option<T>>;
}

impl KendoGridExt for Element {
    async fn grid_data<T: GridRecord>(&self) -> Result<Vec<T>> {
        assert_is_grid(self).await?;

        let mut records = Vec::new();
        for row in grid_rows(self).await? {
            records.push(parse_row(&row).await?);
        }
        Ok(records)
    }

    async fn grid_has_data<T: GridRecord>(
        &self,
        predicate: impl Fn(&T) -> bool,
    ) -> Result<bool> {
        let records = self.grid_data::<T>().await?;
        Ok(records.iter().any(predicate))
    }

    async fn grid_row_matching<T: GridRecord>(
        &self,
        predicate: impl Fn(&T) -> bool,
    ) -> Result<Option<Element>> {
        assert_is_grid(self).await?;

        for row in grid_rows(self).await? {
            let record: T = parse_row(&row).await?;
            if predicate(&record) {
                return Ok(Some(row));
            }
        }
        Ok(None)
    }

    async fn grid_record_matching<T: GridRecord>(
        &self,
        predicate: impl Fn(&T) -> bool,
    ) -> Result<Option<T>> {
        assert_is_grid(self).await?;

        for row in grid_rows(self).await? {
            let record: T = parse_row(&row).await?;
            if predicate(&record) {
                return Ok(Some(record));
            }
        }
        Ok(None)
    }

    async fn grid_first_record<T: GridRecord>(&self) -> Result<Option<T>> {
        assert_is_grid(self).await?;

        match grid_rows(self).await?.first() {
            Some(row) => Ok(Some(parse_row(row).await?)),
            None => Ok(None),
        }
    }
}

/// Fail with [`GridError::NotAGrid`] unless `control` carries a non-empty
/// grid marker attribute.
pub(crate) async fn assert_is_grid(control: &Element) -> Result<()> {
    match control.attribute(GRID_MARKER_ATTRIBUTE).await? {
        Some(value) if !value.is_empty() => Ok(()),
        _ => Err(GridError::NotAGrid),
    }
}

/// Rows of the grid's current page, document order. Zero matches is an empty
/// page, not an error; driver failures propagate.
pub(crate) async fn grid_rows(grid: &Element) -> Result<Vec<Element>> {
    Ok(grid.find_elements(ROW_SELECTOR).await?)
}

/// Map one rendered row into a record.
///
/// Cells without a data-bound sub-element (e.g. actions columns) contribute
/// nothing, as do cells bound to fields the record does not declare. Driver
/// failures while enumerating cells or reading a located sub-element abort
/// the row.
pub(crate) async fn parse_row<T: GridRecord>(row: &Element) -> Result<T> {
    let mut record = T::default();

    for cell in row.find_elements(CELL_SELECTOR).await? {
        let Some((binding, data_column)) = bound_sub_element(&cell).await? else {
            continue;
        };

        let field = resolve_field_name(&binding);
        let text = data_column
            .inner_text()
            .await
            .map_err(|e| GridError::MappingFailed(e.to_string()))?
            .unwrap_or_default();

        if !record.assign(&field, coerce(&text)) {
            debug!("record declares no field {field:?}, skipping cell");
        }
    }

    Ok(record)
}

/// Locate the cell's data-bound sub-element, trying the recognized binding
/// attributes in priority order. `Ok(None)` when the cell has none.
pub(crate) async fn bound_sub_element(cell: &Element) -> Result<Option<(String, Element)>> {
    for attribute in BINDING_ATTRIBUTES {
        let Ok(element) = cell.find_element(format!("[{attribute}]")).await else {
            continue;
        };
        let binding = element
            .attribute(attribute)
            .await
            .map_err(|e| GridError::MappingFailed(e.to_string()))?;
        if let Some(binding) = binding {
            return Ok(Some((binding, element)));
        }
    }
    Ok(None)
}
