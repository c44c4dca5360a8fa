//! Inline editing of a grid cell.
//!
//! Clicking a data-bound cell makes the widget swap in an editable input named
//! after the bound field; these helpers click the right cell and type into
//! that input.

use chromiumoxide::element::Element;
use log::debug;

use super::mapper::{bound_sub_element, CELL_SELECTOR};
use super::record::resolve_field_name;
use crate::error::{GridError, Result};

pub trait KendoGridRowExt {
    /// Set a new value in the row's inline-editable cell bound to `field`.
    ///
    /// The receiver must be a row of a live grid container. A row with no
    /// cell bound to `field` is left untouched (no click, no error).
    async fn set_grid_value(&self, field: &str, value: &str) -> Result<()>;
}

impl KendoGridRowExt for Element {
    async fn set_grid_value(&self, field: &str, value: &str) -> Result<()> {
        assert_is_grid_row(self).await?;

        let field_name = resolve_field_name(field);
        let Some(data_column) = bound_cell_for_field(self, &field_name).await? else {
            debug!("row has no cell bound to {field_name:?}, leaving it unchanged");
            return Ok(());
        };

        // The click swaps the cell content for an input named after the field.
        data_column.click().await?;

        let input = self
            .find_element(format!(r#"input[name="{field_name}"]"#))
            .await
            .map_err(|_| {
                GridError::EditFailed(format!("no editor input appeared for {field_name:?}"))
            })?;

        input
            .call_js_fn("function() { this.value = ''; }", false)
            .await?;
        input.type_str(value).await?;
        Ok(())
    }
}

/// The row must still sit under a grid container in the live DOM; row handles
/// outlive re-renders, so this is checked at call time.
async fn assert_is_grid_row(row: &Element) -> Result<()> {
    let returns = row
        .call_js_fn(
            "function() { return this.closest('[kendo-grid]') !== null; }",
            false,
        )
        .await?;

    match returns.result.value {
        Some(serde_json::Value::Bool(true)) => Ok(()),
        _ => Err(GridError::NotAGridRow),
    }
}

/// Find the row's data-bound sub-element whose resolved field name equals
/// `field_name`, cell by cell, with the same priority-ordered attribute
/// lookup as the row mapper.
async fn bound_cell_for_field(row: &Element, field_name: &str) -> Result<Option<Element>> {
    for cell in row.find_elements(CELL_SELECTOR).await? {
        if let Some((binding, element)) = bound_sub_element(&cell).await? {
            if resolve_field_name(&binding) == field_name {
                return Ok(Some(element));
            }
        }
    }
    Ok(None)
}
