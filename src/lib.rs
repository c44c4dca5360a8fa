//! End-to-end test helpers for the Kendo UI grid widget.
//!
//! Extension traits over [`chromiumoxide::element::Element`] that read a
//! rendered grid's rows into caller-defined record types, search them with
//! plain predicates, drive the pager, and edit cells inline. The grid element
//! is identified by its `kendo-grid` marker attribute; row cells are matched
//! to record fields by binding attribute (`ng-bind`/`data-bind`), not by
//! column position.
//!
//! These helpers never launch or wait on the browser themselves; session
//! lifecycle and render-stability waits belong to the calling test.

// Helpers run on the test's own runtime; callers never need a Send bound.
#![allow(async_fn_in_trait)]

pub mod error;
pub mod grid;

pub use error::{GridError, Result};
pub use grid::{
    CellValue, FieldSetter, GridRecord, KendoGridExt, KendoGridRowExt, KendoPagerExt,
    GRID_MARKER_ATTRIBUTE,
};
