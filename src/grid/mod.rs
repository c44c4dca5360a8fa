pub mod edit;
pub mod mapper;
pub mod pager;
pub mod record;

pub use edit::KendoGridRowExt;
pub use mapper::{KendoGridExt, GRID_MARKER_ATTRIBUTE};
pub use pager::KendoPagerExt;
pub use record::{CellValue, FieldSetter, GridRecord};
