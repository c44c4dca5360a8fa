use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("Element is not a kendo grid")]
    NotAGrid,

    #[error("Element is not a row of a kendo grid")]
    NotAGridRow,

    #[error("Pager control not found: {0}")]
    PagerControlNotFound(String),

    #[error("Cannot read current page number: {0}")]
    PageNumberUnreadable(String),

    #[error("Row mapping failed: {0}")]
    MappingFailed(String),

    #[error("Inline edit failed: {0}")]
    EditFailed(String),

    #[error("CDP error: {0}")]
    CdpError(#[from] chromiumoxide::error::CdpError),
}

pub type Result<T> = std::result::Result<T, GridError>;
