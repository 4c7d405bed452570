use thiserror::Error;

pub type ModelResult<T> = Result<T, ModelError>;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Slot `{0}` is required and cannot be disabled")]
    RequiredSlot(String),

    #[error("Unknown slot: {0}")]
    UnknownSlot(String),

    #[error("Component {0} has no slots")]
    NotSlotted(String),

    #[error("Id allocation failed: {0}")]
    Id(#[from] IdError),
}

/// Failures of the identifier allocator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    #[error("Id space exhausted after {0}")]
    Exhausted(String),

    #[error("Invalid id symbol {symbol:?} in {id}")]
    InvalidSymbol { id: String, symbol: char },

    #[error("Cannot allocate from an empty id")]
    Empty,
}
