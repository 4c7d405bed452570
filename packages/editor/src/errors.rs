//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Model error: {0}")]
    Model(#[from] protoform_model::ModelError),

    #[error("Action error: {0}")]
    Action(#[from] crate::actions::ActionError),

    #[error("Document is not file-backed")]
    NotFileBacked,

    #[error("Tree {tree_id} cannot be referenced from {host_tree_id}")]
    CyclicReference {
        host_tree_id: String,
        tree_id: String,
    },
}
