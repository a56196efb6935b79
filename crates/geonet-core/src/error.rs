use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Cycle detected: graph cannot be used as a DAG")]
    CycleDetected,

    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Invalid graph document: {0}")]
    InvalidDocument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
