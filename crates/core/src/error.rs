use thiserror::Error;

#[derive(Error, Debug)]
pub enum NodescopeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("identifier does not follow the node naming convention: {0}")]
    Identifier(String),
}

pub type Result<T> = std::result::Result<T, NodescopeError>;
