use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    #[error("value not found in tree")]
    NotFound,

    #[error("tree is empty")]
    Empty,
}

pub type TreeResult<T> = Result<T, TreeError>;
