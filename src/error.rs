use thiserror::Error;

pub type SfmResult<T> = Result<T, SfmError>;

/// errors raised by (or on behalf of) the set function oracle
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OracleError {
    #[error("oracle evaluation failed: {0}")]
    Failed(String),
    #[error("oracle returned a non-finite value ({value}) for {subset:?}")]
    NonFinite { subset: Vec<usize>, value: f64 },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SfmError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl SfmError {
    pub(crate) fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
