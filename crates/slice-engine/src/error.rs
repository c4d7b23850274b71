use thiserror::Error;

/// Everything that can go wrong building or slicing a dependence graph.
#[derive(Debug, Error)]
pub enum SliceError {
    #[error("invalid slicing criterion: {0}")]
    InvalidArgument(String),

    #[error("failed to parse program: {0}")]
    Parse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("internal invariant violated: {0}")]
    Internal(String),
}
