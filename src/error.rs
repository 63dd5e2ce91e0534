use thiserror::Error;

/// Every demonstration works on literals, so writing the output is the only thing that can fail.
#[derive(Debug, Error)]
pub enum FundamentalsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
