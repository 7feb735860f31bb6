use thiserror::Error;

/// Errors returned by the change-making solvers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The caller passed an amount below zero.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No combination of the given denominations sums to the amount.
    #[error("no solution: {0}")]
    NoSolution(String),

    /// Backtracking hit a sub-sum with no recorded coin. This means the DP
    /// table was built incorrectly and is never expected in normal operation.
    #[error("reconstruction failed: {0}")]
    Reconstruction(String),
}

impl Error {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    pub fn no_solution(msg: impl Into<String>) -> Self {
        Error::NoSolution(msg.into())
    }

    pub fn reconstruction(msg: impl Into<String>) -> Self {
        Error::Reconstruction(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
