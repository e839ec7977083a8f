#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The lower bound is greater than the upper bound.
    #[error("invalid interval <{left},{right}>: left bound is greater than right bound")]
    InvalidInterval { left: String, right: String },

    /// A bound that cannot be compared, not even with itself (NaN).
    #[error("invalid bound {0}: value is not comparable")]
    InvalidBound(String),
}

pub type Result<T> = ::core::result::Result<T, Error>;
