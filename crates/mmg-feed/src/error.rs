//! Price feed error types.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FeedError {
    #[error("Generated price is not representable: {0}")]
    NonFinitePrice(f64),

    #[error("Price {0} cannot be converted to floating point")]
    Conversion(String),
}

pub type FeedResult<T> = Result<T, FeedError>;
