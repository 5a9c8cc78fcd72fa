use std::str::Utf8Error;

use thiserror::Error;

/// A word in the input was not a valid character sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("word {index} is not valid UTF-8")]
pub struct InvalidInputError {
    pub index: usize,
    #[source]
    pub source: Utf8Error,
}

impl InvalidInputError {
    pub fn new(index: usize, source: Utf8Error) -> InvalidInputError {
        InvalidInputError { index, source }
    }
}
