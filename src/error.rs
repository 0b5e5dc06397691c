// errors reported by the library
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// caller supplied output buffers whose size differs from the text length
    #[error("output arrays have sizes {len} and {src}, expected {expected}")]
    OutputSize {
        expected: usize,
        len: usize,
        src: usize,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("text of length {len} exceeds the maximum supported length {max}")]
    CapacityExceeded { len: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
