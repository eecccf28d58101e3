use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// A header or data row that does not split into exactly two fields.
    #[error("line {line}: expected two comma separated fields, found {content:?}")]
    Format { line: usize, content: String },
    /// A field that is not a finite decimal number.
    #[error("line {line}: {token:?} is not a finite number")]
    Value { line: usize, token: String },
    #[error("vertical or empty dataset; slope undefined")]
    Degenerate,
    /// The sums behind the slope left the range of `f64`.
    #[error("data too large to fit; slope overflowed")]
    Overflow,
    #[error("dataset has no points")]
    Empty,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
