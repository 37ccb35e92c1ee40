//! errors raised while dealing shares or doing curve arithmetic

/// failure of a single invocation; nothing is retried internally
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("unknown curve name: {0}")]
    UnknownCurve(String),

    #[error("scalar must be a non-negative integer")]
    InvalidScalar,

    #[error("threshold must be at least 1")]
    InvalidThreshold,

    #[error("number of shares must be at least 1")]
    InvalidShareCount,

    #[error("constant term of the polynomial is not the secret")]
    SecretMismatch,

    #[error("chord addition of points with equal x coordinates")]
    DegenerateAddition,

    #[error("zero has no modular inverse")]
    NotInvertible,

    #[error("share {0} is inconsistent with the commitments")]
    InconsistentShare(usize),

    #[error("invalid curve parameters: {0}")]
    InvalidCurve(String),

    #[error("cannot parse {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, Error>;
