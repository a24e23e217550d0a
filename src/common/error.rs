//! Error types for the frame pool.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors raised by the frame pool and its reporting layer.
///
/// `ZeroFrames` and `UnknownPolicy` are configuration errors: they surface
/// once, when a pool is built, and never from a page request.
#[derive(Debug, Error)]
pub enum Error {
    /// A pool was configured with no frames to load pages into.
    #[error("invalid configuration: frame pool needs at least one frame")]
    ZeroFrames,

    /// The named eviction policy does not exist.
    #[error("invalid configuration: unknown eviction policy `{0}`")]
    UnknownPolicy(String),

    /// I/O error while writing a trace.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error comes from pool configuration rather than I/O.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::ZeroFrames | Error::UnknownPolicy(_))
    }
}
