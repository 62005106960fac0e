use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the gas box kernel.
///
/// Out-of-range configuration is clamped rather than reported, so these only
/// cover commands that cannot be honoured and a failing random source.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid command argument (e.g. adding zero particles).
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// The container has already ruptured; gas can no longer be added.
    #[error("container has ruptured")]
    Ruptured,

    /// The injected random source failed. Spawning cannot proceed without it.
    #[error("random source failed: {0}")]
    RandomSource(String),
}
