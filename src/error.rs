use thiserror::Error;

use crate::topology::Topology;

pub type Result<T> = std::result::Result<T, NetworkError>;

/// Errors surfaced by the crate. Both kinds are precondition violations on
/// the caller's side and are never retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// The layer-size triple failed validation at construction time.
    #[error("invalid topology: {0}")]
    InvalidTopology(String),

    /// A supplied vector length disagrees with the network's configuration.
    /// Raised before any computation, so parameters are left untouched.
    #[error("{role} count ({actual}) does not correspond to network config {config}")]
    DimensionMismatch {
        role: &'static str,
        actual: usize,
        config: Topology,
    },
}
