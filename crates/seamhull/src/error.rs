use thiserror::Error;

/// Errors surfaced at the engine boundary.
///
/// Everything else (collinear runs, duplicate coordinates, vertical tangent
/// candidates) is absorbed by deterministic epsilon and tie-break rules.
/// Internal ring-lookup misses are contract violations and panic instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HullError {
    /// Malformed caller input (empty point set, empty vertex list).
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}
