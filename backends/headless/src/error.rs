use thiserror::Error;

/// Error type produced by the headless backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeadlessError {
    /// The root element was given an empty identifier.
    #[error("root element id must not be empty")]
    EmptyRootId,
}
