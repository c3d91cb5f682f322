//! Error types for toggle views and their configuration.

use thiserror::Error;
use toggleui_core::ViewId;

use crate::Slot;

/// A toggle view could not select the child it was asked to show.
///
/// Render and toggle log this at warning level and carry on with an empty
/// container; it never reaches the caller of those operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToggleError {
    /// The slot selected by the current state holds no child.
    #[error("both child views must be defined for toggle view `{view}` ({slot} child is missing)")]
    MissingChild {
        /// The toggle view that was rendering.
        view: ViewId,
        /// The empty slot.
        slot: Slot,
    },
}

/// Errors produced while loading a [`ToggleConfig`](crate::config::ToggleConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The input was not valid configuration JSON.
    #[error("failed to parse toggle view configuration: {0}")]
    Parse(#[from] serde_json::Error),
    /// An explicit id was given but it was empty.
    #[error("toggle view id must not be empty")]
    EmptyId,
}
