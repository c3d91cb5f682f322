#![doc = include_str!("../README.md")]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod logging;
mod toggle;

#[doc(inline)]
pub use toggle::{Slot, ToggleView};

pub mod prelude {
    //! A collection of commonly used traits and types for easy importing.
    //!
    //! ```rust
    //! use toggleui::prelude::*;
    //!
    //! let view = ToggleView::new("mode").toggle_on_click(true);
    //! assert!(view.toggles_on_click());
    //! ```
    pub use super::{Slot, ToggleView};
    pub use super::config::ToggleConfig;
    pub use super::error::{ConfigError, ToggleError};
    pub use toggleui_core::{
        Action, ChildView, Environment, Event, Handler, IdGenerator, Interaction,
        InteractionBinding, Markup, ViewId, ViewKind,
    };
}

#[doc(inline)]
pub use toggleui_core::{
    Action, ChildView, Document, Environment, Event, EventDispatcher, Handler, IdGenerator,
    Interaction, InteractionBinding, Markup, StyleEngine, ViewId, ViewKind, env,
};

pub use tracing as log;
