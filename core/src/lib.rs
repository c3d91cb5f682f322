//! View protocol shared by `toggleui` views and backends.
//!
//! This crate defines the vocabulary every other crate in the workspace speaks:
//!
//! - [`Markup`] and [`ViewId`] describe what a view renders and where it lives.
//! - [`ChildView`] is the capability set a view must offer to be hosted by a
//!   container such as `toggleui::ToggleView`.
//! - [`event`] holds the typed interaction bindings that replace ad-hoc handler tables.
//! - [`env`] holds the collaborator traits (document, styling engine, event dispatcher)
//!   and the [`Environment`] that carries them into every operation.
//!
//! Nothing here renders, styles, or dispatches by itself. Backends such as
//! `toggleui-headless` provide the implementations.

#![no_std]
extern crate alloc;

#[macro_use]
mod macros;
pub mod env;
pub mod event;
pub mod id;
pub mod markup;
pub mod view;

#[doc(inline)]
pub use env::{Document, Environment, EventDispatcher, StyleEngine};
#[doc(inline)]
pub use event::{Action, Event, Handler, Interaction, InteractionBinding};
#[doc(inline)]
pub use id::{IdGenerator, ViewId};
#[doc(inline)]
pub use markup::Markup;
#[doc(inline)]
pub use view::{ChildView, ViewKind};
