#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Headless backend for `toggleui`.
//!
//! This crate hosts in-memory stand-ins for the collaborators a view talks to: a
//! [`MemoryDocument`] that keeps element content as markup, a [`RecordingStyles`]
//! engine that counts styling passes, and a [`BindingTable`] dispatcher that keeps
//! registered bindings and can resolve which ones a tap would fire.
//!
//! [`HeadlessApp`] wires all three into an [`Environment`](toggleui_core::Environment).
//! It is meant for server-side rendering and for tests that need to observe what a
//! view did to its surroundings.

mod app;
mod dispatch;
mod dom;
mod error;
mod style;

pub use app::{HeadlessApp, HeadlessAppBuilder};
pub use dispatch::{BindingTable, DispatchRecord};
pub use dom::MemoryDocument;
pub use error::HeadlessError;
pub use style::RecordingStyles;
