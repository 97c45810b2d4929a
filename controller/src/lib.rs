//! Page controllers for the notes client.
//!
//! Every controller is a plain state machine: an event goes in, the new state is kept
//! and a list of [`Effect`]s comes out. The browser shell executes the effects and
//! renders [`Controller::view`]; nothing in this crate touches the DOM.

pub mod auth;
pub mod config;
pub mod effect;
pub mod entries;
pub mod error;
pub mod page;
pub mod reply;
pub mod request;
pub mod timestamps;
pub mod view;

pub use effect::{Controller, Effect, Notifier};
pub use error::{PageError, RequestError};
