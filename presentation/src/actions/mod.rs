//! User actions and their handler
//!
//! Both the one-shot CLI and the interactive shell turn user input into an
//! [`Action`] and hand it to the [`ActionHandler`].

mod action;
mod handler;

pub use action::{Action, ParseActionError};
pub use handler::{ActionHandler, Response};
