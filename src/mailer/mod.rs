//! Email dispatch module.
//!
//! One operation: [`EmailDispatcher::send`] renders a named template with
//! the supplied variable bindings and submits it to the provider in a
//! single attempt, returning a [`SendReceipt`] or a structured
//! [`DispatchError`].

mod dispatcher;
mod types;

pub use dispatcher::EmailDispatcher;
pub use types::{DispatchError, DispatchResult, SendReceipt};
