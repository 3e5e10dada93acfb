//! Transactional email provider integration.
//!
//! Wire contract: a JSON POST of `{key, message}` to the messages/send
//! endpoint, answered by an array of per-recipient results. The raw
//! response is folded into a [`ProviderVerdict`] at this boundary so the
//! rest of the crate never inspects untyped JSON.

mod client;
mod types;

pub use client::{MandrillClient, MandrillError};
pub use types::{
    interpret_results, OutboundMessage, ProviderVerdict, Recipient, SendRequest, SendResultEntry,
};
