//! Bulk post removal: account matching, per-post workflow, event reporting.
//!
//! Posts are processed one at a time. Every post yields one
//! [`RemovalEvent::Begin`] followed by exactly one terminal event
//! ([`RemovalEvent::Done`] or [`RemovalEvent::Error`]); a failing post never
//! stops the run.

mod accounts;
mod error;
mod event;
mod paths;
mod run;

pub use accounts::{AccountRecord, AccountTable};
pub use error::RemovalError;
pub use event::{EventSink, RemovalEvent, RemovalSummary};
pub use paths::{load_accounts, load_posts, remove_from_paths};
pub use run::PostRemover;
