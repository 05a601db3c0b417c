//! Remote Data Client: a [`RecordStore`] over a hosted PostgREST endpoint.
//!
//! Tables live under `{base_url}/rest/v1/{table}`. Filters, ordering and the
//! employee expansion are expressed as PostgREST query parameters. Every call
//! is a single request; nothing is retried.
//!
//! [`RecordStore`]: frontdesk_core::store::RecordStore

mod client;

pub mod error;

pub use client::{RemoteConfig, RemoteStore};
pub use error::{Error, Result};
