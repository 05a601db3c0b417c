//! Core types and flows for the Frontdesk check-in application.
//!
//! This crate is free of HTTP and database dependencies. Storage backends
//! implement [`store::RecordStore`]; the web layer calls the flows in
//! [`checkin`], [`visitor`] and [`dashboard`] and renders what they return.

pub mod checkin;
pub mod dashboard;
pub mod error;
pub mod notice;
pub mod phone;
pub mod record;
pub mod store;
pub mod visitor;

pub use error::{Error, Result};
