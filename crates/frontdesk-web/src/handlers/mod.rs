//! Route handlers, one module per page.

pub mod checkin;
pub mod dashboard;
pub mod home;
pub mod visitor;

use axum::response::{IntoResponse, Response};

use crate::Error;

pub async fn not_found() -> Response { Error::NotFound.into_response() }
