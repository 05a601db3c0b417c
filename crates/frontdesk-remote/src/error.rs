//! Error type for `frontdesk-remote`.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("http error: {0}")]
  Http(#[from] reqwest::Error),

  /// The service answered with a non-success status.
  #[error("service error ({status}): {message}")]
  Service {
    status:  u16,
    code:    Option<String>,
    message: String,
  },

  #[error("insert into {0} returned no row")]
  EmptyRepresentation(&'static str),
}

/// The JSON error body PostgREST sends with 4xx/5xx responses.
#[derive(Debug, Deserialize)]
struct ServiceErrorBody {
  message: Option<String>,
  code:    Option<String>,
  details: Option<String>,
  hint:    Option<String>,
}

impl Error {
  /// Decode a failed response. Falls back to the raw body when it is not a
  /// PostgREST error object.
  pub(crate) fn from_response(status: StatusCode, body: &str) -> Self {
    let (code, message) = match serde_json::from_str::<ServiceErrorBody>(body) {
      Ok(parsed) => {
        let mut message = parsed
          .message
          .unwrap_or_else(|| status.canonical_reason().unwrap_or("error").to_owned());
        if let Some(details) = parsed.details.filter(|d| !d.is_empty()) {
          message = format!("{message} ({details})");
        }
        if let Some(hint) = parsed.hint.filter(|h| !h.is_empty()) {
          message = format!("{message}; hint: {hint}");
        }
        (parsed.code, message)
      }
      Err(_) if body.trim().is_empty() => {
        (None, status.canonical_reason().unwrap_or("error").to_owned())
      }
      Err(_) => (None, body.trim().to_owned()),
    };
    Self::Service { status: status.as_u16(), code, message }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
