//! Error types and axum `IntoResponse` implementation.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
};
use frontdesk_core::notice::Notice;
use thiserror::Error;

use crate::html;

#[derive(Debug, Error)]
pub enum Error {
  #[error("not found")]
  NotFound,
  #[error(transparent)]
  Flow(#[from] frontdesk_core::Error),
}

impl Error {
  pub fn status(&self) -> StatusCode {
    use frontdesk_core::Error as Flow;
    match self {
      Error::NotFound => StatusCode::NOT_FOUND,
      Error::Flow(e) if e.is_validation() => StatusCode::BAD_REQUEST,
      Error::Flow(Flow::AmbiguousPhone { .. }) => StatusCode::CONFLICT,
      Error::Flow(_) => StatusCode::BAD_GATEWAY,
    }
  }

  /// The line shown to the user. Store failures are logged and replaced by
  /// `failure_text`.
  pub fn notice(&self, failure_text: &str) -> Notice {
    use frontdesk_core::Error as Flow;
    match self {
      Error::NotFound => Notice::failure("Page not found"),
      Error::Flow(e @ Flow::Store(_)) => {
        tracing::error!(error = %e, "{failure_text}");
        Notice::failure(failure_text)
      }
      Error::Flow(e) => Notice::failure(e.to_string()),
    }
  }
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    let notice = self.notice("Something went wrong. Please try again.");
    let body = html::page(
      "Frontdesk",
      Some(&notice),
      r#"<p><a href="/">Back to start</a></p>"#,
    );
    (self.status(), body).into_response()
  }
}
