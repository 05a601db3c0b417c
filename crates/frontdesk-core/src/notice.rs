//! Notices: the one-line outcome shown to the user after an action.
//!
//! Every flow returns a `Result`; the caller turns it into exactly one
//! [`Notice`]. Failure text is always generic. The underlying error goes to
//! the log, never to the page.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NoticeLevel {
  Success,
  Info,
  Failure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
  pub level: NoticeLevel,
  pub text:  String,
}

impl Notice {
  pub fn success(text: impl Into<String>) -> Self {
    Self { level: NoticeLevel::Success, text: text.into() }
  }

  pub fn info(text: impl Into<String>) -> Self {
    Self { level: NoticeLevel::Info, text: text.into() }
  }

  pub fn failure(text: impl Into<String>) -> Self {
    Self { level: NoticeLevel::Failure, text: text.into() }
  }

  /// Build the notice for a flow result. Validation errors are shown as-is
  /// since they describe the user's input; every other failure is logged and
  /// replaced by `failure_text`.
  pub fn from_result<T>(
    result: &Result<T, Error>,
    success: impl FnOnce(&T) -> String,
    failure_text: &str,
  ) -> Self {
    match result {
      Ok(value) => Self::success(success(value)),
      Err(e) if e.is_validation() => Self::failure(e.to_string()),
      Err(e) => {
        tracing::error!(error = %e, "{failure_text}");
        Self::failure(failure_text)
      }
    }
  }

  pub fn is_failure(&self) -> bool { self.level == NoticeLevel::Failure }
}

impl fmt::Display for Notice {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.level, self.text)
  }
}
