//! Error types for `frontdesk-core`.

use thiserror::Error;

use crate::phone::PhoneError;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid phone number: {0}")]
  InvalidPhone(#[from] PhoneError),

  #[error("missing required field: {0}")]
  Missing(&'static str),

  #[error("{count} employees share phone {phone}")]
  AmbiguousPhone { phone: String, count: usize },

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub fn store(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    Self::Store(Box::new(e))
  }

  /// Validation failures are rejected before any store call is made.
  pub fn is_validation(&self) -> bool {
    matches!(self, Self::InvalidPhone(_) | Self::Missing(_))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
