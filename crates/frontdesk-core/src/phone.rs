//! Phone number normalisation.
//!
//! Phones are compared as bare digit strings. Indian mobile numbers (ten
//! digits, leading 6–9) are recognised through the common `+91` and trunk
//! `0` prefixes so that `+91 98765 43210`, `098765 43210` and `9876543210`
//! all resolve to the same key.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_DIGITS: usize = 10;
pub const MAX_DIGITS: usize = 15;

const INDIA_CODE: &str = "91";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneError {
  #[error("phone number is required")]
  Empty,

  #[error("phone number must have 10 to 15 digits, got {0}")]
  Length(usize),
}

/// A normalised, digits-only phone number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
  pub fn as_str(&self) -> &str { &self.0 }

  pub fn into_inner(self) -> String { self.0 }

  /// Ten digits starting with 6, 7, 8 or 9.
  pub fn is_indian_mobile(&self) -> bool { is_indian_mobile(&self.0) }

  /// Human-facing form: `+91 98765 43210` for Indian mobiles, bare digits
  /// otherwise.
  pub fn display(&self) -> String {
    if self.is_indian_mobile() {
      format!("+{INDIA_CODE} {} {}", &self.0[..5], &self.0[5..])
    } else {
      self.0.clone()
    }
  }
}

impl fmt::Display for Phone {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

impl AsRef<str> for Phone {
  fn as_ref(&self) -> &str { &self.0 }
}

/// Remove everything that is not an ASCII digit.
pub fn strip_non_digits(raw: &str) -> String {
  raw.chars().filter(char::is_ascii_digit).collect()
}

/// Normalise and validate a phone number typed by a user.
pub fn normalize(raw: &str) -> Result<Phone, PhoneError> {
  let digits = strip_non_digits(raw);
  if digits.is_empty() {
    return Err(PhoneError::Empty);
  }

  let digits = match digits.len() {
    12 if digits.starts_with(INDIA_CODE) && is_indian_mobile(&digits[2..]) => {
      digits[2..].to_owned()
    }
    11 if digits.starts_with('0') && is_indian_mobile(&digits[1..]) => {
      digits[1..].to_owned()
    }
    _ => digits,
  };

  if !(MIN_DIGITS..=MAX_DIGITS).contains(&digits.len()) {
    return Err(PhoneError::Length(digits.len()));
  }
  Ok(Phone(digits))
}

fn is_indian_mobile(digits: &str) -> bool {
  digits.len() == 10 && matches!(digits.as_bytes()[0], b'6'..=b'9')
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn plain_ten_digits_pass_through() {
    assert_eq!(normalize("9876543210").unwrap().as_str(), "9876543210");
    assert_eq!(normalize("1234500000").unwrap().as_str(), "1234500000");
  }

  #[test]
  fn punctuation_and_spaces_are_dropped() {
    assert_eq!(normalize(" (987) 654-3210 ").unwrap().as_str(), "9876543210");
  }

  #[test]
  fn indian_prefixes_are_stripped() {
    assert_eq!(normalize("+91 98765-43210").unwrap().as_str(), "9876543210");
    assert_eq!(normalize("09876543210").unwrap().as_str(), "9876543210");
  }

  #[test]
  fn country_code_kept_when_rest_is_not_a_mobile() {
    // 91 + a landline-looking number stays as entered.
    assert_eq!(normalize("911234567890").unwrap().as_str(), "911234567890");
  }

  #[test]
  fn empty_and_letters_only_are_rejected() {
    assert_eq!(normalize(""), Err(PhoneError::Empty));
    assert_eq!(normalize("call me"), Err(PhoneError::Empty));
  }

  #[test]
  fn length_bounds() {
    assert_eq!(normalize("987654321"), Err(PhoneError::Length(9)));
    assert_eq!(normalize("1234567890123456"), Err(PhoneError::Length(16)));
    assert!(normalize("123456789012345").is_ok());
  }

  #[test]
  fn display_formats_indian_mobiles_only() {
    assert_eq!(normalize("9876543210").unwrap().display(), "+91 98765 43210");
    assert_eq!(normalize("1234500000").unwrap().display(), "1234500000");
  }
}
