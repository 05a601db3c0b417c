//! Visitor registration flow.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  phone::strip_non_digits,
  record::{NewVisitor, Visitor, stamp},
  store::RecordStore,
};

/// The registration form as submitted. Missing fields deserialise as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorForm {
  #[serde(default)]
  pub name:         String,
  #[serde(default)]
  pub phone:        String,
  #[serde(default)]
  pub whom_to_meet: String,
  #[serde(default)]
  pub purpose:      String,
}

impl VisitorForm {
  /// Presence checks only. Returns the insert payload stamped with `now`.
  pub fn validate(&self, now: NaiveDateTime) -> Result<NewVisitor> {
    let name = self.name.trim();
    if name.is_empty() {
      return Err(Error::Missing("name"));
    }
    let phone = strip_non_digits(&self.phone);
    if phone.is_empty() {
      return Err(Error::Missing("phone"));
    }

    let (checkin_date, checkin_time) = stamp(now);
    Ok(NewVisitor {
      name: name.to_owned(),
      phone,
      whom_to_meet: self.whom_to_meet.trim().to_owned(),
      purpose: self.purpose.trim().to_owned(),
      checkin_date,
      checkin_time,
    })
  }
}

/// Validate `form` and insert one visitor row. Validation failures make no
/// store calls; a failed insert is reported once and not retried.
pub async fn register_visitor<S>(
  store: &S,
  form: &VisitorForm,
  now: NaiveDateTime,
) -> Result<Visitor>
where
  S: RecordStore,
{
  let input = form.validate(now)?;
  let visitor = store.insert_visitor(input).await.map_err(Error::store)?;
  tracing::info!(visitor_id = %visitor.id, phone = %visitor.phone, "visitor registered");
  Ok(visitor)
}
