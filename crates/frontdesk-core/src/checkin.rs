//! Check-in flow: a phone number either checks an employee in or is handed
//! on to visitor registration.

use chrono::NaiveDateTime;

use crate::{
  Error, Result,
  phone::{self, Phone},
  record::{Employee, EmployeeCheckin, NewCheckin, stamp},
  store::RecordStore,
};

/// What a check-in submission resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckinOutcome {
  /// The phone matched one employee and a check-in row was written.
  CheckedIn {
    employee: Employee,
    checkin:  EmployeeCheckin,
  },
  /// No employee matched (or the lookup failed). Nothing was written; the
  /// caller forwards `phone` to visitor registration.
  Visitor { phone: Phone },
}

impl CheckinOutcome {
  /// Path for the visitor hand-off, carrying the normalised phone.
  pub fn visitor_path(phone: &Phone) -> String {
    format!("/visitor?phone={}", phone.as_str())
  }
}

/// Run one check-in submission.
///
/// At most one read and one write. An invalid phone makes no store calls. A
/// phone shared by several employees is refused rather than attributed to
/// whichever row came back first.
pub async fn check_in<S>(
  store: &S,
  raw_phone: &str,
  now: NaiveDateTime,
) -> Result<CheckinOutcome>
where
  S: RecordStore,
{
  let phone = phone::normalize(raw_phone)?;

  let mut matches = match store.find_employees_by_phone(phone.as_str()).await {
    Ok(found) => found,
    Err(e) => {
      tracing::warn!(error = %e, %phone, "employee lookup failed, treating as visitor");
      return Ok(CheckinOutcome::Visitor { phone });
    }
  };

  let employee = match matches.len() {
    0 => {
      tracing::info!(%phone, "no employee for phone, forwarding to visitor registration");
      return Ok(CheckinOutcome::Visitor { phone });
    }
    1 => matches.remove(0),
    count => {
      tracing::warn!(%phone, count, "phone matches several employees");
      return Err(Error::AmbiguousPhone { phone: phone.into_inner(), count });
    }
  };

  let (checkin_date, checkin_time) = stamp(now);
  let checkin = store
    .insert_checkin(NewCheckin {
      employee_id: employee.id,
      employee_name: Some(employee.name.clone()),
      checkin_date,
      checkin_time,
    })
    .await
    .map_err(Error::store)?;

  tracing::info!(employee_id = %employee.id, checkin_id = %checkin.id, "employee checked in");
  Ok(CheckinOutcome::CheckedIn { employee, checkin })
}
