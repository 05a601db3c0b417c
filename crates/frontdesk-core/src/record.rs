//! Record types: the three row shapes the application reads and writes.
//!
//! Rows are owned by the store. The server only ever holds request-scoped
//! copies. Check-in and visitor rows are append-only; nothing here offers an
//! update path.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─── Employee ────────────────────────────────────────────────────────────────

/// A member of staff. `phone` is the business key used by check-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
  pub id:         Uuid,
  pub name:       String,
  pub phone:      String,
  pub email:      String,
  pub created_at: DateTime<Utc>,
}

/// Input to [`crate::store::RecordStore::insert_employee`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
  pub name:  String,
  pub phone: String,
  pub email: String,
}

/// The subset of employee columns returned by the check-in expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSummary {
  pub name:  String,
  pub phone: String,
}

// ─── Check-ins ───────────────────────────────────────────────────────────────

/// One employee arrival. Immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeCheckin {
  pub id:            Uuid,
  pub employee_id:   Uuid,
  /// Snapshot of the employee's name at check-in time. Used for display when
  /// the employee row is gone or the expansion is unavailable.
  #[serde(default)]
  pub employee_name: Option<String>,
  pub checkin_date:  NaiveDate,
  pub checkin_time:  NaiveTime,
}

/// Input to [`crate::store::RecordStore::insert_checkin`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCheckin {
  pub employee_id:   Uuid,
  pub employee_name: Option<String>,
  pub checkin_date:  NaiveDate,
  pub checkin_time:  NaiveTime,
}

/// A check-in joined with its employee, as listed on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckinRow {
  #[serde(flatten)]
  pub checkin:  EmployeeCheckin,
  /// `None` when the employee no longer exists or the join was not made.
  #[serde(default, rename = "employees")]
  pub employee: Option<EmployeeSummary>,
}

impl CheckinRow {
  pub const UNKNOWN_NAME: &'static str = "Unknown";
  pub const UNKNOWN_PHONE: &'static str = "N/A";

  /// Joined name, then the stored snapshot, then `"Unknown"`.
  pub fn display_name(&self) -> &str {
    self
      .employee
      .as_ref()
      .map(|e| e.name.as_str())
      .filter(|n| !n.is_empty())
      .or(self.checkin.employee_name.as_deref().filter(|n| !n.is_empty()))
      .unwrap_or(Self::UNKNOWN_NAME)
  }

  pub fn display_phone(&self) -> &str {
    self
      .employee
      .as_ref()
      .map(|e| e.phone.as_str())
      .filter(|p| !p.is_empty())
      .unwrap_or(Self::UNKNOWN_PHONE)
  }
}

// ─── Visitors ────────────────────────────────────────────────────────────────

/// A non-employee visit. `whom_to_meet` is free text with no link to
/// [`Employee`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visitor {
  pub id:           Uuid,
  pub name:         String,
  pub phone:        String,
  #[serde(default)]
  pub whom_to_meet: String,
  #[serde(default)]
  pub purpose:      String,
  pub checkin_date: NaiveDate,
  pub checkin_time: NaiveTime,
}

/// Input to [`crate::store::RecordStore::insert_visitor`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewVisitor {
  pub name:         String,
  pub phone:        String,
  pub whom_to_meet: String,
  pub purpose:      String,
  pub checkin_date: NaiveDate,
  pub checkin_time: NaiveTime,
}

// ─── Timestamps ──────────────────────────────────────────────────────────────

/// Split a wall-clock instant into the `(date, time)` pair stored on
/// check-in and visitor rows. Sub-second precision is dropped.
pub fn stamp(now: NaiveDateTime) -> (NaiveDate, NaiveTime) {
  let time = now.time();
  let time = time.with_nanosecond(0).unwrap_or(time);
  (now.date(), time)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn row(joined: Option<(&str, &str)>, snapshot: Option<&str>) -> CheckinRow {
    CheckinRow {
      checkin:  EmployeeCheckin {
        id:            Uuid::new_v4(),
        employee_id:   Uuid::new_v4(),
        employee_name: snapshot.map(str::to_owned),
        checkin_date:  NaiveDate::from_ymd_opt(2026, 10, 14).unwrap(),
        checkin_time:  NaiveTime::from_hms_opt(9, 15, 0).unwrap(),
      },
      employee: joined.map(|(name, phone)| EmployeeSummary {
        name:  name.into(),
        phone: phone.into(),
      }),
    }
  }

  #[test]
  fn display_prefers_joined_employee() {
    let r = row(Some(("Asha", "9876543210")), Some("Asha K"));
    assert_eq!(r.display_name(), "Asha");
    assert_eq!(r.display_phone(), "9876543210");
  }

  #[test]
  fn display_falls_back_to_snapshot() {
    let r = row(None, Some("Asha K"));
    assert_eq!(r.display_name(), "Asha K");
    assert_eq!(r.display_phone(), "N/A");
  }

  #[test]
  fn display_unknown_when_nothing_is_known() {
    let r = row(None, None);
    assert_eq!(r.display_name(), "Unknown");
  }

  #[test]
  fn checkin_row_decodes_embedded_employee() {
    let json = r#"{
      "id": "7f1f6f8e-3b0c-4d8e-9a51-0c9d2f6f4b11",
      "employee_id": "2c5e5c0e-8f6e-4a43-9d43-8d2b8f0b6a22",
      "employee_name": null,
      "checkin_date": "2026-10-14",
      "checkin_time": "09:15:00",
      "employees": { "name": "Asha", "phone": "9876543210" }
    }"#;
    let r: CheckinRow = serde_json::from_str(json).unwrap();
    assert_eq!(r.display_name(), "Asha");
    assert_eq!(r.checkin.checkin_time, NaiveTime::from_hms_opt(9, 15, 0).unwrap());
  }

  #[test]
  fn stamp_truncates_to_seconds() {
    let now = NaiveDate::from_ymd_opt(2026, 10, 14)
      .unwrap()
      .and_hms_milli_opt(9, 15, 7, 640)
      .unwrap();
    let (date, time) = stamp(now);
    assert_eq!(date.to_string(), "2026-10-14");
    assert_eq!(time.to_string(), "09:15:07");
  }
}
