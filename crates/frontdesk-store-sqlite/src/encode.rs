//! Encoding and decoding helpers between the record types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are RFC 3339 strings, dates `YYYY-MM-DD`, times `HH:MM:SS`.
//! UUIDs are hyphenated lowercase strings.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use frontdesk_core::record::{
  CheckinRow, Employee, EmployeeCheckin, EmployeeSummary, Visitor,
};
use uuid::Uuid;

use crate::{Error, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── Dates and times ──────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

pub fn encode_date(d: NaiveDate) -> String { d.format(DATE_FORMAT).to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, DATE_FORMAT)
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

pub fn encode_time(t: NaiveTime) -> String { t.format(TIME_FORMAT).to_string() }

pub fn decode_time(s: &str) -> Result<NaiveTime> {
  NaiveTime::parse_from_str(s, TIME_FORMAT)
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Raw rows ─────────────────────────────────────────────────────────────────

/// Column values read out of `employees` before decoding.
pub struct RawEmployee {
  pub id:         String,
  pub name:       String,
  pub phone:      String,
  pub email:      String,
  pub created_at: String,
}

impl RawEmployee {
  pub const COLUMNS: &'static str = "id, name, phone, email, created_at";

  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:         row.get(0)?,
      name:       row.get(1)?,
      phone:      row.get(2)?,
      email:      row.get(3)?,
      created_at: row.get(4)?,
    })
  }

  pub fn into_employee(self) -> Result<Employee> {
    Ok(Employee {
      id:         decode_uuid(&self.id)?,
      name:       self.name,
      phone:      self.phone,
      email:      self.email,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}

pub struct RawVisitor {
  pub id:           String,
  pub name:         String,
  pub phone:        String,
  pub whom_to_meet: String,
  pub purpose:      String,
  pub checkin_date: String,
  pub checkin_time: String,
}

impl RawVisitor {
  pub const COLUMNS: &'static str =
    "id, name, phone, whom_to_meet, purpose, checkin_date, checkin_time";

  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:           row.get(0)?,
      name:         row.get(1)?,
      phone:        row.get(2)?,
      whom_to_meet: row.get(3)?,
      purpose:      row.get(4)?,
      checkin_date: row.get(5)?,
      checkin_time: row.get(6)?,
    })
  }

  pub fn into_visitor(self) -> Result<Visitor> {
    Ok(Visitor {
      id:           decode_uuid(&self.id)?,
      name:         self.name,
      phone:        self.phone,
      whom_to_meet: self.whom_to_meet,
      purpose:      self.purpose,
      checkin_date: decode_date(&self.checkin_date)?,
      checkin_time: decode_time(&self.checkin_time)?,
    })
  }
}

/// A check-in row with the `LEFT JOIN`ed employee columns.
pub struct RawCheckinRow {
  pub id:            String,
  pub employee_id:   String,
  pub employee_name: Option<String>,
  pub checkin_date:  String,
  pub checkin_time:  String,
  pub joined_name:   Option<String>,
  pub joined_phone:  Option<String>,
}

impl RawCheckinRow {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:            row.get(0)?,
      employee_id:   row.get(1)?,
      employee_name: row.get(2)?,
      checkin_date:  row.get(3)?,
      checkin_time:  row.get(4)?,
      joined_name:   row.get(5)?,
      joined_phone:  row.get(6)?,
    })
  }

  pub fn into_row(self) -> Result<CheckinRow> {
    let employee = match (self.joined_name, self.joined_phone) {
      (Some(name), Some(phone)) => Some(EmployeeSummary { name, phone }),
      _ => None,
    };
    Ok(CheckinRow {
      checkin: EmployeeCheckin {
        id:            decode_uuid(&self.id)?,
        employee_id:   decode_uuid(&self.employee_id)?,
        employee_name: self.employee_name,
        checkin_date:  decode_date(&self.checkin_date)?,
        checkin_time:  decode_time(&self.checkin_time)?,
      },
      employee,
    })
  }
}
