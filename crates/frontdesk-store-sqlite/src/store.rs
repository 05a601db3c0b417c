//! [`SqliteStore`], the SQLite implementation of [`RecordStore`].

use std::path::Path;

use chrono::Utc;
use uuid::Uuid;

use frontdesk_core::{
  record::{
    CheckinRow, Employee, EmployeeCheckin, NewCheckin, NewEmployee, NewVisitor,
    Visitor,
  },
  store::RecordStore,
};

use crate::{
  Result,
  encode::{
    RawCheckinRow, RawEmployee, RawVisitor, encode_date, encode_dt, encode_time,
    encode_uuid,
  },
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A record store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store for tests and demos.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn select_employees(
    &self,
    phone: Option<String>,
  ) -> Result<Vec<Employee>> {
    let raws: Vec<RawEmployee> = self
      .conn
      .call(move |conn| {
        let rows = if let Some(p) = phone {
          let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM employees WHERE phone = ?1 ORDER BY created_at",
            RawEmployee::COLUMNS
          ))?;
          stmt
            .query_map(rusqlite::params![p], RawEmployee::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?
        } else {
          let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM employees ORDER BY created_at",
            RawEmployee::COLUMNS
          ))?;
          stmt
            .query_map([], RawEmployee::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?
        };
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawEmployee::into_employee).collect()
  }
}

// ─── RecordStore impl ────────────────────────────────────────────────────────

impl RecordStore for SqliteStore {
  type Error = crate::Error;

  // ── Employees ─────────────────────────────────────────────────────────────

  async fn list_employees(&self) -> Result<Vec<Employee>> {
    self.select_employees(None).await
  }

  async fn find_employees_by_phone(&self, phone: &str) -> Result<Vec<Employee>> {
    self.select_employees(Some(phone.to_owned())).await
  }

  async fn insert_employee(&self, input: NewEmployee) -> Result<Employee> {
    let employee = Employee {
      id:         Uuid::new_v4(),
      name:       input.name,
      phone:      input.phone,
      email:      input.email,
      created_at: Utc::now(),
    };

    let id_str = encode_uuid(employee.id);
    let name   = employee.name.clone();
    let phone  = employee.phone.clone();
    let email  = employee.email.clone();
    let at_str = encode_dt(employee.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO employees (id, name, phone, email, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![id_str, name, phone, email, at_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(employee)
  }

  async fn delete_employee(&self, id: Uuid) -> Result<bool> {
    let id_str = encode_uuid(id);
    let removed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM employees WHERE id = ?1", rusqlite::params![id_str])?)
      })
      .await?;
    Ok(removed > 0)
  }

  // ── Visitors ──────────────────────────────────────────────────────────────

  async fn list_visitors(&self) -> Result<Vec<Visitor>> {
    let raws: Vec<RawVisitor> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {} FROM visitors ORDER BY checkin_date DESC, checkin_time DESC",
          RawVisitor::COLUMNS
        ))?;
        let rows = stmt
          .query_map([], RawVisitor::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawVisitor::into_visitor).collect()
  }

  async fn insert_visitor(&self, input: NewVisitor) -> Result<Visitor> {
    let visitor = Visitor {
      id:           Uuid::new_v4(),
      name:         input.name,
      phone:        input.phone,
      whom_to_meet: input.whom_to_meet,
      purpose:      input.purpose,
      checkin_date: input.checkin_date,
      checkin_time: input.checkin_time,
    };

    let id_str   = encode_uuid(visitor.id);
    let name     = visitor.name.clone();
    let phone    = visitor.phone.clone();
    let whom     = visitor.whom_to_meet.clone();
    let purpose  = visitor.purpose.clone();
    let date_str = encode_date(visitor.checkin_date);
    let time_str = encode_time(visitor.checkin_time);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO visitors (
             id, name, phone, whom_to_meet, purpose, checkin_date, checkin_time
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
          rusqlite::params![id_str, name, phone, whom, purpose, date_str, time_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(visitor)
  }

  // ── Check-ins ─────────────────────────────────────────────────────────────

  async fn list_checkins(&self) -> Result<Vec<CheckinRow>> {
    let raws: Vec<RawCheckinRow> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT
             c.id, c.employee_id, c.employee_name, c.checkin_date, c.checkin_time,
             e.name  AS joined_name,
             e.phone AS joined_phone
           FROM employee_checkins c
           LEFT JOIN employees e ON e.id = c.employee_id
           ORDER BY c.checkin_date DESC, c.checkin_time DESC",
        )?;
        let rows = stmt
          .query_map([], RawCheckinRow::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawCheckinRow::into_row).collect()
  }

  async fn insert_checkin(&self, input: NewCheckin) -> Result<EmployeeCheckin> {
    let checkin = EmployeeCheckin {
      id:            Uuid::new_v4(),
      employee_id:   input.employee_id,
      employee_name: input.employee_name,
      checkin_date:  input.checkin_date,
      checkin_time:  input.checkin_time,
    };

    let id_str       = encode_uuid(checkin.id);
    let employee_str = encode_uuid(checkin.employee_id);
    let name         = checkin.employee_name.clone();
    let date_str     = encode_date(checkin.checkin_date);
    let time_str     = encode_time(checkin.checkin_time);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO employee_checkins (
             id, employee_id, employee_name, checkin_date, checkin_time
           ) VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![id_str, employee_str, name, date_str, time_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(checkin)
  }
}
