//! Admin dashboard: the three record sets, the employee search filter, and
//! the add/delete employee actions.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};
use uuid::Uuid;

use crate::{
  Error, Result,
  notice::Notice,
  phone::{self, strip_non_digits},
  record::{CheckinRow, Employee, NewEmployee, Visitor},
  store::RecordStore,
};

// ─── Tabs ────────────────────────────────────────────────────────────────────

/// The mutually exclusive dashboard panels.
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize,
  Display, EnumString, EnumIter, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DashboardTab {
  #[default]
  Visitors,
  Checkins,
  Employees,
}

impl DashboardTab {
  pub fn title(self) -> &'static str {
    match self {
      Self::Visitors => "Visitors",
      Self::Checkins => "Employee Check-ins",
      Self::Employees => "Employees",
    }
  }
}

// ─── Panels ──────────────────────────────────────────────────────────────────

/// One fetched record set. A failed fetch keeps its message so the other
/// panels still render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel<T> {
  Ready(Vec<T>),
  Failed(String),
}

impl<T> Panel<T> {
  fn from_fetch<E: std::error::Error>(what: &str, result: Result<Vec<T>, E>) -> Self {
    match result {
      Ok(rows) => Self::Ready(rows),
      Err(e) => {
        tracing::error!(error = %e, "failed to fetch {what}");
        Self::Failed(format!("Could not load {what}."))
      }
    }
  }

  pub fn rows(&self) -> &[T] {
    match self {
      Self::Ready(rows) => rows,
      Self::Failed(_) => &[],
    }
  }
}

// ─── Employee form ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeForm {
  #[serde(default)]
  pub name:  String,
  #[serde(default)]
  pub phone: String,
  #[serde(default)]
  pub email: String,
}

impl EmployeeForm {
  /// All three fields are required. The phone goes through
  /// [`phone::normalize`], the same key check-in looks up.
  pub fn validate(&self) -> Result<NewEmployee> {
    let name = self.name.trim();
    let email = self.email.trim();
    let digits = strip_non_digits(&self.phone);
    for (field, value) in [("name", name), ("phone", digits.as_str()), ("email", email)] {
      if value.is_empty() {
        return Err(Error::Missing(field));
      }
    }
    let phone = phone::normalize(&self.phone)?;
    Ok(NewEmployee {
      name:  name.to_owned(),
      phone: phone.into_inner(),
      email: email.to_owned(),
    })
  }
}

// ─── Filter ──────────────────────────────────────────────────────────────────

/// Employees whose name contains `query`, ignoring case. Order is kept; an
/// empty query matches everything. Whitespace in `query` is significant.
pub fn filter_employees<'a>(employees: &'a [Employee], query: &str) -> Vec<&'a Employee> {
  let needle = query.to_lowercase();
  employees
    .iter()
    .filter(|e| e.name.to_lowercase().contains(&needle))
    .collect()
}

// ─── Dashboard ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
  pub employees: Panel<Employee>,
  pub checkins:  Panel<CheckinRow>,
  pub visitors:  Panel<Visitor>,
}

impl Dashboard {
  /// Fetch all three record sets concurrently.
  pub async fn load<S: RecordStore>(store: &S) -> Self {
    let (employees, checkins, visitors) = tokio::join!(
      store.list_employees(),
      store.list_checkins(),
      store.list_visitors(),
    );
    Self {
      employees: Panel::from_fetch("employees", employees),
      checkins:  Panel::from_fetch("check-ins", checkins),
      visitors:  Panel::from_fetch("visitors", visitors),
    }
  }

  /// Delete an employee. The row leaves the local list only if the store
  /// confirms the delete.
  pub async fn delete_employee<S: RecordStore>(&mut self, store: &S, id: Uuid) -> Notice {
    match store.delete_employee(id).await {
      Ok(true) => {
        if let Panel::Ready(rows) = &mut self.employees {
          rows.retain(|e| e.id != id);
        }
        tracing::info!(employee_id = %id, "employee deleted");
        Notice::success("Employee deleted")
      }
      Ok(false) => {
        tracing::warn!(employee_id = %id, "delete matched no employee");
        Notice::failure("Employee not found")
      }
      Err(e) => {
        tracing::error!(error = %e, employee_id = %id, "employee delete failed");
        Notice::failure("Could not delete employee. Please try again.")
      }
    }
  }

  /// Validate and insert an employee, appending it to the local list.
  pub async fn add_employee<S: RecordStore>(&mut self, store: &S, form: &EmployeeForm) -> Notice {
    let result = match form.validate() {
      Ok(input) => store.insert_employee(input).await.map_err(Error::store),
      Err(e) => Err(e),
    };
    let notice = Notice::from_result(
      &result,
      |e| format!("Employee {} added", e.name),
      "Could not add employee. Please try again.",
    );
    if let Ok(employee) = result {
      tracing::info!(employee_id = %employee.id, "employee added");
      if let Panel::Ready(rows) = &mut self.employees {
        rows.push(employee);
      }
    }
    notice
  }
}
