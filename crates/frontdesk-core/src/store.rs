//! The `RecordStore` trait, the single data-access seam.
//!
//! Implemented by `frontdesk-remote` (the hosted PostgREST service) and
//! `frontdesk-store-sqlite` (local SQLite). The flows in this crate and the
//! web layer depend on this abstraction only.

use std::future::Future;

use uuid::Uuid;

use crate::record::{
  CheckinRow, Employee, EmployeeCheckin, NewCheckin, NewEmployee, NewVisitor,
  Visitor,
};

/// Table-level select/insert/delete over the three record sets.
///
/// Every method is a single call against the backend. Implementations do not
/// retry. All futures are `Send` so the trait works behind `axum` on a
/// multi-threaded runtime.
pub trait RecordStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Employees ─────────────────────────────────────────────────────────

  fn list_employees(
    &self,
  ) -> impl Future<Output = Result<Vec<Employee>, Self::Error>> + Send + '_;

  /// All employees whose stored phone equals `phone` exactly. Phone is not
  /// unique in the store, so more than one row may come back.
  fn find_employees_by_phone<'a>(
    &'a self,
    phone: &'a str,
  ) -> impl Future<Output = Result<Vec<Employee>, Self::Error>> + Send + 'a;

  /// Persist a new employee. `id` and `created_at` are assigned by the store.
  fn insert_employee(
    &self,
    input: NewEmployee,
  ) -> impl Future<Output = Result<Employee, Self::Error>> + Send + '_;

  /// Delete the employee with `id`. Returns `true` if a row was removed.
  fn delete_employee(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Visitors ──────────────────────────────────────────────────────────

  fn list_visitors(
    &self,
  ) -> impl Future<Output = Result<Vec<Visitor>, Self::Error>> + Send + '_;

  fn insert_visitor(
    &self,
    input: NewVisitor,
  ) -> impl Future<Output = Result<Visitor, Self::Error>> + Send + '_;

  // ── Check-ins ─────────────────────────────────────────────────────────

  /// All check-ins, newest first (`checkin_date` desc, then `checkin_time`
  /// desc), each with its employee expansion when the employee still exists.
  fn list_checkins(
    &self,
  ) -> impl Future<Output = Result<Vec<CheckinRow>, Self::Error>> + Send + '_;

  fn insert_checkin(
    &self,
    input: NewCheckin,
  ) -> impl Future<Output = Result<EmployeeCheckin, Self::Error>> + Send + '_;
}
