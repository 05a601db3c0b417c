//! Async HTTP client for the PostgREST record tables.

use std::time::Duration;

use frontdesk_core::{
  record::{
    CheckinRow, Employee, EmployeeCheckin, NewCheckin, NewEmployee, NewVisitor,
    Visitor,
  },
  store::RecordStore,
};
use reqwest::{Client, Method, RequestBuilder};
use serde::{Serialize, de::DeserializeOwned};
use uuid::Uuid;

use crate::{Error, Result};

const EMPLOYEES: &str = "employees";
const VISITORS: &str = "visitors";
const CHECKINS: &str = "employee_checkins";

/// Check-in columns plus the `employees` foreign-key expansion.
const CHECKIN_SELECT: &str =
  "id,employee_id,employee_name,checkin_date,checkin_time,employees(name,phone)";
const CHECKIN_ORDER: &str = "checkin_date.desc,checkin_time.desc";

/// Connection settings for the hosted data service.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
  /// Project URL, e.g. `https://abc.supabase.co`. `/rest/v1` is appended.
  pub base_url: String,
  /// Public API key; sent as both `apikey` and bearer token.
  pub api_key:  String,
  pub timeout:  Duration,
}

/// A [`RecordStore`] that talks to PostgREST over HTTPS.
///
/// Cheap to clone: the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct RemoteStore {
  client: Client,
  config: RemoteConfig,
}

impl RemoteStore {
  pub fn new(config: RemoteConfig) -> Result<Self> {
    let client = Client::builder().timeout(config.timeout).build()?;
    Ok(Self { client, config })
  }

  fn url(&self, table: &str) -> String {
    format!(
      "{}/rest/v1/{}",
      self.config.base_url.trim_end_matches('/'),
      table
    )
  }

  fn request(&self, method: Method, table: &str) -> RequestBuilder {
    self
      .client
      .request(method, self.url(table))
      .header("apikey", &self.config.api_key)
      .bearer_auth(&self.config.api_key)
  }

  async fn send<T: DeserializeOwned>(&self, req: RequestBuilder, what: &str) -> Result<T> {
    let resp = req.send().await.inspect_err(|e| {
      tracing::warn!(error = %e, "{what}: request failed");
    })?;

    let status = resp.status();
    if !status.is_success() {
      let body = resp.text().await.unwrap_or_default();
      let err = Error::from_response(status, &body);
      tracing::warn!(error = %err, "{what}: service rejected request");
      return Err(err);
    }
    Ok(resp.json().await?)
  }

  async fn select<T: DeserializeOwned>(
    &self,
    table: &'static str,
    query: &[(&str, &str)],
  ) -> Result<Vec<T>> {
    let req = self.request(Method::GET, table).query(query);
    self.send(req, &format!("GET /{table}")).await
  }

  async fn insert_one<I: Serialize, T: DeserializeOwned>(
    &self,
    table: &'static str,
    input: &I,
  ) -> Result<T> {
    let req = self
      .request(Method::POST, table)
      .header("Prefer", "return=representation")
      .json(&[input]);
    let rows: Vec<T> = self.send(req, &format!("POST /{table}")).await?;
    rows.into_iter().next().ok_or(Error::EmptyRepresentation(table))
  }
}

// ─── RecordStore impl ────────────────────────────────────────────────────────

impl RecordStore for RemoteStore {
  type Error = Error;

  async fn list_employees(&self) -> Result<Vec<Employee>> {
    self.select(EMPLOYEES, &[("select", "*")]).await
  }

  async fn find_employees_by_phone(&self, phone: &str) -> Result<Vec<Employee>> {
    let filter = format!("eq.{phone}");
    self
      .select(EMPLOYEES, &[("select", "*"), ("phone", filter.as_str())])
      .await
  }

  async fn insert_employee(&self, input: NewEmployee) -> Result<Employee> {
    self.insert_one(EMPLOYEES, &input).await
  }

  async fn delete_employee(&self, id: Uuid) -> Result<bool> {
    let req = self
      .request(Method::DELETE, EMPLOYEES)
      .header("Prefer", "return=representation")
      .query(&[("id", format!("eq.{id}"))]);
    let removed: Vec<serde_json::Value> = self.send(req, "DELETE /employees").await?;
    Ok(!removed.is_empty())
  }

  async fn list_visitors(&self) -> Result<Vec<Visitor>> {
    self.select(VISITORS, &[("select", "*")]).await
  }

  async fn insert_visitor(&self, input: NewVisitor) -> Result<Visitor> {
    self.insert_one(VISITORS, &input).await
  }

  async fn list_checkins(&self) -> Result<Vec<CheckinRow>> {
    self
      .select(CHECKINS, &[("select", CHECKIN_SELECT), ("order", CHECKIN_ORDER)])
      .await
  }

  async fn insert_checkin(&self, input: NewCheckin) -> Result<EmployeeCheckin> {
    self.insert_one(CHECKINS, &input).await
  }
}
