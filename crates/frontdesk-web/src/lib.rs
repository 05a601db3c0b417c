//! HTTP layer for Frontdesk.
//!
//! Exposes an axum [`Router`] serving the check-in kiosk, visitor
//! registration and the admin dashboard, backed by any [`RecordStore`].

pub mod error;
pub mod handlers;
pub mod html;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, post},
};
use chrono::{Local, NaiveDateTime};
use frontdesk_core::store::RecordStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use handlers::{checkin, dashboard, home, visitor};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `frontdesk.toml` and
/// `FRONTDESK__*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:  String,
  #[serde(default = "default_port")]
  pub port:  u16,
  pub store: StoreConfig,
}

/// Which record backend to open.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StoreConfig {
  /// Hosted PostgREST service.
  Remote {
    url:          String,
    api_key:      String,
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
  },
  /// Local SQLite file.
  Sqlite { path: PathBuf },
}

fn default_host() -> String { "127.0.0.1".into() }

fn default_port() -> u16 { 3000 }

fn default_timeout_secs() -> u64 { 15 }

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: RecordStore> {
  pub store: Arc<S>,
  /// Source of check-in timestamps.
  pub clock: fn() -> NaiveDateTime,
}

impl<S: RecordStore> AppState<S> {
  /// State using the server's local wall clock.
  pub fn new(store: S) -> Self {
    Self { store: Arc::new(store), clock: local_now }
  }

  pub fn now(&self) -> NaiveDateTime { (self.clock)() }
}

fn local_now() -> NaiveDateTime { Local::now().naive_local() }

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the axum [`Router`] for the whole application.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: RecordStore + Clone + 'static,
{
  Router::new()
    .route("/",                             get(home::index))
    .route("/checkin",                      get(checkin::form).post(checkin::submit::<S>))
    .route("/visitor",                      get(visitor::form).post(visitor::submit::<S>))
    .route("/visitor/register",             get(visitor::form).post(visitor::submit::<S>))
    .route("/admin",                        get(dashboard::redirect))
    .route("/admin/dashboard",              get(dashboard::show::<S>))
    .route("/admin/employees",              post(dashboard::add_employee::<S>))
    .route("/admin/employees/{id}/delete",  post(dashboard::delete_employee::<S>))
    .fallback(handlers::not_found)
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}
