//! `/admin/dashboard`: tabbed record listing and employee management.

use std::fmt::Write as _;

use axum::{
  Form,
  extract::{Path, Query, State},
  http::StatusCode,
  response::{Html, Redirect},
};
use frontdesk_core::{
  dashboard::{Dashboard, DashboardTab, EmployeeForm, Panel, filter_employees},
  notice::Notice,
  phone,
  record::{CheckinRow, Employee, Visitor},
  store::RecordStore,
};
use serde::Deserialize;
use strum::IntoEnumIterator;
use uuid::Uuid;

use crate::{AppState, html};

#[derive(Debug, Default, Deserialize)]
pub struct DashboardParams {
  /// Unknown or missing values select the default tab.
  #[serde(default)]
  pub tab: String,
  #[serde(default)]
  pub q:   String,
}

pub async fn redirect() -> Redirect { Redirect::to("/admin/dashboard") }

pub async fn show<S>(
  State(state): State<AppState<S>>,
  Query(params): Query<DashboardParams>,
) -> Html<String>
where
  S: RecordStore + Clone + 'static,
{
  let tab = params.tab.parse().unwrap_or_default();
  let dashboard = Dashboard::load(state.store.as_ref()).await;
  render(&dashboard, tab, &params.q, None, &EmployeeForm::default())
}

/// 400 when the form is invalid, 502 when the store refused the insert.
pub async fn add_employee<S>(
  State(state): State<AppState<S>>,
  Form(form): Form<EmployeeForm>,
) -> (StatusCode, Html<String>)
where
  S: RecordStore + Clone + 'static,
{
  let store = state.store.as_ref();
  let mut dashboard = Dashboard::load(store).await;
  let notice = dashboard.add_employee(store, &form).await;
  let status = if !notice.is_failure() {
    StatusCode::OK
  } else if form.validate().is_err() {
    StatusCode::BAD_REQUEST
  } else {
    StatusCode::BAD_GATEWAY
  };
  // Keep what was typed if the add did not go through.
  let retained = if notice.is_failure() { form } else { EmployeeForm::default() };
  let page = render(&dashboard, DashboardTab::Employees, "", Some(&notice), &retained);
  (status, page)
}

pub async fn delete_employee<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<Uuid>,
) -> Html<String>
where
  S: RecordStore + Clone + 'static,
{
  let store = state.store.as_ref();
  let mut dashboard = Dashboard::load(store).await;
  let notice = dashboard.delete_employee(store, id).await;
  render(&dashboard, DashboardTab::Employees, "", Some(&notice), &EmployeeForm::default())
}

// ─── Rendering ───────────────────────────────────────────────────────────────

fn render(
  dashboard: &Dashboard,
  tab: DashboardTab,
  query: &str,
  notice: Option<&Notice>,
  form: &EmployeeForm,
) -> Html<String> {
  let mut body = String::from("<h1>Admin dashboard</h1>\n<nav class=\"tabs\">");
  for t in DashboardTab::iter() {
    let _ = write!(
      body,
      r#"<a href="/admin/dashboard?tab={t}"{}>{} ({})</a>"#,
      if t == tab { r#" class="active""# } else { "" },
      t.title(),
      count(dashboard, t),
    );
  }
  body.push_str("</nav>\n");
  let _ = writeln!(body, "<h2>{}</h2>", tab.title());

  match tab {
    DashboardTab::Visitors => panel(&mut body, &dashboard.visitors, visitors_table),
    DashboardTab::Checkins => panel(&mut body, &dashboard.checkins, checkins_table),
    DashboardTab::Employees => {
      employee_forms(&mut body, query, form);
      panel(&mut body, &dashboard.employees, |rows| employees_table(rows, query));
    }
  }
  body.push_str(r#"<p><a href="/">Back to start</a></p>"#);

  html::page("Admin dashboard", notice, &body)
}

fn count(dashboard: &Dashboard, tab: DashboardTab) -> usize {
  match tab {
    DashboardTab::Visitors => dashboard.visitors.rows().len(),
    DashboardTab::Checkins => dashboard.checkins.rows().len(),
    DashboardTab::Employees => dashboard.employees.rows().len(),
  }
}

fn panel<T>(body: &mut String, panel: &Panel<T>, table: impl FnOnce(&[T]) -> String) {
  match panel {
    Panel::Ready(rows) => body.push_str(&table(rows)),
    Panel::Failed(message) => {
      let _ = write!(body, r#"<p class="panel-error">{}</p>"#, html::escape(message));
    }
  }
}

/// Phone shown in the `+91 98765 43210` style where it parses, raw otherwise.
fn show_phone(raw: &str) -> String {
  phone::normalize(raw).map(|p| p.display()).unwrap_or_else(|_| raw.to_owned())
}

fn table(headers: &[&str], rows: &[Vec<String>], empty: &str) -> String {
  if rows.is_empty() {
    return format!("<p>{}</p>", html::escape(empty));
  }
  let mut out = String::from("<table><thead><tr>");
  for h in headers {
    let _ = write!(out, "<th>{h}</th>");
  }
  out.push_str("</tr></thead><tbody>");
  for row in rows {
    out.push_str("<tr>");
    for cell in row {
      let _ = write!(out, "<td>{cell}</td>");
    }
    out.push_str("</tr>");
  }
  out.push_str("</tbody></table>");
  out
}

fn visitors_table(rows: &[Visitor]) -> String {
  let cells: Vec<Vec<String>> = rows
    .iter()
    .map(|v| {
      vec![
        html::escape(&v.name),
        html::escape(&show_phone(&v.phone)),
        html::escape(&v.whom_to_meet),
        html::escape(&v.purpose),
        v.checkin_date.format("%Y-%m-%d").to_string(),
        v.checkin_time.format("%H:%M").to_string(),
      ]
    })
    .collect();
  table(
    &["Name", "Phone", "Whom to meet", "Purpose", "Date", "Time"],
    &cells,
    "No visitors yet.",
  )
}

fn checkins_table(rows: &[CheckinRow]) -> String {
  let cells: Vec<Vec<String>> = rows
    .iter()
    .map(|r| {
      vec![
        html::escape(r.display_name()),
        html::escape(&show_phone(r.display_phone())),
        r.checkin.checkin_date.format("%Y-%m-%d").to_string(),
        r.checkin.checkin_time.format("%H:%M").to_string(),
      ]
    })
    .collect();
  table(&["Employee", "Phone", "Date", "Time"], &cells, "No check-ins yet.")
}

fn employees_table(rows: &[Employee], query: &str) -> String {
  let shown = filter_employees(rows, query);
  let cells: Vec<Vec<String>> = shown
    .iter()
    .map(|e| {
      vec![
        html::escape(&e.name),
        html::escape(&show_phone(&e.phone)),
        html::escape(&e.email),
        format!(
          r#"<form method="post" action="/admin/employees/{}/delete"><button type="submit">Delete</button></form>"#,
          e.id
        ),
      ]
    })
    .collect();
  let empty = if rows.is_empty() {
    "No employees yet.".to_owned()
  } else {
    format!("No employees match \"{query}\".")
  };
  table(&["Name", "Phone", "Email", ""], &cells, &empty)
}

fn employee_forms(body: &mut String, query: &str, form: &EmployeeForm) {
  let _ = write!(
    body,
    r#"<form method="get" action="/admin/dashboard">
<input type="hidden" name="tab" value="employees">
{}
<button type="submit">Search</button>
</form>
<h3>Add employee</h3>
<form method="post" action="/admin/employees">
{}
{}
{}
<button type="submit">Add</button>
</form>
"#,
    html::input("Search by name", "q", "search", query, false),
    html::input("Name", "name", "text", &form.name, true),
    html::input("Phone number", "phone", "tel", &form.phone, true),
    html::input("Email", "email", "email", &form.email, true),
  );
}
