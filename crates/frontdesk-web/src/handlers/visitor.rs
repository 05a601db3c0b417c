//! `/visitor`: registration for anyone who is not an employee.

use axum::{
  Form,
  extract::{Query, State},
  response::{Html, IntoResponse, Response},
};
use frontdesk_core::{
  notice::Notice,
  store::RecordStore,
  visitor::{VisitorForm, register_visitor},
};
use serde::Deserialize;

use crate::{AppState, Error, html};

/// Seconds the success page stays up before returning to the start.
const RETURN_AFTER_SECS: u32 = 2;

/// `?phone=` carried over from a check-in that matched no employee.
#[derive(Debug, Default, Deserialize)]
pub struct Prefill {
  #[serde(default)]
  pub phone: String,
}

pub async fn form(Query(prefill): Query<Prefill>) -> Html<String> {
  let form = VisitorForm { phone: prefill.phone, ..VisitorForm::default() };
  render(None, &form)
}

pub async fn submit<S>(
  State(state): State<AppState<S>>,
  Form(form): Form<VisitorForm>,
) -> Response
where
  S: RecordStore + Clone + 'static,
{
  match register_visitor(state.store.as_ref(), &form, state.now()).await {
    Ok(visitor) => {
      let body = format!(
        "<h1>Thank you</h1><p>Welcome, {}. Returning to the start page…</p>",
        html::escape(&visitor.name)
      );
      html::page_with_refresh(
        "Check-in successful",
        Some(&Notice::success("Check-in successful!")),
        &body,
        "/",
        RETURN_AFTER_SECS,
      )
      .into_response()
    }
    Err(e) => {
      let e = Error::from(e);
      let notice = e.notice("Could not register visitor. Please try again.");
      (e.status(), render(Some(&notice), &form)).into_response()
    }
  }
}

fn render(notice: Option<&Notice>, form: &VisitorForm) -> Html<String> {
  let body = format!(
    r#"<h1>Visitor registration</h1>
<form method="post" action="/visitor/register">
{}
{}
{}
{}
<button type="submit">Register</button>
</form>
<p><a href="/">Back</a></p>"#,
    html::input("Name", "name", "text", &form.name, true),
    html::input("Phone number", "phone", "tel", &form.phone, true),
    html::input("Whom to meet", "whom_to_meet", "text", &form.whom_to_meet, false),
    html::input("Purpose", "purpose", "text", &form.purpose, false),
  );
  html::page("Visitor registration", notice, &body)
}
