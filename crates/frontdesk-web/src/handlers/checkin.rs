//! `/checkin`: the phone-number kiosk form.

use axum::{
  Form,
  extract::State,
  response::{Html, IntoResponse, Redirect, Response},
};
use frontdesk_core::{
  checkin::{CheckinOutcome, check_in},
  notice::Notice,
  store::RecordStore,
};
use serde::Deserialize;

use crate::{AppState, Error, html};

#[derive(Debug, Default, Deserialize)]
pub struct CheckinForm {
  #[serde(default)]
  pub phone: String,
}

pub async fn form() -> Html<String> { render(None, "") }

pub async fn submit<S>(
  State(state): State<AppState<S>>,
  Form(form): Form<CheckinForm>,
) -> Response
where
  S: RecordStore + Clone + 'static,
{
  match check_in(state.store.as_ref(), &form.phone, state.now()).await {
    Ok(CheckinOutcome::CheckedIn { employee, checkin }) => {
      let notice = Notice::success(format!(
        "Welcome, {}! Checked in at {} on {}.",
        employee.name,
        checkin.checkin_time.format("%H:%M"),
        checkin.checkin_date.format("%d %b %Y"),
      ));
      render(Some(&notice), "").into_response()
    }
    Ok(CheckinOutcome::Visitor { phone }) => {
      Redirect::to(&CheckinOutcome::visitor_path(&phone)).into_response()
    }
    Err(e) => {
      let e = Error::from(e);
      let notice = e.notice("Check-in failed. Please try again.");
      (e.status(), render(Some(&notice), &form.phone)).into_response()
    }
  }
}

fn render(notice: Option<&Notice>, phone: &str) -> Html<String> {
  let body = format!(
    r#"<h1>Check in</h1>
<form method="post" action="/checkin">
{}
<button type="submit">Check in</button>
</form>
<p><a href="/">Back</a></p>"#,
    html::input("Phone number", "phone", "tel", phone, true),
  );
  html::page("Check in", notice, &body)
}
