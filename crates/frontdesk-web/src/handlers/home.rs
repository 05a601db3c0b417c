//! Landing page.

use axum::response::Html;

use crate::html;

pub async fn index() -> Html<String> {
  html::page(
    "Frontdesk",
    None,
    r#"<h1>Welcome</h1>
<p><a href="/checkin">Check in</a></p>
<p><a href="/admin/dashboard">Admin dashboard</a></p>"#,
  )
}
