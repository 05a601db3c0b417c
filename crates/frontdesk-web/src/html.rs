//! Hand-written HTML: escaping, the shared page layout and form controls.

use std::fmt::Write as _;

use axum::response::Html;
use frontdesk_core::notice::Notice;

/// Escape text for element content and double-quoted attribute values.
pub fn escape(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for c in s.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      c => out.push(c),
    }
  }
  out
}

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;max-width:56rem;margin:2rem auto;padding:0 1rem}\
.notice{padding:.75rem 1rem;border-radius:.5rem;margin-bottom:1rem}\
.notice.success{background:#e6f6ea}.notice.info{background:#e8f0fe}\
.notice.failure{background:#fde8e8}\
nav.tabs a{margin-right:1rem}nav.tabs a.active{font-weight:bold}\
table{border-collapse:collapse;width:100%}th,td{text-align:left;padding:.4rem}\
label{display:block;margin:.5rem 0}";

/// Full page with an optional notice above `body`. `body` is trusted markup.
pub fn page(title: &str, notice: Option<&Notice>, body: &str) -> Html<String> {
  render(title, "", notice, body)
}

/// Like [`page`], but the browser moves to `target` after `seconds`.
pub fn page_with_refresh(
  title: &str,
  notice: Option<&Notice>,
  body: &str,
  target: &str,
  seconds: u32,
) -> Html<String> {
  let head = format!(
    r#"<meta http-equiv="refresh" content="{seconds};url={}">"#,
    escape(target)
  );
  render(title, &head, notice, body)
}

fn render(title: &str, head: &str, notice: Option<&Notice>, body: &str) -> Html<String> {
  let mut out = String::new();
  let _ = write!(
    out,
    "<!doctype html>\n<html lang=\"en\"><head><meta charset=\"utf-8\">\
     <meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">\
     <title>{}</title>{head}<style>{STYLE}</style></head><body>",
    escape(title)
  );
  if let Some(n) = notice {
    let _ = write!(
      out,
      r#"<div class="notice {}" role="status">{}</div>"#,
      n.level.as_ref(),
      escape(&n.text)
    );
  }
  out.push_str(body);
  out.push_str("</body></html>");
  Html(out)
}

/// A labelled `<input>`.
pub fn input(label: &str, name: &str, kind: &str, value: &str, required: bool) -> String {
  format!(
    r#"<label for="{name}">{}</label><input id="{name}" name="{name}" type="{kind}" value="{}"{}>"#,
    escape(label),
    escape(value),
    if required { " required" } else { "" },
  )
}
