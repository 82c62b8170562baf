//! Server-side HTML rendering.
//!
//! Pages are pure functions of the current session state, so transitions stay
//! testable without a browser. Every piece of user or model text goes through
//! `escape_html`.

pub mod pages;

pub use pages::{render_interview_page, render_start_page, StartForm};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 860px; margin: 2rem auto; padding: 0 1rem; }
.big-font { font-size: 50px; color: #1E90FF; text-align: center; }
.medium-font { font-size: 30px; color: #4682B4; margin-bottom: 0.5rem; }
.small-font { font-size: 14px; color: #4169E1; white-space: pre-wrap; }
textarea { width: 100%; color: #4682B4; }
button { color: #4682B4; border-radius: 20px; border: 2px solid #4682B4; background-color: white;
         padding: 0.4rem 1.2rem; transition: all 0.3s ease; cursor: pointer; }
button:hover { background-color: #4682B4; color: white; }
button:disabled { opacity: 0.5; cursor: wait; }
.error { color: #B22222; border: 1px solid #B22222; padding: 0.5rem 1rem; border-radius: 6px; }
.busy { display: none; color: #4682B4; font-style: italic; }
form.submitting .busy { display: inline; }
.inline { display: inline; }
"#;

// Shows the form's busy message and disables its buttons while the model call runs.
const BUSY_SCRIPT: &str = r#"
document.querySelectorAll("form[data-busy]").forEach(function (form) {
  form.addEventListener("submit", function () {
    form.classList.add("submitting");
    form.querySelectorAll("button").forEach(function (b) { b.disabled = true; });
  });
});
"#;

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn error_banner(error: Option<&str>) -> String {
    error
        .map(|msg| format!(r#"<p class="error" role="alert">{}</p>"#, escape_html(msg)))
        .unwrap_or_default()
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
<p class="big-font">AI Job Interview Coach</p>
{body}
<script>{BUSY_SCRIPT}</script>
</body>
</html>
"#,
        title = escape_html(title),
    )
}
