//! HTML rendering of the summarizer form.

use lectern_core::{MAX_TOKENS, SliderBounds, SummaryOutcome, SummaryRequest, SummaryStyle, TEMPERATURE};
use pulldown_cmark::{Event, Options, Parser, html};
use pulldown_cmark_escape as escape;

const TITLE: &str = "Lecture Notes Summarizer (API Version)";
const SUBTITLE: &str = "This version calls a hosted model via Hugging Face.";

/// Everything the page shows: submitted inputs and the two outputs.
#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    /// Notes textarea contents
    pub notes: String,
    /// Selected style
    pub style: SummaryStyle,
    /// Max tokens slider position, as submitted
    pub max_tokens: String,
    /// Temperature slider position, as submitted
    pub temperature: String,
    /// Rendered summary, already HTML
    pub summary_html: String,
    /// Run-info line
    pub run_info: String,
}

impl Default for FormView {
    fn default() -> Self {
        Self {
            notes: String::new(),
            style: SummaryStyle::default(),
            max_tokens: MAX_TOKENS.default.to_string(),
            temperature: TEMPERATURE.default.to_string(),
            summary_html: String::new(),
            run_info: String::new(),
        }
    }
}

impl FormView {
    /// Echoes a submitted request back into the form with its outcome.
    pub fn from_submission(request: &SummaryRequest, outcome: &SummaryOutcome) -> Self {
        Self {
            notes: request.notes().clone(),
            style: *request.style(),
            max_tokens: request.max_tokens().to_string(),
            temperature: request.temperature().to_string(),
            summary_html: render_markdown(&outcome.display_text()),
            run_info: outcome.status_text(),
        }
    }
}

/// Renders Markdown to HTML, showing any embedded raw HTML as text.
///
/// # Examples
///
/// ```
/// use lectern_server::render_markdown;
///
/// let html = render_markdown("## Key terms\n- <b>osmosis</b>");
/// assert!(html.contains("<h2>Key terms</h2>"));
/// assert!(html.contains("&lt;b&gt;osmosis&lt;/b&gt;"));
/// ```
pub fn render_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH)
        .map(|event| match event {
            Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
            other => other,
        });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Renders the full page.
pub fn render_page(view: &FormView) -> String {
    let mut options = String::new();
    for style in SummaryStyle::all() {
        let label = escape_html(&style.to_string());
        let selected = if style == view.style { " selected" } else { "" };
        options.push_str(&format!(
            r#"<option value="{label}"{selected}>{label}</option>"#
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
body {{ font-family: sans-serif; max-width: 52rem; margin: 2rem auto; padding: 0 1rem; }}
label {{ display: block; margin-top: 1rem; font-weight: bold; }}
textarea, select, input[type=text] {{ width: 100%; box-sizing: border-box; }}
.row {{ display: flex; gap: 2rem; }}
.row > div {{ flex: 1; }}
#summary {{ border: 1px solid #ccc; padding: 0 1rem; margin-top: 1rem; min-height: 3rem; }}
</style>
</head>
<body>
<h1>{title}</h1>
<p>{subtitle}</p>
<form method="post" action="/">
<label for="notes">Paste your lecture notes</label>
<textarea id="notes" name="notes" rows="12" placeholder="Paste text here...">{notes}</textarea>
<label for="style">Summary style</label>
<select id="style" name="style">{options}</select>
<div class="row">
<div>{max_tokens}</div>
<div>{temperature}</div>
</div>
<p><button type="submit">Summarize</button></p>
</form>
<label>Summary</label>
<div id="summary">{summary}</div>
<label for="run-info">Run info</label>
<input type="text" id="run-info" value="{run_info}" readonly>
</body>
</html>
"#,
        title = TITLE,
        subtitle = SUBTITLE,
        notes = escape_html(&view.notes),
        options = options,
        max_tokens = slider("max_tokens", "Max tokens", &MAX_TOKENS, &view.max_tokens),
        temperature = slider("temperature", "Temperature", &TEMPERATURE, &view.temperature),
        summary = view.summary_html,
        run_info = escape_html(&view.run_info),
    )
}

fn slider(name: &str, label: &str, bounds: &SliderBounds, value: &str) -> String {
    let value = escape_html(value);
    format!(
        r#"<label for="{name}">{label}: <output id="{name}-value">{value}</output></label>
<input type="range" id="{name}" name="{name}" min="{min}" max="{max}" step="{step}" value="{value}" oninput="document.getElementById('{name}-value').value = this.value">"#,
        min = bounds.min,
        max = bounds.max,
        step = bounds.step,
    )
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let Ok(()) = escape::escape_html(&mut out, raw) else {
        unreachable!("writing to a String cannot fail")
    };
    out
}
