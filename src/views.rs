//! HTML rendering of the summarizer page.

use std::fmt::Write as _;

use crate::core::models::{
    LengthBounds, MAX_LENGTH_RANGE, MIN_LENGTH_RANGE, SliderRange, StatusMessage, SummaryReport,
};

const TITLE: &str = "📚 AI Study Buddy: Abstractive Summarizer";
const CAPTION: &str = "Powered by the BART Transformer | Focus: High Quality, Fluent English Summary";
const INPUT_LABEL: &str = "Paste your study material (English) here:";
const INPUT_PLACEHOLDER: &str = "Example: The process of photosynthesis is vital for life on Earth. It is the mechanism by which green plants...";
const RESULT_HEADER: &str = "✅ Abstractive Summary (English)";
const PROJECT_NOTE: &str = "<strong>Project Stability Note:</strong> This output proves proficiency in <strong>Transfer Learning</strong> using a stable, dedicated, high-resource model (BART).";

const STYLE: &str = "body{font-family:sans-serif;margin:0;display:flex}\
aside{width:260px;padding:1.5rem;background:#f0f2f6;min-height:100vh}\
main{flex:1;padding:2rem 3rem;max-width:900px}\
textarea{width:100%;height:300px;box-sizing:border-box}\
label{display:block;margin:.75rem 0 .25rem}\
input[type=range]{width:100%}\
.status,.summary{padding:.75rem 1rem;border-radius:.5rem;margin:.75rem 0}\
.info{background:#e8f0fe}.warning{background:#fff8e1}.error{background:#fdecea}\
.summary{background:#e6f4ea}.caption{color:#6b6b6b;font-size:.9rem}";

/// Everything one page render needs.
#[derive(Debug, Clone, Default)]
pub struct PageState {
    pub text: String,
    pub bounds: LengthBounds,
    /// Shown above any other status, e.g. a model load failure.
    pub notices: Vec<StatusMessage>,
    pub status: Option<StatusMessage>,
    pub report: Option<SummaryReport>,
}

/// Escapes text for use in HTML element content and attribute values.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn status_block(status: &StatusMessage) -> String {
    format!(
        r#"<div class="status {}" role="status">{}</div>"#,
        status.level.as_str(),
        escape_html(&status.text)
    )
}

fn slider(name: &str, label: &str, range: SliderRange, value: u32) -> String {
    format!(
        r#"<label for="{name}">{label}: <output id="{name}_value">{value}</output></label>
<input type="range" id="{name}" name="{name}" form="summarize" min="{}" max="{}" step="{}" value="{value}" oninput="document.getElementById('{name}_value').value=this.value">"#,
        range.min, range.max, range.step
    )
}

/// Renders the full page for the given state.
#[must_use]
pub fn render_page(state: &PageState) -> String {
    let mut html = String::new();

    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>AI Study Buddy</title>
<style>{STYLE}</style>
</head>
<body>
<aside>
<h3>Summary Length Control (Tokens)</h3>
{}
{}
</aside>
<main>
"#,
        slider(
            "max_length",
            "Maximum Length (Tokens)",
            MAX_LENGTH_RANGE,
            state.bounds.max_length
        ),
        slider(
            "min_length",
            "Minimum Length (Tokens)",
            MIN_LENGTH_RANGE,
            state.bounds.min_length
        ),
    );

    for notice in &state.notices {
        html.push_str(&status_block(notice));
        html.push('\n');
    }

    let _ = write!(
        html,
        r#"<h1>{TITLE}</h1>
<hr>
<p class="caption">{CAPTION}</p>
<form id="summarize" method="post" action="/">
<label for="text">{INPUT_LABEL}</label>
<textarea id="text" name="text" placeholder="{}">{}</textarea>
<button type="submit">Generate Summary</button>
</form>
"#,
        escape_html(INPUT_PLACEHOLDER),
        escape_html(&state.text)
    );

    if let Some(status) = &state.status {
        html.push_str(&status_block(status));
        html.push('\n');
    }

    if let Some(report) = &state.report {
        let _ = write!(
            html,
            r#"<h2>{RESULT_HEADER}</h2>
<div class="summary">{}</div>
<div class="status info">{}</div>
<p>{PROJECT_NOTE}</p>
"#,
            escape_html(&report.summary),
            escape_html(&report.metrics_line())
        );
    }

    html.push_str("</main>\n</body>\n</html>\n");
    html
}
