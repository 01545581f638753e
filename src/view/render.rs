// src/view/render.rs
//! HTML rendering of the page from a [`ViewState`].

use std::fmt::Write;

use crate::grading::Metric;
use crate::models::MetricSet;
use crate::view::state::ViewState;

/// Content of one score cell.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreCell {
    pub text: String,
    pub tooltip: Option<&'static str>,
}

impl ScoreCell {
    pub fn new(metric: Metric, score: Option<f64>) -> Self {
        match score {
            Some(value) => Self {
                text: format!("{:.3}", value),
                tooltip: Some(metric.grade_level(value)),
            },
            None => Self { text: String::new(), tooltip: None },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn to_html(&self) -> String {
        match self.tooltip {
            Some(tooltip) => format!(
                "<span data-tooltip=\"{}\">{}</span>",
                escape_html(tooltip),
                self.text
            ),
            None => String::new(),
        }
    }
}

/// One column of cells in table row order.
pub fn score_column(scores: &MetricSet) -> Vec<ScoreCell> {
    Metric::ROWS
        .iter()
        .map(|metric| ScoreCell::new(*metric, scores.get(*metric)))
        .collect()
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// A JS string literal that is safe to drop inside a `<script>` element.
fn script_string(raw: &str) -> String {
    serde_json::to_string(raw)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace("</", "<\\/")
}

fn render_scores_table(view: &ViewState) -> String {
    let original = score_column(&view.scores.original);
    let generated = score_column(&view.scores.generated);

    let mut html = String::from(
        "<table id=\"scores-table\">\n<tr><th>Metric</th><th>Original</th><th>Generated</th></tr>\n",
    );
    for (row, metric) in Metric::ROWS.iter().enumerate() {
        let _ = writeln!(
            html,
            "<tr><th scope=\"row\">{}</th><td>{}</td><td>{}</td></tr>",
            metric.name(),
            original[row].to_html(),
            generated[row].to_html()
        );
    }
    html.push_str("</table>\n");
    html
}

/// Renders the full page. `alert` becomes a blocking `window.alert` on load.
pub fn render_page(view: &ViewState, alert: Option<&str>) -> String {
    let disabled = if view.busy { " disabled" } else { "" };
    let invalid = if view.output_invalid { " aria-invalid=\"true\"" } else { "" };
    let generated_at = view
        .last_generated_at
        .map(|at| format!("<small>Last summary: {}</small>", at.format("%Y-%m-%d %H:%M:%S UTC")))
        .unwrap_or_default();

    let model_error = view
        .banner_error()
        .map(|message| format!("<p id=\"model-error\" role=\"alert\">{}</p>\n", escape_html(&message)))
        .unwrap_or_default();

    let mut html = String::new();
    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en" data-theme="{theme}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Plain Language Summaries</title>
<link rel="stylesheet" href="/static/style.css">
</head>
<body data-busy="{busy}">
<header>
<h1>Plain Language Summaries</h1>
<form method="post" action="/theme"><button id="theme-button" type="submit">{icon}</button></form>
</header>
<main>
<p><span id="intro-text">{intro}</span>paste a biomedical abstract below to get a plain language summary and readability scores for both texts.</p>
{model_error}<form method="post" action="/generate">
<textarea id="input-area" name="text" rows="12"{disabled}>{input}</textarea>
<button id="generate-button" type="submit" aria-busy="{busy}"{disabled}>{label}</button>
<button id="reset-button" type="submit" formaction="/reset" class="secondary"{disabled}>Reset</button>
</form>
<textarea id="output-area" rows="12" readonly{invalid}>{output}</textarea>
{generated_at}
"#,
        theme = view.theme.attr(),
        busy = view.busy,
        icon = view.theme.icon(),
        intro = escape_html(&view.intro_prefix()),
        disabled = disabled,
        input = escape_html(&view.input_text),
        label = view.button_label(),
        invalid = invalid,
        output = escape_html(&view.output_text),
        generated_at = generated_at,
        model_error = model_error,
    );
    html.push_str(&render_scores_table(view));
    html.push_str("</main>\n<script src=\"/static/app.js\"></script>\n");
    if let Some(message) = alert {
        let _ = writeln!(html, "<script>window.alert({});</script>", script_string(message));
    }
    html.push_str("</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScorePair;

    #[test]
    fn absent_score_renders_empty_cell() {
        let cell = ScoreCell::new(Metric::Cli, None);
        assert!(cell.is_empty());
        assert_eq!(cell.tooltip, None);
        assert_eq!(cell.to_html(), "");
    }

    #[test]
    fn score_has_three_decimals_and_tooltip() {
        let cell = ScoreCell::new(Metric::Cli, Some(9.1));
        assert_eq!(cell.text, "9.100");
        assert_eq!(cell.tooltip, Some("8th grade - 11th grade"));

        let fre = ScoreCell::new(Metric::Fre, Some(80.0));
        assert_eq!(fre.text, "80.000");
        assert_eq!(fre.tooltip, Some("6th–8th grade"));
        assert_eq!(fre.to_html(), "<span data-tooltip=\"6th–8th grade\">80.000</span>");
    }

    #[test]
    fn blank_columns_render_twelve_empty_cells() {
        let view = ViewState::new();
        let pair = ScorePair::default();
        let cells: Vec<_> = score_column(&pair.original)
            .into_iter()
            .chain(score_column(&pair.generated))
            .collect();
        assert_eq!(cells.len(), 12);
        assert!(cells.iter().all(ScoreCell::is_empty));

        let html = render_page(&view, None);
        assert_eq!(html.matches("<td></td>").count(), 12);
    }

    #[test]
    fn user_text_is_escaped() {
        let mut view = ViewState::new();
        view.input_text = "<script>alert(1)</script> & more".to_string();
        let html = render_page(&view, None);
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt; &amp; more"));
        assert!(!html.contains("<script>alert(1)"));
    }

    #[test]
    fn busy_page_disables_controls() {
        let mut view = ViewState::new();
        view.busy = true;
        let html = render_page(&view, None);
        assert!(html.contains("aria-busy=\"true\" disabled>Generating...</button>"));
        assert!(html.contains("<textarea id=\"input-area\" name=\"text\" rows=\"12\" disabled>"));
    }

    #[test]
    fn alert_is_a_safe_script_literal() {
        let view = ViewState::new();
        let html = render_page(&view, Some("Error loading model name: 500\n</script>"));
        assert!(html.contains(
            "<script>window.alert(\"Error loading model name: 500\\n<\\/script>\");</script>"
        ));
    }

    #[test]
    fn error_marker_is_rendered() {
        let mut view = ViewState::new();
        view.output_text = "Error: 500\nboom".to_string();
        view.output_invalid = true;
        let html = render_page(&view, None);
        assert!(html.contains("readonly aria-invalid=\"true\">Error: 500\nboom</textarea>"));
    }
}
