//! Search presentation and fallback
//!
//! Decides what `/search` does with a raw query and renders the interstitial
//! shown while falling back to the engine's results page.

use url::Url;

use shared::{RecoveryAction, SearchEngine, Theme};
use orchestrator::detect;
use crate::error::{WebServerError, WebServerResult};

/// How long the failure interstitial stays up before falling back
pub const FALLBACK_DELAY_MS: u64 = 2_000;

/// What to do with a raw `/search` query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchDecision {
    /// No trigger; go straight to the engine results page
    Passthrough { location: String },
    /// Trigger present; resolve the stripped query
    Resolve { query: String },
}

pub fn decide(raw_query: &str, trigger: &str, engine: SearchEngine) -> WebServerResult<SearchDecision> {
    match detect(raw_query, trigger) {
        Some(query) => Ok(SearchDecision::Resolve { query }),
        None => Ok(SearchDecision::Passthrough {
            location: search_url(engine, raw_query)?,
        }),
    }
}

/// Engine results page for `query`, form-encoded
pub fn search_url(engine: SearchEngine, query: &str) -> WebServerResult<String> {
    Url::parse_with_params(engine.results_endpoint(), &[("q", query)])
        .map(String::from)
        .map_err(|e| WebServerError::ResponseError(format!("search url: {e}")))
}

/// Failure page that refreshes to `fallback_url` after `FALLBACK_DELAY_MS`
pub fn render_interstitial(message: &str, recovery: RecoveryAction, fallback_url: &str, theme: Theme) -> String {
    let delay_secs = FALLBACK_DELAY_MS / 1_000;
    let fallback = escape_html(fallback_url);

    let settings_link = match recovery {
        RecoveryAction::OpenSettings => {
            r#"<p><a class="action" href="/api/settings">Open settings</a></p>"#
        }
        RecoveryAction::FallbackToSearch => "",
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta http-equiv="refresh" content="{delay_secs};url={fallback}">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>DirectWarp</title>
<style>
{theme_css}
body {{ font-family: system-ui, sans-serif; background: var(--bg); color: var(--fg); display: flex; align-items: center; justify-content: center; min-height: 100vh; margin: 0; }}
main {{ max-width: 32rem; padding: 1.5rem 2rem; border-radius: 0.75rem; background: var(--card); }}
a {{ color: var(--link); }}
</style>
</head>
<body>
<main>
<h1>DirectWarp</h1>
<p class="message">{message}</p>
{settings_link}
<p>Continuing to <a href="{fallback}">search results</a> in {delay_secs} seconds&hellip;</p>
</main>
</body>
</html>
"#,
        theme_css = theme_css(theme),
        message = escape_html(message),
    )
}

fn theme_css(theme: Theme) -> &'static str {
    const LIGHT: &str = ":root { --bg: #f6f7f9; --fg: #1f2328; --card: #ffffff; --link: #0969da; }";
    const DARK: &str = ":root { --bg: #0d1117; --fg: #e6edf3; --card: #161b22; --link: #58a6ff; }";
    const SYSTEM: &str = ":root { --bg: #f6f7f9; --fg: #1f2328; --card: #ffffff; --link: #0969da; }\n@media (prefers-color-scheme: dark) { :root { --bg: #0d1117; --fg: #e6edf3; --card: #161b22; --link: #58a6ff; } }";

    match theme {
        Theme::Light => LIGHT,
        Theme::Dark => DARK,
        Theme::System => SYSTEM,
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
