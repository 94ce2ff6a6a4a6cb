//! Pure markup builders for the result view, the history list, and toasts.
//!
//! Every user-supplied or backend-supplied string passes through
//! [`escape_html`] before insertion. That is the injection barrier for the
//! whole crate; nothing else is allowed to splice free text into markup.

use crate::models::{AnalysisResult, HistoryEntry, Route};
use crate::toast::ToastKind;

/// Placeholder shown when the history list is empty or unavailable.
pub const EMPTY_HISTORY: &str = r#"<p class="history-empty">No queries yet</p>"#;

/// Idle label of the upload drop area.
pub const UPLOAD_PLACEHOLDER: &str = "Click or drag PDF";

/// History rows preview at most this many characters of the query.
const QUERY_PREVIEW_LIMIT: usize = 60;

struct Badge {
    class: &'static str,
    icon: &'static str,
    text: &'static str,
}

fn badge_for(route: Route) -> Badge {
    match route {
        Route::Knowledge => Badge {
            class: "badge-knowledge",
            icon: "\u{1F4DA}",
            text: "KNOWLEDGE",
        },
        Route::Symptoms => Badge {
            class: "badge-symptoms",
            icon: "\u{1FA7A}",
            text: "SYMPTOMS",
        },
        Route::Both => Badge {
            class: "badge-both",
            icon: "\u{1F52C}",
            text: "BOTH",
        },
    }
}

/// Escapes text for safe insertion into element content or attribute values.
pub fn escape_html(text: &str) -> String {
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

/// Renders one analysis result card.
///
/// The symptom and knowledge sections are omitted when their fields are empty
/// or absent; the medical disclaimer is appended unconditionally.
pub fn result_markup(result: &AnalysisResult, query: &str) -> String {
    let badge = badge_for(result.badge_route());

    let mut html = format!(
        r#"<div class="panel-card result-card">
    <div class="result-header">
        <div class="result-icon-box">&#128203;</div>
        <h2 class="result-title">Analysis Results</h2>
    </div>
    <div class="query-display">
        <strong>Your Query:</strong>
        {}
    </div>
    <span class="route-badge {}">{} {}</span>
"#,
        escape_html(query),
        badge.class,
        badge.icon,
        badge.text,
    );

    if let Some(analysis) = result.symptom_analysis.as_deref().filter(|s| !s.is_empty()) {
        html.push_str(&format!(
            r#"    <div class="result-section">
        <h3>&#129658; Symptom Analysis</h3>
        <p>{}</p>
    </div>
"#,
            escape_html(analysis)
        ));
    }

    if let Some(summary) = result.rag_summary.as_deref().filter(|s| !s.is_empty()) {
        html.push_str(&format!(
            r#"    <div class="result-section">
        <h3>&#128218; Medical Knowledge Summary</h3>
        <p>{}</p>
    </div>
"#,
            escape_html(summary)
        ));
    }

    html.push_str(
        r#"    <div class="disclaimer">
        <strong>&#9888;&#65039; Medical Disclaimer:</strong>
        This analysis is for informational purposes only. Always consult with a qualified healthcare provider for proper diagnosis and treatment.
    </div>
</div>"#,
    );

    html
}

/// Renders the history list, most recent entry first.
///
/// Entries arrive in backend order (oldest first). Each row carries the
/// entry's original backend index in `data-index` so a click on a displayed
/// row maps straight back to the entry the backend knows.
pub fn history_markup(entries: &[HistoryEntry]) -> String {
    entries
        .iter()
        .enumerate()
        .rev()
        .map(|(index, entry)| history_row(entry, index))
        .collect()
}

fn history_row(entry: &HistoryEntry, original_index: usize) -> String {
    format!(
        r#"<div class="history-item" data-index="{}">
    <div class="history-item-query">{}</div>
    <div class="history-item-route">Route: {}</div>
</div>
"#,
        original_index,
        escape_html(&preview(&entry.query)),
        escape_html(&entry.result.route_label().to_uppercase()),
    )
}

fn preview(query: &str) -> String {
    if query.chars().count() > QUERY_PREVIEW_LIMIT {
        let truncated: String = query.chars().take(QUERY_PREVIEW_LIMIT).collect();
        format!("{}...", truncated)
    } else {
        query.to_string()
    }
}

/// Renders one toast node.
pub fn toast_markup(message: &str, kind: ToastKind) -> String {
    format!(
        r#"<div class="toast {}"><span class="toast-icon">{}</span><span class="toast-message">{}</span></div>"#,
        kind.class(),
        kind.icon(),
        escape_html(message),
    )
}
