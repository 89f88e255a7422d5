//! Column sets for the history, metrics and usages tables.

use chrono::{DateTime, Utc};

use reviewdesk_api::types::{ReviewHistoryItem, ReviewMetricItem, ReviewUsageItem};

use crate::badge::{sent_badge, sentiment_badge, status_badge};
use crate::data_table::Column;

/// Longest review excerpt shown in a table cell, in characters.
pub const EXCERPT_LENGTH: usize = 60;

const PLACEHOLDER: &str = "--";

/// First 8 characters of an id followed by `...`.
pub fn short_id(id: &str) -> String {
    let prefix: String = id.chars().take(8).collect();
    format!("{}...", prefix)
}

/// `text` cut to `max` characters, with `...` when shortened. Newlines are
/// flattened so a cell stays on one line.
pub fn excerpt(text: &str, max: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max {
        return flat;
    }
    let cut: String = flat.chars().take(max).collect();
    format!("{}...", cut.trim_end())
}

/// Integer with `,` thousands separators.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%d %b %Y %H:%M").to_string()
}

fn or_placeholder(value: &str) -> String {
    if value.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        value.to_string()
    }
}

pub fn history_columns() -> Vec<Column<ReviewHistoryItem>> {
    vec![
        Column::new("reviewId", "Review ID", |r: &ReviewHistoryItem| short_id(&r.review_id)),
        Column::new("rawText", "Review", |r: &ReviewHistoryItem| {
            excerpt(&r.raw_text, EXCERPT_LENGTH)
        }),
        Column::new("sentiment", "Sentiment", |r: &ReviewHistoryItem| {
            sentiment_badge(r.sentiment).to_string()
        }),
        Column::new("createdAt", "Date", |r: &ReviewHistoryItem| format_timestamp(&r.created_at)),
    ]
}

pub fn metrics_columns() -> Vec<Column<ReviewMetricItem>> {
    vec![
        Column::new("reviewId", "Review ID", |m: &ReviewMetricItem| short_id(&m.review_id)),
        Column::new("tokens", "Tokens", |m: &ReviewMetricItem| {
            format!(
                "{} ({} in / {} out)",
                group_thousands(m.total_tokens),
                m.input_tokens,
                m.output_tokens
            )
        }),
        Column::new("cost", "Cost", |m: &ReviewMetricItem| format!("${:.4}", m.estimated_cost)),
        Column::new("latency", "Latency", |m: &ReviewMetricItem| format!("{} ms", m.latency_ms)),
        Column::new("status", "Status", |m: &ReviewMetricItem| status_badge(&m.status).to_string()),
        Column::new("createdAt", "Date", |m: &ReviewMetricItem| format_timestamp(&m.created_at)),
    ]
}

pub fn usages_columns() -> Vec<Column<ReviewUsageItem>> {
    vec![
        Column::new("reviewId", "Review ID", |u: &ReviewUsageItem| short_id(&u.review_id)),
        Column::new("agentId", "Agent", |u: &ReviewUsageItem| or_placeholder(&u.agent_id)),
        Column::new("editedResponse", "Edited Response", |u: &ReviewUsageItem| {
            or_placeholder(&excerpt(&u.edited_response, EXCERPT_LENGTH))
        }),
        Column::new("responseSent", "Sent", |u: &ReviewUsageItem| {
            sent_badge(u.response_sent).to_string()
        }),
        Column::new("sentAt", "Sent Date", |u: &ReviewUsageItem| {
            u.sent_at
                .as_ref()
                .map(format_timestamp)
                .unwrap_or_else(|| PLACEHOLDER.to_string())
        }),
        Column::new("createdAt", "Created", |u: &ReviewUsageItem| format_timestamp(&u.created_at)),
    ]
}
