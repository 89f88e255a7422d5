use anyhow::{bail, Result};
use clap::Args;
use reviewdesk_lib::badge::sentiment_badge;
use reviewdesk_lib::columns::format_timestamp;
use reviewdesk_lib::types::ReviewDetail;
use reviewdesk_lib::{Client, ReviewDetailView};

use crate::output::{print_record, FieldRow, OutputFormat};

#[derive(Args)]
pub struct ShowArgs {
    /// Review ID (UUID)
    pub id: String,
}

pub fn detail_rows(detail: &ReviewDetail) -> Vec<FieldRow> {
    vec![
        FieldRow::new("Review ID", detail.review_id.clone()),
        FieldRow::new("Review", detail.raw_text.clone()),
        FieldRow::new("Sentiment", sentiment_badge(detail.sentiment).to_string()),
        FieldRow::new("Summary", detail.summary.clone()),
        FieldRow::new("Suggested actions", detail.suggested_actions.join("\n")),
        FieldRow::new("Suggested response", detail.suggested_response.clone()),
        FieldRow::new("Language", detail.language.clone().unwrap_or_else(|| "--".to_string())),
        FieldRow::new(
            "Model",
            format!("{} / {}", detail.model_provider, detail.model_version),
        ),
        FieldRow::new("Created", format_timestamp(&detail.created_at)),
    ]
}

pub async fn run(args: &ShowArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut view = ReviewDetailView::new(client.clone());
    view.fetch(&args.id).await;

    if let Some(error) = view.error() {
        bail!("{}", error);
    }
    match view.detail() {
        Some(detail) => print_record(detail, &detail_rows(detail), format),
        None => bail!("Review {} returned no data", args.id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_rows() {
        let json_str = include_str!("../../../reviewdesk_api/tests/fixtures/review_detail.json");
        let resp: serde_json::Value = serde_json::from_str(json_str).unwrap();
        let detail: ReviewDetail = serde_json::from_value(resp["data"].clone()).unwrap();

        let rows = detail_rows(&detail);
        assert_eq!(rows[2].value, "Negative");
        assert_eq!(rows[4].value, "Offer a replacement\nEscalate to quality team");
        assert_eq!(rows[6].value, "en");
        assert_eq!(rows[7].value, "openai / gpt-4o-mini");
    }
}
