use anyhow::{bail, Result};
use clap::Args;
use reviewdesk_lib::badge::sentiment_badge;
use reviewdesk_lib::form_field::{compose, FormFieldDescriptor, FormFieldInstance};
use reviewdesk_lib::types::ReviewResponse;
use reviewdesk_lib::validation::MAX_REVIEW_LENGTH;
use reviewdesk_lib::{AnalysisSession, Client, ReviewDeskError};

use crate::output::{print_record, render_form_field, FieldRow, OutputFormat};

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Review text to analyze
    pub text: String,

    /// Language of the review (e.g. en, es, pt-br). Detected when omitted.
    #[arg(long)]
    pub language: Option<String>,

    /// Send this edited response right after the analysis
    #[arg(long)]
    pub send: Option<String>,
}

pub fn result_rows(result: &ReviewResponse) -> Vec<FieldRow> {
    vec![
        FieldRow::new("Review ID", result.review_id.clone()),
        FieldRow::new("Sentiment", sentiment_badge(result.sentiment).to_string()),
        FieldRow::new("Summary", result.summary.clone()),
        FieldRow::new("Suggested actions", result.suggested_actions.join("\n")),
        FieldRow::new("Suggested response", result.suggested_response.clone()),
        FieldRow::new(
            "Model",
            format!("{} / {}", result.model_provider, result.model_version),
        ),
    ]
}

/// The review input as it would be shown with `message` as its error.
pub fn review_field_error(text: &str, message: &str) -> String {
    let descriptor = FormFieldDescriptor::new()
        .id("review-text")
        .label("Review")
        .description(format!("Up to {} characters", MAX_REVIEW_LENGTH))
        .error_message(message)
        .has_error(true);
    let shown = if text.trim().is_empty() {
        "(empty)".to_string()
    } else {
        format!("{} characters", text.chars().count())
    };
    let layout = compose(&descriptor, &FormFieldInstance::new(), |_| shown);
    render_form_field(&layout)
}

pub async fn run(args: &AnalyzeArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut session = AnalysisSession::new(client.clone());

    if let Err(err) = session.analyze(&args.text, args.language.as_deref()).await {
        if let ReviewDeskError::InvalidInput(message) = &err {
            eprintln!("{}", review_field_error(&args.text, message));
        }
        return Err(err.into());
    }
    if let Some(error) = session.error() {
        bail!("{}", error);
    }
    let Some(result) = session.result() else {
        bail!("Analysis returned no data");
    };
    print_record(result, &result_rows(result), format)?;

    if let Some(edited) = &args.send {
        session.send_response(edited).await;
        if let Some(error) = session.error() {
            bail!("{}", error);
        }
        if session.send_success() {
            eprintln!("Response sent");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_field_error() {
        let text = review_field_error("   ", "review text is empty");
        assert_eq!(
            text,
            "Review:\n  Up to 5000 characters\n  > (empty)\n  ! review text is empty"
        );
    }

    #[test]
    fn test_result_rows() {
        let json_str = include_str!("../../../reviewdesk_api/tests/fixtures/analyze.json");
        let resp: serde_json::Value = serde_json::from_str(json_str).unwrap();
        let result: ReviewResponse = serde_json::from_value(resp["data"].clone()).unwrap();

        let rows = result_rows(&result);
        assert_eq!(rows[1].value, "Positive");
        assert_eq!(rows[4].value, "Thank you so much for your kind words!");
    }
}
