use anyhow::Result;
use clap::Args;
use reviewdesk_lib::reviewdesk_api::ReviewUsagesService;
use reviewdesk_lib::types::CreateReviewUsageRequest;
use reviewdesk_lib::validation::validate_review_id;
use reviewdesk_lib::Client;

#[derive(Args)]
pub struct SendArgs {
    /// Review ID the response belongs to
    pub review_id: String,

    /// Final text of the response sent to the customer
    pub edited_response: String,
}

pub async fn run(args: &SendArgs, client: &Client) -> Result<()> {
    let review_id = validate_review_id(&args.review_id)?;
    let usages = ReviewUsagesService::new(client.clone());

    let body = CreateReviewUsageRequest {
        review_id: review_id.to_string(),
        edited_response: args.edited_response.clone(),
        response_sent: true,
    };
    usages.create(&body).await?;
    usages.mark_as_sent(review_id).await?;

    eprintln!("Response for review {} sent", review_id);
    Ok(())
}
