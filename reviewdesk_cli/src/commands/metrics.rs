use anyhow::{bail, Result};
use clap::Args;
use reviewdesk_lib::columns::{group_thousands, metrics_columns};
use reviewdesk_lib::types::ReviewMetricSummary;
use reviewdesk_lib::validation::{page_to_offset, validate_page};
use reviewdesk_lib::{Client, DataTable, MetricsView, PAGE_SIZE};

use crate::output::{print_list, print_record, FieldRow, OutputFormat};

#[derive(Args)]
pub struct MetricsArgs {
    /// Page number
    #[arg(long, default_value = "1")]
    pub page: u64,

    /// Only print the aggregate summary
    #[arg(long)]
    pub summary_only: bool,
}

pub fn summary_rows(summary: &ReviewMetricSummary, success_rate: f64) -> Vec<FieldRow> {
    let breakdown = &summary.sentiment_breakdown;
    vec![
        FieldRow::new("Total reviews", group_thousands(summary.total_reviews)),
        FieldRow::new("Total tokens", group_thousands(summary.total_tokens)),
        FieldRow::new("Total cost", format!("${:.4}", summary.total_cost)),
        FieldRow::new("Average latency", format!("{:.0} ms", summary.average_latency_ms)),
        FieldRow::new("Success rate", format!("{:.1}%", success_rate)),
        FieldRow::new("Errors", summary.error_count.to_string()),
        FieldRow::new(
            "Sentiment",
            format!(
                "{} positive / {} neutral / {} negative",
                breakdown.positive, breakdown.neutral, breakdown.negative
            ),
        ),
    ]
}

pub async fn run(args: &MetricsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut view = MetricsView::new(client.clone());

    if args.summary_only {
        view.load_summary().await;
    } else {
        let page = validate_page(args.page)?;
        view.load(page_to_offset(page, PAGE_SIZE)).await;
        if view.error().is_none() {
            if let Some(last) = super::clamp_page(page, view.list().total_pages()) {
                tracing::warn!("Page {} is past the last page; showing page {}", page, last);
                view.load(page_to_offset(last, PAGE_SIZE)).await;
            }
        }
    }

    if let Some(error) = view.error() {
        bail!("{}", error);
    }

    if let Some(summary) = view.summary() {
        let rows = summary_rows(summary, view.success_rate());
        print_record(summary, &rows, format)?;
    }

    if args.summary_only {
        return Ok(());
    }

    let columns = metrics_columns();
    let table = DataTable::new(&columns, view.items())
        .loading(view.is_loading_list())
        .pages(view.list().current_page(), view.list().total_pages());
    print_list(&table, view.items(), format)
}
