use anyhow::{bail, Result};
use clap::Args;
use reviewdesk_lib::columns::history_columns;
use reviewdesk_lib::{history_list, Client, DataTable};

use crate::output::{print_list, OutputFormat};

#[derive(Args)]
pub struct HistoryArgs {
    /// Page number
    #[arg(long, default_value = "1")]
    pub page: u64,
}

pub async fn run(args: &HistoryArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut list = history_list(client.clone());
    super::load_page(&mut list, args.page).await?;

    if let Some(error) = list.error() {
        bail!("{}", error);
    }

    eprintln!("{} reviews analyzed", list.total());

    let columns = history_columns();
    let table = DataTable::new(&columns, list.items())
        .loading(list.is_loading())
        .pages(list.current_page(), list.total_pages())
        .empty_message("No reviews analyzed yet");
    print_list(&table, list.items(), format)
}
