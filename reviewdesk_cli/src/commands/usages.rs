use anyhow::{bail, Result};
use clap::Args;
use reviewdesk_lib::columns::usages_columns;
use reviewdesk_lib::{usages_list, Client, DataTable};

use crate::output::{print_list, OutputFormat};

#[derive(Args)]
pub struct UsagesArgs {
    /// Page number
    #[arg(long, default_value = "1")]
    pub page: u64,
}

pub async fn run(args: &UsagesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut list = usages_list(client.clone());
    super::load_page(&mut list, args.page).await?;

    if let Some(error) = list.error() {
        bail!("{}", error);
    }

    let sent = list.items().iter().filter(|u| u.response_sent).count();
    eprintln!(
        "{} usage records ({} of {} on this page sent)",
        list.total(),
        sent,
        list.items().len()
    );

    let columns = usages_columns();
    let table = DataTable::new(&columns, list.items())
        .loading(list.is_loading())
        .pages(list.current_page(), list.total_pages());
    print_list(&table, list.items(), format)
}
