//! CLI subcommand implementations.

pub mod analyze;
pub mod history;
pub mod metrics;
pub mod send;
pub mod show;
pub mod usages;

use anyhow::Result;
use reviewdesk_lib::number_field::{NumberBounds, NumberField};
use reviewdesk_lib::paging::{ListController, PageSource};
use reviewdesk_lib::validation::{page_to_offset, validate_page};

/// The last page when `page` lies past it, `None` otherwise.
pub fn clamp_page(page: u64, total_pages: u64) -> Option<u64> {
    if total_pages == 0 || page <= total_pages {
        return None;
    }
    let field = NumberField::new(page as f64, NumberBounds::new(1.0, total_pages as f64, 1.0));
    Some(field.value() as u64)
}

/// Loads 1-based `page` into `list`. A page past the end is clamped to the
/// last page and re-fetched.
pub async fn load_page<S: PageSource>(list: &mut ListController<S>, page: u64) -> Result<()> {
    let page = validate_page(page)?;
    list.load(page_to_offset(page, list.limit())).await;

    if list.error().is_some() {
        return Ok(());
    }
    if let Some(last) = clamp_page(page, list.total_pages()) {
        tracing::warn!("Page {} is past the last page; showing page {}", page, last);
        list.load(page_to_offset(last, list.limit())).await;
    }
    Ok(())
}
