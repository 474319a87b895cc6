//! Categories command.

use anyhow::Result;
use shelf_storefront::Storefront;

use super::CategoriesArgs;
use crate::context::Context;

/// Run the categories command.
pub async fn run(_args: CategoriesArgs, ctx: &Context) -> Result<()> {
    let aggregator = ctx.config.storefront.aggregator();
    let (storefront, report) = Storefront::load(&aggregator).await;
    let categories = storefront.categories();

    if ctx.output.is_json() {
        ctx.output.json(&categories);
        return Ok(());
    }

    ctx.output.header("Categories");
    for category in &categories {
        ctx.output.list_item(category);
    }
    ctx.output.debug(&format!(
        "{} books from {}, {} external",
        report.primary_count, report.primary, report.external_count
    ));

    Ok(())
}
