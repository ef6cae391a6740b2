use parklog_core::entities::Visit;
use parklog_core::pagination::Paginated;

use crate::cli::GlobalFlags;
use crate::commands::shared::lookup::require_park;
use crate::commands::shared::page::resolve_listing_page;
use crate::context::AppContext;
use crate::output::output_page;

pub async fn run(
    park: &str,
    page: Option<&str>,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let listing = execute(park, page, ctx).await?;
    output_page(&listing, flags.format)
}

pub(crate) async fn execute(
    park: &str,
    page: Option<&str>,
    ctx: &mut AppContext,
) -> anyhow::Result<Paginated<Visit>> {
    let park = require_park(ctx, park).await?;
    let page_size = ctx.config.pagination.visits_per_page.max(1);
    let total = ctx.service.count_visits(park.id).await?;
    let page = resolve_listing_page(ctx, page, total, page_size);

    let visits = ctx.service.list_visits(park.id, page_size, page).await?;
    Ok(Paginated::new(
        visits,
        page,
        page_size,
        u64::try_from(total).unwrap_or(0),
    ))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::execute;
    use crate::test_support::{date, seed_park, test_context};

    #[tokio::test]
    async fn pages_visits_by_date() {
        let (_tmp, mut ctx) = test_context().await;
        let park = seed_park(&ctx, "Zion").await;
        for day in ["2024-05-04", "2024-05-01", "2024-05-03", "2024-05-02"] {
            ctx.service.add_visit(park.id, date(day), None).await.unwrap();
        }

        let first = execute("Zion", None, &mut ctx).await.unwrap();
        assert_eq!(first.items.len(), 3);
        assert_eq!(first.items[0].date_visited, date("2024-05-01"));
        assert!(first.has_next());

        let second = execute("Zion", Some("2"), &mut ctx).await.unwrap();
        assert_eq!(second.items.len(), 1);
        assert_eq!(second.items[0].date_visited, date("2024-05-04"));
        assert!(!second.has_next());
    }

    #[tokio::test]
    async fn unknown_park_is_not_found() {
        let (_tmp, mut ctx) = test_context().await;
        assert!(execute("Atlantis", None, &mut ctx).await.is_err());
    }
}
