use parklog_core::entities::ParkSummary;
use parklog_core::pagination::Paginated;

use crate::cli::GlobalFlags;
use crate::commands::shared::page::resolve_listing_page;
use crate::context::AppContext;
use crate::output::output_page;

pub async fn run(page: Option<&str>, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let listing = execute(page, ctx).await?;
    output_page(&listing, flags.format)
}

pub(crate) async fn execute(
    page: Option<&str>,
    ctx: &mut AppContext,
) -> anyhow::Result<Paginated<ParkSummary>> {
    let page_size = ctx.config.pagination.parks_per_page.max(1);
    let total = ctx.service.count_parks().await?;
    let page = resolve_listing_page(ctx, page, total, page_size);

    let parks = ctx.service.list_parks(page_size, page).await?;
    Ok(Paginated::new(
        parks,
        page,
        page_size,
        u64::try_from(total).unwrap_or(0),
    ))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::execute;
    use crate::test_support::{seed_park, test_context};

    #[tokio::test]
    async fn lists_requested_page() {
        let (_tmp, mut ctx) = test_context().await;
        for name in ["A", "B", "C", "D", "E", "F", "G"] {
            seed_park(&ctx, name).await;
        }

        let listing = execute(Some("2"), &mut ctx).await.unwrap();
        assert_eq!(listing.page, 2);
        assert_eq!(listing.last_page, 2);
        assert_eq!(listing.total, 7);
        let names: Vec<&str> = listing.items.iter().map(|p| p.park.name.as_str()).collect();
        assert_eq!(names, vec!["F", "G"]);
    }

    #[tokio::test]
    async fn empty_listing_has_one_page() {
        let (_tmp, mut ctx) = test_context().await;
        let listing = execute(None, &mut ctx).await.unwrap();
        assert_eq!(listing.page, 1);
        assert_eq!(listing.last_page, 1);
        assert!(listing.items.is_empty());
    }

    #[tokio::test]
    async fn past_the_end_shows_last_page() {
        let (_tmp, mut ctx) = test_context().await;
        for name in ["A", "B", "C", "D", "E", "F"] {
            seed_park(&ctx, name).await;
        }
        let listing = execute(Some("40"), &mut ctx).await.unwrap();
        assert_eq!(listing.page, 2);
        assert_eq!(
            ctx.request.take_flash().message.as_deref(),
            Some("Showing page 2.")
        );
    }
}
