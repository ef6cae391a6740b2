use parklog_core::entities::ParkSummary;
use parklog_db::repos::ParkSort;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SortKey;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(by: SortKey, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let parks = execute(by, ctx).await?;
    output(&parks, flags.format)
}

pub(crate) async fn execute(by: SortKey, ctx: &AppContext) -> anyhow::Result<Vec<ParkSummary>> {
    Ok(ctx.service.list_all_parks(park_sort(by)).await?)
}

const fn park_sort(key: SortKey) -> ParkSort {
    match key {
        SortKey::Name => ParkSort::Name,
        SortKey::State => ParkSort::State,
        SortKey::Year => ParkSort::Established,
        SortKey::Area => ParkSort::Area,
    }
}
