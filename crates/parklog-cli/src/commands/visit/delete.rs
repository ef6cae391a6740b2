use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::lookup::{require_park, require_visit};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct DeletedVisit {
    deleted: i64,
}

pub async fn run(park: &str, id: i64, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    execute(park, id, ctx).await?;
    output(&DeletedVisit { deleted: id }, flags.format)
}

pub(crate) async fn execute(park: &str, id: i64, ctx: &mut AppContext) -> anyhow::Result<()> {
    let park = require_park(ctx, park).await?;
    let visit = require_visit(ctx, &park, id).await?;

    ctx.service.delete_visit(visit.id).await?;
    ctx.request.flash_message(format!(
        "Your visit to {} on {} has been deleted.",
        park.name, visit.date_visited
    ));
    Ok(())
}
