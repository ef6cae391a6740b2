use parklog_core::entities::Visit;
use parklog_core::validation::VisitForm;

use super::duplicate_visit;
use crate::cli::GlobalFlags;
use crate::commands::shared::lookup::require_park;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    park: &str,
    form: &VisitForm,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let visit = execute(park, form, ctx).await?;
    output(&visit, flags.format)
}

pub(crate) async fn execute(
    park: &str,
    form: &VisitForm,
    ctx: &mut AppContext,
) -> anyhow::Result<Visit> {
    let park = require_park(ctx, park).await?;
    let new_visit = form.validate()?;

    if ctx.service.visit_exists(park.id, new_visit.date_visited).await? {
        return Err(duplicate_visit(new_visit.date_visited, &park.name).into());
    }

    let visit = ctx
        .service
        .add_visit(park.id, new_visit.date_visited, new_visit.note.as_deref())
        .await?;
    ctx.request.flash_message(format!(
        "Your visit to {} on {} has been recorded.",
        park.name, visit.date_visited
    ));
    Ok(visit)
}
