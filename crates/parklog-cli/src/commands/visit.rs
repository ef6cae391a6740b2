mod add;
mod delete;
mod edit;
mod list;

use parklog_core::entities::DATE_FORMAT;
use parklog_core::errors::CoreError;
use parklog_core::validation::VisitForm;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::VisitCommands;
use crate::context::AppContext;

/// Handle `parklog visit`.
pub async fn handle(
    action: &VisitCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        VisitCommands::List { park, page } => list::run(park, page.as_deref(), ctx, flags).await,
        VisitCommands::Add { park, date, note } => {
            let form = VisitForm {
                date_visited: date.clone(),
                note: note.clone(),
            };
            add::run(park, &form, ctx, flags).await
        }
        VisitCommands::Edit {
            park,
            id,
            date,
            note,
        } => edit::run(park, *id, date.as_deref(), note.as_deref(), ctx, flags).await,
        VisitCommands::Delete { park, id } => delete::run(park, *id, ctx, flags).await,
    }
}

fn duplicate_visit(date: chrono::NaiveDate, park: &str) -> CoreError {
    CoreError::Duplicate(format!(
        "A visit on {} is already recorded for {park}.",
        date.format(DATE_FORMAT)
    ))
}
