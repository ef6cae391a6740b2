mod add;
mod delete;
mod edit;
mod list;
mod sorted;

use parklog_core::validation::ParkForm;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ParkCommands;
use crate::context::AppContext;

/// Handle `parklog park`.
pub async fn handle(
    action: &ParkCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ParkCommands::List { page } => list::run(page.as_deref(), ctx, flags).await,
        ParkCommands::Sorted { by } => sorted::run(*by, ctx, flags).await,
        ParkCommands::Add {
            name,
            state,
            established,
            area,
            description,
        } => {
            let form = ParkForm {
                name: name.clone(),
                state: state.clone(),
                date_established: established.clone(),
                area_km2: area.clone(),
                description: description.clone(),
            };
            add::run(&form, ctx, flags).await
        }
        ParkCommands::Edit {
            park,
            new_name,
            state,
            established,
            area,
            description,
        } => {
            let changes = edit::ParkChanges {
                name: new_name.clone(),
                state: state.clone(),
                date_established: established.clone(),
                area_km2: area.clone(),
                description: description.clone(),
            };
            edit::run(park, &changes, ctx, flags).await
        }
        ParkCommands::Delete { park } => delete::run(park, ctx, flags).await,
    }
}
