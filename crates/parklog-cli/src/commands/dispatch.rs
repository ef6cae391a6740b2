use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::cli::subcommands::{ParkCommands, UserCommands};
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
///
/// Commands that change data, and every visit command, need a signed-in
/// user. A refused command is remembered so `signin` can point back to it.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if requires_sign_in(&command, ctx).await? {
        ctx.request.require_signed_in(&command.request_line())?;
    }

    match command {
        Commands::Park { action } => commands::park::handle(&action, ctx, flags).await,
        Commands::Visit { action } => commands::visit::handle(&action, ctx, flags).await,
        Commands::User { action } => commands::user::handle(&action, ctx, flags).await,
        Commands::Signin { username, password } => {
            commands::auth::signin(&username, &password, ctx, flags).await
        }
        Commands::Signout => commands::auth::signout(ctx, flags),
        Commands::Init => unreachable!("init is pre-dispatched in main"),
    }
}

async fn requires_sign_in(command: &Commands, ctx: &AppContext) -> anyhow::Result<bool> {
    Ok(match command {
        Commands::Park { action } => !matches!(
            action,
            ParkCommands::List { .. } | ParkCommands::Sorted { .. }
        ),
        Commands::Visit { .. } => true,
        // The first account can be created without one.
        Commands::User {
            action: UserCommands::Add { .. },
        } => ctx.service.count_users().await? > 0,
        Commands::Signin { .. } | Commands::Signout | Commands::Init => false,
    })
}
