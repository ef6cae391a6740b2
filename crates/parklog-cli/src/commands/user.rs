use parklog_core::entities::User;
use parklog_core::errors::CoreError;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UserCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `parklog user`.
pub async fn handle(
    action: &UserCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        UserCommands::Add { username, password } => {
            let user = add(username, password, ctx).await?;
            output(&user, flags.format)
        }
    }
}

pub(crate) async fn add(username: &str, password: &str, ctx: &mut AppContext) -> anyhow::Result<User> {
    let mut errors = Vec::new();
    if username.trim().is_empty() {
        errors.push("Invalid username.".to_string());
    }
    if password.is_empty() {
        errors.push("Invalid password.".to_string());
    }
    if !errors.is_empty() {
        return Err(CoreError::Validation(errors).into());
    }

    if ctx.service.get_user(username).await?.is_some() {
        return Err(CoreError::Duplicate(format!("A user named '{username}' already exists.")).into());
    }

    let hash = parklog_auth::hash_password(password, ctx.config.auth.bcrypt_cost)?;
    let user = ctx.service.create_user(username, &hash).await?;
    ctx.request.flash_message(format!("{username} has been added."));
    Ok(user)
}
