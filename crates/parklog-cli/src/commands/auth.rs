use parklog_core::errors::CoreError;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SessionResponse {
    username: Option<String>,
    /// A request refused earlier for lack of a sign-in.
    resume: Option<String>,
}

/// Handle `parklog signin`.
pub async fn signin(
    username: &str,
    password: &str,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let resume = execute_signin(username, password, ctx).await?;
    output(
        &SessionResponse {
            username: Some(username.to_string()),
            resume,
        },
        flags.format,
    )
}

/// Handle `parklog signout`.
pub fn signout(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    execute_signout(ctx);
    output(
        &SessionResponse {
            username: None,
            resume: None,
        },
        flags.format,
    )
}

pub(crate) async fn execute_signin(
    username: &str,
    password: &str,
    ctx: &mut AppContext,
) -> anyhow::Result<Option<String>> {
    let Some(user) = ctx.service.get_user(username).await? else {
        tracing::debug!(username, "sign-in for unknown user");
        return Err(CoreError::InvalidCredentials.into());
    };
    if !parklog_auth::verify_password(password, &user.password_hash)? {
        tracing::debug!(username, "sign-in with wrong password");
        return Err(CoreError::InvalidCredentials.into());
    }

    let resume = ctx.request.sign_in(&user.username);
    match &resume {
        Some(request) => ctx.request.flash_message(format!(
            "Welcome, {}! Run `parklog {request}` to pick up where you left off.",
            user.username
        )),
        None => ctx.request.flash_message(format!("Welcome, {}!", user.username)),
    }
    Ok(resume)
}

pub(crate) fn execute_signout(ctx: &mut AppContext) {
    ctx.request.sign_out();
    ctx.request.flash_message("You have been signed out.");
}
