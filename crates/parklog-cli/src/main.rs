use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use parklog_core::context::Flash;
use parklog_core::errors::CoreError;
use parklog_db::error::DatabaseError;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;

#[cfg(test)]
mod test_support;

/// Shown instead of storage error details, which go to the log.
const STORAGE_FAILURE: &str = "the park database could not complete the request";

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("parklog error: {}", user_message(&error));
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<ExitCode> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();

    if matches!(cli.command, cli::Commands::Init) {
        commands::init::handle(&flags).await?;
        return Ok(ExitCode::SUCCESS);
    }

    let project_root = context::resolve_project_root(flags.project.as_deref())?;
    let config = bootstrap::load_config(&project_root)?;
    let mut ctx = context::AppContext::init(&project_root, config)
        .await
        .context("failed to initialize parklog application context")?;

    let result = commands::dispatch::dispatch(cli.command, &mut ctx, &flags).await;

    if let Err(error) = ctx.save_session() {
        tracing::warn!(%error, "failed to save session");
    }

    let code = match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            ctx.request.flash_error(user_message(&error));
            ExitCode::FAILURE
        }
    };
    print_flash(ctx.request.take_flash(), flags.quiet);
    Ok(code)
}

/// What the user sees for a failed command.
///
/// Storage failures are logged in full and reported generically.
fn user_message(error: &anyhow::Error) -> String {
    if error.chain().any(|cause| cause.is::<DatabaseError>()) {
        tracing::error!("storage failure: {error:#}");
        return STORAGE_FAILURE.to_string();
    }
    if let Some(core) = error.downcast_ref::<CoreError>() {
        return core.messages().join("\n");
    }
    format!("{error:#}")
}

fn print_flash(flash: Flash, quiet: bool) {
    if let Some(message) = flash.message
        && !quiet
    {
        eprintln!("{message}");
    }
    if let Some(error) = flash.error {
        eprintln!("{error}");
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("PARKLOG_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
