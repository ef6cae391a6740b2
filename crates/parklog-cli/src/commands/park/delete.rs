use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::lookup::require_park;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct DeletedPark {
    deleted: String,
}

pub async fn run(name: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    execute(name, ctx).await?;
    output(
        &DeletedPark {
            deleted: name.to_string(),
        },
        flags.format,
    )
}

pub(crate) async fn execute(name: &str, ctx: &mut AppContext) -> anyhow::Result<()> {
    let park = require_park(ctx, name).await?;
    ctx.service.delete_park(&park.name).await?;
    ctx.request
        .flash_message(format!("{} park has been deleted.", capitalize(&park.name)));
    Ok(())
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
