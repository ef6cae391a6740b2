use parklog_core::entities::Park;
use parklog_core::errors::CoreError;
use parklog_core::validation::ParkForm;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(form: &ParkForm, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let park = execute(form, ctx).await?;
    output(&park, flags.format)
}

pub(crate) async fn execute(form: &ParkForm, ctx: &mut AppContext) -> anyhow::Result<Park> {
    let new_park = form.validate()?;

    if ctx.service.park_exists(&new_park.name).await? {
        return Err(duplicate_park(&new_park.name).into());
    }

    let park = ctx.service.insert_park(&new_park).await?;
    ctx.request.flash_message(format!("{} has been added.", park.name));
    Ok(park)
}

pub(crate) fn duplicate_park(name: &str) -> CoreError {
    CoreError::Duplicate(format!("A park named '{name}' already exists."))
}
