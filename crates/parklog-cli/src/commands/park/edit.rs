use parklog_core::entities::Park;
use parklog_core::errors::CoreError;
use parklog_core::validation::ParkForm;

use crate::cli::GlobalFlags;
use crate::commands::park::add::duplicate_park;
use crate::commands::shared::lookup::require_park;
use crate::context::AppContext;
use crate::output::output;

/// Submitted edits; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct ParkChanges {
    pub name: Option<String>,
    pub state: Option<String>,
    pub date_established: Option<String>,
    pub area_km2: Option<String>,
    pub description: Option<String>,
}

impl ParkChanges {
    fn apply(&self, park: &Park) -> ParkForm {
        let current = ParkForm::from_park(park);
        ParkForm {
            name: self.name.clone().unwrap_or(current.name),
            state: self.state.clone().unwrap_or(current.state),
            date_established: self
                .date_established
                .clone()
                .unwrap_or(current.date_established),
            area_km2: self.area_km2.clone().unwrap_or(current.area_km2),
            description: self.description.clone().unwrap_or(current.description),
        }
    }
}

pub async fn run(
    name: &str,
    changes: &ParkChanges,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let park = execute(name, changes, ctx).await?;
    output(&park, flags.format)
}

pub(crate) async fn execute(
    name: &str,
    changes: &ParkChanges,
    ctx: &mut AppContext,
) -> anyhow::Result<Park> {
    let park = require_park(ctx, name).await?;
    let form = changes.apply(&park);

    if form.is_unchanged_from(&park) {
        ctx.request.flash_message("No changes were made.");
        return Ok(park);
    }

    let updated = form.validate()?;
    let renamed = !updated.name.eq_ignore_ascii_case(&park.name);
    if renamed && ctx.service.park_exists(&updated.name).await? {
        return Err(duplicate_park(&updated.name).into());
    }

    ctx.service.update_park(park.id, &updated).await?;
    let stored = ctx
        .service
        .get_park_by_id(park.id)
        .await?
        .ok_or_else(|| CoreError::park_not_found(&updated.name))?;
    ctx.request
        .flash_message(format!("{} has been updated.", stored.name));
    Ok(stored)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{seed_park, test_context};

    #[tokio::test]
    async fn omitted_fields_keep_current_values() {
        let (_tmp, mut ctx) = test_context().await;
        let zion = seed_park(&ctx, "Zion").await;

        let changes = ParkChanges {
            area_km2: Some("600".into()),
            ..ParkChanges::default()
        };
        let updated = execute("Zion", &changes, &mut ctx).await.unwrap();

        assert_eq!(updated.area_km2, 600);
        assert_eq!(updated.state, zion.state);
        assert_eq!(updated.description, zion.description);
        assert_eq!(
            ctx.service.get_park("Zion").await.unwrap().unwrap().area_km2,
            600
        );
        assert_eq!(
            ctx.request.take_flash().message.as_deref(),
            Some("Zion has been updated.")
        );
    }

    #[tokio::test]
    async fn unchanged_edit_writes_nothing() {
        let (_tmp, mut ctx) = test_context().await;
        let zion = seed_park(&ctx, "Zion").await;

        let changes = ParkChanges {
            name: Some("Zion".into()),
            area_km2: Some(zion.area_km2.to_string()),
            ..ParkChanges::default()
        };
        let result = execute("Zion", &changes, &mut ctx).await.unwrap();

        assert_eq!(result, zion);
        assert_eq!(
            ctx.request.take_flash().message.as_deref(),
            Some("No changes were made.")
        );
    }

    #[tokio::test]
    async fn edit_returns_the_stored_row() {
        let (_tmp, mut ctx) = test_context().await;
        let zion = seed_park(&ctx, "Zion").await;

        let changes = ParkChanges {
            name: Some("Zion National Park".into()),
            area_km2: Some("600 km2".into()),
            ..ParkChanges::default()
        };
        let updated = execute("Zion", &changes, &mut ctx).await.unwrap();

        assert_eq!(updated.id, zion.id);
        assert_eq!(updated.area_km2, 600);
        assert_eq!(
            ctx.service.get_park_by_id(zion.id).await.unwrap(),
            Some(updated)
        );
        assert_eq!(
            ctx.request.take_flash().message.as_deref(),
            Some("Zion National Park has been updated.")
        );
    }

    #[tokio::test]
    async fn invalid_change_is_rejected() {
        let (_tmp, mut ctx) = test_context().await;
        seed_park(&ctx, "Zion").await;

        let changes = ParkChanges {
            area_km2: Some("0".into()),
            ..ParkChanges::default()
        };
        let err = execute("Zion", &changes, &mut ctx).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::Validation(messages)) if messages == &vec!["Invalid area.".to_string()]
        ));
    }

    #[tokio::test]
    async fn renaming_onto_another_park_is_a_duplicate() {
        let (_tmp, mut ctx) = test_context().await;
        seed_park(&ctx, "Zion").await;
        seed_park(&ctx, "Arches").await;

        let changes = ParkChanges {
            name: Some("arches".into()),
            ..ParkChanges::default()
        };
        let err = execute("Zion", &changes, &mut ctx).await.unwrap_err();
        assert_eq!(err.to_string(), "A park named 'arches' already exists.");
    }

    #[tokio::test]
    async fn changing_only_the_case_of_the_name_is_allowed() {
        let (_tmp, mut ctx) = test_context().await;
        seed_park(&ctx, "zion").await;

        let changes = ParkChanges {
            name: Some("Zion".into()),
            ..ParkChanges::default()
        };
        let updated = execute("zion", &changes, &mut ctx).await.unwrap();
        assert_eq!(updated.name, "Zion");
    }

    #[tokio::test]
    async fn missing_park_is_not_found() {
        let (_tmp, mut ctx) = test_context().await;
        let err = execute("Atlantis", &ParkChanges::default(), &mut ctx)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "The park 'Atlantis' was not found.");
    }
}
