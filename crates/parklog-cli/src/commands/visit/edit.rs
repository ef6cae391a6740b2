use parklog_core::entities::Visit;
use parklog_core::validation::VisitForm;

use super::duplicate_visit;
use crate::cli::GlobalFlags;
use crate::commands::shared::lookup::{require_park, require_visit};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    park: &str,
    id: i64,
    date: Option<&str>,
    note: Option<&str>,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let visit = execute(park, id, date, note, ctx).await?;
    output(&visit, flags.format)
}

pub(crate) async fn execute(
    park: &str,
    id: i64,
    date: Option<&str>,
    note: Option<&str>,
    ctx: &mut AppContext,
) -> anyhow::Result<Visit> {
    let park = require_park(ctx, park).await?;
    let visit = require_visit(ctx, &park, id).await?;

    let current = VisitForm::from_visit(&visit);
    let form = VisitForm {
        date_visited: date.map_or(current.date_visited, String::from),
        note: note.map(String::from).or(current.note),
    };

    if form.is_unchanged_from(&visit) {
        ctx.request.flash_message("No changes were made.");
        return Ok(visit);
    }

    let changed = form.validate()?;
    if changed.date_visited != visit.date_visited
        && ctx.service.visit_exists(park.id, changed.date_visited).await?
    {
        return Err(duplicate_visit(changed.date_visited, &park.name).into());
    }

    ctx.service
        .update_visit(visit.id, changed.date_visited, changed.note.as_deref())
        .await?;
    ctx.request.flash_message(format!(
        "Your visit to {} on {} has been updated.",
        park.name, changed.date_visited
    ));

    Ok(Visit {
        id: visit.id,
        park_id: visit.park_id,
        date_visited: changed.date_visited,
        note: changed.note,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{date, seed_park, test_context};

    #[tokio::test]
    async fn empty_note_clears_it() {
        let (_tmp, mut ctx) = test_context().await;
        let park = seed_park(&ctx, "Zion").await;
        let visit = ctx
            .service
            .add_visit(park.id, date("2024-05-01"), Some("Narrows"))
            .await
            .unwrap();

        let updated = execute("Zion", visit.id, None, Some(""), &mut ctx).await.unwrap();

        assert_eq!(updated.note, None);
        assert_eq!(updated.date_visited, date("2024-05-01"));
        let stored = ctx.service.get_visit(visit.id).await.unwrap().unwrap();
        assert_eq!(stored.note, None);
    }

    #[tokio::test]
    async fn omitted_flags_are_no_change() {
        let (_tmp, mut ctx) = test_context().await;
        let park = seed_park(&ctx, "Zion").await;
        let visit = ctx
            .service
            .add_visit(park.id, date("2024-05-01"), Some("Narrows"))
            .await
            .unwrap();

        let result = execute("Zion", visit.id, None, None, &mut ctx).await.unwrap();
        assert_eq!(result, visit);
        assert_eq!(
            ctx.request.take_flash().message.as_deref(),
            Some("No changes were made.")
        );
    }

    #[tokio::test]
    async fn moving_onto_a_recorded_date_is_a_duplicate() {
        let (_tmp, mut ctx) = test_context().await;
        let park = seed_park(&ctx, "Zion").await;
        ctx.service
            .add_visit(park.id, date("2024-05-01"), None)
            .await
            .unwrap();
        let second = ctx
            .service
            .add_visit(park.id, date("2024-05-02"), None)
            .await
            .unwrap();

        let err = execute("Zion", second.id, Some("2024-05-01"), None, &mut ctx)
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "A visit on 2024-05-01 is already recorded for Zion."
        );
    }

    #[tokio::test]
    async fn changing_only_the_note_keeps_the_date() {
        let (_tmp, mut ctx) = test_context().await;
        let park = seed_park(&ctx, "Zion").await;
        let visit = ctx
            .service
            .add_visit(park.id, date("2024-05-01"), None)
            .await
            .unwrap();

        let updated = execute("Zion", visit.id, Some("2024-05-01"), Some("Sunny"), &mut ctx)
            .await
            .unwrap();
        assert_eq!(updated.note.as_deref(), Some("Sunny"));
    }

    #[tokio::test]
    async fn visit_must_belong_to_named_park() {
        let (_tmp, mut ctx) = test_context().await;
        seed_park(&ctx, "Zion").await;
        let arches = seed_park(&ctx, "Arches").await;
        let visit = ctx
            .service
            .add_visit(arches.id, date("2024-05-01"), None)
            .await
            .unwrap();

        assert!(
            execute("Zion", visit.id, Some("2024-05-02"), None, &mut ctx)
                .await
                .is_err()
        );
    }
}
