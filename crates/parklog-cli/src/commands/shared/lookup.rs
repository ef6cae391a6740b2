use parklog_core::entities::{Park, Visit};
use parklog_core::errors::CoreError;

use crate::context::AppContext;

/// Fetch a park by exact name, or fail with a not-found error.
pub async fn require_park(ctx: &AppContext, name: &str) -> anyhow::Result<Park> {
    ctx.service
        .get_park(name)
        .await?
        .ok_or_else(|| CoreError::park_not_found(name).into())
}

/// Fetch a visit that belongs to `park`, or fail with a not-found error.
pub async fn require_visit(ctx: &AppContext, park: &Park, id: i64) -> anyhow::Result<Visit> {
    match ctx.service.get_visit(id).await? {
        Some(visit) if visit.park_id == park.id => Ok(visit),
        _ => Err(CoreError::visit_not_found(id).into()),
    }
}

#[cfg(test)]
mod tests {
    use parklog_core::errors::CoreError;

    use super::*;
    use crate::test_support::{date, seed_park, test_context};

    #[tokio::test]
    async fn missing_park_is_not_found() {
        let (_tmp, ctx) = test_context().await;
        let err = require_park(&ctx, "Atlantis").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn visit_of_another_park_is_not_found() {
        let (_tmp, ctx) = test_context().await;
        let zion = seed_park(&ctx, "Zion").await;
        let arches = seed_park(&ctx, "Arches").await;
        let visit = ctx
            .service
            .add_visit(arches.id, date("2024-05-01"), None)
            .await
            .unwrap();

        assert!(require_visit(&ctx, &arches, visit.id).await.is_ok());
        let err = require_visit(&ctx, &zion, visit.id).await.unwrap_err();
        assert_eq!(err.to_string(), format!("The visit '{}' was not found.", visit.id));
    }
}
