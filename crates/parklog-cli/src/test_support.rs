//! Shared fixtures for handler tests.

use chrono::NaiveDate;
use parklog_config::ParkConfig;
use parklog_core::entities::{NewPark, Park};
use tempfile::TempDir;

use crate::context::AppContext;

/// An app context over an in-memory database, with its session file in a
/// temporary project directory. Keep the `TempDir` alive for the test.
pub async fn test_context() -> (TempDir, AppContext) {
    let tmp = TempDir::new().expect("tempdir should create");
    let mut config = ParkConfig::default();
    config.database.path = ":memory:".into();
    config.auth.bcrypt_cost = 4;

    let ctx = AppContext::init(tmp.path(), config)
        .await
        .expect("context should init");
    (tmp, ctx)
}

pub fn new_park(name: &str) -> NewPark {
    NewPark {
        name: name.to_string(),
        state: "Utah".to_string(),
        date_established: date("1919-11-19"),
        area_km2: 595,
        description: format!("{name} description"),
    }
}

pub async fn seed_park(ctx: &AppContext, name: &str) -> Park {
    ctx.service.insert_park(&new_park(name)).await.unwrap()
}

pub async fn seed_user(ctx: &AppContext, username: &str, password: &str) {
    let hash = parklog_auth::hash_password(password, 4).unwrap();
    ctx.service.create_user(username, &hash).await.unwrap();
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}
