//! Shared test utilities for parklog-db unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use chrono::NaiveDate;
    use parklog_core::entities::{NewPark, Park};

    use crate::ParkDb;
    use crate::service::ParkService;

    /// Create an in-memory ParkService.
    pub async fn test_service() -> ParkService {
        let db = ParkDb::open_local(":memory:").await.unwrap();
        ParkService::from_db(db)
    }

    /// Field values for a park called `name`.
    pub fn new_park(name: &str) -> NewPark {
        NewPark {
            name: name.to_string(),
            state: "Utah".to_string(),
            date_established: NaiveDate::from_ymd_opt(1919, 11, 19).unwrap(),
            area_km2: 595,
            description: format!("{name} description"),
        }
    }

    /// Insert a park called `name` and return it.
    pub async fn seed_park(svc: &ParkService, name: &str) -> Park {
        svc.insert_park(&new_park(name)).await.unwrap()
    }

    pub fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }
}
