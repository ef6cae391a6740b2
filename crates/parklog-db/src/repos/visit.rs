//! Visit repository.

use chrono::NaiveDate;
use parklog_core::entities::Visit;

use crate::error::DatabaseError;
use crate::helpers::{format_date, get_opt_string, page_bounds, parse_date, read_count};
use crate::service::ParkService;

const COUNT_VISITS: &str = "SELECT count(id) FROM visits WHERE park_id = ?1";

const LIST_VISITS_PAGE: &str = "SELECT id, park_id, date_visited, note
     FROM visits WHERE park_id = ?1
     ORDER BY date_visited, id
     LIMIT ?2 OFFSET ?3";

const VISIT_EXISTS: &str =
    "SELECT 1 FROM visits WHERE park_id = ?1 AND date_visited = ?2 LIMIT 1";

const GET_VISIT: &str = "SELECT id, park_id, date_visited, note FROM visits WHERE id = ?1";

const INSERT_VISIT: &str = "INSERT INTO visits (park_id, date_visited, note) VALUES (?1, ?2, ?3)";

const UPDATE_VISIT: &str = "UPDATE visits SET date_visited = ?1, note = ?2 WHERE id = ?3";

const DELETE_VISIT: &str = "DELETE FROM visits WHERE id = ?1";

fn row_to_visit(row: &libsql::Row) -> Result<Visit, DatabaseError> {
    Ok(Visit {
        id: row.get::<i64>(0)?,
        park_id: row.get::<i64>(1)?,
        date_visited: parse_date(&row.get::<String>(2)?)?,
        note: get_opt_string(row, 3)?,
    })
}

/// Empty notes are stored as NULL.
fn stored_note(note: Option<&str>) -> Option<&str> {
    note.filter(|n| !n.is_empty())
}

impl ParkService {
    pub async fn count_visits(&self, park_id: i64) -> Result<i64, DatabaseError> {
        let rows = self.db().conn().query(COUNT_VISITS, [park_id]).await?;
        read_count(rows).await
    }

    /// One page of a park's visits, oldest first.
    pub async fn list_visits(
        &self,
        park_id: i64,
        page_size: u32,
        page_num: u32,
    ) -> Result<Vec<Visit>, DatabaseError> {
        let (limit, offset) = page_bounds(page_size, page_num);
        tracing::debug!(park_id, limit, offset, "listing visits");
        let mut rows = self
            .db()
            .conn()
            .query(LIST_VISITS_PAGE, libsql::params![park_id, limit, offset])
            .await?;

        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_visit(&row)?);
        }
        Ok(results)
    }

    /// Whether the park already has a visit recorded on `date`.
    pub async fn visit_exists(&self, park_id: i64, date: NaiveDate) -> Result<bool, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(VISIT_EXISTS, libsql::params![park_id, format_date(date)])
            .await?;
        Ok(rows.next().await?.is_some())
    }

    pub async fn get_visit(&self, id: i64) -> Result<Option<Visit>, DatabaseError> {
        let mut rows = self.db().conn().query(GET_VISIT, [id]).await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_visit(&row)?)),
            None => Ok(None),
        }
    }

    /// Record a visit and return it with its generated id.
    pub async fn add_visit(
        &self,
        park_id: i64,
        date: NaiveDate,
        note: Option<&str>,
    ) -> Result<Visit, DatabaseError> {
        let note = stored_note(note);
        let conn = self.db().conn();
        conn.execute(
            INSERT_VISIT,
            libsql::params![park_id, format_date(date), note],
        )
        .await?;

        let id = conn.last_insert_rowid();
        tracing::debug!(id, park_id, %date, "recorded visit");
        Ok(Visit {
            id,
            park_id,
            date_visited: date,
            note: note.map(str::to_string),
        })
    }

    /// Replace the date and note of a visit. A `None` note clears it.
    pub async fn update_visit(
        &self,
        id: i64,
        date: NaiveDate,
        note: Option<&str>,
    ) -> Result<(), DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute(
                UPDATE_VISIT,
                libsql::params![format_date(date), stored_note(note), id],
            )
            .await?;
        tracing::debug!(id, changed, "updated visit");
        Ok(())
    }

    pub async fn delete_visit(&self, id: i64) -> Result<(), DatabaseError> {
        let changed = self.db().conn().execute(DELETE_VISIT, [id]).await?;
        tracing::debug!(id, changed, "deleted visit");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::test_support::helpers::{date, seed_park, test_service};

    #[tokio::test]
    async fn add_and_get_visit() {
        let svc = test_service().await;
        let park = seed_park(&svc, "Zion").await;

        let visit = svc
            .add_visit(park.id, date("2024-05-01"), Some("Angels Landing"))
            .await
            .unwrap();
        assert!(visit.id > 0);

        let fetched = svc.get_visit(visit.id).await.unwrap().unwrap();
        assert_eq!(fetched, visit);
        assert_eq!(fetched.note.as_deref(), Some("Angels Landing"));
    }

    #[tokio::test]
    async fn empty_note_is_stored_as_null() {
        let svc = test_service().await;
        let park = seed_park(&svc, "Zion").await;
        let visit = svc.add_visit(park.id, date("2024-05-01"), Some("")).await.unwrap();
        assert_eq!(visit.note, None);

        let mut rows = svc
            .db()
            .conn()
            .query("SELECT note IS NULL FROM visits WHERE id = ?1", [visit.id])
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<i64>(0).unwrap(), 1);
    }

    #[tokio::test]
    async fn visit_exists_is_per_park_and_date() {
        let svc = test_service().await;
        let zion = seed_park(&svc, "Zion").await;
        let arches = seed_park(&svc, "Arches").await;
        svc.add_visit(zion.id, date("2024-05-01"), None).await.unwrap();

        assert!(svc.visit_exists(zion.id, date("2024-05-01")).await.unwrap());
        assert!(!svc.visit_exists(zion.id, date("2024-05-02")).await.unwrap());
        assert!(!svc.visit_exists(arches.id, date("2024-05-01")).await.unwrap());
    }

    #[tokio::test]
    async fn list_visits_pages_oldest_first() {
        let svc = test_service().await;
        let park = seed_park(&svc, "Zion").await;
        for day in ["2024-05-04", "2024-05-01", "2024-05-03", "2024-05-02"] {
            svc.add_visit(park.id, date(day), None).await.unwrap();
        }
        assert_eq!(svc.count_visits(park.id).await.unwrap(), 4);

        let first: Vec<_> = svc
            .list_visits(park.id, 3, 1)
            .await
            .unwrap()
            .into_iter()
            .map(|v| v.date_visited)
            .collect();
        assert_eq!(
            first,
            vec![date("2024-05-01"), date("2024-05-02"), date("2024-05-03")]
        );

        let second = svc.list_visits(park.id, 3, 2).await.unwrap();
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].date_visited, date("2024-05-04"));
    }

    #[tokio::test]
    async fn list_visits_for_park_without_visits_is_empty() {
        let svc = test_service().await;
        let park = seed_park(&svc, "Zion").await;
        assert!(svc.list_visits(park.id, 3, 1).await.unwrap().is_empty());
        assert_eq!(svc.count_visits(park.id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn update_visit_replaces_date_and_clears_note() {
        let svc = test_service().await;
        let park = seed_park(&svc, "Zion").await;
        let visit = svc
            .add_visit(park.id, date("2024-05-01"), Some("Narrows"))
            .await
            .unwrap();

        svc.update_visit(visit.id, date("2024-06-01"), None).await.unwrap();

        let updated = svc.get_visit(visit.id).await.unwrap().unwrap();
        assert_eq!(updated.date_visited, date("2024-06-01"));
        assert_eq!(updated.note, None);
    }

    #[tokio::test]
    async fn delete_visit_removes_only_that_visit() {
        let svc = test_service().await;
        let park = seed_park(&svc, "Zion").await;
        let keep = svc.add_visit(park.id, date("2024-05-01"), None).await.unwrap();
        let gone = svc.add_visit(park.id, date("2024-05-02"), None).await.unwrap();

        svc.delete_visit(gone.id).await.unwrap();

        assert!(svc.get_visit(gone.id).await.unwrap().is_none());
        assert!(svc.get_visit(keep.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn add_visit_for_missing_park_fails() {
        let svc = test_service().await;
        assert!(svc.add_visit(999, date("2024-05-01"), None).await.is_err());
    }
}
