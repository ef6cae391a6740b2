//! Park repository: CRUD, paginated listing, and sorted listing.

use parklog_core::entities::{NewPark, Park, ParkSummary};

use crate::error::DatabaseError;
use crate::helpers::{format_date, page_bounds, parse_date, read_count};
use crate::service::ParkService;

const COUNT_PARKS: &str = "SELECT count(id) FROM park_info";

const PARK_EXISTS: &str = "SELECT 1 FROM park_info WHERE name = ?1 COLLATE NOCASE LIMIT 1";

const GET_PARK_BY_NAME: &str = "SELECT id, name, state, date_established, area_km2, description
     FROM park_info WHERE name = ?1 COLLATE BINARY";

const GET_PARK_BY_ID: &str = "SELECT id, name, state, date_established, area_km2, description
     FROM park_info WHERE id = ?1";

const LIST_PARKS_PAGE: &str =
    "SELECT p.id, p.name, p.state, p.date_established, p.area_km2, p.description, count(v.id)
     FROM park_info AS p
     LEFT JOIN visits AS v ON p.id = v.park_id
     GROUP BY p.id
     ORDER BY p.name, p.id
     LIMIT ?1 OFFSET ?2";

const LIST_PARKS_BY_NAME: &str =
    "SELECT p.id, p.name, p.state, p.date_established, p.area_km2, p.description, count(v.id)
     FROM park_info AS p
     LEFT JOIN visits AS v ON p.id = v.park_id
     GROUP BY p.id
     ORDER BY p.name, p.id";

const LIST_PARKS_BY_STATE: &str =
    "SELECT p.id, p.name, p.state, p.date_established, p.area_km2, p.description, count(v.id)
     FROM park_info AS p
     LEFT JOIN visits AS v ON p.id = v.park_id
     GROUP BY p.id
     ORDER BY p.state, p.name, p.id";

const LIST_PARKS_BY_ESTABLISHED: &str =
    "SELECT p.id, p.name, p.state, p.date_established, p.area_km2, p.description, count(v.id)
     FROM park_info AS p
     LEFT JOIN visits AS v ON p.id = v.park_id
     GROUP BY p.id
     ORDER BY p.date_established, p.name, p.id";

const LIST_PARKS_BY_AREA: &str =
    "SELECT p.id, p.name, p.state, p.date_established, p.area_km2, p.description, count(v.id)
     FROM park_info AS p
     LEFT JOIN visits AS v ON p.id = v.park_id
     GROUP BY p.id
     ORDER BY p.area_km2, p.name, p.id";

const INSERT_PARK: &str =
    "INSERT INTO park_info (name, state, date_established, area_km2, description)
     VALUES (?1, ?2, ?3, ?4, ?5)";

const UPDATE_PARK: &str = "UPDATE park_info
     SET name = ?1, state = ?2, date_established = ?3, area_km2 = ?4, description = ?5
     WHERE id = ?6";

const DELETE_PARK_VISITS: &str = "DELETE FROM visits
     WHERE park_id IN (SELECT id FROM park_info WHERE name = ?1 COLLATE BINARY)";

const DELETE_PARK: &str = "DELETE FROM park_info WHERE name = ?1 COLLATE BINARY";

/// Ordering for the full (unpaginated) park listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParkSort {
    #[default]
    Name,
    State,
    Established,
    Area,
}

impl ParkSort {
    const fn query(self) -> &'static str {
        match self {
            Self::Name => LIST_PARKS_BY_NAME,
            Self::State => LIST_PARKS_BY_STATE,
            Self::Established => LIST_PARKS_BY_ESTABLISHED,
            Self::Area => LIST_PARKS_BY_AREA,
        }
    }
}

fn row_to_park(row: &libsql::Row) -> Result<Park, DatabaseError> {
    Ok(Park {
        id: row.get::<i64>(0)?,
        name: row.get::<String>(1)?,
        state: row.get::<String>(2)?,
        date_established: parse_date(&row.get::<String>(3)?)?,
        area_km2: row.get::<i64>(4)?,
        description: row.get::<String>(5)?,
    })
}

fn row_to_summary(row: &libsql::Row) -> Result<ParkSummary, DatabaseError> {
    Ok(ParkSummary {
        park: row_to_park(row)?,
        visit_count: row.get::<i64>(6)?,
    })
}

async fn collect_summaries(mut rows: libsql::Rows) -> Result<Vec<ParkSummary>, DatabaseError> {
    let mut results = Vec::new();
    while let Some(row) = rows.next().await? {
        results.push(row_to_summary(&row)?);
    }
    Ok(results)
}

impl ParkService {
    pub async fn count_parks(&self) -> Result<i64, DatabaseError> {
        let rows = self.db().conn().query(COUNT_PARKS, ()).await?;
        read_count(rows).await
    }

    /// Whether a park with this name exists, ignoring case.
    pub async fn park_exists(&self, name: &str) -> Result<bool, DatabaseError> {
        let mut rows = self.db().conn().query(PARK_EXISTS, [name]).await?;
        Ok(rows.next().await?.is_some())
    }

    /// One page of parks ordered by name, each with its visit count.
    ///
    /// `page_num` is one-based and expected to be within range already.
    pub async fn list_parks(
        &self,
        page_size: u32,
        page_num: u32,
    ) -> Result<Vec<ParkSummary>, DatabaseError> {
        let (limit, offset) = page_bounds(page_size, page_num);
        tracing::debug!(limit, offset, "listing parks");
        let rows = self
            .db()
            .conn()
            .query(LIST_PARKS_PAGE, libsql::params![limit, offset])
            .await?;
        collect_summaries(rows).await
    }

    /// Every park, in the requested order, each with its visit count.
    pub async fn list_all_parks(&self, sort: ParkSort) -> Result<Vec<ParkSummary>, DatabaseError> {
        tracing::debug!(?sort, "listing all parks");
        let rows = self.db().conn().query(sort.query(), ()).await?;
        collect_summaries(rows).await
    }

    /// Look up a park by its exact (case-sensitive) name.
    pub async fn get_park(&self, name: &str) -> Result<Option<Park>, DatabaseError> {
        let mut rows = self.db().conn().query(GET_PARK_BY_NAME, [name]).await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_park(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn get_park_by_id(&self, id: i64) -> Result<Option<Park>, DatabaseError> {
        let mut rows = self.db().conn().query(GET_PARK_BY_ID, [id]).await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_park(&row)?)),
            None => Ok(None),
        }
    }

    /// Insert a park and return it with its generated id.
    ///
    /// Fails with a libSQL constraint error if the name is already taken.
    pub async fn insert_park(&self, park: &NewPark) -> Result<Park, DatabaseError> {
        let conn = self.db().conn();
        conn.execute(
            INSERT_PARK,
            libsql::params![
                park.name.as_str(),
                park.state.as_str(),
                format_date(park.date_established),
                park.area_km2,
                park.description.as_str()
            ],
        )
        .await?;

        let id = conn.last_insert_rowid();
        tracing::debug!(id, name = %park.name, "inserted park");
        Ok(park.clone().with_id(id))
    }

    /// Overwrite every field of the park with the given id.
    pub async fn update_park(&self, id: i64, park: &NewPark) -> Result<(), DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute(
                UPDATE_PARK,
                libsql::params![
                    park.name.as_str(),
                    park.state.as_str(),
                    format_date(park.date_established),
                    park.area_km2,
                    park.description.as_str(),
                    id
                ],
            )
            .await?;
        tracing::debug!(id, changed, "updated park");
        Ok(())
    }

    /// Delete a park (exact name) together with all of its visits.
    pub async fn delete_park(&self, name: &str) -> Result<(), DatabaseError> {
        let tx = self.db().conn().transaction().await?;
        let visits = tx.execute(DELETE_PARK_VISITS, [name]).await?;
        let parks = tx.execute(DELETE_PARK, [name]).await?;
        tx.commit().await?;

        tracing::debug!(name, parks, visits, "deleted park");
        Ok(())
    }
}
