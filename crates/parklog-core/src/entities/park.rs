use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A named protected area.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Park {
    pub id: i64,
    /// Unique, compared case-insensitively by the store.
    pub name: String,
    pub state: String,
    pub date_established: NaiveDate,
    pub area_km2: i64,
    pub description: String,
}

/// A park row as shown in listings, with the number of recorded visits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParkSummary {
    #[serde(flatten)]
    pub park: Park,
    pub visit_count: i64,
}

/// Validated field values for inserting or fully updating a park.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewPark {
    pub name: String,
    pub state: String,
    pub date_established: NaiveDate,
    pub area_km2: i64,
    pub description: String,
}

impl NewPark {
    /// Attach a generated id, producing the stored entity.
    #[must_use]
    pub fn with_id(self, id: i64) -> Park {
        Park {
            id,
            name: self.name,
            state: self.state,
            date_established: self.date_established,
            area_km2: self.area_km2,
            description: self.description,
        }
    }
}
