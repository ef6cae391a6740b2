//! Listing page sizes.

use serde::{Deserialize, Serialize};

const fn default_parks_per_page() -> u32 {
    5
}

const fn default_visits_per_page() -> u32 {
    3
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaginationConfig {
    /// Parks per page in the park listing.
    #[serde(default = "default_parks_per_page")]
    pub parks_per_page: u32,

    /// Visits per page in a park's visit listing.
    #[serde(default = "default_visits_per_page")]
    pub visits_per_page: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            parks_per_page: default_parks_per_page(),
            visits_per_page: default_visits_per_page(),
        }
    }
}
