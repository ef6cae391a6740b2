//! Entity structs for all parklog domain objects.
//!
//! Each entity maps to a table in the libSQL database (see
//! `parklog-db/migrations/001_initial.sql`). All structs derive `Serialize`
//! and `Deserialize` so the CLI can render them directly.

mod park;
mod user;
mod visit;

pub use park::{NewPark, Park, ParkSummary};
pub use user::User;
pub use visit::{NewVisit, Visit};

/// Storage and display format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
