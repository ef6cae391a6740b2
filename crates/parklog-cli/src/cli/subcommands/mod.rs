mod park;
mod user;
mod visit;

pub use park::{ParkCommands, SortKey};
pub use user::UserCommands;
pub use visit::VisitCommands;
