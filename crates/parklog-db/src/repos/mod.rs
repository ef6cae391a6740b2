//! Repository implementations on `ParkService`.

pub mod park;
pub mod user;
pub mod visit;

pub use park::ParkSort;
