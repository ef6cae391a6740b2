pub mod auth;
pub mod dispatch;
pub mod init;
pub mod park;
pub mod shared;
pub mod user;
pub mod visit;
