pub mod lookup;
pub mod page;
