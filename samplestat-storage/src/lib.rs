pub mod sqlite;
pub mod schema;
pub mod repositories;

pub use repositories::*;
