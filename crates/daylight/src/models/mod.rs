mod query;

pub use query::{DateQuery, SunriseSunsetIdsQuery};
