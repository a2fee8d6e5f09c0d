pub mod counter;
pub mod error;
pub mod health;
pub mod locations;
pub mod sunrise_sunsets;

pub use error::{AppError, BadRequest};

use crate::models::SunriseSunsetIdsQuery;

/// Parses `?sunriseSunsetIds=`, rejecting non-integer tokens.
fn sunrise_sunset_ids(query: &SunriseSunsetIdsQuery) -> Result<Option<Vec<i64>>, BadRequest> {
    query
        .ids()
        .map_err(|e| BadRequest(format!("Invalid sunriseSunsetIds: {e}")))
}
