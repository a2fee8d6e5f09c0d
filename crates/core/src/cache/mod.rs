mod error;
mod keys;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{all_locations_key, location_key, locations_by_date_key};
pub use traits::{CachedLocations, LocationCache};
