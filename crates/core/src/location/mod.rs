mod error;
mod operations;
mod types;

pub use error::LocationError;
pub use operations::{
    apply_location_update, attach_sunrise_sunsets, apply_sunrise_sunset_update,
    replace_sunrise_sunsets, sort_by_name, validate_location, validate_sunrise_sunset,
};
pub use types::{Location, SunriseSunset};
