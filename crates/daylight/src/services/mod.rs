//! Service layer.
//!
//! Services sit between the HTTP handlers and the repositories. The location
//! service runs the cache-aside read path and clears the whole location cache
//! after every successful write. The sunrise/sunset service is an uncached
//! pass-through. Both bump the shared request counter once per operation.

mod location;
mod sunrise_sunset;

#[cfg(test)]
pub(crate) mod test_support;

pub use location::LocationService;
pub use sunrise_sunset::SunriseSunsetService;
