use serde::{Deserialize, Serialize};

/// A sunrise/sunset observation for a date and a pair of coordinates.
///
/// The date and times are opaque strings: they are compared for equality but
/// never parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunriseSunset {
    /// Store-assigned identity, `None` until persisted.
    #[serde(default)]
    pub id: Option<i64>,
    pub date: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub sunrise: Option<String>,
    #[serde(default)]
    pub sunset: Option<String>,
}

impl SunriseSunset {
    /// Creates a new, not yet persisted record for the given date.
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            id: None,
            date: date.into(),
            latitude: None,
            longitude: None,
            sunrise: None,
            sunset: None,
        }
    }

    /// Sets the coordinates of this record.
    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// Sets the sunrise and sunset times.
    pub fn with_times(mut self, sunrise: impl Into<String>, sunset: impl Into<String>) -> Self {
        self.sunrise = Some(sunrise.into());
        self.sunset = Some(sunset.into());
        self
    }

    /// Sets a specific ID for this record (useful for testing).
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

/// A named geographic location with its associated sunrise/sunset records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Store-assigned identity, `None` until persisted.
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub country: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Many-to-many association, unique by id.
    #[serde(default)]
    pub sunrise_sunsets: Vec<SunriseSunset>,
}

impl Location {
    /// Creates a new, not yet persisted location.
    pub fn new(name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            country: country.into(),
            latitude: None,
            longitude: None,
            sunrise_sunsets: Vec::new(),
        }
    }

    /// Sets the coordinates of this location.
    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// Sets a specific ID for this location (useful for testing).
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns the ids of the associated sunrise/sunset records.
    pub fn sunrise_sunset_ids(&self) -> Vec<i64> {
        self.sunrise_sunsets.iter().filter_map(|s| s.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_serializes_camel_case() {
        let location = Location::new("Minsk", "Belarus")
            .with_id(1)
            .with_coordinates(53.9, 27.56);

        let json = serde_json::to_value(&location).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Minsk");
        assert_eq!(json["latitude"], 53.9);
        assert!(json["sunriseSunsets"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_location_deserializes_without_optional_fields() {
        let location: Location =
            serde_json::from_str(r#"{"name":"Oslo","country":"Norway"}"#).unwrap();

        assert_eq!(location.id, None);
        assert_eq!(location.latitude, None);
        assert!(location.sunrise_sunsets.is_empty());
    }

    #[test]
    fn test_sunrise_sunset_ids_skips_unpersisted() {
        let mut location = Location::new("Oslo", "Norway");
        location
            .sunrise_sunsets
            .push(SunriseSunset::new("2025-04-04").with_id(3));
        location.sunrise_sunsets.push(SunriseSunset::new("2025-04-05"));

        assert_eq!(location.sunrise_sunset_ids(), vec![3]);
    }
}
