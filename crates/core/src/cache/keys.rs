/// Returns the cache key for the list of all locations.
pub fn all_locations_key() -> String {
    "all_locations".to_string()
}

/// Returns the cache key for a single location.
///
/// The value stored under this key is always a one-element sequence.
pub fn location_key(id: i64) -> String {
    format!("location_{}", id)
}

/// Returns the cache key for the locations tied to a sunrise/sunset date.
///
/// The date is used verbatim, so `"2025-04-04"` and `"2025-4-4"` are
/// different keys.
pub fn locations_by_date_key(date: &str) -> String {
    format!("locations_date_{}", date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_locations_key() {
        assert_eq!(all_locations_key(), "all_locations");
    }

    #[test]
    fn test_location_key() {
        assert_eq!(location_key(1), "location_1");
        assert_eq!(location_key(42), "location_42");
    }

    #[test]
    fn test_locations_by_date_key() {
        assert_eq!(
            locations_by_date_key("2025-04-04"),
            "locations_date_2025-04-04"
        );
    }

    #[test]
    fn test_locations_by_date_key_is_verbatim() {
        assert_ne!(
            locations_by_date_key("2025-04-04"),
            locations_by_date_key("2025-4-4")
        );
    }
}
