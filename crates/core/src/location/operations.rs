use super::error::LocationError;
use super::types::{Location, SunriseSunset};

/// Validates a location before creation or update.
pub fn validate_location(location: &Location) -> Result<(), LocationError> {
    if location.name.trim().is_empty() {
        return Err(LocationError::EmptyName);
    }
    if location.country.trim().is_empty() {
        return Err(LocationError::EmptyCountry);
    }
    Ok(())
}

/// Validates a sunrise/sunset record before creation or update.
pub fn validate_sunrise_sunset(record: &SunriseSunset) -> Result<(), LocationError> {
    if record.date.trim().is_empty() {
        return Err(LocationError::EmptyDate);
    }
    Ok(())
}

/// Appends records to a location's associations.
///
/// Existing associations are kept. A record whose id is already associated is
/// skipped, so the collection stays unique by id.
pub fn attach_sunrise_sunsets(location: &mut Location, records: &[SunriseSunset]) {
    for record in records {
        let duplicate = record.id.is_some()
            && location
                .sunrise_sunsets
                .iter()
                .any(|existing| existing.id == record.id);
        if !duplicate {
            location.sunrise_sunsets.push(record.clone());
        }
    }
}

/// Replaces a location's associations with the given records.
pub fn replace_sunrise_sunsets(location: &mut Location, records: &[SunriseSunset]) {
    location.sunrise_sunsets.clear();
    attach_sunrise_sunsets(location, records);
}

/// Copies the updatable fields of `updated` onto `location`.
///
/// Only name and country are overwritten; coordinates, identity and
/// associations are left as they are.
pub fn apply_location_update(location: &mut Location, updated: &Location) {
    location.name = updated.name.clone();
    location.country = updated.country.clone();
}

/// Copies every mutable field of `updated` onto `record`, keeping its identity.
pub fn apply_sunrise_sunset_update(record: &mut SunriseSunset, updated: &SunriseSunset) {
    record.date = updated.date.clone();
    record.latitude = updated.latitude;
    record.longitude = updated.longitude;
    record.sunrise = updated.sunrise.clone();
    record.sunset = updated.sunset.clone();
}

/// Sorts locations by name ascending.
pub fn sort_by_name(locations: &mut [Location]) {
    locations.sort_by(|a, b| a.name.cmp(&b.name));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64) -> SunriseSunset {
        SunriseSunset::new("2025-04-04").with_id(id)
    }

    #[test]
    fn test_validate_location_rejects_blank_name() {
        let location = Location::new("  ", "Belarus");
        assert_eq!(validate_location(&location), Err(LocationError::EmptyName));
    }

    #[test]
    fn test_validate_location_rejects_blank_country() {
        let location = Location::new("Minsk", "");
        assert_eq!(
            validate_location(&location),
            Err(LocationError::EmptyCountry)
        );
    }

    #[test]
    fn test_validate_location_accepts_valid() {
        assert!(validate_location(&Location::new("Minsk", "Belarus")).is_ok());
    }

    #[test]
    fn test_validate_sunrise_sunset_rejects_blank_date() {
        assert_eq!(
            validate_sunrise_sunset(&SunriseSunset::new(" ")),
            Err(LocationError::EmptyDate)
        );
    }

    #[test]
    fn test_attach_appends_to_existing() {
        let mut location = Location::new("Minsk", "Belarus");
        location.sunrise_sunsets.push(record(1));

        attach_sunrise_sunsets(&mut location, &[record(2), record(3)]);

        assert_eq!(location.sunrise_sunset_ids(), vec![1, 2, 3]);
    }

    #[test]
    fn test_attach_skips_duplicate_ids() {
        let mut location = Location::new("Minsk", "Belarus");
        location.sunrise_sunsets.push(record(1));

        attach_sunrise_sunsets(&mut location, &[record(1), record(2), record(2)]);

        assert_eq!(location.sunrise_sunset_ids(), vec![1, 2]);
    }

    #[test]
    fn test_replace_with_empty_clears() {
        let mut location = Location::new("Minsk", "Belarus");
        location.sunrise_sunsets.push(record(1));

        replace_sunrise_sunsets(&mut location, &[]);

        assert!(location.sunrise_sunsets.is_empty());
    }

    #[test]
    fn test_replace_swaps_associations() {
        let mut location = Location::new("Minsk", "Belarus");
        location.sunrise_sunsets.push(record(1));

        replace_sunrise_sunsets(&mut location, &[record(5)]);

        assert_eq!(location.sunrise_sunset_ids(), vec![5]);
    }

    #[test]
    fn test_apply_location_update_keeps_coordinates() {
        let mut location = Location::new("Minsk", "Belarus")
            .with_id(7)
            .with_coordinates(53.9, 27.56);
        location.sunrise_sunsets.push(record(1));
        let updated = Location::new("Hrodna", "BY").with_coordinates(0.0, 0.0);

        apply_location_update(&mut location, &updated);

        assert_eq!(location.id, Some(7));
        assert_eq!(location.name, "Hrodna");
        assert_eq!(location.country, "BY");
        assert_eq!(location.latitude, Some(53.9));
        assert_eq!(location.longitude, Some(27.56));
        assert_eq!(location.sunrise_sunset_ids(), vec![1]);
    }

    #[test]
    fn test_apply_sunrise_sunset_update_overwrites_all_fields() {
        let mut existing = SunriseSunset::new("2025-01-01")
            .with_id(4)
            .with_coordinates(1.0, 2.0)
            .with_times("08:00", "17:00");
        let updated = SunriseSunset::new("2025-06-21").with_times("04:40", "21:50");

        apply_sunrise_sunset_update(&mut existing, &updated);

        assert_eq!(existing.id, Some(4));
        assert_eq!(existing.date, "2025-06-21");
        assert_eq!(existing.latitude, None);
        assert_eq!(existing.longitude, None);
        assert_eq!(existing.sunrise.as_deref(), Some("04:40"));
        assert_eq!(existing.sunset.as_deref(), Some("21:50"));
    }

    #[test]
    fn test_sort_by_name() {
        let mut locations = vec![
            Location::new("Vilnius", "Lithuania"),
            Location::new("Brest", "Belarus"),
            Location::new("Minsk", "Belarus"),
        ];

        sort_by_name(&mut locations);

        let names: Vec<&str> = locations.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Brest", "Minsk", "Vilnius"]);
    }
}
