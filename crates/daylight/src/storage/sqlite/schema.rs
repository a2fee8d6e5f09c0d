//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O.

/// SQL statement to create all tables.
///
/// `foreign_keys` is a per-connection setting, so it is switched on here
/// together with the schema.
pub const CREATE_TABLES: &str = r#"
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS location (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    country TEXT NOT NULL,
    latitude REAL,
    longitude REAL
);

CREATE TABLE IF NOT EXISTS sunrise_sunset (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date TEXT NOT NULL,
    latitude REAL,
    longitude REAL,
    sunrise TEXT,
    sunset TEXT
);

-- Many-to-many join table
CREATE TABLE IF NOT EXISTS location_sunrise_sunset (
    location_id INTEGER NOT NULL,
    sunrise_sunset_id INTEGER NOT NULL,
    PRIMARY KEY (location_id, sunrise_sunset_id),
    FOREIGN KEY (location_id) REFERENCES location(id) ON DELETE CASCADE,
    FOREIGN KEY (sunrise_sunset_id) REFERENCES sunrise_sunset(id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_sunrise_sunset_date ON sunrise_sunset(date);
CREATE INDEX IF NOT EXISTS idx_location_sunrise_sunset_rev
    ON location_sunrise_sunset(sunrise_sunset_id);
"#;

// Location queries
pub const SELECT_LOCATIONS: &str = r#"
SELECT id, name, country, latitude, longitude
FROM location
ORDER BY id ASC
"#;

pub const SELECT_LOCATION_BY_ID: &str = r#"
SELECT id, name, country, latitude, longitude
FROM location
WHERE id = ?1
"#;

pub const SELECT_LOCATIONS_BY_SUNRISE_SUNSET_DATE: &str = r#"
SELECT DISTINCT l.id, l.name, l.country, l.latitude, l.longitude
FROM location l
INNER JOIN location_sunrise_sunset ls ON l.id = ls.location_id
INNER JOIN sunrise_sunset s ON s.id = ls.sunrise_sunset_id
WHERE s.date = ?1
ORDER BY l.name ASC, l.id ASC
"#;

pub const LOCATION_EXISTS: &str = r#"
SELECT EXISTS(SELECT 1 FROM location WHERE id = ?1)
"#;

pub const INSERT_LOCATION: &str = r#"
INSERT INTO location (name, country, latitude, longitude)
VALUES (?1, ?2, ?3, ?4)
"#;

pub const UPDATE_LOCATION: &str = r#"
UPDATE location
SET name = ?2, country = ?3, latitude = ?4, longitude = ?5
WHERE id = ?1
"#;

pub const DELETE_LOCATION: &str = r#"
DELETE FROM location
WHERE id = ?1
"#;

// Join table queries
pub const SELECT_SUNRISE_SUNSETS_FOR_LOCATION: &str = r#"
SELECT s.id, s.date, s.latitude, s.longitude, s.sunrise, s.sunset
FROM sunrise_sunset s
INNER JOIN location_sunrise_sunset ls ON s.id = ls.sunrise_sunset_id
WHERE ls.location_id = ?1
ORDER BY ls.rowid ASC
"#;

pub const INSERT_LOCATION_LINK: &str = r#"
INSERT OR IGNORE INTO location_sunrise_sunset (location_id, sunrise_sunset_id)
VALUES (?1, ?2)
"#;

pub const DELETE_LOCATION_LINKS: &str = r#"
DELETE FROM location_sunrise_sunset
WHERE location_id = ?1
"#;

// SunriseSunset queries
pub const SELECT_SUNRISE_SUNSETS: &str = r#"
SELECT id, date, latitude, longitude, sunrise, sunset
FROM sunrise_sunset
ORDER BY id ASC
"#;

pub const SELECT_SUNRISE_SUNSET_BY_ID: &str = r#"
SELECT id, date, latitude, longitude, sunrise, sunset
FROM sunrise_sunset
WHERE id = ?1
"#;

pub const SELECT_SUNRISE_SUNSETS_BY_DATE: &str = r#"
SELECT id, date, latitude, longitude, sunrise, sunset
FROM sunrise_sunset
WHERE date = ?1
ORDER BY id ASC
"#;

pub const SUNRISE_SUNSET_EXISTS: &str = r#"
SELECT EXISTS(SELECT 1 FROM sunrise_sunset WHERE id = ?1)
"#;

pub const INSERT_SUNRISE_SUNSET: &str = r#"
INSERT INTO sunrise_sunset (date, latitude, longitude, sunrise, sunset)
VALUES (?1, ?2, ?3, ?4, ?5)
"#;

pub const UPDATE_SUNRISE_SUNSET: &str = r#"
UPDATE sunrise_sunset
SET date = ?2, latitude = ?3, longitude = ?4, sunrise = ?5, sunset = ?6
WHERE id = ?1
"#;

pub const DELETE_SUNRISE_SUNSET: &str = r#"
DELETE FROM sunrise_sunset
WHERE id = ?1
"#;
