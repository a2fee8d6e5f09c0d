use std::num::ParseIntError;

use serde::Deserialize;

/// Parses a comma-separated id list such as `"1, 2,3"`.
///
/// Blank tokens are skipped, so `""` and `"1,"` are accepted. Any other
/// token must be an integer.
pub fn parse_ids(raw: &str) -> Result<Vec<i64>, ParseIntError> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}

/// `?sunriseSunsetIds=` query parameter.
#[derive(Debug, Default, Deserialize)]
pub struct SunriseSunsetIdsQuery {
    #[serde(rename = "sunriseSunsetIds")]
    pub sunrise_sunset_ids: Option<String>,
}

impl SunriseSunsetIdsQuery {
    /// Parsed ids. `None` when the parameter is absent, `Some(vec![])` when
    /// it is present but empty.
    pub fn ids(&self) -> Result<Option<Vec<i64>>, ParseIntError> {
        self.sunrise_sunset_ids.as_deref().map(parse_ids).transpose()
    }
}

/// `?date=` query parameter.
#[derive(Debug, Default, Deserialize)]
pub struct DateQuery {
    pub date: Option<String>,
}

impl DateQuery {
    /// The date, if present and not blank.
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref().filter(|date| !date.trim().is_empty())
    }
}
