use chrono::NaiveDate;

use super::DomainError;

/// Accepted wire format for an episode's air date.
const AIR_DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Format every rendered air date uses, e.g. `03/05/24`.
const AIR_DATE_OUTPUT_FORMAT: &str = "%m/%d/%y";

pub fn parse_air_date(raw: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(raw.trim(), AIR_DATE_INPUT_FORMAT)
        .map_err(|_| DomainError::InvalidAirDate(raw.to_string()))
}

#[must_use]
pub fn format_air_date(date: NaiveDate) -> String {
    date.format(AIR_DATE_OUTPUT_FORMAT).to_string()
}
