//! Date formatting injected into table controllers.

use std::sync::Arc;

use chrono::{DateTime, Utc};

/// Converts a timestamp into the string shown in a table cell.
pub trait DateFormatter: Send + Sync {
    fn format(&self, value: &DateTime<Utc>) -> String;
}

impl<F> DateFormatter for F
where
    F: Fn(&DateTime<Utc>) -> String + Send + Sync,
{
    fn format(&self, value: &DateTime<Utc>) -> String {
        self(value)
    }
}

/// `YYYY-MM-DD HH:MM`, UTC.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShortDateTime;

impl DateFormatter for ShortDateTime {
    fn format(&self, value: &DateTime<Utc>) -> String {
        short_date_time(value)
    }
}

pub fn short_date_time(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

/// Shared handle stored by controllers.
pub type SharedFormatter = Arc<dyn DateFormatter>;

pub fn default_formatter() -> SharedFormatter {
    Arc::new(ShortDateTime)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn short_date_time_drops_seconds() {
        let value = Utc.with_ymd_and_hms(2014, 12, 9, 13, 50, 51).unwrap();
        assert_eq!(ShortDateTime.format(&value), "2014-12-09 13:50");
    }

    #[test]
    fn closures_are_formatters() {
        let formatter: SharedFormatter = Arc::new(|value: &DateTime<Utc>| value.to_rfc3339());
        let value = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();

        assert_eq!(formatter.format(&value), "2023-01-01T00:00:00+00:00");
    }
}
