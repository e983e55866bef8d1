//! Date/time announcement service
//!
//! Composes the spoken Bengali date/time sentence from the wall clock:
//! Bengali calendar date, weekday, day period, and 12-hour time.

use chrono::{Datelike, NaiveDateTime, Timelike, Utc};
use chrono_tz::Tz;
use domain::{BengaliDate, DayPeriod, hour_12, to_bengali_digits, weekday_name};
use serde::{Deserialize, Serialize};

/// A composed date/time announcement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Announcement {
    /// The spoken Bengali sentence
    pub sentence: String,
    /// Cache key for the rendered audio, truncated to the minute
    pub cache_key: String,
}

/// Service that produces spoken date/time announcements
#[derive(Debug, Clone)]
pub struct AnnouncementService {
    timezone: Tz,
}

impl AnnouncementService {
    /// Create a new announcement service for a timezone
    #[must_use]
    pub const fn new(timezone: Tz) -> Self {
        Self { timezone }
    }

    /// Get the configured timezone
    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Compose the announcement for the current wall-clock time
    #[must_use]
    pub fn announce_now(&self) -> Announcement {
        let local = Utc::now().with_timezone(&self.timezone).naive_local();
        self.compose(local)
    }

    /// Compose the announcement for a given local date and time
    #[must_use]
    pub fn compose(&self, local: NaiveDateTime) -> Announcement {
        let date = local.date();
        let bengali = BengaliDate::from_gregorian(date);

        let day = to_bengali_digits(&bengali.day.to_string());
        let year = to_bengali_digits(&bengali.year.to_string());
        let weekday = weekday_name(date.weekday());

        let period = DayPeriod::from_hour(local.hour());
        let hour = to_bengali_digits(&hour_12(local.hour()).to_string());
        let minute = to_bengali_digits(&format!("{:02}", local.minute()));

        let sentence = format!(
            "আজ {day} {month} {year} বঙ্গাব্দ, {weekday}। এখন {period} {hour}টা {minute} মিনিট।",
            month = bengali.month.name(),
            period = period.name(),
        );

        let cache_key = format!("datetime::{}", local.format("%Y-%m-%dT%H:%M"));

        Announcement {
            sentence,
            cache_key,
        }
    }
}
