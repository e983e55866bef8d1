//! Bengali calendar (Bangla Sandate) conversion
//!
//! Converts Gregorian civil dates into Bengali calendar dates using a fixed
//! 365-day month table anchored at the 14th of April. The table carries no
//! leap-day adjustment; deltas that overrun it wrap around.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::errors::DomainError;

/// Offset between a Gregorian year and the Bengali year that begins in it.
const YEAR_OFFSET: i32 = 593;

/// Month and day of the Bengali New Year (Pohela Boishakh) in the Gregorian
/// calendar.
const EPOCH_MONTH: u32 = 4;
const EPOCH_DAY: u32 = 14;

/// The twelve months of the Bengali calendar, in order from the New Year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BengaliMonth {
    Boishakh,
    Joishtho,
    Asharh,
    Srabon,
    Bhadro,
    Ashshin,
    Kartik,
    Ogrohayon,
    Poush,
    Magh,
    Falgun,
    Choitro,
}

impl BengaliMonth {
    /// All months in calendar order.
    pub const ALL: [Self; 12] = [
        Self::Boishakh,
        Self::Joishtho,
        Self::Asharh,
        Self::Srabon,
        Self::Bhadro,
        Self::Ashshin,
        Self::Kartik,
        Self::Ogrohayon,
        Self::Poush,
        Self::Magh,
        Self::Falgun,
        Self::Choitro,
    ];

    /// Bengali name of the month.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Boishakh => "বৈশাখ",
            Self::Joishtho => "জ্যৈষ্ঠ",
            Self::Asharh => "আষাঢ়",
            Self::Srabon => "শ্রাবণ",
            Self::Bhadro => "ভাদ্র",
            Self::Ashshin => "আশ্বিন",
            Self::Kartik => "কার্তিক",
            Self::Ogrohayon => "অগ্রহায়ণ",
            Self::Poush => "পৌষ",
            Self::Magh => "মাঘ",
            Self::Falgun => "ফাল্গুন",
            Self::Choitro => "চৈত্র",
        }
    }

    /// Length of the month in the fixed 365-day table.
    ///
    /// The first five months carry 31 days, the remaining seven carry 30.
    #[must_use]
    pub const fn length_days(self) -> u32 {
        match self {
            Self::Boishakh | Self::Joishtho | Self::Asharh | Self::Srabon | Self::Bhadro => 31,
            _ => 30,
        }
    }
}

/// A date in the Bengali calendar.
///
/// `day` is the spoken day number used in announcements. It counts days
/// elapsed since the month began, so Pohela Boishakh renders as day ০.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BengaliDate {
    pub year: i32,
    pub month: BengaliMonth,
    pub day: u32,
}

impl BengaliDate {
    /// Convert a Gregorian date to its Bengali calendar equivalent.
    #[must_use]
    pub fn from_gregorian(date: NaiveDate) -> Self {
        let (epoch, year) = epoch_for(date);
        let mut delta = (date - epoch).num_days() as u32;
        // The table sums to 365; a span crossing a Gregorian leap day can
        // reach 365, which wraps back onto the table.
        delta %= 365;

        let mut month = BengaliMonth::Boishakh;
        for candidate in BengaliMonth::ALL {
            month = candidate;
            let len = candidate.length_days();
            if delta < len {
                break;
            }
            delta -= len;
        }

        Self { year, month, day: delta }
    }

    /// Parse a `YYYY-MM-DD` string and convert it.
    pub fn parse_gregorian(input: &str) -> Result<Self, DomainError> {
        let date = NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .map_err(|_| DomainError::ValidationError(format!("invalid date: {input}")))?;
        Ok(Self::from_gregorian(date))
    }
}

/// The most recent Bengali New Year on or before `date`, with the Bengali
/// year that begins on it.
fn epoch_for(date: NaiveDate) -> (NaiveDate, i32) {
    let new_year = NaiveDate::from_ymd_opt(date.year(), EPOCH_MONTH, EPOCH_DAY)
        .unwrap_or(date);
    if date >= new_year {
        (new_year, date.year() - YEAR_OFFSET)
    } else {
        let previous = NaiveDate::from_ymd_opt(date.year() - 1, EPOCH_MONTH, EPOCH_DAY)
            .unwrap_or(date);
        (previous, date.year() - YEAR_OFFSET - 1)
    }
}

/// Bengali name of a weekday.
#[must_use]
pub const fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sat => "শনিবার",
        Weekday::Sun => "রবিবার",
        Weekday::Mon => "সোমবার",
        Weekday::Tue => "মঙ্গলবার",
        Weekday::Wed => "বুধবার",
        Weekday::Thu => "বৃহস্পতিবার",
        Weekday::Fri => "শুক্রবার",
    }
}
