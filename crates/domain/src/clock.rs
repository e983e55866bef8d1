//! Day-period labels and 12-hour clock arithmetic

/// Named period of the day used when speaking the time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPeriod {
    Rat,
    Bhor,
    Shokal,
    Dupur,
    Bikel,
    Shondha,
}

impl DayPeriod {
    /// Classify a 24-hour clock hour into its day period.
    ///
    /// Hours 20..24 and 0..4 are both night.
    #[must_use]
    pub const fn from_hour(hour: u32) -> Self {
        match hour {
            0..=3 => Self::Rat,
            4..=5 => Self::Bhor,
            6..=11 => Self::Shokal,
            12..=15 => Self::Dupur,
            16..=17 => Self::Bikel,
            18..=19 => Self::Shondha,
            _ => Self::Rat,
        }
    }

    /// Bengali name of the period.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rat => "রাত",
            Self::Bhor => "ভোর",
            Self::Shokal => "সকাল",
            Self::Dupur => "দুপুর",
            Self::Bikel => "বিকেল",
            Self::Shondha => "সন্ধ্যা",
        }
    }
}

/// Convert a 24-hour clock hour to its 12-hour reading.
///
/// Midnight and noon both read as 12.
#[must_use]
pub const fn hour_12(hour: u32) -> u32 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}
