//! Domain layer for BanglaKantha
//!
//! Contains the Bengali calendar conversion, digit transliteration, clock
//! rendering, and audio value objects. This layer performs no I/O; everything
//! here is pure computation over fixed tables.

pub mod audio;
pub mod calendar;
pub mod clock;
pub mod errors;
pub mod numerals;

pub use audio::AudioFormat;
pub use calendar::{BengaliDate, BengaliMonth, weekday_name};
pub use clock::{DayPeriod, hour_12};
pub use errors::DomainError;
pub use numerals::to_bengali_digits;
