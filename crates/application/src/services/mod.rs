//! Application services - Use case implementations

mod announcement_service;
mod voice_service;
mod weather_report_service;

pub use announcement_service::{Announcement, AnnouncementService};
pub use voice_service::{SpokenAudio, VoiceService, MAX_TEXT_CHARS};
pub use weather_report_service::{WeatherReport, WeatherReportService};
