//! Data models for OpenWeatherMap API responses

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Weather condition classified from an OpenWeatherMap condition code
///
/// Codes are documented at <https://openweathermap.org/weather-conditions>.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    /// Clear sky (800)
    ClearSky,
    /// Few clouds (801)
    FewClouds,
    /// Scattered clouds (802)
    ScatteredClouds,
    /// Broken clouds (803)
    BrokenClouds,
    /// Overcast clouds (804)
    OvercastClouds,
    /// Drizzle group (3xx)
    Drizzle,
    /// Light rain (500)
    LightRain,
    /// Moderate rain (501)
    ModerateRain,
    /// Heavy and shower rain (502-531)
    HeavyRain,
    /// Snow group (6xx)
    Snow,
    /// Atmosphere group: mist, haze, fog (7xx)
    Fog,
    /// Thunderstorm group (2xx)
    Thunderstorm,
    /// Code outside the documented ranges
    Unknown,
}

impl WeatherCondition {
    /// Classify an OpenWeatherMap condition code
    #[must_use]
    pub const fn from_owm_code(code: u16) -> Self {
        match code {
            200..=232 => Self::Thunderstorm,
            300..=321 => Self::Drizzle,
            500 => Self::LightRain,
            501 => Self::ModerateRain,
            502..=531 => Self::HeavyRain,
            600..=622 => Self::Snow,
            701..=781 => Self::Fog,
            800 => Self::ClearSky,
            801 => Self::FewClouds,
            802 => Self::ScatteredClouds,
            803 => Self::BrokenClouds,
            804 => Self::OvercastClouds,
            _ => Self::Unknown,
        }
    }
}

/// Current conditions for a city
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// City name as reported by the API
    pub city: String,
    /// Temperature in the requested units
    pub temperature: f64,
    /// Feels-like temperature
    pub feels_like: Option<f64>,
    /// Relative humidity in percent
    pub humidity: Option<u8>,
    /// Classified condition
    pub condition: WeatherCondition,
    /// English condition description from the API
    pub description: String,
    /// Observation time
    pub observed_at: DateTime<Utc>,
}

/// One day of forecast, aggregated from three-hourly slots
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySummary {
    /// The forecast date
    pub date: NaiveDate,
    /// Highest temperature across the day's slots
    pub temperature_max: f64,
    /// Lowest temperature across the day's slots
    pub temperature_min: f64,
    /// Condition of the slot nearest midday
    pub condition: WeatherCondition,
    /// English description of that slot
    pub description: String,
}

// Wire types, mirroring the JSON shapes of /weather and /forecast.

/// Response body of the current weather endpoint
#[derive(Debug, Deserialize)]
pub(crate) struct CurrentResponse {
    pub name: String,
    pub dt: i64,
    pub main: MainReadings,
    pub weather: Vec<ConditionEntry>,
}

/// The `main` block shared by both endpoints
#[derive(Debug, Deserialize)]
pub(crate) struct MainReadings {
    pub temp: f64,
    #[serde(default)]
    pub feels_like: Option<f64>,
    #[serde(default)]
    pub humidity: Option<u8>,
    #[serde(default)]
    pub temp_min: Option<f64>,
    #[serde(default)]
    pub temp_max: Option<f64>,
}

/// One entry of the `weather` array
#[derive(Debug, Deserialize)]
pub(crate) struct ConditionEntry {
    pub id: u16,
    pub description: String,
}

/// Response body of the five-day forecast endpoint
#[derive(Debug, Deserialize)]
pub(crate) struct ForecastResponse {
    pub list: Vec<ForecastSlot>,
}

/// One three-hourly forecast slot
#[derive(Debug, Deserialize)]
pub(crate) struct ForecastSlot {
    pub dt_txt: String,
    pub main: MainReadings,
    pub weather: Vec<ConditionEntry>,
}

/// Aggregate three-hourly slots into per-day summaries
///
/// Days at or before `today` are dropped, so the first summary covers
/// tomorrow. Slots with an unparseable timestamp are skipped. The day's
/// condition is taken from the slot nearest midday.
pub(crate) fn aggregate_daily(slots: &[ForecastSlot], today: NaiveDate) -> Vec<DailySummary> {
    let mut parsed: Vec<(NaiveDateTime, &ForecastSlot)> = slots
        .iter()
        .filter_map(|slot| {
            NaiveDateTime::parse_from_str(&slot.dt_txt, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|ts| (ts, slot))
        })
        .filter(|(ts, _)| ts.date() > today)
        .collect();
    parsed.sort_by_key(|(ts, _)| *ts);

    let mut summaries: Vec<DailySummary> = Vec::new();
    for (ts, slot) in parsed {
        let temp = slot.main.temp;
        let high = slot.main.temp_max.unwrap_or(temp);
        let low = slot.main.temp_min.unwrap_or(temp);
        let date = ts.date();

        match summaries.last_mut() {
            Some(day) if day.date == date => {
                day.temperature_max = day.temperature_max.max(high);
                day.temperature_min = day.temperature_min.min(low);
            },
            _ => {
                let entry = slot.weather.first();
                summaries.push(DailySummary {
                    date,
                    temperature_max: high,
                    temperature_min: low,
                    condition: entry
                        .map_or(WeatherCondition::Unknown, |e| {
                            WeatherCondition::from_owm_code(e.id)
                        }),
                    description: entry.map_or_else(String::new, |e| e.description.clone()),
                });
            },
        }
    }

    // Second pass picks the midday slot's condition for each day.
    for day in &mut summaries {
        let midday = slots
            .iter()
            .filter_map(|slot| {
                NaiveDateTime::parse_from_str(&slot.dt_txt, "%Y-%m-%d %H:%M:%S")
                    .ok()
                    .filter(|ts| ts.date() == day.date)
                    .map(|ts| (ts.time().signed_duration_since(midday_time()).abs(), slot))
            })
            .min_by_key(|(distance, _)| *distance);

        if let Some((_, slot)) = midday
            && let Some(entry) = slot.weather.first()
        {
            day.condition = WeatherCondition::from_owm_code(entry.id);
            day.description.clone_from(&entry.description);
        }
    }

    summaries
}

fn midday_time() -> chrono::NaiveTime {
    chrono::NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default()
}
