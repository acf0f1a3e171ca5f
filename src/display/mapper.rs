//! The pure transform from raw readings and preferences to the display
//! model.
//!
//! No I/O and no suspension: callers take a preference snapshot, pass the
//! readings they already hold, and get back a fully formatted view. Missing
//! optional inputs degrade to absent cards, never to errors.

use std::collections::HashSet;
use std::f64::consts::PI;

use chrono::{DateTime, Datelike, FixedOffset, NaiveTime, Timelike};

use crate::format;
use crate::settings::{
    DistanceUnit, Preferences, PressureUnit, SpeedUnit, TemperatureUnit,
};
use crate::types::city::City;
use crate::types::units::{Distance, Pressure, Speed, Temperature};
use crate::types::weather::{Dated, Weather};

use super::view::{
    CloudBucket, CloudsView, CompassDirection, CurrentConditions, CurrentWeatherView,
    DailyForecast, ForecastDay, HourlyEntry, PrecipitationKind, PrecipitationView, PressureView,
    SunriseSunsetView, VisibilityView, WindView,
};

/// Half-amplitude of the synthesized daily temperature swing, in Kelvin
/// (equivalently °C).
const SWING_AMPLITUDE: f64 = 5.0;

/// Daily envelope fallback when the forecast window is empty.
const DEFAULT_ENVELOPE_CELSIUS: (f64, f64) = (-50.0, 50.0);

/// Local hours rendered with the day icon; everything else is night.
const DAY_HOURS: std::ops::RangeInclusive<u32> = 6..=19;

/// Synthesizes a plausible low/high pair for a day from one instantaneous
/// reading.
///
/// The swing follows `amplitude · (1 + cos(π·(hour − 15)/9))` with the hour
/// of day taken as a real number, anchoring the warmest point at 15:00.
/// Display-only smoothing; not measured data.
pub fn fake_min_max(current: f64, time: NaiveTime) -> (f64, f64) {
    let hours = f64::from(time.num_seconds_from_midnight()) / 3600.0;
    let swing = SWING_AMPLITUDE * (1.0 + (PI * (hours - 15.0) / 9.0).cos());
    (current - swing, current + swing)
}

fn is_day(hour: u32) -> bool {
    DAY_HOURS.contains(&hour)
}

fn condition_icon(weather: &Weather, hour: u32) -> &'static str {
    if is_day(hour) {
        weather.condition.icon()
    } else {
        weather.condition.night_icon()
    }
}

fn cloud_bucket(coverage_percent: f64) -> CloudBucket {
    match coverage_percent.round() as i64 {
        11..=24 => CloudBucket::Few,
        25..=50 => CloudBucket::Scattered,
        51..=84 => CloudBucket::Broken,
        85..=100 => CloudBucket::Overcast,
        _ => CloudBucket::Clear,
    }
}

fn convert_temperature(unit: TemperatureUnit, kelvin: f64) -> Temperature {
    match unit {
        TemperatureUnit::Celsius => Temperature::Celsius(Temperature::Kelvin(kelvin).to_celsius()),
        TemperatureUnit::Fahrenheit => {
            Temperature::Fahrenheit(Temperature::Kelvin(kelvin).to_fahrenheit())
        }
        TemperatureUnit::Kelvin => Temperature::Kelvin(kelvin),
    }
}

fn convert_speed(unit: SpeedUnit, meters_per_second: f64) -> Speed {
    let speed = Speed::MetersPerSecond(meters_per_second);
    match unit {
        SpeedUnit::MetersPerSecond => speed,
        SpeedUnit::KilometersPerHour => Speed::KilometersPerHour(speed.to_kilometers_per_hour()),
        SpeedUnit::MilesPerHour => Speed::MilesPerHour(speed.to_miles_per_hour()),
    }
}

fn convert_pressure(unit: PressureUnit, hecto_pascal: f64) -> Pressure {
    let pressure = Pressure::HectoPascal(hecto_pascal);
    match unit {
        PressureUnit::HectoPascal => pressure,
        PressureUnit::InchesOfMercury => {
            Pressure::InchesOfMercury(pressure.to_inches_of_mercury())
        }
        PressureUnit::Bar => Pressure::Bar(pressure.to_bar()),
    }
}

fn convert_distance(unit: DistanceUnit, meters: f64) -> Distance {
    let distance = Distance::Meter(meters);
    match unit {
        DistanceUnit::Meters => distance,
        DistanceUnit::Kilometers => Distance::Kilometer(distance.to_kilometer()),
        DistanceUnit::Feet => Distance::Foot(distance.to_foot()),
        DistanceUnit::Miles => Distance::Mile(distance.to_mile()),
    }
}

fn format_pressure(unit: PressureUnit, value: f64) -> String {
    match unit {
        PressureUnit::HectoPascal => format!("{value:.0}"),
        PressureUnit::InchesOfMercury | PressureUnit::Bar => format!("{value:.2}"),
    }
}

/// Maps one city's readings into the display model.
///
/// `now` anchors the hourly (24 h) and daily (5 day) forecast windows;
/// callers pass the wall clock in the city's offset.
pub fn map_current_weather(
    city: &City,
    current: Option<&Dated<Weather>>,
    forecast: &[Dated<Weather>],
    preferences: &Preferences,
    now: DateTime<FixedOffset>,
) -> CurrentWeatherView {
    let locale = preferences.locale();
    let temperature_unit = preferences.temperature_unit.label(locale);
    let temperature = |kelvin: f64| convert_temperature(preferences.temperature_unit, kelvin);

    let is_night = current.is_some_and(|reading| !is_day(reading.date_time.hour()));

    let conditions = current.map(|reading| {
        let weather = &reading.value;
        let (low, high) = fake_min_max(weather.temperature.current, reading.date_time.time());
        CurrentConditions {
            city_name: city.name.get(locale).to_owned(),
            current_temperature: temperature(weather.temperature.current).value(),
            feels_like_temperature: temperature(weather.temperature.feels_like).value(),
            temperature_unit,
            icon: condition_icon(weather, reading.date_time.hour()),
            condition_title: weather.condition.title(locale),
            low_temperature: temperature(low).value(),
            high_temperature: temperature(high).value(),
            date_time: format::full_date_time(&reading.date_time, locale),
        }
    });

    let hourly = forecast
        .iter()
        .filter(|reading| (reading.date_time - now).num_hours() <= 24)
        .map(|reading| HourlyEntry {
            time_label: format::hour_label(&reading.date_time, locale),
            icon: condition_icon(&reading.value, reading.date_time.hour()),
            temperature: temperature(reading.value.temperature.current).value(),
            temperature_unit,
        })
        .collect();

    let daily = {
        let (default_min, default_max) = DEFAULT_ENVELOPE_CELSIUS;
        let envelope_min = forecast
            .iter()
            .map(|r| r.value.temperature.min)
            .reduce(f64::min)
            .unwrap_or_else(|| Temperature::Celsius(default_min).to_kelvin());
        let envelope_max = forecast
            .iter()
            .map(|r| r.value.temperature.max)
            .reduce(f64::max)
            .unwrap_or_else(|| Temperature::Celsius(default_max).to_kelvin());

        let mut seen_days = HashSet::new();
        let days = forecast
            .iter()
            .filter(|reading| (reading.date_time - now).num_days() <= 5)
            .filter(|reading| seen_days.insert(reading.date_time.date_naive()))
            .map(|reading| {
                let (low, high) =
                    fake_min_max(reading.value.temperature.current, reading.date_time.time());
                ForecastDay {
                    day_name: format::weekday_name(reading.date_time.weekday(), locale).to_owned(),
                    min_temperature: temperature(low.clamp(envelope_min, envelope_max)),
                    max_temperature: temperature(high.clamp(envelope_min, envelope_max)),
                    icon: reading.value.condition.icon(),
                }
            })
            .collect();

        DailyForecast {
            window_min: temperature(envelope_min),
            window_max: temperature(envelope_max),
            days,
            temperature_unit,
        }
    };

    let clouds = current.map(|reading| {
        let percent = reading.value.cloudiness * 100.0;
        CloudsView {
            coverage: format!("{percent:.0}%"),
            bucket: cloud_bucket(percent),
        }
    });

    let precipitation = current.map(|reading| {
        let precipitation = &reading.value.precipitation;
        let (kind, rate) = if precipitation.snow > 0.0 {
            (PrecipitationKind::Snow, precipitation.snow)
        } else {
            (PrecipitationKind::Rain, precipitation.rain)
        };
        PrecipitationView {
            amount: format!("{rate:.0}"),
            kind,
            probability: precipitation
                .probability
                .map(|p| format!("{:.0}%", p * 100.0)),
        }
    });

    let wind = current.map(|reading| {
        let wind = &reading.value.wind;
        WindView {
            speed: convert_speed(preferences.speed_unit, wind.speed),
            gust: convert_speed(preferences.speed_unit, wind.gust),
            speed_unit: preferences.speed_unit.label(locale),
            direction_degrees: wind.direction,
            direction: CompassDirection::from_bearing(wind.direction),
        }
    });

    let humidity = current.map(|reading| format!("{:.0}%", reading.value.humidity * 100.0));

    let pressure = current.map(|reading| {
        let pressure = &reading.value.pressure;
        let unit = preferences.pressure_unit;
        PressureView {
            sea_level: format_pressure(unit, convert_pressure(unit, pressure.sea_level).value()),
            ground_level: format_pressure(
                unit,
                convert_pressure(unit, pressure.ground_level).value(),
            ),
            pressure_unit: unit.label(locale),
        }
    });

    let sunrise_sunset = current.and_then(|reading| {
        let sunrise = reading.value.sunrise?;
        let sunset = reading.value.sunset?;
        Some(SunriseSunsetView {
            sunrise: format::clock_time(sunrise, locale),
            sunset: format::clock_time(sunset, locale),
        })
    });

    let visibility = current.map(|reading| VisibilityView {
        distance: format!(
            "{:.0}",
            convert_distance(preferences.distance_unit, reading.value.visibility).value()
        ),
        distance_unit: preferences.distance_unit.label(locale),
    });

    CurrentWeatherView {
        conditions,
        hourly,
        daily,
        coordinates: city.coordinates,
        clouds,
        precipitation,
        wind,
        humidity,
        pressure,
        sunrise_sunset,
        visibility,
        air_pollution: current.and_then(|reading| reading.value.air_pollution),
        local_time: current.map(|reading| reading.date_time.time()),
        is_night,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Language;
    use crate::types::city::{Coordinates, LocalizedName};
    use crate::types::condition::Condition;
    use crate::types::country::Country;
    use crate::types::weather::{Precipitation, PressureReading, TemperatureReading, Wind};
    use chrono::TimeZone;

    fn cairo() -> City {
        City {
            name: LocalizedName::new(Some("القاهرة".into()), Some("Cairo".into())),
            country: Country::EG,
            coordinates: Coordinates::new(30.0444, 31.2357),
        }
    }

    fn weather(kelvin: f64) -> Weather {
        Weather {
            temperature: TemperatureReading {
                current: kelvin,
                feels_like: kelvin - 1.0,
                min: kelvin - 3.0,
                max: kelvin + 3.0,
            },
            condition: Condition::ClearSky,
            pressure: PressureReading {
                sea_level: 1013.0,
                ground_level: 1009.0,
            },
            precipitation: Precipitation {
                rain: 0.0,
                snow: 0.0,
                probability: None,
            },
            wind: Wind {
                speed: 5.0,
                direction: 90.0,
                gust: 8.0,
            },
            air_pollution: None,
            cloudiness: 0.12,
            humidity: 0.47,
            visibility: 10_000.0,
            sunrise: NaiveTime::from_hms_opt(5, 43, 0),
            sunset: NaiveTime::from_hms_opt(18, 41, 0),
        }
    }

    fn at(day: u32, hour: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2025, 5, day, hour, 0, 0)
            .unwrap()
    }

    fn celsius_prefs() -> Preferences {
        Preferences {
            language: Language::English,
            ..Preferences::default()
        }
    }

    #[test]
    fn fake_min_max_peaks_at_fifteen() {
        let (low, high) = fake_min_max(20.0, NaiveTime::from_hms_opt(15, 0, 0).unwrap());
        assert!((low - 10.0).abs() < 1e-9);
        assert!((high - 30.0).abs() < 1e-9);
    }

    #[test]
    fn fake_min_max_collapses_at_six() {
        // cos(π·(6−15)/9) = cos(−π) = −1, so the swing term vanishes.
        let (low, high) = fake_min_max(20.0, NaiveTime::from_hms_opt(6, 0, 0).unwrap());
        assert!((low - 20.0).abs() < 1e-9);
        assert!((high - 20.0).abs() < 1e-9);
    }

    #[test]
    fn fake_min_max_uses_fractional_hours() {
        let (low_sharp, _) = fake_min_max(20.0, NaiveTime::from_hms_opt(12, 0, 0).unwrap());
        let (low_half, _) = fake_min_max(20.0, NaiveTime::from_hms_opt(12, 30, 0).unwrap());
        assert!(low_half < low_sharp);
    }

    #[test]
    fn compass_sector_midpoints() {
        use CompassDirection::*;
        let cases = [
            (0.0, North),
            (45.0, NorthEast),
            (90.0, East),
            (135.0, SouthEast),
            (180.0, South),
            (225.0, SouthWest),
            (270.0, West),
            (315.0, NorthWest),
        ];
        for (bearing, expected) in cases {
            assert_eq!(CompassDirection::from_bearing(bearing), expected, "{bearing}");
        }
    }

    #[test]
    fn compass_sector_edges() {
        use CompassDirection::*;
        // Each sector spans [center − 22.5, center + 22.5).
        assert_eq!(CompassDirection::from_bearing(22.4), North);
        assert_eq!(CompassDirection::from_bearing(22.5), NorthEast);
        assert_eq!(CompassDirection::from_bearing(44.9), NorthEast);
        assert_eq!(CompassDirection::from_bearing(67.4), NorthEast);
        assert_eq!(CompassDirection::from_bearing(67.5), East);
        assert_eq!(CompassDirection::from_bearing(337.4), NorthWest);
        assert_eq!(CompassDirection::from_bearing(337.5), North);
        assert_eq!(CompassDirection::from_bearing(359.9), North);
    }

    #[test]
    fn cloud_bucket_boundaries() {
        use CloudBucket::*;
        let cases = [
            (0.0, Clear),
            (10.9, Few), // rounds to 11
            (10.4, Clear),
            (11.0, Few),
            (24.0, Few),
            (25.0, Scattered),
            (50.0, Scattered),
            (51.0, Broken),
            (84.0, Broken),
            (85.0, Overcast),
            (100.0, Overcast),
        ];
        for (percent, expected) in cases {
            assert_eq!(cloud_bucket(percent), expected, "{percent}");
        }
    }

    #[test]
    fn maps_nothing_loaded_to_bare_view() {
        let view = map_current_weather(&cairo(), None, &[], &celsius_prefs(), at(5, 12));
        assert!(view.conditions.is_none());
        assert!(view.hourly.is_empty());
        assert!(view.daily.days.is_empty());
        assert!(!view.is_night);
        assert!(view.clouds.is_none());
        assert!(view.sunrise_sunset.is_none());

        // Empty forecast falls back to the ±50 °C envelope.
        assert!((view.daily.window_min.value() - (-50.0)).abs() < 1e-9);
        assert!((view.daily.window_max.value() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn maps_current_block_with_celsius() {
        let current = Dated::new(at(5, 15), weather(293.15));
        let view =
            map_current_weather(&cairo(), Some(&current), &[], &celsius_prefs(), at(5, 15));

        let conditions = view.conditions.unwrap();
        assert_eq!(conditions.city_name, "Cairo");
        assert!((conditions.current_temperature - 20.0).abs() < 1e-9);
        assert_eq!(conditions.temperature_unit, "°C");
        // At the 15:00 anchor the swing is at its ±10 maximum.
        assert!((conditions.low_temperature - 10.0).abs() < 1e-9);
        assert!((conditions.high_temperature - 30.0).abs() < 1e-9);
        assert_eq!(conditions.icon, "clear");
        assert_eq!(conditions.date_time, "Monday, 5 May 2025 3:00 PM GMT+02:00");
        assert!(!view.is_night);

        assert_eq!(view.humidity.as_deref(), Some("47%"));
        let clouds = view.clouds.unwrap();
        assert_eq!(clouds.coverage, "12%");
        assert_eq!(clouds.bucket, CloudBucket::Few);
        let sun = view.sunrise_sunset.unwrap();
        assert_eq!(sun.sunrise, "5:43 AM");
        assert_eq!(sun.sunset, "6:41 PM");
    }

    #[test]
    fn night_hours_flip_icon_and_theme() {
        let current = Dated::new(at(5, 20), weather(293.15));
        let view =
            map_current_weather(&cairo(), Some(&current), &[], &celsius_prefs(), at(5, 20));
        assert!(view.is_night);
        assert_eq!(view.conditions.unwrap().icon, "clear_night");

        let current = Dated::new(at(5, 6), weather(293.15));
        let view = map_current_weather(&cairo(), Some(&current), &[], &celsius_prefs(), at(5, 6));
        assert!(!view.is_night);

        let current = Dated::new(at(5, 19), weather(293.15));
        let view =
            map_current_weather(&cairo(), Some(&current), &[], &celsius_prefs(), at(5, 19));
        assert!(!view.is_night);

        let current = Dated::new(at(5, 5), weather(293.15));
        let view = map_current_weather(&cairo(), Some(&current), &[], &celsius_prefs(), at(5, 5));
        assert!(view.is_night);
    }

    #[test]
    fn hourly_window_is_24_hours() {
        let now = at(5, 12);
        let forecast = vec![
            Dated::new(at(5, 15), weather(294.0)),
            Dated::new(at(6, 12), weather(292.0)),
            Dated::new(at(6, 15), weather(291.0)), // 27 h out, excluded
        ];
        let view = map_current_weather(&cairo(), None, &forecast, &celsius_prefs(), now);
        assert_eq!(view.hourly.len(), 2);
        assert_eq!(view.hourly[0].time_label, "3 PM");
    }

    #[test]
    fn daily_keeps_first_reading_per_day_and_clamps() {
        let now = at(5, 0);
        let forecast = vec![
            Dated::new(at(5, 9), weather(293.15)),
            Dated::new(at(5, 15), weather(299.15)), // same day, dropped
            Dated::new(at(6, 15), weather(295.15)),
        ];
        let view = map_current_weather(&cairo(), None, &forecast, &celsius_prefs(), now);

        assert_eq!(view.daily.days.len(), 2);
        assert_eq!(view.daily.days[0].day_name, "Monday");
        assert_eq!(view.daily.days[1].day_name, "Tuesday");

        // Envelope spans min-3 to max+3 over the window, in Celsius.
        assert!((view.daily.window_min.value() - 17.0).abs() < 1e-9);
        assert!((view.daily.window_max.value() - 29.0).abs() < 1e-9);

        // Tuesday 15:00 would swing to 32 °C but clamps to the envelope.
        let tuesday = &view.daily.days[1];
        assert!((tuesday.max_temperature.value() - 29.0).abs() < 1e-9);
    }

    #[test]
    fn snow_shadows_rain() {
        let mut snowy = weather(270.0);
        snowy.precipitation = Precipitation {
            rain: 2.0,
            snow: 3.0,
            probability: Some(0.4),
        };
        let current = Dated::new(at(5, 12), snowy);
        let view =
            map_current_weather(&cairo(), Some(&current), &[], &celsius_prefs(), at(5, 12));

        let precipitation = view.precipitation.unwrap();
        assert_eq!(precipitation.kind, PrecipitationKind::Snow);
        assert_eq!(precipitation.amount, "3");
        assert_eq!(precipitation.probability.as_deref(), Some("40%"));
    }

    #[test]
    fn pressure_precision_follows_unit() {
        let current = Dated::new(at(5, 12), weather(293.15));

        let view =
            map_current_weather(&cairo(), Some(&current), &[], &celsius_prefs(), at(5, 12));
        let pressure = view.pressure.unwrap();
        assert_eq!(pressure.sea_level, "1013");
        assert_eq!(pressure.pressure_unit, "hPa");

        let prefs = Preferences {
            pressure_unit: PressureUnit::InchesOfMercury,
            ..celsius_prefs()
        };
        let view = map_current_weather(&cairo(), Some(&current), &[], &prefs, at(5, 12));
        let pressure = view.pressure.unwrap();
        assert_eq!(pressure.sea_level, "29.91");
        assert_eq!(pressure.pressure_unit, "inHg");
    }

    #[test]
    fn sunrise_without_sunset_is_omitted() {
        let mut partial = weather(293.15);
        partial.sunset = None;
        let current = Dated::new(at(5, 12), partial);
        let view =
            map_current_weather(&cairo(), Some(&current), &[], &celsius_prefs(), at(5, 12));
        assert!(view.sunrise_sunset.is_none());
    }

    #[test]
    fn arabic_preferences_localize_text() {
        let prefs = Preferences {
            language: Language::Arabic,
            ..Preferences::default()
        };
        let current = Dated::new(at(5, 12), weather(293.15));
        let view = map_current_weather(&cairo(), Some(&current), &[], &prefs, at(5, 12));

        let conditions = view.conditions.unwrap();
        assert_eq!(conditions.city_name, "القاهرة");
        assert_eq!(conditions.condition_title, "صحو");
        assert_eq!(conditions.temperature_unit, "°س");
        assert_eq!(view.wind.unwrap().speed_unit, "م/ث");
    }

    #[test]
    fn wind_converts_to_preferred_unit() {
        let prefs = Preferences {
            speed_unit: SpeedUnit::KilometersPerHour,
            ..celsius_prefs()
        };
        let current = Dated::new(at(5, 12), weather(293.15));
        let view = map_current_weather(&cairo(), Some(&current), &[], &prefs, at(5, 12));

        let wind = view.wind.unwrap();
        assert!((wind.speed.value() - 18.0).abs() < 1e-9);
        assert!((wind.gust.value() - 28.8).abs() < 1e-9);
        assert_eq!(wind.direction_degrees, 90.0);
        assert_eq!(wind.direction, CompassDirection::East);
    }

    #[test]
    fn visibility_converts_to_preferred_unit() {
        let prefs = Preferences {
            distance_unit: DistanceUnit::Kilometers,
            ..celsius_prefs()
        };
        let current = Dated::new(at(5, 12), weather(293.15));
        let view = map_current_weather(&cairo(), Some(&current), &[], &prefs, at(5, 12));

        let visibility = view.visibility.unwrap();
        assert_eq!(visibility.distance, "10");
        assert_eq!(visibility.distance_unit, "km");
    }
}
