//! User display preferences: language and units.
//!
//! The display mapper consumes a [`Preferences`] snapshot; live updates are
//! observed through the [`SettingsStore`] watch stream and a fresh snapshot
//! is taken per mapping pass.

use std::sync::Arc;
use tokio::sync::watch;

/// The two rendering locales the app supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppLocale {
    English,
    Arabic,
}

/// Language preference, `Default` deferring to the embedder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Default,
    English,
    Arabic,
}

impl Language {
    pub fn resolve(&self, system: AppLocale) -> AppLocale {
        match self {
            Language::Default => system,
            Language::English => AppLocale::English,
            Language::Arabic => AppLocale::Arabic,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub fn label(&self, locale: AppLocale) -> &'static str {
        match locale {
            AppLocale::English => match self {
                Self::Celsius => "°C",
                Self::Fahrenheit => "°F",
                Self::Kelvin => "K",
            },
            AppLocale::Arabic => match self {
                Self::Celsius => "°س",
                Self::Fahrenheit => "°ف",
                Self::Kelvin => "ك",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeedUnit {
    #[default]
    MetersPerSecond,
    KilometersPerHour,
    MilesPerHour,
}

impl SpeedUnit {
    pub fn label(&self, locale: AppLocale) -> &'static str {
        match locale {
            AppLocale::English => match self {
                Self::MetersPerSecond => "m/s",
                Self::KilometersPerHour => "km/h",
                Self::MilesPerHour => "mph",
            },
            AppLocale::Arabic => match self {
                Self::MetersPerSecond => "م/ث",
                Self::KilometersPerHour => "كم/س",
                Self::MilesPerHour => "ميل/س",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PressureUnit {
    #[default]
    HectoPascal,
    InchesOfMercury,
    Bar,
}

impl PressureUnit {
    pub fn label(&self, locale: AppLocale) -> &'static str {
        match locale {
            AppLocale::English => match self {
                Self::HectoPascal => "hPa",
                Self::InchesOfMercury => "inHg",
                Self::Bar => "bar",
            },
            AppLocale::Arabic => match self {
                Self::HectoPascal => "هكتوباسكال",
                Self::InchesOfMercury => "بوصة زئبق",
                Self::Bar => "بار",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceUnit {
    #[default]
    Meters,
    Kilometers,
    Feet,
    Miles,
}

impl DistanceUnit {
    pub fn label(&self, locale: AppLocale) -> &'static str {
        match locale {
            AppLocale::English => match self {
                Self::Meters => "m",
                Self::Kilometers => "km",
                Self::Feet => "ft",
                Self::Miles => "mi",
            },
            AppLocale::Arabic => match self {
                Self::Meters => "م",
                Self::Kilometers => "كم",
                Self::Feet => "قدم",
                Self::Miles => "ميل",
            },
        }
    }
}

/// A snapshot of every display preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub language: Language,
    pub temperature_unit: TemperatureUnit,
    pub speed_unit: SpeedUnit,
    pub pressure_unit: PressureUnit,
    pub distance_unit: DistanceUnit,
}

impl Preferences {
    /// The rendering locale for this snapshot.
    ///
    /// `Language::Default` resolves to English here; embedders tracking a
    /// system locale should store an explicit language instead.
    pub fn locale(&self) -> AppLocale {
        self.language.resolve(AppLocale::English)
    }
}

/// Preference storage with a change-notification stream.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    inner: Arc<watch::Sender<Preferences>>,
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new(Preferences::default())
    }
}

impl SettingsStore {
    pub fn new(initial: Preferences) -> Self {
        let (tx, _) = watch::channel(initial);
        Self {
            inner: Arc::new(tx),
        }
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Preferences {
        *self.inner.borrow()
    }

    /// A receiver that observes every subsequent snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Preferences> {
        self.inner.subscribe()
    }

    pub fn set_language(&self, language: Language) {
        self.inner.send_modify(|p| p.language = language);
    }

    pub fn set_temperature_unit(&self, unit: TemperatureUnit) {
        self.inner.send_modify(|p| p.temperature_unit = unit);
    }

    pub fn set_speed_unit(&self, unit: SpeedUnit) {
        self.inner.send_modify(|p| p.speed_unit = unit);
    }

    pub fn set_pressure_unit(&self, unit: PressureUnit) {
        self.inner.send_modify(|p| p.pressure_unit = unit);
    }

    pub fn set_distance_unit(&self, unit: DistanceUnit) {
        self.inner.send_modify(|p| p.distance_unit = unit);
    }
}
