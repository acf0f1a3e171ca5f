//! Conversion-aware numeric wrappers for every quantity that crosses the
//! display boundary.
//!
//! Raw numbers are never handed to the display layer bare; they are wrapped
//! in the variant that states what they mean. Each set converts to every
//! other variant of the same set, and converting there and back reproduces
//! the original value within floating-point tolerance.

/// A temperature in one of the supported display units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Temperature {
    Kelvin(f64),
    Celsius(f64),
    Fahrenheit(f64),
}

impl Temperature {
    pub fn value(&self) -> f64 {
        match *self {
            Self::Kelvin(v) | Self::Celsius(v) | Self::Fahrenheit(v) => v,
        }
    }

    pub fn to_kelvin(&self) -> f64 {
        match *self {
            Self::Kelvin(v) => v,
            Self::Celsius(v) => v + 273.15,
            Self::Fahrenheit(v) => (v + 459.67) / 1.8,
        }
    }

    pub fn to_celsius(&self) -> f64 {
        match *self {
            Self::Kelvin(v) => v - 273.15,
            Self::Celsius(v) => v,
            Self::Fahrenheit(v) => (v - 32.0) / 1.8,
        }
    }

    pub fn to_fahrenheit(&self) -> f64 {
        match *self {
            Self::Kelvin(v) => v * 1.8 - 459.67,
            Self::Celsius(v) => v * 1.8 + 32.0,
            Self::Fahrenheit(v) => v,
        }
    }
}

/// An atmospheric pressure in one of the supported display units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pressure {
    HectoPascal(f64),
    InchesOfMercury(f64),
    Bar(f64),
}

impl Pressure {
    pub fn value(&self) -> f64 {
        match *self {
            Self::HectoPascal(v) | Self::InchesOfMercury(v) | Self::Bar(v) => v,
        }
    }

    pub fn to_hecto_pascal(&self) -> f64 {
        match *self {
            Self::HectoPascal(v) => v,
            Self::InchesOfMercury(v) => v / 0.02953,
            Self::Bar(v) => v * 1000.0,
        }
    }

    pub fn to_inches_of_mercury(&self) -> f64 {
        match *self {
            Self::HectoPascal(v) => v * 0.02953,
            Self::InchesOfMercury(v) => v,
            Self::Bar(v) => v * 29.53,
        }
    }

    pub fn to_bar(&self) -> f64 {
        match *self {
            Self::HectoPascal(v) => v / 1000.0,
            Self::InchesOfMercury(v) => v / 29.53,
            Self::Bar(v) => v,
        }
    }
}

/// A speed in one of the supported display units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Speed {
    MetersPerSecond(f64),
    KilometersPerHour(f64),
    MilesPerHour(f64),
}

impl Speed {
    pub fn value(&self) -> f64 {
        match *self {
            Self::MetersPerSecond(v) | Self::KilometersPerHour(v) | Self::MilesPerHour(v) => v,
        }
    }

    pub fn to_meters_per_second(&self) -> f64 {
        match *self {
            Self::MetersPerSecond(v) => v,
            Self::KilometersPerHour(v) => v / 3.6,
            Self::MilesPerHour(v) => v / 2.23694,
        }
    }

    pub fn to_kilometers_per_hour(&self) -> f64 {
        match *self {
            Self::MetersPerSecond(v) => v * 3.6,
            Self::KilometersPerHour(v) => v,
            Self::MilesPerHour(v) => v * 1.60934,
        }
    }

    pub fn to_miles_per_hour(&self) -> f64 {
        match *self {
            Self::MetersPerSecond(v) => v * 2.23694,
            Self::KilometersPerHour(v) => v / 1.60934,
            Self::MilesPerHour(v) => v,
        }
    }
}

/// A distance in one of the supported display units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distance {
    Meter(f64),
    Foot(f64),
    Kilometer(f64),
    Mile(f64),
}

impl Distance {
    pub fn value(&self) -> f64 {
        match *self {
            Self::Meter(v) | Self::Foot(v) | Self::Kilometer(v) | Self::Mile(v) => v,
        }
    }

    pub fn to_meter(&self) -> f64 {
        match *self {
            Self::Meter(v) => v,
            Self::Foot(v) => v / 3.28084,
            Self::Kilometer(v) => v * 1000.0,
            Self::Mile(v) => v * 1609.34,
        }
    }

    pub fn to_foot(&self) -> f64 {
        match *self {
            Self::Meter(v) => v * 3.28084,
            Self::Foot(v) => v,
            Self::Kilometer(v) => v * 1000.0 * 3.28084,
            Self::Mile(v) => v * 1609.34 * 3.28084,
        }
    }

    pub fn to_kilometer(&self) -> f64 {
        match *self {
            Self::Meter(v) => v / 1000.0,
            Self::Foot(v) => v / 3.28084 / 1000.0,
            Self::Kilometer(v) => v,
            Self::Mile(v) => v * 1.60934,
        }
    }

    pub fn to_mile(&self) -> f64 {
        match *self {
            Self::Meter(v) => v / 1609.34,
            Self::Foot(v) => v / 3.28084 / 1609.34,
            Self::Kilometer(v) => v / 1.60934,
            Self::Mile(v) => v,
        }
    }
}
