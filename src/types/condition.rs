//! The closed weather condition catalog.
//!
//! Maps the stable numeric condition ids reported by the weather provider to
//! descriptive variants, each carrying its group, localized title, English
//! description, and day/night icon asset names. Unknown ids are rejected at
//! the remote boundary via [`Condition::from_id`].

use crate::settings::AppLocale;

/// The broad family a condition belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionGroup {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Atmosphere,
    Clear,
    Clouds,
}

macro_rules! conditions {
    ($($variant:ident => $id:literal, $group:ident, $title_en:literal / $title_ar:literal,
        $description:literal, $icon:literal, $night_icon:literal;)+) => {
        /// A weather condition, keyed by the provider's stable numeric id.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Condition {
            $($variant,)+
        }

        impl Condition {
            /// Resolves a provider condition id against the catalog.
            pub fn from_id(id: u16) -> Option<Self> {
                match id {
                    $($id => Some(Self::$variant),)+
                    _ => None,
                }
            }

            pub fn id(&self) -> u16 {
                match self {
                    $(Self::$variant => $id,)+
                }
            }

            pub fn group(&self) -> ConditionGroup {
                match self {
                    $(Self::$variant => ConditionGroup::$group,)+
                }
            }

            /// Short localized title, e.g. "Rain".
            pub fn title(&self, locale: AppLocale) -> &'static str {
                match locale {
                    AppLocale::English => match self {
                        $(Self::$variant => $title_en,)+
                    },
                    AppLocale::Arabic => match self {
                        $(Self::$variant => $title_ar,)+
                    },
                }
            }

            /// Long English description, e.g. "light intensity shower rain".
            pub fn description(&self) -> &'static str {
                match self {
                    $(Self::$variant => $description,)+
                }
            }

            /// Daytime icon asset name.
            pub fn icon(&self) -> &'static str {
                match self {
                    $(Self::$variant => $icon,)+
                }
            }

            /// Nighttime icon asset name.
            pub fn night_icon(&self) -> &'static str {
                match self {
                    $(Self::$variant => $night_icon,)+
                }
            }
        }
    };
}

conditions! {
    ThunderstormWithLightRain    => 200, Thunderstorm, "Thunderstorm" / "عاصفة رعدية", "thunderstorm with light rain", "thunder", "thunder";
    ThunderstormWithRain         => 201, Thunderstorm, "Thunderstorm" / "عاصفة رعدية", "thunderstorm with rain", "thunder", "thunder";
    ThunderstormWithHeavyRain    => 202, Thunderstorm, "Thunderstorm" / "عاصفة رعدية", "thunderstorm with heavy rain", "thunder", "thunder";
    LightThunderstorm            => 210, Thunderstorm, "Thunderstorm" / "عاصفة رعدية", "light thunderstorm", "thunder", "thunder";
    Thunderstorm                 => 211, Thunderstorm, "Thunderstorm" / "عاصفة رعدية", "thunderstorm", "thunder", "thunder";
    HeavyThunderstorm            => 212, Thunderstorm, "Thunderstorm" / "عاصفة رعدية", "heavy thunderstorm", "severe_thunderstorm", "severe_thunderstorm";
    RaggedThunderstorm           => 221, Thunderstorm, "Thunderstorm" / "عاصفة رعدية", "ragged thunderstorm", "thunder", "thunder";
    ThunderstormWithLightDrizzle => 230, Thunderstorm, "Thunderstorm" / "عاصفة رعدية", "thunderstorm with light drizzle", "thunder", "thunder";
    ThunderstormWithDrizzle      => 231, Thunderstorm, "Thunderstorm" / "عاصفة رعدية", "thunderstorm with drizzle", "thunder", "thunder";
    ThunderstormWithHeavyDrizzle => 232, Thunderstorm, "Thunderstorm" / "عاصفة رعدية", "thunderstorm with heavy drizzle", "thunder", "thunder";
    LightIntensityDrizzle        => 300, Drizzle, "Drizzle" / "رذاذ", "light intensity drizzle", "rainy_7", "rainy_7";
    Drizzle                      => 301, Drizzle, "Drizzle" / "رذاذ", "drizzle", "rainy_7", "rainy_7";
    HeavyIntensityDrizzle        => 302, Drizzle, "Drizzle" / "رذاذ", "heavy intensity drizzle", "rainy_7", "rainy_7";
    LightIntensityDrizzleRain    => 310, Drizzle, "Drizzle" / "رذاذ", "light intensity drizzle rain", "rainy_4", "rainy_4";
    DrizzleRain                  => 311, Drizzle, "Drizzle" / "رذاذ", "drizzle rain", "rainy_5", "rainy_5";
    HeavyIntensityDrizzleRain    => 312, Drizzle, "Drizzle" / "رذاذ", "heavy intensity drizzle rain", "rainy_6", "rainy_6";
    ShowerRainAndDrizzle         => 313, Drizzle, "Drizzle" / "رذاذ", "shower rain and drizzle", "rainy_6", "rainy_6";
    HeavyShowerRainAndDrizzle    => 314, Drizzle, "Drizzle" / "رذاذ", "heavy shower rain and drizzle", "rainy_6", "rainy_6";
    ShowerDrizzle                => 321, Drizzle, "Drizzle" / "رذاذ", "shower drizzle", "rainy_6", "rainy_6";
    LightRain                    => 500, Rain, "Rain" / "مطر", "light rain", "rainy_4", "rainy_4";
    ModerateRain                 => 501, Rain, "Rain" / "مطر", "moderate rain", "rainy_5", "rainy_5";
    HeavyIntensityRain           => 502, Rain, "Rain" / "مطر", "heavy intensity rain", "rainy_6", "rainy_6";
    VeryHeavyRain                => 503, Rain, "Rain" / "مطر", "very heavy rain", "rainy_6", "rainy_6";
    ExtremeRain                  => 504, Rain, "Rain" / "مطر", "extreme rain", "rainy_6", "rainy_6";
    FreezingRain                 => 511, Rain, "Rain" / "مطر", "freezing rain", "snow_and_sleet_mix", "snow_and_sleet_mix";
    LightIntensityShowerRain     => 520, Rain, "Rain" / "مطر", "light intensity shower rain", "rainy_6", "rainy_6";
    ShowerRain                   => 521, Rain, "Rain" / "مطر", "shower rain", "rainy_6", "rainy_6";
    HeavyIntensityShowerRain     => 522, Rain, "Rain" / "مطر", "heavy intensity shower rain", "rainy_6", "rainy_6";
    RaggedShowerRain             => 531, Rain, "Rain" / "مطر", "ragged shower rain", "rainy_1", "rainy_1_night";
    LightSnow                    => 600, Snow, "Snow" / "ثلج", "light snow", "snowy_4", "snowy_4";
    Snow                         => 601, Snow, "Snow" / "ثلج", "snow", "snowy_5", "snowy_5";
    HeavySnow                    => 602, Snow, "Snow" / "ثلج", "heavy snow", "snowy_6", "snowy_6";
    Sleet                        => 611, Snow, "Snow" / "ثلج", "sleet", "sleet", "sleet";
    LightShowerSleet             => 612, Snow, "Snow" / "ثلج", "light shower sleet", "sleet", "sleet";
    ShowerSleet                  => 613, Snow, "Snow" / "ثلج", "shower sleet", "snow_and_sleet_mix", "snow_and_sleet_mix";
    LightRainAndSnow             => 615, Snow, "Snow" / "ثلج", "light rain and snow", "snow_and_sleet_mix", "snow_and_sleet_mix";
    RainAndSnow                  => 616, Snow, "Snow" / "ثلج", "rain and snow", "snow_and_sleet_mix", "snow_and_sleet_mix";
    LightShowerSnow              => 620, Snow, "Snow" / "ثلج", "light shower snow", "snowy_4", "snowy_4";
    ShowerSnow                   => 621, Snow, "Snow" / "ثلج", "shower snow", "snowy_5", "snowy_5";
    HeavyShowerSnow              => 622, Snow, "Snow" / "ثلج", "heavy shower snow", "snowy_6", "snowy_6";
    Mist                         => 701, Atmosphere, "Mist" / "ضباب خفيف", "mist", "fog", "fog";
    Smoke                        => 711, Atmosphere, "Smoke" / "دخان", "smoke", "fog", "fog";
    Haze                         => 721, Atmosphere, "Haze" / "سديم", "haze", "fog", "fog";
    SandDustWhirls               => 731, Atmosphere, "Dust" / "غبار", "sand/dust whirls", "wind", "wind";
    Fog                          => 741, Atmosphere, "Fog" / "ضباب", "fog", "fog", "fog";
    Sand                         => 751, Atmosphere, "Sand" / "رمال", "sand", "haze", "haze";
    Dust                         => 761, Atmosphere, "Dust" / "غبار", "dust", "haze", "haze";
    VolcanicAsh                  => 762, Atmosphere, "Ash" / "رماد", "volcanic ash", "fog", "fog";
    Squalls                      => 771, Atmosphere, "Squall" / "عاصفة", "squalls", "tropical_storm", "tropical_storm";
    Tornado                      => 781, Atmosphere, "Tornado" / "إعصار", "tornado", "tornado", "tornado";
    ClearSky                     => 800, Clear, "Clear" / "صحو", "clear sky", "clear", "clear_night";
    FewClouds                    => 801, Clouds, "Clouds" / "غيوم", "few clouds: 11-25%", "fair", "fair_night";
    ScatteredClouds              => 802, Clouds, "Clouds" / "غيوم", "scattered clouds: 25-50%", "cloudy_1", "cloudy_1_night";
    BrokenClouds                 => 803, Clouds, "Clouds" / "غيوم", "broken clouds: 51-84%", "cloudy_2", "cloudy_2_night";
    OvercastClouds               => 804, Clouds, "Clouds" / "غيوم", "overcast clouds: 85-100%", "cloudy_original", "cloudy_original";
}
