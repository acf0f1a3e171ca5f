//! Closed catalog of ISO 3166-1 alpha-2 countries with localized display
//! names.
//!
//! Geocoding responses carry a bare alpha-2 code; [`Country::from_code`]
//! resolves it against this catalog and unknown codes are rejected at the
//! remote boundary. Arabic display names are provided where the upstream
//! resources had them; [`Country::display_name`] falls back to English
//! otherwise.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

macro_rules! countries {
    ($($variant:ident => $code:literal, $english:literal $(, $arabic:literal)?;)+) => {
        /// A country, identified by its ISO 3166-1 alpha-2 code.
        #[allow(clippy::upper_case_acronyms)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Country {
            $($variant,)+
        }

        impl Country {
            /// The ISO 3166-1 alpha-2 code, uppercase.
            pub fn code(&self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)+
                }
            }

            /// Resolves an alpha-2 code (any case) against the catalog.
            pub fn from_code(code: &str) -> Option<Self> {
                match code.to_ascii_uppercase().as_str() {
                    $($code => Some(Self::$variant),)+
                    _ => None,
                }
            }

            pub fn english_name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $english,)+
                }
            }

            pub fn arabic_name(&self) -> Option<&'static str> {
                match self {
                    $(Self::$variant => countries!(@arabic $($arabic)?),)+
                }
            }
        }
    };
    (@arabic $arabic:literal) => { Some($arabic) };
    (@arabic) => { None };
}

impl Country {
    /// Display name in the requested locale, falling back to English.
    pub fn display_name(&self, locale: crate::settings::AppLocale) -> &'static str {
        match locale {
            crate::settings::AppLocale::Arabic => {
                self.arabic_name().unwrap_or_else(|| self.english_name())
            }
            crate::settings::AppLocale::English => self.english_name(),
        }
    }
}

impl Serialize for Country {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Country {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Country::from_code(&code)
            .ok_or_else(|| D::Error::custom(format!("unknown country code '{code}'")))
    }
}

countries! {
    AD => "AD", "Andorra";
    AE => "AE", "United Arab Emirates", "الإمارات العربية المتحدة";
    AF => "AF", "Afghanistan", "أفغانستان";
    AG => "AG", "Antigua and Barbuda";
    AL => "AL", "Albania", "ألبانيا";
    AM => "AM", "Armenia", "أرمينيا";
    AO => "AO", "Angola", "أنغولا";
    AR => "AR", "Argentina", "الأرجنتين";
    AT => "AT", "Austria", "النمسا";
    AU => "AU", "Australia", "أستراليا";
    AZ => "AZ", "Azerbaijan", "أذربيجان";
    BA => "BA", "Bosnia and Herzegovina", "البوسنة والهرسك";
    BB => "BB", "Barbados";
    BD => "BD", "Bangladesh", "بنغلاديش";
    BE => "BE", "Belgium", "بلجيكا";
    BF => "BF", "Burkina Faso", "بوركينا فاسو";
    BG => "BG", "Bulgaria", "بلغاريا";
    BH => "BH", "Bahrain", "البحرين";
    BI => "BI", "Burundi", "بوروندي";
    BJ => "BJ", "Benin", "بنين";
    BN => "BN", "Brunei";
    BO => "BO", "Bolivia", "بوليفيا";
    BR => "BR", "Brazil", "البرازيل";
    BS => "BS", "Bahamas";
    BT => "BT", "Bhutan";
    BW => "BW", "Botswana", "بوتسوانا";
    BY => "BY", "Belarus", "بيلاروسيا";
    BZ => "BZ", "Belize";
    CA => "CA", "Canada", "كندا";
    CD => "CD", "Democratic Republic of the Congo", "جمهورية الكونغو الديمقراطية";
    CF => "CF", "Central African Republic", "جمهورية أفريقيا الوسطى";
    CG => "CG", "Republic of the Congo", "جمهورية الكونغو";
    CH => "CH", "Switzerland", "سويسرا";
    CI => "CI", "Ivory Coast", "ساحل العاج";
    CL => "CL", "Chile", "تشيلي";
    CM => "CM", "Cameroon", "الكاميرون";
    CN => "CN", "China", "الصين";
    CO => "CO", "Colombia", "كولومبيا";
    CR => "CR", "Costa Rica", "كوستاريكا";
    CU => "CU", "Cuba", "كوبا";
    CV => "CV", "Cape Verde", "الرأس الأخضر";
    CY => "CY", "Cyprus", "قبرص";
    CZ => "CZ", "Czechia", "التشيك";
    DE => "DE", "Germany", "ألمانيا";
    DJ => "DJ", "Djibouti", "جيبوتي";
    DK => "DK", "Denmark", "الدنمارك";
    DM => "DM", "Dominica";
    DO => "DO", "Dominican Republic", "جمهورية الدومينيكان";
    DZ => "DZ", "Algeria", "الجزائر";
    EC => "EC", "Ecuador", "الإكوادور";
    EE => "EE", "Estonia", "إستونيا";
    EG => "EG", "Egypt", "مصر";
    ER => "ER", "Eritrea", "إريتريا";
    ES => "ES", "Spain", "إسبانيا";
    ET => "ET", "Ethiopia", "إثيوبيا";
    FI => "FI", "Finland", "فنلندا";
    FJ => "FJ", "Fiji", "فيجي";
    FM => "FM", "Micronesia";
    FR => "FR", "France", "فرنسا";
    GA => "GA", "Gabon", "الغابون";
    GB => "GB", "United Kingdom", "المملكة المتحدة";
    GD => "GD", "Grenada";
    GE => "GE", "Georgia", "جورجيا";
    GH => "GH", "Ghana", "غانا";
    GM => "GM", "Gambia", "غامبيا";
    GN => "GN", "Guinea", "غينيا";
    GQ => "GQ", "Equatorial Guinea", "غينيا الاستوائية";
    GR => "GR", "Greece", "اليونان";
    GT => "GT", "Guatemala", "غواتيمالا";
    GW => "GW", "Guinea-Bissau", "غينيا بيساو";
    GY => "GY", "Guyana", "غيانا";
    HN => "HN", "Honduras", "هندوراس";
    HR => "HR", "Croatia", "كرواتيا";
    HT => "HT", "Haiti", "هايتي";
    HU => "HU", "Hungary", "المجر";
    ID => "ID", "Indonesia", "إندونيسيا";
    IE => "IE", "Ireland", "أيرلندا";
    IL => "IL", "Israel";
    IN => "IN", "India", "الهند";
    IQ => "IQ", "Iraq", "العراق";
    IR => "IR", "Iran", "إيران";
    IS => "IS", "Iceland", "آيسلندا";
    IT => "IT", "Italy", "إيطاليا";
    JM => "JM", "Jamaica", "جامايكا";
    JO => "JO", "Jordan", "الأردن";
    JP => "JP", "Japan", "اليابان";
    KE => "KE", "Kenya", "كينيا";
    KG => "KG", "Kyrgyzstan", "قيرغيزستان";
    KH => "KH", "Cambodia", "كمبوديا";
    KI => "KI", "Kiribati";
    KM => "KM", "Comoros", "جزر القمر";
    KN => "KN", "Saint Kitts and Nevis";
    KP => "KP", "North Korea", "كوريا الشمالية";
    KR => "KR", "South Korea", "كوريا الجنوبية";
    KW => "KW", "Kuwait", "الكويت";
    KZ => "KZ", "Kazakhstan", "كازاخستان";
    LA => "LA", "Laos", "لاوس";
    LB => "LB", "Lebanon", "لبنان";
    LC => "LC", "Saint Lucia";
    LI => "LI", "Liechtenstein";
    LK => "LK", "Sri Lanka", "سريلانكا";
    LR => "LR", "Liberia", "ليبيريا";
    LS => "LS", "Lesotho", "ليسوتو";
    LT => "LT", "Lithuania", "ليتوانيا";
    LU => "LU", "Luxembourg", "لوكسمبورغ";
    LV => "LV", "Latvia", "لاتفيا";
    LY => "LY", "Libya", "ليبيا";
    MA => "MA", "Morocco", "المغرب";
    MC => "MC", "Monaco", "موناكو";
    MD => "MD", "Moldova", "مولدوفا";
    ME => "ME", "Montenegro", "الجبل الأسود";
    MG => "MG", "Madagascar", "مدغشقر";
    MH => "MH", "Marshall Islands";
    MK => "MK", "North Macedonia", "مقدونيا الشمالية";
    ML => "ML", "Mali", "مالي";
    MM => "MM", "Myanmar", "ميانمار";
    MN => "MN", "Mongolia", "منغوليا";
    MR => "MR", "Mauritania", "موريتانيا";
    MT => "MT", "Malta", "مالطا";
    MU => "MU", "Mauritius", "موريشيوس";
    MV => "MV", "Maldives", "المالديف";
    MW => "MW", "Malawi", "مالاوي";
    MX => "MX", "Mexico", "المكسيك";
    MY => "MY", "Malaysia", "ماليزيا";
    MZ => "MZ", "Mozambique", "موزمبيق";
    NA => "NA", "Namibia", "ناميبيا";
    NE => "NE", "Niger", "النيجر";
    NG => "NG", "Nigeria", "نيجيريا";
    NI => "NI", "Nicaragua", "نيكاراغوا";
    NL => "NL", "Netherlands", "هولندا";
    NO => "NO", "Norway", "النرويج";
    NP => "NP", "Nepal", "نيبال";
    NR => "NR", "Nauru";
    NZ => "NZ", "New Zealand", "نيوزيلندا";
    OM => "OM", "Oman", "عُمان";
    PA => "PA", "Panama", "بنما";
    PE => "PE", "Peru", "بيرو";
    PG => "PG", "Papua New Guinea";
    PH => "PH", "Philippines", "الفلبين";
    PK => "PK", "Pakistan", "باكستان";
    PL => "PL", "Poland", "بولندا";
    PS => "PS", "Palestine", "فلسطين";
    PT => "PT", "Portugal", "البرتغال";
    PW => "PW", "Palau";
    PY => "PY", "Paraguay", "باراغواي";
    QA => "QA", "Qatar", "قطر";
    RO => "RO", "Romania", "رومانيا";
    RS => "RS", "Serbia", "صربيا";
    RU => "RU", "Russia", "روسيا";
    RW => "RW", "Rwanda", "رواندا";
    SA => "SA", "Saudi Arabia", "المملكة العربية السعودية";
    SB => "SB", "Solomon Islands";
    SC => "SC", "Seychelles", "سيشل";
    SD => "SD", "Sudan", "السودان";
    SE => "SE", "Sweden", "السويد";
    SG => "SG", "Singapore", "سنغافورة";
    SI => "SI", "Slovenia", "سلوفينيا";
    SK => "SK", "Slovakia", "سلوفاكيا";
    SL => "SL", "Sierra Leone", "سيراليون";
    SM => "SM", "San Marino";
    SN => "SN", "Senegal", "السنغال";
    SO => "SO", "Somalia", "الصومال";
    SR => "SR", "Suriname", "سورينام";
    SS => "SS", "South Sudan", "جنوب السودان";
    ST => "ST", "Sao Tome and Principe";
    SV => "SV", "El Salvador", "السلفادور";
    SY => "SY", "Syria", "سوريا";
    SZ => "SZ", "Eswatini", "إسواتيني";
    TD => "TD", "Chad", "تشاد";
    TG => "TG", "Togo", "توغو";
    TH => "TH", "Thailand", "تايلاند";
    TJ => "TJ", "Tajikistan", "طاجيكستان";
    TL => "TL", "Timor-Leste";
    TM => "TM", "Turkmenistan", "تركمانستان";
    TN => "TN", "Tunisia", "تونس";
    TO => "TO", "Tonga";
    TR => "TR", "Turkey", "تركيا";
    TT => "TT", "Trinidad and Tobago";
    TV => "TV", "Tuvalu";
    TW => "TW", "Taiwan", "تايوان";
    TZ => "TZ", "Tanzania", "تنزانيا";
    UA => "UA", "Ukraine", "أوكرانيا";
    UG => "UG", "Uganda", "أوغندا";
    US => "US", "United States", "الولايات المتحدة";
    UY => "UY", "Uruguay", "أوروغواي";
    UZ => "UZ", "Uzbekistan", "أوزبكستان";
    VA => "VA", "Vatican City", "الفاتيكان";
    VC => "VC", "Saint Vincent and the Grenadines";
    VE => "VE", "Venezuela", "فنزويلا";
    VN => "VN", "Vietnam", "فيتنام";
    VU => "VU", "Vanuatu";
    WS => "WS", "Samoa";
    YE => "YE", "Yemen", "اليمن";
    ZA => "ZA", "South Africa", "جنوب أفريقيا";
    ZM => "ZM", "Zambia", "زامبيا";
    ZW => "ZW", "Zimbabwe", "زيمبابوي";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::AppLocale;

    #[test]
    fn code_round_trip() {
        assert_eq!(Country::from_code("EG"), Some(Country::EG));
        assert_eq!(Country::from_code("eg"), Some(Country::EG));
        assert_eq!(Country::EG.code(), "EG");
        assert_eq!(Country::from_code("XX"), None);
    }

    #[test]
    fn display_name_falls_back_to_english() {
        assert_eq!(Country::EG.display_name(AppLocale::Arabic), "مصر");
        assert_eq!(Country::EG.display_name(AppLocale::English), "Egypt");
        // No Arabic entry in the catalog for Tuvalu.
        assert_eq!(Country::TV.display_name(AppLocale::Arabic), "Tuvalu");
    }

    #[test]
    fn serde_uses_alpha2_code() {
        let json = serde_json::to_string(&Country::SA).unwrap();
        assert_eq!(json, "\"SA\"");
        let back: Country = serde_json::from_str("\"sa\"").unwrap();
        assert_eq!(back, Country::SA);
        assert!(serde_json::from_str::<Country>("\"ZZ\"").is_err());
    }
}
