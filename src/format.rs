//! Locale-aware date and time rendering.
//!
//! Produces the handful of textual shapes the display layer needs: a full
//! header line like `Friday, 5 May 2025 3:04 PM GMT+02:00`, bare hour labels
//! for the hourly strip, clock times for sunrise and sunset, and weekday
//! names for the daily forecast. All clocks are 12-hour. Digits stay Western
//! in both locales.

use crate::settings::AppLocale;
use chrono::{DateTime, Datelike, FixedOffset, NaiveTime, Timelike, Weekday};

const WEEKDAYS_EN: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const WEEKDAYS_AR: [&str; 7] = [
    "الاثنين",
    "الثلاثاء",
    "الأربعاء",
    "الخميس",
    "الجمعة",
    "السبت",
    "الأحد",
];

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_AR: [&str; 12] = [
    "يناير",
    "فبراير",
    "مارس",
    "أبريل",
    "مايو",
    "يونيو",
    "يوليو",
    "أغسطس",
    "سبتمبر",
    "أكتوبر",
    "نوفمبر",
    "ديسمبر",
];

/// Localized weekday name, e.g. `Friday`.
pub fn weekday_name(weekday: Weekday, locale: AppLocale) -> &'static str {
    let index = weekday.num_days_from_monday() as usize;
    match locale {
        AppLocale::English => WEEKDAYS_EN[index],
        AppLocale::Arabic => WEEKDAYS_AR[index],
    }
}

fn month_name(month: u32, locale: AppLocale) -> &'static str {
    let index = (month - 1) as usize;
    match locale {
        AppLocale::English => MONTHS_EN[index],
        AppLocale::Arabic => MONTHS_AR[index],
    }
}

fn meridiem(hour: u32, locale: AppLocale) -> &'static str {
    let afternoon = hour >= 12;
    match locale {
        AppLocale::English => {
            if afternoon {
                "PM"
            } else {
                "AM"
            }
        }
        AppLocale::Arabic => {
            if afternoon {
                "م"
            } else {
                "ص"
            }
        }
    }
}

fn hour12(hour: u32) -> u32 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

/// UTC offset rendered as `GMT+02:00`.
fn offset_label(offset: FixedOffset) -> String {
    let seconds = offset.local_minus_utc();
    let sign = if seconds < 0 { '-' } else { '+' };
    let abs = seconds.unsigned_abs();
    format!("GMT{}{:02}:{:02}", sign, abs / 3600, abs % 3600 / 60)
}

/// Full header line: `Friday, 5 May 2025 3:04 PM GMT+02:00`.
pub fn full_date_time(date_time: &DateTime<FixedOffset>, locale: AppLocale) -> String {
    format!(
        "{}, {} {} {} {} {}",
        weekday_name(date_time.weekday(), locale),
        date_time.day(),
        month_name(date_time.month(), locale),
        date_time.year(),
        clock_time(date_time.time(), locale),
        offset_label(*date_time.offset()),
    )
}

/// Bare hour label for the hourly strip: `3 PM`.
pub fn hour_label(date_time: &DateTime<FixedOffset>, locale: AppLocale) -> String {
    let hour = date_time.hour();
    format!("{} {}", hour12(hour), meridiem(hour, locale))
}

/// Clock time with minutes: `5:43 AM`.
pub fn clock_time(time: NaiveTime, locale: AppLocale) -> String {
    let hour = time.hour();
    format!(
        "{}:{:02} {}",
        hour12(hour),
        time.minute(),
        meridiem(hour, locale)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn zoned(offset_hours: i32, y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(offset_hours * 3600)
            .unwrap()
            .with_ymd_and_hms(y, mo, d, h, mi, 0)
            .unwrap()
    }

    #[test]
    fn full_header_english() {
        let dt = zoned(2, 2025, 5, 5, 15, 4);
        assert_eq!(
            full_date_time(&dt, AppLocale::English),
            "Monday, 5 May 2025 3:04 PM GMT+02:00"
        );
    }

    #[test]
    fn full_header_arabic() {
        let dt = zoned(2, 2025, 5, 9, 9, 30);
        assert_eq!(
            full_date_time(&dt, AppLocale::Arabic),
            "الجمعة, 9 مايو 2025 9:30 ص GMT+02:00"
        );
    }

    #[test]
    fn negative_offset() {
        let dt = zoned(-5, 2025, 1, 1, 0, 0);
        assert_eq!(
            full_date_time(&dt, AppLocale::English),
            "Wednesday, 1 January 2025 12:00 AM GMT-05:00"
        );
    }

    #[test]
    fn hour_labels_wrap_noon_and_midnight() {
        assert_eq!(hour_label(&zoned(0, 2025, 6, 1, 0, 0), AppLocale::English), "12 AM");
        assert_eq!(hour_label(&zoned(0, 2025, 6, 1, 12, 0), AppLocale::English), "12 PM");
        assert_eq!(hour_label(&zoned(0, 2025, 6, 1, 23, 0), AppLocale::English), "11 PM");
        assert_eq!(hour_label(&zoned(0, 2025, 6, 1, 13, 0), AppLocale::Arabic), "1 م");
    }

    #[test]
    fn clock_times() {
        let sunrise = NaiveTime::from_hms_opt(5, 43, 0).unwrap();
        assert_eq!(clock_time(sunrise, AppLocale::English), "5:43 AM");
        assert_eq!(clock_time(sunrise, AppLocale::Arabic), "5:43 ص");
    }
}
