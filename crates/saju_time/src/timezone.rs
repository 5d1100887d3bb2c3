//! Built-in timezone table: standard meridian and UTC offset per identifier.
//!
//! Meridians are the fixed modern values; historical zone changes (Korea's
//! 1954–1961 UTC+8:30 period, for instance) are not modelled. Pass an
//! explicit meridian override to handle those.

use serde::Serialize;

/// Standard-time parameters of one timezone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimezoneInfo {
    /// IANA identifier (or accepted alias).
    pub id: &'static str,
    /// Longitude of the zone's standard meridian, degrees east.
    pub standard_meridian_deg: f64,
    /// Standard offset from UTC, minutes east.
    pub utc_offset_minutes: i32,
    /// Whether the Korean gazetted DST history applies.
    pub korean_dst_history: bool,
}

const fn tz(id: &'static str, utc_offset_minutes: i32, korean_dst_history: bool) -> TimezoneInfo {
    TimezoneInfo {
        id,
        standard_meridian_deg: utc_offset_minutes as f64 / 4.0,
        utc_offset_minutes,
        korean_dst_history,
    }
}

#[rustfmt::skip]
static TIMEZONES: &[TimezoneInfo] = &[
    tz("Asia/Seoul",          540,  true),
    tz("KST",                 540,  true),
    tz("Asia/Pyongyang",      540,  false),
    tz("Asia/Tokyo",          540,  false),
    tz("JST",                 540,  false),
    tz("Asia/Shanghai",       480,  false),
    tz("Asia/Hong_Kong",      480,  false),
    tz("Asia/Taipei",         480,  false),
    tz("Asia/Singapore",      480,  false),
    tz("Asia/Kolkata",        330,  false),
    tz("UTC",                 0,    false),
    tz("Etc/UTC",             0,    false),
    tz("Europe/London",       0,    false),
    tz("Europe/Paris",        60,   false),
    tz("Europe/Berlin",       60,   false),
    tz("America/New_York",    -300, false),
    tz("America/Chicago",     -360, false),
    tz("America/Denver",      -420, false),
    tz("America/Los_Angeles", -480, false),
    tz("Pacific/Honolulu",    -600, false),
    tz("Australia/Sydney",    600,  false),
];

/// Look up a timezone identifier (case-sensitive, IANA spelling).
pub fn timezone_info(id: &str) -> Option<&'static TimezoneInfo> {
    TIMEZONES.iter().find(|tz| tz.id == id)
}

/// All built-in timezones.
pub fn all_timezones() -> &'static [TimezoneInfo] {
    TIMEZONES
}
