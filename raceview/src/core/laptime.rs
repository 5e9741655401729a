// lap and session timestamps arrive in units of 1/10000 s
const TICKS_PER_SECOND: f64 = 10000.0;

/// Named incident flags and their bitmask values as used in the raw lap data.
pub const LAP_FLAGS: [(&str, u32); 12] = [
    ("invalid", 1),
    ("pitted", 2),
    ("off track", 4),
    ("black flag", 8),
    ("car reset", 16),
    ("contact", 32),
    ("car contact", 64),
    ("lost control", 128),
    ("discontinuity", 256),
    ("interpolated crossing", 512),
    ("clock smash", 1024),
    ("tow", 2048),
];

/// as_seconds converts a raw timestamp into seconds.
pub fn as_seconds(raw: i64) -> f64 {
    raw as f64 / TICKS_PER_SECOND
}

/// time_string formats a duration in seconds as MM:SS.TTTT (ten-thousandths), prefixed
/// with the hours only if there are any. Non-positive durations have no meaningful
/// representation and are returned as "--:--".
pub fn time_string(seconds: f64) -> String {
    if seconds <= 0.0 {
        return String::from("--:--");
    }

    let hours = (seconds / 3600.0) as u64;
    let remaining = seconds - hours as f64 * 3600.0;
    let minutes = (remaining / 60.0) as u64;
    let remaining = remaining - minutes as f64 * 60.0;
    let whole_seconds = remaining as u64;
    let ten_thousandths = ((remaining - whole_seconds as f64) * TICKS_PER_SECOND) as u64;

    let timestr = format!("{:02}:{:02}.{:04}", minutes, whole_seconds, ten_thousandths);

    if hours > 0 {
        return format!("{:02}:{}", hours, timestr);
    }
    timestr
}

/// flag_names returns the names of all incident flags set in the inserted bitmask, in
/// mask order.
pub fn flag_names(mask: u32) -> Vec<&'static str> {
    LAP_FLAGS
        .iter()
        .filter(|&&(_, bit)| mask & bit != 0)
        .map(|&(name, _)| name)
        .collect()
}

/// position_suffix returns the english ordinal suffix for the inserted number.
pub fn position_suffix(number: u32) -> &'static str {
    if number != 11 && number % 10 == 1 {
        return "st";
    }
    if number != 12 && number % 10 == 2 {
        return "nd";
    }
    if number != 13 && number % 10 == 3 {
        return "rd";
    }
    "th"
}
