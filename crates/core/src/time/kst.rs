use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Timelike};

const KST_OFFSET_SECS: i32 = 9 * 3600;

// Backend rows are stringified without an offset; those are already KST wall-clock times.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
];

fn kst() -> Option<FixedOffset> {
    FixedOffset::east_opt(KST_OFFSET_SECS)
}

/// Parses a backend timestamp into KST. Offset-aware inputs are converted,
/// naive ones are taken as KST already.
pub fn parse_timestamp(s: &str) -> Option<DateTime<FixedOffset>> {
    let s = s.trim();
    let kst = kst()?;

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&kst));
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return kst.from_local_datetime(&naive).single();
        }
    }

    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    kst.from_local_datetime(&date.and_hms_opt(0, 0, 0)?).single()
}

/// `2026. 1. 27.`
pub fn card_date(s: &str) -> String {
    match parse_timestamp(s) {
        Some(dt) => format!("{}. {}. {}.", dt.year(), dt.month(), dt.day()),
        None => s.to_string(),
    }
}

/// `2026. 01. 27. 오후 03:05`
pub fn modal_timestamp(s: &str) -> String {
    let Some(dt) = parse_timestamp(s) else {
        return s.to_string();
    };
    let (is_pm, hour12) = dt.hour12();
    let meridiem = if is_pm { "오후" } else { "오전" };
    format!(
        "{:04}. {:02}. {:02}. {meridiem} {:02}:{:02}",
        dt.year(),
        dt.month(),
        dt.day(),
        hour12,
        dt.minute()
    )
}

/// `1/27 15시`
pub fn chart_label(s: &str) -> String {
    match parse_timestamp(s) {
        Some(dt) => format!("{}/{} {:02}시", dt.month(), dt.day(), dt.hour()),
        None => s.to_string(),
    }
}
