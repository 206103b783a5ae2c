use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use chrono_tz::Tz;

/// Organisation timezone: either an IANA zone or a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrgTimezone {
    Named(Tz),
    Fixed(FixedOffset),
}

impl Default for OrgTimezone {
    fn default() -> Self {
        OrgTimezone::Named(chrono_tz::Pacific::Auckland)
    }
}

fn parse_fixed_offset(raw: &str) -> Option<FixedOffset> {
    let trimmed = raw.trim();
    let (sign, rest) = match trimmed.chars().next()? {
        '+' => (1, &trimmed[1..]),
        '-' => (-1, &trimmed[1..]),
        _ => return None,
    };

    let rest = rest.trim();
    if rest.is_empty() {
        return None;
    }

    let (hours, minutes) = if let Some((h, m)) = rest.split_once(':') {
        (h.parse::<i32>().ok()?, m.parse::<i32>().ok()?)
    } else if rest.len() > 2 {
        let (h, m) = rest.split_at(rest.len() - 2);
        (h.parse::<i32>().ok()?, m.parse::<i32>().ok()?)
    } else {
        (rest.parse::<i32>().ok()?, 0)
    };

    if hours > 14 || minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Accepts IANA names ("Pacific/Auckland"), "UTC"/"GMT", and offsets such as
/// "UTC+12", "+13:00" or "GMT-0530".
pub fn parse_timezone(raw: &str) -> Option<OrgTimezone> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let upper = trimmed.to_uppercase();
    if upper == "UTC" || upper == "GMT" {
        return FixedOffset::east_opt(0).map(OrgTimezone::Fixed);
    }

    if upper.starts_with("UTC") || upper.starts_with("GMT") {
        return parse_fixed_offset(&trimmed[3..]).map(OrgTimezone::Fixed);
    }

    if trimmed.starts_with('+') || trimmed.starts_with('-') {
        return parse_fixed_offset(trimmed).map(OrgTimezone::Fixed);
    }

    trimmed.parse::<Tz>().ok().map(OrgTimezone::Named)
}

pub fn local_date(tz: OrgTimezone, utc_dt: DateTime<Utc>) -> NaiveDate {
    match tz {
        OrgTimezone::Named(tz) => utc_dt.with_timezone(&tz).date_naive(),
        OrgTimezone::Fixed(offset) => utc_dt.with_timezone(&offset).date_naive(),
    }
}

pub fn today(tz: OrgTimezone) -> NaiveDate {
    local_date(tz, Utc::now())
}

/// Inclusive day count between two dates, in either order.
pub fn days_off(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days().abs() + 1
}
