//! Permissive publication-date parsing.
//!
//! Metadata exports mix several date spellings: ISO days, bare years,
//! RFC 3339 and RFC 2822 timestamps, and month names in either order. [`parse_publish_date`] tries
//! each known shape and returns `None` when nothing matches. It never panics,
//! whatever the input.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Earliest year accepted from any format.
const MIN_YEAR: i32 = 1000;

/// Full-date formats, tried in order.
///
/// Slash dates are read month-first.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%Y%m%d",
    "%m/%d/%Y",
    "%d.%m.%Y",
    "%Y %b %d",
    "%Y %B %d",
    "%b %d, %Y",
    "%B %d, %Y",
    "%b %d %Y",
    "%B %d %Y",
    "%d %b %Y",
    "%d %B %Y",
    "%a, %d %b %Y",
    "%A, %d %B %Y",
];

/// Date-time formats; only the date part is kept.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Year-month formats. Parsed as the first day of the month.
const MONTH_FORMATS: &[&str] = &["%Y-%m", "%Y/%m", "%Y %b", "%Y %B", "%b %Y", "%B %Y"];

/// Parses a raw publication date.
///
/// Surrounding whitespace is ignored. A bare four-digit year maps to
/// January 1st of that year and a year-month to the first of the month.
///
/// ```
/// use chrono::NaiveDate;
/// use cord_core::clean::parse_publish_date;
///
/// assert_eq!(parse_publish_date("2020-03-01"), NaiveDate::from_ymd_opt(2020, 3, 1));
/// assert_eq!(parse_publish_date("2020"), NaiveDate::from_ymd_opt(2020, 1, 1));
/// assert_eq!(parse_publish_date("not-a-date"), None);
/// ```
pub fn parse_publish_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() || !s.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }

    if let Some(date) = parse_bare_year(s) {
        return Some(date);
    }

    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok().filter(has_full_year))
    {
        return Some(date);
    }

    if let Some(date) = DateTime::parse_from_rfc3339(s)
        .or_else(|_| DateTime::parse_from_rfc2822(s))
        .ok()
        .map(|dt| dt.date_naive())
        .filter(has_full_year)
    {
        return Some(date);
    }

    if let Some(date) = DATETIME_FORMATS.iter().find_map(|fmt| {
        NaiveDateTime::parse_from_str(s, fmt)
            .ok()
            .map(|dt| dt.date())
            .filter(has_full_year)
    }) {
        return Some(date);
    }

    let with_day = format!("{s} 1");
    MONTH_FORMATS.iter().find_map(|fmt| {
        NaiveDate::parse_from_str(&with_day, &format!("{fmt} %d"))
            .ok()
            .filter(has_full_year)
    })
}

/// Rejects parses where `%Y` consumed fewer than four digits.
///
/// chrono reads `%Y` greedily but accepts short years, so `"March 2020"`
/// also fits `%B %d %Y` as March 20th of year 20.
#[inline]
fn has_full_year(date: &NaiveDate) -> bool {
    date.year() >= MIN_YEAR
}

#[inline]
fn parse_bare_year(s: &str) -> Option<NaiveDate> {
    if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = s.parse().ok()?;
    NaiveDate::from_ymd_opt(year, 1, 1).filter(has_full_year)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn iso_day() {
        assert_eq!(parse_publish_date("2020-03-01"), ymd(2020, 3, 1));
        assert_eq!(parse_publish_date("  2020-03-01\n"), ymd(2020, 3, 1));
    }

    #[test]
    fn bare_year() {
        assert_eq!(parse_publish_date("2020"), ymd(2020, 1, 1));
        assert_eq!(parse_publish_date("1999"), ymd(1999, 1, 1));
    }

    #[test]
    fn separators() {
        assert_eq!(parse_publish_date("2020/03/01"), ymd(2020, 3, 1));
        assert_eq!(parse_publish_date("2020.03.01"), ymd(2020, 3, 1));
        assert_eq!(parse_publish_date("20200301"), ymd(2020, 3, 1));
    }

    #[test]
    fn slash_dates_are_month_first() {
        assert_eq!(parse_publish_date("03/01/2020"), ymd(2020, 3, 1));
        assert_eq!(parse_publish_date("12/31/2020"), ymd(2020, 12, 31));
    }

    #[test]
    fn dotted_dates_are_day_first() {
        assert_eq!(parse_publish_date("01.03.2020"), ymd(2020, 3, 1));
    }

    #[test]
    fn month_names() {
        assert_eq!(parse_publish_date("2020 Mar 1"), ymd(2020, 3, 1));
        assert_eq!(parse_publish_date("Mar 1, 2020"), ymd(2020, 3, 1));
        assert_eq!(parse_publish_date("March 1, 2020"), ymd(2020, 3, 1));
        assert_eq!(parse_publish_date("1 March 2020"), ymd(2020, 3, 1));
    }

    #[test]
    fn year_month() {
        assert_eq!(parse_publish_date("2020-03"), ymd(2020, 3, 1));
        assert_eq!(parse_publish_date("2020 Mar"), ymd(2020, 3, 1));
        assert_eq!(parse_publish_date("March 2020"), ymd(2020, 3, 1));
    }

    #[test]
    fn short_years_rejected() {
        assert_eq!(parse_publish_date("Mar 2020"), ymd(2020, 3, 1));
        assert_eq!(parse_publish_date("0999"), None);
    }

    #[test]
    fn timestamps() {
        assert_eq!(parse_publish_date("2020-03-01T12:30:00Z"), ymd(2020, 3, 1));
        assert_eq!(parse_publish_date("2020-03-01T23:30:00-05:00"), ymd(2020, 3, 1));
        assert_eq!(parse_publish_date("2020-03-01 00:00:00"), ymd(2020, 3, 1));
        assert_eq!(parse_publish_date("2020-03-01T08:15:00.250"), ymd(2020, 3, 1));
    }

    #[test]
    fn rfc2822_dates() {
        assert_eq!(parse_publish_date("Sun, 01 Mar 2020"), ymd(2020, 3, 1));
        assert_eq!(parse_publish_date("Sun, 01 Mar 2020 12:30:00 +0000"), ymd(2020, 3, 1));
        assert_eq!(parse_publish_date("Sunday, 01 March 2020"), ymd(2020, 3, 1));
    }

    #[test]
    fn rejects_garbage() {
        for raw in [
            "",
            "   ",
            "not-a-date",
            "2020-13-01",
            "2020-02-30",
            "20",
            "2020-03-01 and more",
            "yesterday",
            "💥",
        ] {
            assert_eq!(parse_publish_date(raw), None, "accepted {raw:?}");
        }
    }
}
