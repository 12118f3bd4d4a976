//! The committed date range reported to the host.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::calendar::{end_of_day, start_of_day};
use crate::error::{RangePickError, RangePickResult};

/// Trigger text shown when nothing has been selected yet.
pub const EMPTY_LABEL: &str = "Pick a date";

/// Format used for both ends of the trigger label, e.g. "Oct 05, 2026".
pub const LABEL_DATE_FORMAT: &str = "%b %d, %Y";

/// A committed `{from, to}` range.
///
/// `from` is always at start of day and `to` at end of day, with
/// `from <= to`. There is no way to build an unordered one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSelection")]
pub struct Selection {
    from: NaiveDateTime,
    to: NaiveDateTime,
}

#[derive(Deserialize)]
struct RawSelection {
    from: NaiveDateTime,
    to: NaiveDateTime,
}

impl TryFrom<RawSelection> for Selection {
    type Error = RangePickError;

    fn try_from(raw: RawSelection) -> RangePickResult<Self> {
        if raw.from > raw.to {
            return Err(RangePickError::InvalidRange {
                from: raw.from.to_string(),
                to: raw.to.to_string(),
            });
        }
        Ok(Selection::normalized(raw.from.date(), raw.to.date()))
    }
}

impl Selection {
    /// Build a selection spanning whole days. Endpoints given in the wrong
    /// order are swapped.
    pub fn normalized(from: NaiveDate, to: NaiveDate) -> Self {
        let (from, to) = if from <= to { (from, to) } else { (to, from) };
        Selection {
            from: start_of_day(from),
            to: end_of_day(to),
        }
    }

    /// Build a selection from a grid pick, where the second day may not have
    /// been chosen yet. A missing `to` means a single-day range.
    pub fn from_pick(from: NaiveDate, to: Option<NaiveDate>) -> Self {
        Self::normalized(from, to.unwrap_or(from))
    }

    /// A single day.
    pub fn day(date: NaiveDate) -> Self {
        Self::normalized(date, date)
    }

    /// Parse `YYYY-MM-DD` endpoints, `to` defaulting to `from`.
    pub fn from_args(from: &str, to: Option<&str>) -> RangePickResult<Self> {
        let from = parse_date(from)?;
        let to = to.map(parse_date).transpose()?;
        Ok(Self::from_pick(from, to))
    }

    pub fn from(&self) -> NaiveDateTime {
        self.from
    }

    pub fn to(&self) -> NaiveDateTime {
        self.to
    }

    pub fn from_date(&self) -> NaiveDate {
        self.from.date()
    }

    pub fn to_date(&self) -> NaiveDate {
        self.to.date()
    }

    /// Number of calendar days covered, counting both ends.
    pub fn days(&self) -> i64 {
        (self.to_date() - self.from_date()).num_days() + 1
    }

    pub fn is_single_day(&self) -> bool {
        self.from_date() == self.to_date()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from_date() <= date && date <= self.to_date()
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.from.format(LABEL_DATE_FORMAT),
            self.to.format(LABEL_DATE_FORMAT)
        )
    }
}

/// Trigger text for an optional selection.
pub fn trigger_text(selection: Option<&Selection>) -> String {
    match selection {
        Some(selection) => selection.to_string(),
        None => EMPTY_LABEL.to_string(),
    }
}

/// Parse YYYY-MM-DD
pub fn parse_date(s: &str) -> RangePickResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| RangePickError::InvalidDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveTime, Timelike};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn normalizes_to_day_boundaries() {
        let sel = Selection::normalized(date(2026, 10, 5), date(2026, 10, 17));
        assert_eq!(sel.from().time(), NaiveTime::MIN);
        assert_eq!(sel.to().hour(), 23);
        assert_eq!(sel.to().nanosecond(), 999_000_000);
        assert_eq!(sel.days(), 13);
    }

    #[test]
    fn swaps_unordered_endpoints() {
        let sel = Selection::normalized(date(2026, 10, 17), date(2026, 10, 5));
        assert_eq!(sel.from_date(), date(2026, 10, 5));
        assert_eq!(sel.to_date(), date(2026, 10, 17));
        assert!(sel.from() <= sel.to());
    }

    #[test]
    fn missing_to_defaults_to_from() {
        let sel = Selection::from_pick(date(2026, 3, 1), None);
        assert!(sel.is_single_day());
        assert_eq!(sel, Selection::day(date(2026, 3, 1)));
        assert_eq!(sel.days(), 1);
    }

    #[test]
    fn contains_is_inclusive() {
        let sel = Selection::normalized(date(2026, 1, 10), date(2026, 1, 12));
        assert!(sel.contains(date(2026, 1, 10)));
        assert!(sel.contains(date(2026, 1, 12)));
        assert!(!sel.contains(date(2026, 1, 9)));
        assert!(!sel.contains(date(2026, 1, 13)));
    }

    #[test]
    fn trigger_label_format() {
        let sel = Selection::normalized(date(2026, 10, 5), date(2026, 10, 17));
        assert_eq!(sel.to_string(), "Oct 05, 2026 - Oct 17, 2026");
        assert_eq!(trigger_text(Some(&sel)), "Oct 05, 2026 - Oct 17, 2026");
        assert_eq!(trigger_text(None), "Pick a date");
    }

    #[test]
    fn parses_args() {
        let sel = Selection::from_args("2026-02-01", Some("2026-02-14")).unwrap();
        assert_eq!(sel.from_date(), date(2026, 2, 1));
        assert_eq!(sel.to_date(), date(2026, 2, 14));

        let single = Selection::from_args("2026-02-01", None).unwrap();
        assert!(single.is_single_day());
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(matches!(
            parse_date("2026-13-01"),
            Err(RangePickError::InvalidDate(_))
        ));
        assert!(parse_date("02/01/2026").is_err());
        assert!(Selection::from_args("2026-02-30", None).is_err());
    }

    #[test]
    fn json_shape() {
        let sel = Selection::day(date(2026, 10, 17));
        let json = serde_json::to_value(sel).unwrap();
        assert_eq!(json["from"], "2026-10-17T00:00:00");
        assert_eq!(json["to"], "2026-10-17T23:59:59.999");

        let back: Selection = serde_json::from_value(json).unwrap();
        assert_eq!(back, sel);
    }

    #[test]
    fn deserialize_rejects_reversed_pair() {
        let json = r#"{"from":"2026-10-18T00:00:00","to":"2026-10-17T00:00:00"}"#;
        assert!(serde_json::from_str::<Selection>(json).is_err());
    }
}
