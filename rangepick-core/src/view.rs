//! Which month the calendar grid shows, and how a month is laid out.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::{days_in_month, month_name};

pub const GRID_COLUMNS: usize = 7;
pub const GRID_ROWS: usize = 6;

/// A year and month pair used for month navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a year/month pair if the month is 1-12 and the whole month
    /// falls inside chrono's date range.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, 1)?;
        NaiveDate::from_ymd_opt(year, month, days_in_month(year, month))?;
        Some(Self { year, month })
    }

    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month number, 1-12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Zero-based month index, as used by the month dropdown.
    pub fn month_index(&self) -> u32 {
        self.month - 1
    }

    /// Adds or subtracts months, adjusting the year as needed. Stays put when
    /// the result would leave chrono's date range.
    pub fn add_months(&self, delta: i32) -> Self {
        let total = i64::from(self.year) * 12 + i64::from(self.month) - 1 + i64::from(delta);
        i32::try_from(total.div_euclid(12))
            .ok()
            .and_then(|year| Self::new(year, (total.rem_euclid(12) + 1) as u32))
            .unwrap_or(*self)
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, self.days()).unwrap_or(NaiveDate::MAX)
    }

    pub fn days(&self) -> u32 {
        days_in_month(self.year, self.month)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", month_name(self.month), self.year)
    }
}

/// One month laid out as rows of Monday-first weeks.
///
/// Always 6 rows so that consecutive panels line up. Cells outside the month
/// are `None`.
pub fn build_month_grid(month: YearMonth) -> Vec<[Option<NaiveDate>; GRID_COLUMNS]> {
    let leading = month.first_day().weekday().num_days_from_monday() as usize;
    let mut rows = vec![[None; GRID_COLUMNS]; GRID_ROWS];

    for (offset, day) in month.first_day().iter_days().take(month.days() as usize).enumerate() {
        let cell = leading + offset;
        rows[cell / GRID_COLUMNS][cell % GRID_COLUMNS] = Some(day);
    }

    rows
}

/// Short weekday labels in grid column order.
pub const WEEKDAY_LABELS: [&str; GRID_COLUMNS] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_month() {
        assert!(YearMonth::new(2026, 0).is_none());
        assert!(YearMonth::new(2026, 13).is_none());
        assert!(YearMonth::new(2026, 12).is_some());
    }

    #[test]
    fn rejects_years_outside_chrono_range() {
        assert!(YearMonth::new(300_000, 1).is_none());
        assert!(YearMonth::new(-300_000, 1).is_none());
        assert!(YearMonth::new(i32::MAX, 6).is_none());

        let last = YearMonth::containing(NaiveDate::MAX);
        assert_eq!(last.last_day(), NaiveDate::MAX);
        assert_eq!(last.add_months(1), last);
        let first = YearMonth::containing(NaiveDate::MIN);
        assert_eq!(first.first_day(), NaiveDate::MIN);
        assert_eq!(first.add_months(-1), first);
    }

    #[test]
    fn add_months_wraps_years() {
        let jan = YearMonth::new(2026, 1).unwrap();
        assert_eq!(jan.add_months(-1), YearMonth::new(2025, 12).unwrap());
        assert_eq!(jan.add_months(11), YearMonth::new(2026, 12).unwrap());
        assert_eq!(jan.add_months(12), YearMonth::new(2027, 1).unwrap());
        assert_eq!(jan.add_months(-25), YearMonth::new(2023, 12).unwrap());
    }

    #[test]
    fn first_and_last_day() {
        let feb = YearMonth::new(2024, 2).unwrap();
        assert_eq!(feb.first_day(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(feb.last_day(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(feb.month_index(), 1);
        assert_eq!(feb.to_string(), "February 2024");
    }

    #[test]
    fn grid_places_days_under_weekdays() {
        // October 2026 starts on a Thursday
        let grid = build_month_grid(YearMonth::new(2026, 10).unwrap());
        assert_eq!(grid.len(), GRID_ROWS);
        assert_eq!(grid[0][..3], [None, None, None]);
        assert_eq!(grid[0][3], NaiveDate::from_ymd_opt(2026, 10, 1));
        assert_eq!(grid[2][5], NaiveDate::from_ymd_opt(2026, 10, 17));

        let filled = grid.iter().flatten().filter(|c| c.is_some()).count();
        assert_eq!(filled, 31);
    }

    #[test]
    fn grid_omits_outside_days() {
        let sept = YearMonth::new(2026, 9).unwrap();
        for day in build_month_grid(sept).iter().flatten().flatten() {
            assert_eq!(YearMonth::containing(*day), sept);
        }
    }
}
