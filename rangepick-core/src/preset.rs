//! Named quick-select ranges.
//!
//! [`compute_range`] is the only place the preset rules live. It is pure: the
//! same preset and reference day always give the same [`Selection`].

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::{
    end_of_month, end_of_week, end_of_year, start_of_month, start_of_week, start_of_year,
    sub_days, sub_months,
};
use crate::error::RangePickError;
use crate::selection::Selection;

/// The quick-select presets, in panel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    Today,
    Yesterday,
    ThisWeek,
    LastWeek,
    #[serde(rename = "last-7-days")]
    Last7Days,
    ThisMonth,
    LastMonth,
    ThisYear,
    LastYear,
}

impl Preset {
    pub const ALL: [Preset; 9] = [
        Preset::Today,
        Preset::Yesterday,
        Preset::ThisWeek,
        Preset::LastWeek,
        Preset::Last7Days,
        Preset::ThisMonth,
        Preset::LastMonth,
        Preset::ThisYear,
        Preset::LastYear,
    ];

    /// Label shown on the preset button.
    pub fn label(&self) -> &'static str {
        match self {
            Preset::Today => "Today",
            Preset::Yesterday => "Yesterday",
            Preset::ThisWeek => "This Week",
            Preset::LastWeek => "Last Week",
            Preset::Last7Days => "Last 7 Days",
            Preset::ThisMonth => "This Month",
            Preset::LastMonth => "Last Month",
            Preset::ThisYear => "This Year",
            Preset::LastYear => "Last Year",
        }
    }

    /// Command-line friendly key, e.g. `last-7-days`.
    pub fn key(&self) -> &'static str {
        match self {
            Preset::Today => "today",
            Preset::Yesterday => "yesterday",
            Preset::ThisWeek => "this-week",
            Preset::LastWeek => "last-week",
            Preset::Last7Days => "last-7-days",
            Preset::ThisMonth => "this-month",
            Preset::LastMonth => "last-month",
            Preset::ThisYear => "this-year",
            Preset::LastYear => "last-year",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Preset {
    type Err = RangePickError;

    /// Accepts either the label ("Last 7 Days") or the key ("last-7-days"),
    /// ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Preset::ALL
            .into_iter()
            .find(|p| {
                p.label().eq_ignore_ascii_case(wanted) || p.key().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| RangePickError::UnknownPreset(s.to_string()))
    }
}

/// How "last month" and "last year" step backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PresetArithmetic {
    /// Fixed day counts: last month is reached by going back
    /// `day_of_month` days, last year by going back 365 days. Slightly off
    /// on Dec 31 of a leap year, where "Last Year" lands in the current year.
    #[default]
    DayCount,
    /// True calendar subtraction of one month or one year.
    Calendar,
}

/// Compute the concrete range for `preset` relative to `today`.
pub fn compute_range(
    preset: Preset,
    today: NaiveDate,
    arithmetic: PresetArithmetic,
) -> Selection {
    let (start, end) = match preset {
        Preset::Today => (today, today),
        Preset::Yesterday => {
            let yesterday = sub_days(today, 1);
            (yesterday, yesterday)
        }
        Preset::ThisWeek => (start_of_week(today), end_of_week(today)),
        Preset::LastWeek => (
            sub_days(start_of_week(today), 7),
            sub_days(end_of_week(today), 7),
        ),
        Preset::Last7Days => (sub_days(today, 6), today),
        Preset::ThisMonth => (start_of_month(today), end_of_month(today)),
        Preset::LastMonth => {
            let anchor = match arithmetic {
                PresetArithmetic::DayCount => sub_days(today, today.day() as u64),
                PresetArithmetic::Calendar => sub_months(today, 1),
            };
            (start_of_month(anchor), end_of_month(anchor))
        }
        Preset::ThisYear => (start_of_year(today), end_of_year(today)),
        Preset::LastYear => {
            let anchor = match arithmetic {
                PresetArithmetic::DayCount => sub_days(today, 365),
                PresetArithmetic::Calendar => sub_months(today, 12),
            };
            (start_of_year(anchor), end_of_year(anchor))
        }
    };

    Selection::normalized(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveTime, Timelike, Weekday};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn range(preset: Preset, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let sel = compute_range(preset, today, PresetArithmetic::DayCount);
        (sel.from_date(), sel.to_date())
    }

    // 2026-10-17 is a Saturday
    const TODAY: (i32, u32, u32) = (2026, 10, 17);

    fn today() -> NaiveDate {
        date(TODAY.0, TODAY.1, TODAY.2)
    }

    #[test]
    fn every_preset_is_ordered_and_day_aligned() {
        let days = [
            date(2026, 10, 17),
            date(2024, 2, 29),
            date(2024, 12, 31),
            date(2025, 1, 1),
            date(2026, 3, 31),
        ];
        for today in days {
            for arithmetic in [PresetArithmetic::DayCount, PresetArithmetic::Calendar] {
                for preset in Preset::ALL {
                    let sel = compute_range(preset, today, arithmetic);
                    assert!(sel.from() <= sel.to(), "{preset} on {today}");
                    assert_eq!(sel.from().time(), NaiveTime::MIN);
                    assert_eq!(sel.to().hour(), 23);
                    assert_eq!(sel.to().minute(), 59);
                    assert_eq!(sel.to().second(), 59);
                    assert_eq!(sel.to().nanosecond(), 999_000_000);
                }
            }
        }
    }

    #[test]
    fn today_and_yesterday_are_single_days() {
        assert_eq!(range(Preset::Today, today()), (today(), today()));
        assert_eq!(
            range(Preset::Yesterday, today()),
            (date(2026, 10, 16), date(2026, 10, 16))
        );
        assert_eq!(
            range(Preset::Yesterday, date(2026, 1, 1)),
            (date(2025, 12, 31), date(2025, 12, 31))
        );
    }

    #[test]
    fn this_week_runs_monday_to_sunday() {
        let mut day = date(2026, 10, 1);
        while day <= date(2026, 10, 31) {
            let (from, to) = range(Preset::ThisWeek, day);
            assert_eq!(from.weekday(), Weekday::Mon);
            assert_eq!(to.weekday(), Weekday::Sun);
            assert_eq!((to - from).num_days(), 6);
            assert!(from <= day && day <= to);
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn last_week_is_previous_monday_to_sunday() {
        assert_eq!(
            range(Preset::LastWeek, today()),
            (date(2026, 10, 5), date(2026, 10, 11))
        );
    }

    #[test]
    fn last_7_days_includes_today() {
        assert_eq!(
            range(Preset::Last7Days, today()),
            (date(2026, 10, 11), today())
        );
        let sel = compute_range(Preset::Last7Days, today(), PresetArithmetic::DayCount);
        assert_eq!(sel.days(), 7);
    }

    #[test]
    fn month_presets() {
        assert_eq!(
            range(Preset::ThisMonth, today()),
            (date(2026, 10, 1), date(2026, 10, 31))
        );
        assert_eq!(
            range(Preset::LastMonth, today()),
            (date(2026, 9, 1), date(2026, 9, 30))
        );
        assert_eq!(
            range(Preset::LastMonth, date(2026, 3, 31)),
            (date(2026, 2, 1), date(2026, 2, 28))
        );
        assert_eq!(
            range(Preset::LastMonth, date(2026, 1, 10)),
            (date(2025, 12, 1), date(2025, 12, 31))
        );
    }

    #[test]
    fn year_presets() {
        assert_eq!(
            range(Preset::ThisYear, today()),
            (date(2026, 1, 1), date(2026, 12, 31))
        );
        assert_eq!(
            range(Preset::LastYear, today()),
            (date(2025, 1, 1), date(2025, 12, 31))
        );
    }

    #[test]
    fn day_count_last_year_drifts_on_leap_new_years_eve() {
        let dec31 = date(2024, 12, 31);
        // 365 days back from 2024-12-31 is 2024-01-01
        assert_eq!(
            range(Preset::LastYear, dec31),
            (date(2024, 1, 1), date(2024, 12, 31))
        );
        let calendar = compute_range(Preset::LastYear, dec31, PresetArithmetic::Calendar);
        assert_eq!(calendar.from_date(), date(2023, 1, 1));
        assert_eq!(calendar.to_date(), date(2023, 12, 31));
    }

    #[test]
    fn arithmetic_modes_agree_on_last_month() {
        let mut day = date(2024, 1, 1);
        while day <= date(2025, 12, 31) {
            assert_eq!(
                compute_range(Preset::LastMonth, day, PresetArithmetic::DayCount),
                compute_range(Preset::LastMonth, day, PresetArithmetic::Calendar),
                "{day}"
            );
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn repeated_computation_is_identical() {
        for preset in Preset::ALL {
            let a = compute_range(preset, today(), PresetArithmetic::DayCount);
            let b = compute_range(preset, today(), PresetArithmetic::DayCount);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn parses_labels_and_keys() {
        assert_eq!("Last 7 Days".parse::<Preset>().unwrap(), Preset::Last7Days);
        assert_eq!("last-7-days".parse::<Preset>().unwrap(), Preset::Last7Days);
        assert_eq!("THIS WEEK".parse::<Preset>().unwrap(), Preset::ThisWeek);
        assert!(matches!(
            "fortnight".parse::<Preset>(),
            Err(RangePickError::UnknownPreset(_))
        ));
        for preset in Preset::ALL {
            assert_eq!(preset.key().parse::<Preset>().unwrap(), preset);
            assert_eq!(preset.label().parse::<Preset>().unwrap(), preset);
        }
    }

    #[test]
    fn serde_uses_keys() {
        assert_eq!(
            serde_json::to_string(&Preset::Last7Days).unwrap(),
            "\"last-7-days\""
        );
        assert_eq!(
            serde_json::to_string(&Preset::ThisMonth).unwrap(),
            "\"this-month\""
        );
    }
}
