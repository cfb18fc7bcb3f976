//! Reporting period tokens and their calendar resolution.
//!
//! Every statement builder that is period-scoped takes a resolved
//! `DateRange`. Resolution is anchored to an injected "today" so results
//! are deterministic and testable without wall-clock coupling.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// An inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the range.
    pub start: NaiveDate,
    /// Last day of the range (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new range. Callers are expected to pass `start <= end`.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Returns true if the date falls within the range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Named reporting period tokens as presented by the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportingPeriod {
    /// The current day.
    Today,
    /// The previous day.
    Yesterday,
    /// The current calendar week (Monday through Sunday).
    Week,
    /// The previous calendar week.
    LastWeek,
    /// The current calendar month.
    Month,
    /// The previous calendar month.
    LastMonth,
    /// The current calendar quarter (3-calendar-month block).
    Quarter,
    /// The previous calendar quarter.
    LastQuarter,
    /// The current calendar year.
    Year,
    /// The previous calendar year.
    LastYear,
    /// January 1st through today.
    Ytd,
    /// Caller-supplied bounds.
    Custom {
        /// First day of the custom range.
        start: NaiveDate,
        /// Last day of the custom range.
        end: NaiveDate,
    },
}

impl ReportingPeriod {
    /// Resolves the token to a concrete date range anchored at `today`.
    #[must_use]
    pub fn resolve(self, today: NaiveDate) -> DateRange {
        match self {
            Self::Today => DateRange::new(today, today),
            Self::Yesterday => {
                let yesterday = today - Duration::days(1);
                DateRange::new(yesterday, yesterday)
            }
            Self::Week => {
                let start =
                    today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
                DateRange::new(start, start + Duration::days(6))
            }
            Self::LastWeek => {
                let this_week_start =
                    today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
                let start = this_week_start - Duration::days(7);
                DateRange::new(start, start + Duration::days(6))
            }
            Self::Month => month_range(today.year(), today.month()),
            Self::LastMonth => {
                let (year, month) = previous_month(today.year(), today.month());
                month_range(year, month)
            }
            Self::Quarter => {
                let start_month = quarter_start_month(today.month());
                quarter_range(today.year(), start_month)
            }
            Self::LastQuarter => {
                let start_month = quarter_start_month(today.month());
                if start_month == 1 {
                    quarter_range(today.year() - 1, 10)
                } else {
                    quarter_range(today.year(), start_month - 3)
                }
            }
            Self::Year => DateRange::new(
                first_of_month(today.year(), 1),
                last_of_month(today.year(), 12),
            ),
            Self::LastYear => DateRange::new(
                first_of_month(today.year() - 1, 1),
                last_of_month(today.year() - 1, 12),
            ),
            Self::Ytd => DateRange::new(first_of_month(today.year(), 1), today),
            Self::Custom { start, end } => DateRange::new(start, end),
        }
    }
}

/// Derives the fiscal period key ("YYYY-MM") a transaction date belongs to.
#[must_use]
pub fn fiscal_period_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Derives the fiscal year a transaction date belongs to.
#[must_use]
pub fn fiscal_year(date: NaiveDate) -> i32 {
    date.year()
}

// month is always 1-12 here, so the fallbacks are unreachable.
fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN)
}

fn last_of_month(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    first_of_month(next_year, next_month)
        .pred_opt()
        .unwrap_or(NaiveDate::MAX)
}

fn month_range(year: i32, month: u32) -> DateRange {
    DateRange::new(first_of_month(year, month), last_of_month(year, month))
}

fn quarter_start_month(month: u32) -> u32 {
    ((month - 1) / 3) * 3 + 1
}

fn quarter_range(year: i32, start_month: u32) -> DateRange {
    DateRange::new(
        first_of_month(year, start_month),
        last_of_month(year, start_month + 2),
    )
}

fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}
