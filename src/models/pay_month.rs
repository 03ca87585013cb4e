//! The pay month key used to address payroll periods.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::attendance::DateRange;

/// A calendar month identifying one payroll period.
///
/// Serialized as `"YYYY-MM"` in JSON bodies, query strings, and record keys.
///
/// # Examples
///
/// ```
/// use payroll_engine::models::PayMonth;
///
/// let month: PayMonth = "2023-06".parse().unwrap();
/// assert_eq!(month.year, 2023);
/// assert_eq!(month.month, 6);
/// assert_eq!(month.to_string(), "2023-06");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PayMonth {
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1 through 12.
    pub month: u32,
}

impl PayMonth {
    /// Creates a pay month after checking the month number.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::InvalidDateRange {
                message: format!("Month {} is not in 1..=12", month),
            });
        }
        Ok(PayMonth { year, month })
    }

    /// Returns the inclusive date range spanning the whole calendar month.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use payroll_engine::models::PayMonth;
    ///
    /// let month = PayMonth::new(2023, 6).unwrap();
    /// let range = month.range().unwrap();
    /// assert_eq!(range.from, NaiveDate::from_ymd_opt(2023, 6, 1).unwrap());
    /// assert_eq!(range.to, NaiveDate::from_ymd_opt(2023, 6, 30).unwrap());
    /// ```
    pub fn range(&self) -> EngineResult<DateRange> {
        self.bounds()
            .map(|(from, to)| DateRange { from, to })
            .ok_or_else(|| EngineError::InvalidDateRange {
                message: format!("Pay month {} is outside the supported calendar", self),
            })
    }

    fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let from = NaiveDate::from_ymd_opt(self.year, self.month, 1)?;
        let next_month_start = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)?
        };
        Some((from, next_month_start.pred_opt()?))
    }
}

impl fmt::Display for PayMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for PayMonth {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_error = || EngineError::InvalidDateRange {
            message: format!("Pay month '{}' is not in YYYY-MM format", s),
        };

        let (year_part, month_part) = s.split_once('-').ok_or_else(parse_error)?;
        let year: i32 = year_part.parse().map_err(|_| parse_error())?;
        let month: u32 = month_part.parse().map_err(|_| parse_error())?;
        PayMonth::new(year, month)
    }
}

impl TryFrom<String> for PayMonth {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PayMonth> for String {
    fn from(month: PayMonth) -> Self {
        month.to_string()
    }
}
