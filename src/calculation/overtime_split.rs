//! Session duration and overtime split arithmetic.
//!
//! This module turns a punch-in/punch-out pair into a session duration and
//! splits that duration into regular and overtime hours at the policy
//! threshold. The duration is rounded exactly once, at derivation; the split
//! itself is an exact decomposition, so `regular + overtime` always equals
//! the duration and monthly sums accumulate no further rounding error.

use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// The regular/overtime decomposition of a session duration.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::OvertimeSplit;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let split = OvertimeSplit {
///     regular_hours: Decimal::from_str("9.0").unwrap(),
///     ot_hours: Decimal::from_str("0.5").unwrap(),
/// };
/// assert_eq!(split.regular_hours + split.ot_hours, Decimal::from_str("9.5").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeSplit {
    /// Hours up to the overtime threshold.
    pub regular_hours: Decimal,
    /// Hours beyond the overtime threshold.
    pub ot_hours: Decimal,
}

const SECONDS_PER_HOUR: Decimal = Decimal::from_parts(3600, 0, 0, false, 0);

/// Computes the hours between two timestamps, rounded to two decimal places.
///
/// Seconds are divided by 3600 and the quotient rounded once with midpoint
/// away from zero. This is the only place a session duration is rounded;
/// everything downstream works with the value returned here.
///
/// # Arguments
///
/// * `start` - The punch-in timestamp
/// * `end` - The punch-out timestamp, not before `start`
///
/// # Returns
///
/// The elapsed hours at two decimal places.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use payroll_engine::calculation::hours_between;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let start = NaiveDate::from_ymd_opt(2023, 6, 5)
///     .unwrap()
///     .and_hms_opt(9, 0, 0)
///     .unwrap();
/// let end = NaiveDate::from_ymd_opt(2023, 6, 5)
///     .unwrap()
///     .and_hms_opt(18, 30, 0)
///     .unwrap();
///
/// assert_eq!(hours_between(start, end), Decimal::from_str("9.50").unwrap());
/// ```
pub fn hours_between(start: NaiveDateTime, end: NaiveDateTime) -> Decimal {
    let seconds = Decimal::from((end - start).num_seconds());
    (seconds / SECONDS_PER_HOUR).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Splits a session duration into regular and overtime hours.
///
/// Regular hours are the duration capped at the threshold; overtime is the
/// excess. The two parts always reassemble to the duration exactly.
///
/// # Arguments
///
/// * `duration` - The session duration in hours, already at two decimal places
/// * `threshold` - The daily overtime threshold in hours
///
/// # Returns
///
/// An [`OvertimeSplit`] with `regular_hours` capped at the threshold and
/// `ot_hours` zero or positive.
///
/// # Examples
///
/// ## Duration beyond the threshold
///
/// ```
/// use payroll_engine::calculation::split_overtime;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let split = split_overtime(
///     Decimal::from_str("9.5").unwrap(),
///     Decimal::from_str("9.0").unwrap(),
/// );
/// assert_eq!(split.regular_hours, Decimal::from_str("9.0").unwrap());
/// assert_eq!(split.ot_hours, Decimal::from_str("0.5").unwrap());
/// ```
///
/// ## Duration under the threshold
///
/// ```
/// use payroll_engine::calculation::split_overtime;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let split = split_overtime(
///     Decimal::from_str("7.25").unwrap(),
///     Decimal::from_str("9.0").unwrap(),
/// );
/// assert_eq!(split.regular_hours, Decimal::from_str("7.25").unwrap());
/// assert_eq!(split.ot_hours, Decimal::ZERO);
/// ```
pub fn split_overtime(duration: Decimal, threshold: Decimal) -> OvertimeSplit {
    let regular_hours = if duration <= threshold {
        duration
    } else {
        threshold
    };

    let ot_hours = if duration > threshold {
        duration - threshold
    } else {
        Decimal::ZERO
    };

    OvertimeSplit {
        regular_hours,
        ot_hours,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_datetime(year: i32, month: u32, day: u32, hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    // ==========================================================================
    // OTS-001: 09:00 to 18:30 is 9.50 hours
    // ==========================================================================
    #[test]
    fn test_ots_001_nine_and_a_half_hour_session() {
        let start = make_datetime(2023, 6, 5, 9, 0);
        let end = make_datetime(2023, 6, 5, 18, 30);

        assert_eq!(hours_between(start, end), dec("9.50"));
    }

    // ==========================================================================
    // OTS-002: sub-minute remainders round once at two decimal places
    // ==========================================================================
    #[test]
    fn test_ots_002_seconds_round_once() {
        let start = make_datetime(2023, 6, 5, 9, 0);
        // 8 hours and 50 seconds = 8.01388... hours, rounds to 8.01.
        let end = NaiveDate::from_ymd_opt(2023, 6, 5)
            .unwrap()
            .and_hms_opt(17, 0, 50)
            .unwrap();

        assert_eq!(hours_between(start, end), dec("8.01"));
    }

    // ==========================================================================
    // OTS-003: zero-length session is zero hours
    // ==========================================================================
    #[test]
    fn test_ots_003_zero_length_session() {
        let at = make_datetime(2023, 6, 5, 9, 0);
        assert_eq!(hours_between(at, at), dec("0.00"));
    }

    // ==========================================================================
    // OTS-004: overnight session spans the date boundary
    // ==========================================================================
    #[test]
    fn test_ots_004_overnight_session() {
        let start = make_datetime(2023, 6, 5, 22, 0);
        let end = make_datetime(2023, 6, 6, 6, 30);

        assert_eq!(hours_between(start, end), dec("8.50"));
    }

    // ==========================================================================
    // OTS-005: duration at the threshold carries no overtime
    // ==========================================================================
    #[test]
    fn test_ots_005_at_threshold_no_overtime() {
        let split = split_overtime(dec("9.0"), dec("9.0"));

        assert_eq!(split.regular_hours, dec("9.0"));
        assert_eq!(split.ot_hours, Decimal::ZERO);
    }

    // ==========================================================================
    // OTS-006: duration beyond the threshold splits at the threshold
    // ==========================================================================
    #[test]
    fn test_ots_006_beyond_threshold_splits() {
        let split = split_overtime(dec("9.5"), dec("9.0"));

        assert_eq!(split.regular_hours, dec("9.0"));
        assert_eq!(split.ot_hours, dec("0.5"));
    }

    // ==========================================================================
    // OTS-007: duration under the threshold is all regular
    // ==========================================================================
    #[test]
    fn test_ots_007_under_threshold_all_regular() {
        let split = split_overtime(dec("4.75"), dec("9.0"));

        assert_eq!(split.regular_hours, dec("4.75"));
        assert_eq!(split.ot_hours, Decimal::ZERO);
    }

    // ==========================================================================
    // OTS-008: zero duration yields a zero split
    // ==========================================================================
    #[test]
    fn test_ots_008_zero_duration() {
        let split = split_overtime(Decimal::ZERO, dec("9.0"));

        assert_eq!(split.regular_hours, Decimal::ZERO);
        assert_eq!(split.ot_hours, Decimal::ZERO);
    }

    #[test]
    fn test_custom_threshold() {
        let split = split_overtime(dec("12.0"), dec("10.0"));

        assert_eq!(split.regular_hours, dec("10.0"));
        assert_eq!(split.ot_hours, dec("2.0"));
    }

    #[test]
    fn test_split_serialization() {
        let split = split_overtime(dec("9.5"), dec("9.0"));

        let json = serde_json::to_string(&split).unwrap();
        assert!(json.contains("\"regular_hours\":\"9.0\""));
        assert!(json.contains("\"ot_hours\":\"0.5\""));
    }

    proptest! {
        // The split must reassemble to the duration exactly, for any
        // two-decimal duration and any quarter-hour threshold.
        #[test]
        fn prop_split_reassembles_exactly(
            duration_cents in 0i64..=2400,
            threshold_quarters in 0i64..=48,
        ) {
            let duration = Decimal::new(duration_cents, 2);
            let threshold = Decimal::new(threshold_quarters * 25, 2);

            let split = split_overtime(duration, threshold);

            prop_assert_eq!(split.regular_hours + split.ot_hours, duration);
            prop_assert!(split.regular_hours <= threshold);
            prop_assert!(split.ot_hours >= Decimal::ZERO);
        }

        // A punched pair always derives a non-negative duration when the
        // punch-out does not precede the punch-in.
        #[test]
        fn prop_hours_between_non_negative(offset_minutes in 0i64..=1800) {
            let start = make_datetime(2023, 6, 5, 6, 0);
            let end = start + chrono::Duration::minutes(offset_minutes);

            prop_assert!(hours_between(start, end) >= Decimal::ZERO);
        }
    }
}
