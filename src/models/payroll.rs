//! Payroll breakdown types and the stored payroll record.
//!
//! The flat [`PayrollBreakdown`] is the canonical shape both wage paths
//! produce and the record store persists. Its three derived figures (gross
//! earnings, total deductions, net payable) are always recomputed from line
//! items through [`PayrollBreakdown::from_line_items`]; submitted totals are
//! never trusted.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::pay_month::PayMonth;

/// Earnings side of a payroll computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarningsBreakdown {
    /// Days worked in the pay month, possibly overridden by HR.
    pub days_worked: Decimal,
    /// Basic pay earned.
    pub basic: Decimal,
    /// House rent allowance earned.
    pub hra: Decimal,
    /// Conveyance allowance earned.
    pub conveyance: Decimal,
    /// Other allowances and earnings.
    pub other_earnings: Decimal,
    /// Sum of the earnings line items.
    pub gross_earnings: Decimal,
}

/// Deductions side of a payroll computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeductionsBreakdown {
    /// Provident fund contribution.
    pub pf: Decimal,
    /// Employee state insurance contribution.
    pub esi: Decimal,
    /// Advance recovery for the cycle.
    pub advance: Decimal,
    /// Tax deducted at source.
    pub tds: Decimal,
    /// Other deductions, fed by the recurring loan instalment.
    pub other_deductions: Decimal,
    /// Sum of the deduction line items.
    pub total_deductions: Decimal,
}

/// The individual line items of a payroll breakdown, without derived totals.
///
/// This is the only input shape from which a [`PayrollBreakdown`] can be
/// built, which keeps every stored or returned total a server-side sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollLineItems {
    /// Days worked in the pay month.
    pub days_worked: Decimal,
    /// Basic pay earned.
    pub basic: Decimal,
    /// House rent allowance earned.
    pub hra: Decimal,
    /// Conveyance allowance earned.
    pub conveyance: Decimal,
    /// Other allowances and earnings.
    pub other_earnings: Decimal,
    /// Provident fund contribution.
    pub pf: Decimal,
    /// Employee state insurance contribution.
    pub esi: Decimal,
    /// Advance recovery for the cycle.
    pub advance: Decimal,
    /// Tax deducted at source.
    pub tds: Decimal,
    /// Other deductions.
    pub other_deductions: Decimal,
}

/// The canonical flat payroll figure set for one employee and month.
///
/// Both wage-calculation paths produce this shape and the record store
/// persists it unchanged, so hourly and salaried payroll stay directly
/// comparable column for column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollBreakdown {
    /// Days worked in the pay month.
    pub days_worked: Decimal,
    /// Basic pay earned.
    pub basic: Decimal,
    /// House rent allowance earned.
    pub hra: Decimal,
    /// Conveyance allowance earned.
    pub conveyance: Decimal,
    /// Other allowances and earnings.
    pub other_earnings: Decimal,
    /// Sum of the earnings line items.
    pub gross_earnings: Decimal,
    /// Provident fund contribution.
    pub pf: Decimal,
    /// Employee state insurance contribution.
    pub esi: Decimal,
    /// Advance recovery for the cycle.
    pub advance: Decimal,
    /// Tax deducted at source.
    pub tds: Decimal,
    /// Other deductions.
    pub other_deductions: Decimal,
    /// Sum of the deduction line items.
    pub total_deductions: Decimal,
    /// Gross earnings minus total deductions. May be negative.
    pub net_payable: Decimal,
}

impl PayrollBreakdown {
    /// Builds a breakdown from line items, computing the derived totals.
    ///
    /// Gross earnings and total deductions are sums of their already-rounded
    /// line items; net payable is the exact difference of the two. A negative
    /// net payable is preserved, not clamped, so over-deduction stays visible
    /// to HR.
    ///
    /// # Arguments
    ///
    /// * `items` - The individual earnings and deduction line items
    ///
    /// # Returns
    ///
    /// The flat breakdown with gross, total deductions, and net filled in.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{PayrollBreakdown, PayrollLineItems};
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let dec = |s: &str| Decimal::from_str(s).unwrap();
    /// let breakdown = PayrollBreakdown::from_line_items(PayrollLineItems {
    ///     days_worked: dec("13"),
    ///     basic: dec("21250"),
    ///     hra: dec("10625"),
    ///     conveyance: dec("0"),
    ///     other_earnings: dec("9725"),
    ///     pf: dec("2550"),
    ///     esi: dec("312"),
    ///     advance: dec("0"),
    ///     tds: dec("0"),
    ///     other_deductions: dec("0"),
    /// });
    /// assert_eq!(breakdown.gross_earnings, dec("41600"));
    /// assert_eq!(breakdown.total_deductions, dec("2862"));
    /// assert_eq!(breakdown.net_payable, dec("38738"));
    /// ```
    pub fn from_line_items(items: PayrollLineItems) -> Self {
        let gross_earnings = items.basic + items.hra + items.conveyance + items.other_earnings;
        let total_deductions =
            items.pf + items.esi + items.advance + items.tds + items.other_deductions;
        let net_payable = gross_earnings - total_deductions;

        PayrollBreakdown {
            days_worked: items.days_worked,
            basic: items.basic,
            hra: items.hra,
            conveyance: items.conveyance,
            other_earnings: items.other_earnings,
            gross_earnings,
            pf: items.pf,
            esi: items.esi,
            advance: items.advance,
            tds: items.tds,
            other_deductions: items.other_deductions,
            total_deductions,
            net_payable,
        }
    }
}

/// A saved payroll record, at most one per employee and month.
///
/// Re-saving replaces the record wholesale with a fresh `record_id` and
/// `saved_at`; no history is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// Identity of this save.
    pub record_id: Uuid,
    /// The employee the record belongs to.
    pub employee_id: String,
    /// The pay month the record covers.
    pub month: PayMonth,
    /// The canonical figures.
    pub breakdown: PayrollBreakdown,
    /// When this record was saved.
    pub saved_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_items() -> PayrollLineItems {
        PayrollLineItems {
            days_worked: dec("26"),
            basic: dec("41600"),
            hra: dec("24960"),
            conveyance: dec("8320"),
            other_earnings: dec("8320"),
            pf: dec("4992"),
            esi: dec("624"),
            advance: dec("2000"),
            tds: dec("8320"),
            other_deductions: dec("1500"),
        }
    }

    #[test]
    fn test_from_line_items_computes_gross() {
        let breakdown = PayrollBreakdown::from_line_items(sample_items());
        assert_eq!(breakdown.gross_earnings, dec("83200"));
    }

    #[test]
    fn test_from_line_items_computes_total_deductions() {
        let breakdown = PayrollBreakdown::from_line_items(sample_items());
        assert_eq!(breakdown.total_deductions, dec("17436"));
    }

    #[test]
    fn test_from_line_items_computes_net_payable() {
        let breakdown = PayrollBreakdown::from_line_items(sample_items());
        assert_eq!(
            breakdown.net_payable,
            breakdown.gross_earnings - breakdown.total_deductions
        );
        assert_eq!(breakdown.net_payable, dec("65764"));
    }

    #[test]
    fn test_from_line_items_preserves_negative_net() {
        let mut items = sample_items();
        items.basic = dec("1000");
        items.hra = Decimal::ZERO;
        items.conveyance = Decimal::ZERO;
        items.other_earnings = Decimal::ZERO;

        let breakdown = PayrollBreakdown::from_line_items(items);
        assert!(breakdown.net_payable < Decimal::ZERO);
        assert_eq!(breakdown.net_payable, dec("-16436"));
    }

    #[test]
    fn test_from_line_items_with_all_zero_items() {
        let breakdown = PayrollBreakdown::from_line_items(PayrollLineItems {
            days_worked: Decimal::ZERO,
            basic: Decimal::ZERO,
            hra: Decimal::ZERO,
            conveyance: Decimal::ZERO,
            other_earnings: Decimal::ZERO,
            pf: Decimal::ZERO,
            esi: Decimal::ZERO,
            advance: Decimal::ZERO,
            tds: Decimal::ZERO,
            other_deductions: Decimal::ZERO,
        });
        assert_eq!(breakdown.gross_earnings, Decimal::ZERO);
        assert_eq!(breakdown.total_deductions, Decimal::ZERO);
        assert_eq!(breakdown.net_payable, Decimal::ZERO);
    }

    #[test]
    fn test_breakdown_serializes_decimals_as_strings() {
        let breakdown = PayrollBreakdown::from_line_items(sample_items());
        let json = serde_json::to_value(&breakdown).unwrap();
        assert_eq!(json["gross_earnings"].as_str(), Some("83200"));
        assert_eq!(json["net_payable"].as_str(), Some("65764"));
    }

    #[test]
    fn test_payroll_record_round_trip() {
        let record = PayrollRecord {
            record_id: Uuid::new_v4(),
            employee_id: "emp_001".to_string(),
            month: PayMonth::new(2023, 6).unwrap(),
            breakdown: PayrollBreakdown::from_line_items(sample_items()),
            saved_at: Utc::now(),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"month\":\"2023-06\""));
        let deserialized: PayrollRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
