//! The in-memory payroll record store.

use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::models::{PayMonth, PayrollBreakdown, PayrollLineItems, PayrollRecord};

/// In-memory store of saved payroll records keyed by employee and month.
///
/// Saving is an upsert: one record per employee per month, where each save
/// replaces the previous record under a fresh record id and timestamp. The
/// breakdown's totals are always recomputed here from the line items, so a
/// stored record can never carry totals that disagree with its lines.
#[derive(Debug, Default)]
pub struct PayrollRecordStore {
    records: Mutex<HashMap<(String, PayMonth), PayrollRecord>>,
}

impl PayrollRecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves a payroll record for the employee and month, replacing any
    /// previous one, and returns the stored record.
    pub async fn upsert(
        &self,
        employee_id: &str,
        month: PayMonth,
        items: PayrollLineItems,
    ) -> PayrollRecord {
        let record = PayrollRecord {
            record_id: Uuid::new_v4(),
            employee_id: employee_id.to_string(),
            month,
            breakdown: PayrollBreakdown::from_line_items(items),
            saved_at: Utc::now(),
        };

        let mut map = self.records.lock().await;
        map.insert((employee_id.to_string(), month), record.clone());
        record
    }

    /// Returns the saved record for the employee and month, if any.
    pub async fn get(&self, employee_id: &str, month: PayMonth) -> Option<PayrollRecord> {
        self.records
            .lock()
            .await
            .get(&(employee_id.to_string(), month))
            .cloned()
    }
}
