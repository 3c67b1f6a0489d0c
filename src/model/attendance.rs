use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use uuid::Uuid;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    #[serde(rename = "half-day")]
    #[strum(serialize = "half-day")]
    HalfDay,
    Holiday,
}

/// One work day for one employee. Created on the first clock-in of the day,
/// mutated in place by later transitions, never deleted.
///
/// Invariants, upheld by [`AttendanceTracker`](crate::AttendanceTracker):
/// `clock_out` is only set after `clock_in`, `break_end` only after
/// `break_start`, at most one break is open, and `total_hours` is derived
/// once both clock times exist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: String,
    pub employee_id: u64,
    pub date: NaiveDate,
    pub clock_in: Option<NaiveTime>,
    pub clock_out: Option<NaiveTime>,
    pub break_start: Option<NaiveTime>,
    pub break_end: Option<NaiveTime>,
    /// Gross elapsed hours, two decimal places. Break time is not
    /// subtracted; see DESIGN.md.
    pub total_hours: Option<f64>,
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    /// A fresh record for the first clock-in of the day.
    pub fn open(employee_id: u64, date: NaiveDate, clock_in: NaiveTime) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            employee_id,
            date,
            clock_in: Some(clock_in),
            clock_out: None,
            break_start: None,
            break_end: None,
            total_hours: None,
            status: AttendanceStatus::Present,
        }
    }

    /// Clocked in and not yet clocked out.
    pub fn is_open(&self) -> bool {
        self.clock_in.is_some() && self.clock_out.is_none()
    }

    pub fn has_open_break(&self) -> bool {
        self.break_start.is_some() && self.break_end.is_none()
    }
}
