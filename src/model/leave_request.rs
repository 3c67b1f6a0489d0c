use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use uuid::Uuid;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LeaveType {
    Vacation,
    Sick,
    Personal,
    Emergency,
    Maternity,
    Paternity,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: String,
    pub employee_id: u64,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
    pub applied_date: NaiveDate,
    pub approved_by: Option<String>,
    pub approved_date: Option<NaiveDate>,
}

impl LeaveRequest {
    pub fn new(
        employee_id: u64,
        leave_type: LeaveType,
        start_date: NaiveDate,
        end_date: NaiveDate,
        reason: impl Into<String>,
        applied_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            employee_id,
            leave_type,
            start_date,
            end_date,
            reason: reason.into(),
            status: LeaveStatus::Pending,
            applied_date,
            approved_by: None,
            approved_date: None,
        }
    }

    /// Inclusive day count of the requested range; a one-day leave is 1.
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    pub fn approve(&mut self, approver: impl Into<String>, date: NaiveDate) {
        self.status = LeaveStatus::Approved;
        self.approved_by = Some(approver.into());
        self.approved_date = Some(date);
    }

    pub fn reject(&mut self, approver: impl Into<String>, date: NaiveDate) {
        self.status = LeaveStatus::Rejected;
        self.approved_by = Some(approver.into());
        self.approved_date = Some(date);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn request(start: NaiveDate, end: NaiveDate) -> LeaveRequest {
        LeaveRequest::new(3, LeaveType::Vacation, start, end, "family trip", d(2024, 5, 1))
    }

    #[test]
    fn day_count_is_inclusive() {
        assert_eq!(request(d(2024, 6, 10), d(2024, 6, 14)).days(), 5);
        assert_eq!(request(d(2024, 6, 10), d(2024, 6, 10)).days(), 1);
        // range crossing a month boundary
        assert_eq!(request(d(2024, 6, 28), d(2024, 7, 2)).days(), 5);
    }

    #[test]
    fn approval_records_who_and_when() {
        let mut req = request(d(2024, 6, 10), d(2024, 6, 14));
        assert_eq!(req.status, LeaveStatus::Pending);

        req.approve("hr-lead", d(2024, 5, 3));
        assert_eq!(req.status, LeaveStatus::Approved);
        assert_eq!(req.approved_by.as_deref(), Some("hr-lead"));
        assert_eq!(req.approved_date, Some(d(2024, 5, 3)));
    }

    #[test]
    fn rejection_keeps_the_request() {
        let mut req = request(d(2024, 6, 10), d(2024, 6, 14));
        req.reject("manager", d(2024, 5, 4));
        assert_eq!(req.status, LeaveStatus::Rejected);
        assert_eq!(req.days(), 5);
    }
}
