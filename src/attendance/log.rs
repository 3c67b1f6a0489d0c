use chrono::NaiveDate;

use crate::model::attendance::AttendanceRecord;

/// In-memory attendance history, one record per (employee, date). This is
/// the store collaborator the tracker commits to; a durable copy, if any,
/// is the caller's concern. Single-writer: the log belongs to one session.
#[derive(Debug, Default)]
pub struct AttendanceLog {
    records: Vec<AttendanceRecord>,
}

impl AttendanceLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole history, e.g. when the caller loads a fresh copy.
    pub fn set_records(&mut self, records: Vec<AttendanceRecord>) {
        self.records = records;
    }

    pub fn add(&mut self, record: AttendanceRecord) {
        self.records.push(record);
    }

    /// Replace the stored record with the same id, or append if none
    /// matches. Commits after each tracker transition go through here.
    pub fn upsert(&mut self, record: AttendanceRecord) {
        match self.records.iter_mut().find(|r| r.id == record.id) {
            Some(slot) => *slot = record,
            None => self.records.push(record),
        }
    }

    /// The employee's record for one calendar date, usually today's.
    pub fn record_for(&self, employee_id: u64, date: NaiveDate) -> Option<&AttendanceRecord> {
        self.records
            .iter()
            .find(|r| r.employee_id == employee_id && r.date == date)
    }

    pub fn records_for(&self, employee_id: u64) -> impl Iterator<Item = &AttendanceRecord> {
        self.records
            .iter()
            .filter(move |r| r.employee_id == employee_id)
    }

    pub fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }
}
