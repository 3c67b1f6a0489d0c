use chrono::{NaiveDate, NaiveTime};
use strum_macros::Display;
use tracing::{debug, info};

use crate::model::attendance::AttendanceRecord;

/// Where one employee's day currently stands.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Display)]
pub enum SessionState {
    Idle,
    Working,
    OnBreak,
    Done,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Transition {
    ClockIn,
    StartBreak,
    EndBreak,
    ClockOut,
}

/// An operation was attempted from a state that does not permit it. These
/// are caller logic errors, never retried and never fatal; the caller
/// decides what to surface.
#[derive(Debug, Copy, Clone, Eq, PartialEq, derive_more::Display, derive_more::Error)]
#[display(fmt = "invalid transition: cannot {} while {}", attempted, state)]
pub struct InvalidTransition {
    pub attempted: Transition,
    pub state: SessionState,
}

/// One employee's work day as a state machine:
/// `Idle → Working ⇄ OnBreak → Done`.
///
/// The tracker never reads the clock; every transition takes its time as an
/// argument. It also does not persist anything — the caller commits the
/// record to its store (see [`AttendanceLog`](crate::AttendanceLog)) after
/// each successful transition.
#[derive(Debug, Clone)]
pub struct AttendanceTracker {
    employee_id: u64,
    state: SessionState,
    record: Option<AttendanceRecord>,
}

impl AttendanceTracker {
    /// A tracker for an employee with no record yet today.
    pub fn new(employee_id: u64) -> Self {
        Self {
            employee_id,
            state: SessionState::Idle,
            record: None,
        }
    }

    /// Rebuild the tracker from today's record as loaded by the caller,
    /// e.g. after a page reload mid-shift.
    pub fn resume(record: AttendanceRecord) -> Self {
        let state = if record.clock_out.is_some() {
            SessionState::Done
        } else if record.has_open_break() {
            SessionState::OnBreak
        } else {
            SessionState::Working
        };
        Self {
            employee_id: record.employee_id,
            state,
            record: Some(record),
        }
    }

    pub fn employee_id(&self) -> u64 {
        self.employee_id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Today's record, if the day has started.
    pub fn record(&self) -> Option<&AttendanceRecord> {
        self.record.as_ref()
    }

    /// Start the day. Only valid while `Idle`; a second clock-in on the
    /// same day is rejected.
    pub fn clock_in(
        &mut self,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Result<&AttendanceRecord, InvalidTransition> {
        if self.state != SessionState::Idle {
            return Err(self.rejected(Transition::ClockIn));
        }
        info!(employee_id = self.employee_id, date = %date, time = %time, "clocked in");
        self.state = SessionState::Working;
        Ok(self
            .record
            .insert(AttendanceRecord::open(self.employee_id, date, time)))
    }

    /// Open a break. Only valid while `Working`. A later break overwrites
    /// the recorded times of an earlier one; the record keeps one pair.
    pub fn start_break(&mut self, time: NaiveTime) -> Result<(), InvalidTransition> {
        let state = self.state;
        match (state, self.record.as_mut()) {
            (SessionState::Working, Some(record)) => {
                record.break_start = Some(time);
                record.break_end = None;
                self.state = SessionState::OnBreak;
                debug!(employee_id = self.employee_id, time = %time, "break started");
                Ok(())
            }
            _ => Err(InvalidTransition {
                attempted: Transition::StartBreak,
                state,
            }),
        }
    }

    /// Close the open break. Only valid while `OnBreak`.
    pub fn end_break(&mut self, time: NaiveTime) -> Result<(), InvalidTransition> {
        let state = self.state;
        match (state, self.record.as_mut()) {
            (SessionState::OnBreak, Some(record)) => {
                record.break_end = Some(time);
                self.state = SessionState::Working;
                debug!(employee_id = self.employee_id, time = %time, "break ended");
                Ok(())
            }
            _ => Err(InvalidTransition {
                attempted: Transition::EndBreak,
                state,
            }),
        }
    }

    /// End the day. Valid while `Working` or `OnBreak`; clocking out on a
    /// break closes the break at the clock-out time. Derives `total_hours`.
    pub fn clock_out(
        &mut self,
        time: NaiveTime,
    ) -> Result<&AttendanceRecord, InvalidTransition> {
        let state = self.state;
        match (state, self.record.as_mut()) {
            (SessionState::Working | SessionState::OnBreak, Some(record)) => {
                if state == SessionState::OnBreak {
                    record.break_end = Some(time);
                }
                record.clock_out = Some(time);
                if let Some(clock_in) = record.clock_in {
                    record.total_hours = Some(elapsed_hours(clock_in, time));
                }
                self.state = SessionState::Done;
                info!(
                    employee_id = self.employee_id,
                    time = %time,
                    total_hours = record.total_hours,
                    "clocked out"
                );
                Ok(record)
            }
            _ => Err(InvalidTransition {
                attempted: Transition::ClockOut,
                state,
            }),
        }
    }

    fn rejected(&self, attempted: Transition) -> InvalidTransition {
        debug!(
            employee_id = self.employee_id,
            attempted = %attempted,
            state = %self.state,
            "transition rejected"
        );
        InvalidTransition {
            attempted,
            state: self.state,
        }
    }
}

/// Gross wall-clock difference in hours, rounded to two decimal places.
/// Same-day arithmetic only; overnight shifts are out of scope.
fn elapsed_hours(clock_in: NaiveTime, clock_out: NaiveTime) -> f64 {
    let secs = (clock_out - clock_in).num_seconds() as f64;
    (secs / 3600.0 * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::attendance::AttendanceStatus;

    fn d() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
    }

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn full_day_with_one_break() {
        let mut tracker = AttendanceTracker::new(7);
        tracker.clock_in(d(), t(9, 0)).unwrap();
        tracker.start_break(t(12, 0)).unwrap();
        tracker.end_break(t(12, 30)).unwrap();
        let record = tracker.clock_out(t(17, 30)).unwrap();

        assert_eq!(record.clock_in, Some(t(9, 0)));
        assert_eq!(record.clock_out, Some(t(17, 30)));
        assert_eq!(record.break_start, Some(t(12, 0)));
        assert_eq!(record.break_end, Some(t(12, 30)));
        // gross elapsed time; the half-hour break is not subtracted
        assert_eq!(record.total_hours, Some(8.5));
        assert_eq!(record.status, AttendanceStatus::Present);
        assert_eq!(tracker.state(), SessionState::Done);
    }

    #[test]
    fn total_hours_rounds_to_two_decimals() {
        let mut tracker = AttendanceTracker::new(7);
        tracker.clock_in(d(), t(9, 0)).unwrap();
        // 7h50m = 7.8333... -> 7.83
        let record = tracker.clock_out(t(16, 50)).unwrap();
        assert_eq!(record.total_hours, Some(7.83));
    }

    #[test]
    fn double_clock_in_is_rejected() {
        let mut tracker = AttendanceTracker::new(7);
        tracker.clock_in(d(), t(9, 0)).unwrap();
        let err = tracker.clock_in(d(), t(9, 5)).unwrap_err();
        assert_eq!(err.attempted, Transition::ClockIn);
        assert_eq!(err.state, SessionState::Working);
    }

    #[test]
    fn double_start_break_is_rejected() {
        let mut tracker = AttendanceTracker::new(7);
        tracker.clock_in(d(), t(9, 0)).unwrap();
        tracker.start_break(t(12, 0)).unwrap();
        let err = tracker.start_break(t(12, 10)).unwrap_err();
        assert_eq!(err.attempted, Transition::StartBreak);
        assert_eq!(err.state, SessionState::OnBreak);
    }

    #[test]
    fn only_clock_in_is_valid_from_idle() {
        let mut tracker = AttendanceTracker::new(7);
        assert!(tracker.start_break(t(12, 0)).is_err());
        assert!(tracker.end_break(t(12, 30)).is_err());
        assert!(tracker.clock_out(t(17, 0)).is_err());
        assert_eq!(tracker.state(), SessionState::Idle);
        assert!(tracker.record().is_none());
    }

    #[test]
    fn clock_out_on_break_closes_the_break() {
        let mut tracker = AttendanceTracker::new(7);
        tracker.clock_in(d(), t(9, 0)).unwrap();
        tracker.start_break(t(16, 0)).unwrap();
        let record = tracker.clock_out(t(17, 0)).unwrap();
        assert_eq!(record.break_end, Some(t(17, 0)));
        assert_eq!(record.total_hours, Some(8.0));
    }

    #[test]
    fn nothing_is_valid_after_clock_out() {
        let mut tracker = AttendanceTracker::new(7);
        tracker.clock_in(d(), t(9, 0)).unwrap();
        tracker.clock_out(t(17, 0)).unwrap();
        for err in [
            tracker.clock_in(d(), t(18, 0)).map(|_| ()).unwrap_err(),
            tracker.start_break(t(18, 0)).unwrap_err(),
            tracker.end_break(t(18, 0)).unwrap_err(),
            tracker.clock_out(t(18, 0)).map(|_| ()).unwrap_err(),
        ] {
            assert_eq!(err.state, SessionState::Done);
        }
    }

    #[test]
    fn second_break_replaces_the_first() {
        let mut tracker = AttendanceTracker::new(7);
        tracker.clock_in(d(), t(9, 0)).unwrap();
        tracker.start_break(t(11, 0)).unwrap();
        tracker.end_break(t(11, 15)).unwrap();
        tracker.start_break(t(15, 0)).unwrap();
        let record = tracker.record().unwrap();
        assert_eq!(record.break_start, Some(t(15, 0)));
        assert!(record.has_open_break());
    }

    #[test]
    fn resume_restores_state_from_record() {
        let mut tracker = AttendanceTracker::new(7);
        tracker.clock_in(d(), t(9, 0)).unwrap();
        tracker.start_break(t(12, 0)).unwrap();
        let record = tracker.record().unwrap().clone();

        let resumed = AttendanceTracker::resume(record);
        assert_eq!(resumed.state(), SessionState::OnBreak);
        assert_eq!(resumed.employee_id(), 7);

        let mut resumed = resumed;
        resumed.end_break(t(12, 30)).unwrap();
        assert_eq!(resumed.state(), SessionState::Working);
    }

    #[test]
    fn resume_of_closed_record_is_done() {
        let mut tracker = AttendanceTracker::new(7);
        tracker.clock_in(d(), t(9, 0)).unwrap();
        let record = tracker.clock_out(t(17, 0)).unwrap().clone();

        let mut resumed = AttendanceTracker::resume(record);
        assert_eq!(resumed.state(), SessionState::Done);
        assert!(resumed.clock_in(d(), t(18, 0)).is_err());
    }

    #[test]
    fn error_names_the_transition_and_state() {
        let mut tracker = AttendanceTracker::new(7);
        let err = tracker.clock_out(t(17, 0)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid transition: cannot clock_out while Idle"
        );
    }
}
