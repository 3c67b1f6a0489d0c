//! Decision core of the TalentHR dashboard: the attendance clock-in/out
//! state machine, the role-based access gate, and the domain records they
//! operate on.
//!
//! Everything here is synchronous and in-memory. The caller owns the clock
//! (times are injected, never read internally), durable storage, and
//! navigation; this crate only decides.

pub mod attendance;
pub mod auth;
pub mod model;

pub use attendance::log::AttendanceLog;
pub use attendance::tracker::{AttendanceTracker, InvalidTransition, SessionState, Transition};
pub use auth::guard::{AccessDecision, decide};
pub use auth::session::Session;
pub use model::role::Role;
