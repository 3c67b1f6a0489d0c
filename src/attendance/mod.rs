pub mod log;
pub mod tracker;
