//! discipline - Weekly habit tracking grid
//!
//! Define named habits, mark them done per day across a Monday-start week,
//! look at weekly and daily totals, and move data in and out as CSV/JSON.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::DisciplineError;
