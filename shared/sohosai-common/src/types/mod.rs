//! Shared Types

pub mod bureau;
pub mod member;

pub use bureau::BureauCode;
pub use member::{Member, Roster};
