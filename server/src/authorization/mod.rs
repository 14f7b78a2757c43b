//! Authorization status derivation.
//!
//! Turns the approval record of a notice or form into the single status shown
//! to committee members, and decides whether a form still takes responses.

pub mod responses;
pub mod status;
pub mod types;

pub use responses::{accepts_responses, ResponseWindow};
pub use status::resolve_status;
pub use types::{AuthorizationRecord, AuthorizationStatus, DisplayStatus};
