//! Viewer scoping.
//!
//! Grants that widen who may see a notice, form or inquiry beyond its
//! default assignees:
//! - `ALL`: every committee member (exclusive with everything else)
//! - `BUREAU`: members of one bureau
//! - `INDIVIDUAL`: a single member

pub mod audience;
pub mod error;
pub mod request;
pub mod scope;
pub mod types;

pub use audience::{resolve_audience, Audience};
pub use error::{AudienceError, ViewerSetError};
pub use request::{UpdateViewersRequest, ViewerAction, MAX_VIEWER_ACTIONS};
pub use types::{ViewerGrant, ViewerSet};
