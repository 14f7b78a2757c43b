//! Member directory.
//!
//! Lookup seam between viewer resolution and wherever the committee roster
//! actually lives.

pub mod roster;

use sohosai_common::BureauCode;
use uuid::Uuid;

pub use roster::RosterDirectory;

/// Directory lookup failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    #[error("Bureau not found in directory: {0}")]
    UnknownBureau(BureauCode),

    #[error("Directory unavailable: {0}")]
    Unavailable(String),
}

/// Source of committee membership used to expand viewer grants.
///
/// Implementations must answer from a consistent snapshot; viewer resolution
/// never mutates the directory.
pub trait MemberDirectory {
    /// Every member, in directory order.
    fn all_members(&self) -> Result<Vec<Uuid>, DirectoryError>;

    /// Members of `bureau`. Unknown bureaus are an error, not an empty list.
    fn bureau_members(&self, bureau: &BureauCode) -> Result<Vec<Uuid>, DirectoryError>;

    /// Whether `user_id` is a member.
    fn contains_member(&self, user_id: Uuid) -> Result<bool, DirectoryError>;
}
