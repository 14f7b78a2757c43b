//! Member Types

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::bureau::BureauCode;
use crate::error::{Error, Result};

/// Committee member as listed in the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// User ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Bureau the member belongs to, if any.
    #[serde(default)]
    pub bureau: Option<BureauCode>,
}

/// Committee roster: the known bureaus and every member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    /// Declared bureaus. A bureau may be declared without any members.
    #[serde(default)]
    pub bureaus: Vec<BureauCode>,
    pub members: Vec<Member>,
}

impl Roster {
    /// Check that no member ID appears twice.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.members.len());
        for member in &self.members {
            if !seen.insert(member.id) {
                return Err(Error::DuplicateMember(member.id));
            }
        }
        Ok(())
    }
}
