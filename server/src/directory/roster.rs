//! In-memory directory built from a roster.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::Context;
use sohosai_common::{BureauCode, Member, Roster};
use uuid::Uuid;

use super::{DirectoryError, MemberDirectory};

/// Directory snapshot backed by a [`Roster`].
#[derive(Debug, Clone, Default)]
pub struct RosterDirectory {
    members: Vec<Member>,
    ids: HashSet<Uuid>,
    bureaus: HashMap<BureauCode, Vec<Uuid>>,
}

impl RosterDirectory {
    /// Build a directory from a roster.
    ///
    /// Bureaus referenced by members are registered even when the roster does
    /// not declare them.
    pub fn from_roster(roster: Roster) -> sohosai_common::Result<Self> {
        roster.validate()?;

        let mut bureaus: HashMap<BureauCode, Vec<Uuid>> = roster
            .bureaus
            .into_iter()
            .map(|code| (code, Vec::new()))
            .collect();

        for member in &roster.members {
            if let Some(bureau) = &member.bureau {
                bureaus.entry(bureau.clone()).or_default().push(member.id);
            }
        }

        let ids = roster.members.iter().map(|m| m.id).collect();

        Ok(Self {
            members: roster.members,
            ids,
            bureaus,
        })
    }

    /// Load a roster from a JSON file.
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read roster {}", path.display()))?;
        let roster: Roster = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid roster JSON in {}", path.display()))?;
        let directory = Self::from_roster(roster)
            .with_context(|| format!("Invalid roster in {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            members = directory.members.len(),
            bureaus = directory.bureaus.len(),
            "Roster loaded"
        );

        Ok(directory)
    }

    #[must_use]
    pub fn member(&self, user_id: Uuid) -> Option<&Member> {
        self.members.iter().find(|m| m.id == user_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl MemberDirectory for RosterDirectory {
    fn all_members(&self) -> Result<Vec<Uuid>, DirectoryError> {
        Ok(self.members.iter().map(|m| m.id).collect())
    }

    fn bureau_members(&self, bureau: &BureauCode) -> Result<Vec<Uuid>, DirectoryError> {
        self.bureaus
            .get(bureau)
            .cloned()
            .ok_or_else(|| DirectoryError::UnknownBureau(bureau.clone()))
    }

    fn contains_member(&self, user_id: Uuid) -> Result<bool, DirectoryError> {
        Ok(self.ids.contains(&user_id))
    }
}
