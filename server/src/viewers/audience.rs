//! Audience resolution.
//!
//! Expands a viewer set into concrete member IDs using a [`MemberDirectory`].

use std::collections::HashSet;

use tracing::{debug, warn};
use uuid::Uuid;

use super::error::AudienceError;
use super::types::{ViewerGrant, ViewerSet};
use crate::directory::MemberDirectory;

/// De-duplicated member IDs in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Audience {
    members: Vec<Uuid>,
    seen: HashSet<Uuid>,
}

impl Audience {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a member. Returns `false` if already present.
    pub fn insert(&mut self, user_id: Uuid) -> bool {
        if self.seen.insert(user_id) {
            self.members.push(user_id);
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn contains(&self, user_id: Uuid) -> bool {
        self.seen.contains(&user_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Uuid> {
        self.members.iter()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Uuid> {
        self.members
    }
}

impl Extend<Uuid> for Audience {
    fn extend<I: IntoIterator<Item = Uuid>>(&mut self, iter: I) {
        for user_id in iter {
            self.insert(user_id);
        }
    }
}

impl FromIterator<Uuid> for Audience {
    fn from_iter<I: IntoIterator<Item = Uuid>>(iter: I) -> Self {
        let mut audience = Self::new();
        audience.extend(iter);
        audience
    }
}

/// Resolve a viewer set into the members it reaches.
///
/// - `ALL` → every member of the directory
/// - `BUREAU` → members of that bureau
/// - `INDIVIDUAL` → that member
///
/// A grant the directory cannot resolve fails the whole call; nothing is
/// dropped silently.
pub fn resolve_audience<D>(viewers: &ViewerSet, directory: &D) -> Result<Audience, AudienceError>
where
    D: MemberDirectory + ?Sized,
{
    let mut audience = Audience::new();

    for grant in viewers {
        let expanded = expand_grant(grant, directory).inspect_err(|err| {
            if err.is_referential_integrity() {
                warn!(grant = ?grant, error = %err, "Unresolvable viewer grant");
            }
        })?;
        audience.extend(expanded);
    }

    debug!(
        grants = viewers.len(),
        audience = audience.len(),
        "Resolved viewer audience"
    );

    Ok(audience)
}

fn expand_grant<D>(grant: &ViewerGrant, directory: &D) -> Result<Vec<Uuid>, AudienceError>
where
    D: MemberDirectory + ?Sized,
{
    match grant {
        ViewerGrant::All => Ok(directory.all_members()?),
        ViewerGrant::Bureau { bureau } => Ok(directory.bureau_members(bureau)?),
        ViewerGrant::Individual { user_id } => {
            if directory.contains_member(*user_id)? {
                Ok(vec![*user_id])
            } else {
                Err(AudienceError::UnknownMember(*user_id))
            }
        }
    }
}
