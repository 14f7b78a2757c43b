//! Viewer grant and viewer set types.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use sohosai_common::BureauCode;
use uuid::Uuid;

use super::error::ViewerSetError;

/// A single audience grant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViewerGrant {
    /// Every committee member.
    All,
    /// Members of one bureau.
    Bureau {
        #[schema(value_type = String, example = "FINANCE")]
        bureau: BureauCode,
    },
    /// One member.
    Individual { user_id: Uuid },
}

impl ViewerGrant {
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

/// Ordered viewer grants of one notice, form or inquiry.
///
/// Order is display order. Invariants:
/// - `ALL` never shares the set with another grant
/// - no bureau or individual appears twice
///
/// An empty set means nobody besides the default assignees.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(try_from = "Vec<ViewerGrant>", into = "Vec<ViewerGrant>")]
pub struct ViewerSet(pub(super) Vec<ViewerGrant>);

impl ViewerSet {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// A set holding only `ALL`.
    #[must_use]
    pub fn everyone() -> Self {
        Self(vec![ViewerGrant::All])
    }

    /// Whether the set is exactly `[ALL]`.
    #[must_use]
    pub fn is_everyone(&self) -> bool {
        matches!(self.0.as_slice(), [ViewerGrant::All])
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ViewerGrant> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[ViewerGrant] {
        &self.0
    }

    #[must_use]
    pub fn contains(&self, grant: &ViewerGrant) -> bool {
        self.0.contains(grant)
    }
}

impl TryFrom<Vec<ViewerGrant>> for ViewerSet {
    type Error = ViewerSetError;

    /// Accept a persisted grant list only if it satisfies the set invariants.
    fn try_from(grants: Vec<ViewerGrant>) -> Result<Self, Self::Error> {
        if grants.len() > 1 && grants.iter().any(ViewerGrant::is_all) {
            return Err(ViewerSetError::AllNotExclusive);
        }

        let mut seen = HashSet::with_capacity(grants.len());
        for grant in &grants {
            if !seen.insert(grant) {
                return Err(ViewerSetError::Duplicate(grant.clone()));
            }
        }

        Ok(Self(grants))
    }
}

impl From<ViewerSet> for Vec<ViewerGrant> {
    fn from(set: ViewerSet) -> Self {
        set.0
    }
}

impl<'a> IntoIterator for &'a ViewerSet {
    type Item = &'a ViewerGrant;
    type IntoIter = std::slice::Iter<'a, ViewerGrant>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
