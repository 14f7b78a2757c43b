//! Viewer set editing.
//!
//! Additions never fail: conflicting or repeated grants are absorbed so the
//! set invariants hold after every call.

use sohosai_common::BureauCode;
use uuid::Uuid;

use super::request::ViewerAction;
use super::types::{ViewerGrant, ViewerSet};

impl ViewerSet {
    /// Replace the whole set with `[ALL]`.
    pub fn set_all(&mut self) {
        self.0.clear();
        self.0.push(ViewerGrant::All);
    }

    /// Add a bureau grant, dropping `ALL` first. Returns whether the set changed.
    pub fn add_bureau(&mut self, bureau: BureauCode) -> bool {
        self.add_scoped(ViewerGrant::Bureau { bureau })
    }

    /// Add an individual grant, dropping `ALL` first. Returns whether the set changed.
    pub fn add_individual(&mut self, user_id: Uuid) -> bool {
        self.add_scoped(ViewerGrant::Individual { user_id })
    }

    /// Remove the grant at `index`.
    ///
    /// Out-of-range indices leave the set untouched and return `None`.
    pub fn remove(&mut self, index: usize) -> Option<ViewerGrant> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }

    /// Apply one administrative edit. Returns whether the set changed.
    pub fn apply(&mut self, action: ViewerAction) -> bool {
        match action {
            ViewerAction::SetAll => {
                let changed = !self.is_everyone();
                self.set_all();
                changed
            }
            ViewerAction::AddBureau { bureau } => self.add_bureau(bureau),
            ViewerAction::AddIndividual { user_id } => self.add_individual(user_id),
            ViewerAction::Remove { index } => self.remove(index).is_some(),
        }
    }

    fn add_scoped(&mut self, grant: ViewerGrant) -> bool {
        if self.0.contains(&grant) {
            return false;
        }
        self.0.retain(|g| !g.is_all());
        self.0.push(grant);
        true
    }
}
