//! Viewer edit requests.

use serde::{Deserialize, Serialize};
use sohosai_common::BureauCode;
use uuid::Uuid;
use validator::Validate;

use super::types::ViewerSet;

/// Maximum number of edits accepted in one request.
pub const MAX_VIEWER_ACTIONS: usize = 100;

/// One administrative edit of a viewer set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(tag = "action", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViewerAction {
    /// Replace the set with `[ALL]`.
    SetAll,
    AddBureau {
        #[schema(value_type = String, example = "FINANCE")]
        bureau: BureauCode,
    },
    AddIndividual {
        user_id: Uuid,
    },
    /// Remove the grant at a display position.
    Remove {
        index: usize,
    },
}

/// Request body for editing the viewers of a notice, form or inquiry.
#[derive(Debug, Deserialize, Validate, utoipa::ToSchema)]
pub struct UpdateViewersRequest {
    /// Edits applied in order.
    #[validate(length(min = 1, max = 100, message = "Must contain 1-100 actions"))]
    pub actions: Vec<ViewerAction>,
}

impl UpdateViewersRequest {
    /// Apply every action to `viewers` in order. Returns whether anything changed.
    pub fn apply_to(self, viewers: &mut ViewerSet) -> bool {
        let mut changed = false;
        for action in self.actions {
            changed |= viewers.apply(action);
        }
        changed
    }
}
