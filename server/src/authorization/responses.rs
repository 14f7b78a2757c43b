//! Response-submission gating for forms.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::types::{AuthorizationRecord, AuthorizationStatus};

/// Whether a form takes responses at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseWindow {
    /// Before or at the deadline.
    Open,
    /// Past the deadline, late responses allowed.
    Late,
    Closed,
}

impl ResponseWindow {
    #[must_use]
    pub const fn accepts(self) -> bool {
        matches!(self, Self::Open | Self::Late)
    }
}

/// Decide whether a form accepts responses at `now`.
///
/// Only approved, delivered forms take responses. Past the deadline they stay
/// open as `Late` when the record allows late responses. The display status
/// is unaffected: such a form still reads as expired.
pub fn accepts_responses(
    authorization: Option<&AuthorizationRecord>,
    now: DateTime<Utc>,
) -> ResponseWindow {
    let Some(auth) = authorization else {
        return ResponseWindow::Closed;
    };

    if auth.status != AuthorizationStatus::Approved || !auth.is_delivered(now) {
        return ResponseWindow::Closed;
    }

    if !auth.is_past_deadline(now) {
        ResponseWindow::Open
    } else if auth.allow_late_response {
        ResponseWindow::Late
    } else {
        ResponseWindow::Closed
    }
}
