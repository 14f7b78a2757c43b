//! Authorization record and display status types.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of the approval workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthorizationStatus {
    /// Submitted, waiting for a reviewer.
    Pending,
    /// Cleared for delivery.
    Approved,
    /// Turned down by a reviewer.
    Rejected,
}

/// Approval record attached to a notice or form.
///
/// Produced by the approval workflow and read-only here. Ordering between
/// `delivered_at` and `deadline_at` is the writer's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AuthorizationRecord {
    pub status: AuthorizationStatus,
    /// Time the item is published to its audience.
    pub delivered_at: DateTime<Utc>,
    /// End of the validity window. `None` means the item never expires.
    #[serde(default)]
    pub deadline_at: Option<DateTime<Utc>>,
    /// Forms only: keep accepting responses after the deadline.
    #[serde(default)]
    pub allow_late_response: bool,
}

impl AuthorizationRecord {
    /// Create a record without a deadline.
    #[must_use]
    pub const fn new(status: AuthorizationStatus, delivered_at: DateTime<Utc>) -> Self {
        Self {
            status,
            delivered_at,
            deadline_at: None,
            allow_late_response: false,
        }
    }

    #[must_use]
    pub fn with_deadline(mut self, deadline_at: DateTime<Utc>) -> Self {
        self.deadline_at = Some(deadline_at);
        self
    }

    #[must_use]
    pub fn with_late_responses(mut self) -> Self {
        self.allow_late_response = true;
        self
    }

    /// Whether the deadline lies strictly before `now`.
    #[must_use]
    pub fn is_past_deadline(&self, now: DateTime<Utc>) -> bool {
        self.deadline_at.is_some_and(|deadline| deadline < now)
    }

    /// Whether the delivery time has been reached.
    #[must_use]
    pub fn is_delivered(&self, now: DateTime<Utc>) -> bool {
        self.delivered_at <= now
    }
}

/// Status shown for a notice or form.
///
/// Exactly one value applies to any record at any instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisplayStatus {
    /// Not yet submitted for approval.
    Draft,
    PendingApproval,
    Rejected,
    /// Approved, publish time still in the future.
    Scheduled,
    Published,
    /// Deadline has passed.
    Expired,
}

impl DisplayStatus {
    pub const ALL: [Self; 6] = [
        Self::Draft,
        Self::PendingApproval,
        Self::Rejected,
        Self::Scheduled,
        Self::Published,
        Self::Expired,
    ];

    /// Wire name, identical to the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::PendingApproval => "PENDING_APPROVAL",
            Self::Rejected => "REJECTED",
            Self::Scheduled => "SCHEDULED",
            Self::Published => "PUBLISHED",
            Self::Expired => "EXPIRED",
        }
    }

    /// Whether the item is currently visible to its audience.
    #[must_use]
    pub const fn is_published(self) -> bool {
        matches!(self, Self::Published)
    }
}

impl fmt::Display for DisplayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_display_status_wire_names_match_serde() {
        for status in DisplayStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn test_record_deserializes_with_defaults() {
        let record: AuthorizationRecord = serde_json::from_str(
            r#"{"status": "APPROVED", "delivered_at": "2026-11-01T00:00:00Z"}"#,
        )
        .unwrap();

        assert_eq!(record.status, AuthorizationStatus::Approved);
        assert_eq!(
            record.delivered_at,
            Utc.with_ymd_and_hms(2026, 11, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(record.deadline_at, None);
        assert!(!record.allow_late_response);
    }

    #[test]
    fn test_deadline_is_exclusive() {
        let deadline = Utc.with_ymd_and_hms(2026, 11, 10, 0, 0, 0).unwrap();
        let record = AuthorizationRecord::new(
            AuthorizationStatus::Approved,
            Utc.with_ymd_and_hms(2026, 11, 1, 0, 0, 0).unwrap(),
        )
        .with_deadline(deadline);

        assert!(!record.is_past_deadline(deadline));
        assert!(record.is_past_deadline(deadline + chrono::Duration::seconds(1)));
    }
}
