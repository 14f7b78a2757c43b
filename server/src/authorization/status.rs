//! Display status resolution.
//!
//! Computes the status shown for a notice or form at a given instant.

use chrono::{DateTime, Utc};

use super::types::{AuthorizationRecord, AuthorizationStatus, DisplayStatus};

type Predicate = fn(Option<&AuthorizationRecord>, DateTime<Utc>) -> bool;

/// One row of the status table.
struct StatusRule {
    status: DisplayStatus,
    applies: Predicate,
}

/// Status rules in priority order. The first rule that applies wins.
///
/// Expiry sits on top: an expired item reads as expired whatever its approval
/// state.
const STATUS_RULES: &[StatusRule] = &[
    StatusRule {
        status: DisplayStatus::Expired,
        applies: is_expired,
    },
    StatusRule {
        status: DisplayStatus::Draft,
        applies: is_unsubmitted,
    },
    StatusRule {
        status: DisplayStatus::PendingApproval,
        applies: is_pending,
    },
    StatusRule {
        status: DisplayStatus::Rejected,
        applies: is_rejected,
    },
    StatusRule {
        status: DisplayStatus::Scheduled,
        applies: is_awaiting_delivery,
    },
];

/// Reported when no rule applies: approved and delivery time reached.
const FALLBACK_STATUS: DisplayStatus = DisplayStatus::Published;

fn is_expired(authorization: Option<&AuthorizationRecord>, now: DateTime<Utc>) -> bool {
    authorization.is_some_and(|auth| auth.is_past_deadline(now))
}

fn is_unsubmitted(authorization: Option<&AuthorizationRecord>, _now: DateTime<Utc>) -> bool {
    authorization.is_none()
}

fn is_pending(authorization: Option<&AuthorizationRecord>, _now: DateTime<Utc>) -> bool {
    authorization.is_some_and(|auth| auth.status == AuthorizationStatus::Pending)
}

fn is_rejected(authorization: Option<&AuthorizationRecord>, _now: DateTime<Utc>) -> bool {
    authorization.is_some_and(|auth| auth.status == AuthorizationStatus::Rejected)
}

fn is_awaiting_delivery(authorization: Option<&AuthorizationRecord>, now: DateTime<Utc>) -> bool {
    authorization.is_some_and(|auth| {
        auth.status == AuthorizationStatus::Approved && auth.delivered_at > now
    })
}

/// Resolve the display status of a notice or form.
///
/// Resolution order:
/// 1. Deadline before `now` → `Expired`
/// 2. No authorization record → `Draft`
/// 3. Pending → `PendingApproval`, rejected → `Rejected`
/// 4. Approved with `delivered_at` after `now` → `Scheduled`, otherwise `Published`
///
/// `now` is supplied by the caller; nothing here reads the system clock.
pub fn resolve_status(
    authorization: Option<&AuthorizationRecord>,
    now: DateTime<Utc>,
) -> DisplayStatus {
    STATUS_RULES
        .iter()
        .find(|rule| (rule.applies)(authorization, now))
        .map_or(FALLBACK_STATUS, |rule| rule.status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 11, day, 0, 0, 0).unwrap()
    }

    fn record(status: AuthorizationStatus) -> AuthorizationRecord {
        AuthorizationRecord::new(status, at(1))
    }

    #[test]
    fn test_missing_record_is_draft() {
        assert_eq!(resolve_status(None, at(1)), DisplayStatus::Draft);
        assert_eq!(resolve_status(None, at(30)), DisplayStatus::Draft);
    }

    #[test]
    fn test_pending_and_rejected() {
        let pending = record(AuthorizationStatus::Pending);
        let rejected = record(AuthorizationStatus::Rejected);

        assert_eq!(
            resolve_status(Some(&pending), at(5)),
            DisplayStatus::PendingApproval
        );
        assert_eq!(resolve_status(Some(&rejected), at(5)), DisplayStatus::Rejected);
    }

    #[test]
    fn test_approved_scheduled_until_delivery() {
        let approved = record(AuthorizationStatus::Approved);

        assert_eq!(
            resolve_status(Some(&approved), at(1) - Duration::seconds(1)),
            DisplayStatus::Scheduled
        );
        // Delivery instant itself counts as published
        assert_eq!(resolve_status(Some(&approved), at(1)), DisplayStatus::Published);
        assert_eq!(resolve_status(Some(&approved), at(20)), DisplayStatus::Published);
    }

    #[test]
    fn test_expiry_overrides_every_status() {
        for status in [
            AuthorizationStatus::Pending,
            AuthorizationStatus::Approved,
            AuthorizationStatus::Rejected,
        ] {
            let auth = record(status).with_deadline(at(10));
            assert_eq!(
                resolve_status(Some(&auth), at(11)),
                DisplayStatus::Expired,
                "{status:?} past deadline should be expired"
            );
        }
    }

    #[test]
    fn test_expired_even_before_delivery() {
        // Inconsistent record (deadline before delivery) still reads as expired
        let auth = AuthorizationRecord::new(AuthorizationStatus::Approved, at(20))
            .with_deadline(at(10));
        assert_eq!(resolve_status(Some(&auth), at(15)), DisplayStatus::Expired);
    }

    #[test]
    fn test_late_responses_do_not_suppress_expiry() {
        let auth = record(AuthorizationStatus::Approved)
            .with_deadline(at(10))
            .with_late_responses();
        assert_eq!(resolve_status(Some(&auth), at(11)), DisplayStatus::Expired);
    }

    #[test]
    fn test_deadline_instant_is_not_expired() {
        let auth = record(AuthorizationStatus::Approved).with_deadline(at(10));
        assert_eq!(resolve_status(Some(&auth), at(10)), DisplayStatus::Published);
    }

    #[test]
    fn test_fallback_only_for_delivered_approvals() {
        let statuses = [
            AuthorizationStatus::Pending,
            AuthorizationStatus::Approved,
            AuthorizationStatus::Rejected,
        ];
        let deadlines = [None, Some(at(3)), Some(at(10))];

        for status in statuses {
            for deadline in deadlines {
                for day in [1, 2, 5, 12] {
                    let mut auth = record(status);
                    auth.deadline_at = deadline;
                    let now = at(day);

                    let published = resolve_status(Some(&auth), now) == DisplayStatus::Published;
                    let expected = status == AuthorizationStatus::Approved
                        && auth.is_delivered(now)
                        && !auth.is_past_deadline(now);
                    assert_eq!(published, expected, "{auth:?} at {now}");
                }
            }
        }
    }
}
