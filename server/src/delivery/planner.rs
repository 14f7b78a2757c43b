//! Delivery planning logic.

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use super::types::{DeliverableItem, DeliveryDecision, DeliveryPlan, DeliveryReport, ItemSummary};
use crate::directory::MemberDirectory;
use crate::viewers::{resolve_audience, Audience, AudienceError};

/// Batch planning failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeliveryError {
    #[error("Cannot resolve audience of item {item_id}: {source}")]
    Audience {
        item_id: Uuid,
        #[source]
        source: AudienceError,
    },
}

/// Decide whether `item` is delivered at `now`, and to whom.
///
/// Only published items are delivered. Recipients are the default assignees
/// followed by the resolved viewer audience.
pub fn plan_delivery<D>(
    item: &DeliverableItem,
    now: DateTime<Utc>,
    directory: &D,
) -> Result<DeliveryDecision, AudienceError>
where
    D: MemberDirectory + ?Sized,
{
    let status = item.status(now);
    if !status.is_published() {
        info!(item_id = %item.id, %status, "Delivery held");
        return Ok(DeliveryDecision::Hold {
            item_id: item.id,
            status,
        });
    }

    let mut recipients: Audience = item.default_assignees.iter().copied().collect();
    recipients.extend(resolve_audience(&item.viewers, directory)?.into_vec());

    info!(
        item_id = %item.id,
        kind = ?item.kind,
        recipients = recipients.len(),
        "Delivery planned"
    );

    Ok(DeliveryDecision::Deliver(DeliveryPlan {
        item_id: item.id,
        kind: item.kind,
        recipients: recipients.into_vec(),
    }))
}

/// Plan a batch of items.
///
/// Stops at the first item whose audience cannot be resolved.
pub fn plan_all<D>(
    items: &[DeliverableItem],
    now: DateTime<Utc>,
    directory: &D,
) -> Result<DeliveryReport, DeliveryError>
where
    D: MemberDirectory + ?Sized,
{
    let mut deliveries = Vec::new();
    let mut held = 0;

    for item in items {
        match plan_delivery(item, now, directory).map_err(|source| DeliveryError::Audience {
            item_id: item.id,
            source,
        })? {
            DeliveryDecision::Deliver(plan) => deliveries.push(plan),
            DeliveryDecision::Hold { .. } => held += 1,
        }
    }

    Ok(DeliveryReport {
        generated_at: now,
        items: items
            .iter()
            .map(|item| ItemSummary::from_item(item, now))
            .collect(),
        deliveries,
        held,
    })
}
