//! Delivery Request/Response Types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::authorization::{
    accepts_responses, resolve_status, AuthorizationRecord, DisplayStatus, ResponseWindow,
};
use crate::viewers::ViewerSet;

/// Kind of deliverable item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemKind {
    Notice,
    Form,
}

/// A notice or form as handed over by the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DeliverableItem {
    pub id: Uuid,
    pub kind: ItemKind,
    pub title: String,
    /// `None` until the item is submitted for approval.
    #[serde(default)]
    pub authorization: Option<AuthorizationRecord>,
    /// Members who always receive the item (owners).
    #[serde(default)]
    pub default_assignees: Vec<Uuid>,
    #[serde(default)]
    pub viewers: ViewerSet,
}

impl DeliverableItem {
    /// Status of the item at `now`.
    #[must_use]
    pub fn status(&self, now: DateTime<Utc>) -> DisplayStatus {
        resolve_status(self.authorization.as_ref(), now)
    }
}

// ============================================================================
// API Response Types
// ============================================================================

/// Item summary as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct ItemSummary {
    pub id: Uuid,
    pub kind: ItemKind,
    pub title: String,
    pub status: DisplayStatus,
    pub delivered_at: Option<DateTime<Utc>>,
    pub deadline_at: Option<DateTime<Utc>>,
    /// Forms only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_window: Option<ResponseWindow>,
}

impl ItemSummary {
    #[must_use]
    pub fn from_item(item: &DeliverableItem, now: DateTime<Utc>) -> Self {
        let authorization = item.authorization.as_ref();
        Self {
            id: item.id,
            kind: item.kind,
            title: item.title.clone(),
            status: item.status(now),
            delivered_at: authorization.map(|auth| auth.delivered_at),
            deadline_at: authorization.and_then(|auth| auth.deadline_at),
            response_window: (item.kind == ItemKind::Form)
                .then(|| accepts_responses(authorization, now)),
        }
    }
}

/// Recipients of a published item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct DeliveryPlan {
    pub item_id: Uuid,
    pub kind: ItemKind,
    /// Default assignees first, then the viewer audience; no duplicates.
    pub recipients: Vec<Uuid>,
}

/// Outcome of planning one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryDecision {
    Deliver(DeliveryPlan),
    /// Not published at the planning instant.
    Hold { item_id: Uuid, status: DisplayStatus },
}

/// Delivery preview for a batch of items.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct DeliveryReport {
    pub generated_at: DateTime<Utc>,
    pub items: Vec<ItemSummary>,
    pub deliveries: Vec<DeliveryPlan>,
    /// Items not published at `generated_at`.
    pub held: usize,
}
