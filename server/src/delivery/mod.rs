//! Delivery planning.
//!
//! Combines status resolution and audience resolution to decide who receives
//! a notice or form, and when.

pub mod planner;
pub mod types;

use std::path::Path;

use anyhow::Context;

pub use planner::{plan_all, plan_delivery, DeliveryError};
pub use types::{
    DeliverableItem, DeliveryDecision, DeliveryPlan, DeliveryReport, ItemKind, ItemSummary,
};

/// Load deliverable items from a JSON array file.
pub fn load_items(path: &Path) -> anyhow::Result<Vec<DeliverableItem>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read delivery items {}", path.display()))?;
    let items: Vec<DeliverableItem> = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid delivery items JSON in {}", path.display()))?;

    tracing::info!(path = %path.display(), count = items.len(), "Delivery items loaded");

    Ok(items)
}
