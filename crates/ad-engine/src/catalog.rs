use std::collections::HashMap;

use chrono::{DateTime, Utc};

use storefront_core::types::{AdSlot, Category, Creative};

/// Well-known slot identifiers used throughout the engine.
pub mod slots {
    pub const POPUP: &str = "popup";
    pub const LEFT: &str = "left";
    pub const RIGHT: &str = "right";
    pub const BANNER_TOP: &str = "banner-top";
    pub const BANNER_BOTTOM: &str = "banner-bottom";
    pub const CHECKOUT_LEFT: &str = "checkout-left";
    pub const CHECKOUT_RIGHT: &str = "checkout-right";
    pub const BUTTON: &str = "button";
}

/// Immutable in-memory registry of ad creatives, partitioned by slot
/// identifier and, for targeted creatives, by category. Built once at
/// startup; all lookups are read-only and side-effect-free.
#[derive(Debug, Clone)]
pub struct AdCatalog {
    slots: Vec<AdSlot>,
    creatives: Vec<Creative>,
    by_slot: HashMap<String, Vec<usize>>,
    by_category: HashMap<Category, Vec<usize>>,
}

impl AdCatalog {
    pub fn new(slots: Vec<AdSlot>, creatives: Vec<Creative>) -> Self {
        let mut by_slot: HashMap<String, Vec<usize>> = HashMap::new();
        let mut by_category: HashMap<Category, Vec<usize>> = HashMap::new();

        for (idx, creative) in creatives.iter().enumerate() {
            by_slot
                .entry(creative.slot_id.clone())
                .or_default()
                .push(idx);
            if let Some(category) = creative.target_category {
                by_category.entry(category).or_default().push(idx);
            }
        }

        // Priority descending; stable, so catalog order survives ties.
        for indexes in by_slot.values_mut() {
            indexes.sort_by_key(|&i| std::cmp::Reverse(creatives[i].priority));
        }
        for indexes in by_category.values_mut() {
            indexes.sort_by_key(|&i| std::cmp::Reverse(creatives[i].priority));
        }

        Self {
            slots,
            creatives,
            by_slot,
            by_category,
        }
    }

    /// Creatives targeting exactly `category`, priority descending. A
    /// category with no creatives yields an empty list, never an error.
    pub fn by_category(&self, category: Category) -> Vec<&Creative> {
        self.by_category
            .get(&category)
            .map(|indexes| indexes.iter().map(|&i| &self.creatives[i]).collect())
            .unwrap_or_default()
    }

    /// Creatives assigned to `slot_id`, priority descending.
    pub fn by_slot(&self, slot_id: &str) -> Vec<&Creative> {
        self.by_slot
            .get(slot_id)
            .map(|indexes| indexes.iter().map(|&i| &self.creatives[i]).collect())
            .unwrap_or_default()
    }

    /// Creatives in `slot_id` whose validity window covers `now`.
    pub fn live_pool(&self, slot_id: &str, now: DateTime<Utc>) -> Vec<&Creative> {
        self.by_slot(slot_id)
            .into_iter()
            .filter(|c| c.is_live(now))
            .collect()
    }

    /// Slot geometry lookup for the presentation layer.
    pub fn slot(&self, slot_id: &str) -> Option<&AdSlot> {
        self.slots.iter().find(|s| s.id == slot_id)
    }

    pub fn slots(&self) -> &[AdSlot] {
        &self.slots
    }

    pub fn creatives(&self) -> &[Creative] {
        &self.creatives
    }

    pub fn len(&self) -> usize {
        self.creatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatives.is_empty()
    }
}
