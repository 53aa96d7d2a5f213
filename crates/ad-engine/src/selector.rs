//! Tier-aware randomized creative selection, one decision function per
//! placement kind. Each decision is a Bernoulli gate on the active tier's
//! probability followed by a uniform draw from the slot's eligible pool.

use std::sync::Arc;

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use storefront_core::types::{Category, Creative};

use crate::catalog::{slots, AdCatalog};
use crate::frequency::FrequencyLedger;
use crate::tier::TierPolicy;

/// A sidebar decision. Either side may be absent; a pair with both sides
/// absent is never returned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SidebarPair {
    pub left: Option<Creative>,
    pub right: Option<Creative>,
}

/// Both checkout rail creatives. The two draws are independent and may
/// land on the same creative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutPair {
    pub left: Creative,
    pub right: Creative,
}

/// Stateless decision functions over an immutable catalog and a shared
/// tier policy. All randomness comes from the caller-provided source, so
/// every outcome is reproducible under a fixed seed.
#[derive(Clone)]
pub struct AdSelector {
    catalog: Arc<AdCatalog>,
    policy: Arc<TierPolicy>,
    ledger: Option<Arc<FrequencyLedger>>,
}

impl AdSelector {
    pub fn new(catalog: Arc<AdCatalog>, policy: Arc<TierPolicy>) -> Self {
        Self {
            catalog,
            policy,
            ledger: None,
        }
    }

    /// Attach a session frequency ledger. Eligible pools are filtered
    /// through it and successful draws are recorded against it.
    pub fn with_ledger(mut self, ledger: Arc<FrequencyLedger>) -> Self {
        self.ledger = Some(ledger);
        self
    }

    pub fn catalog(&self) -> &AdCatalog {
        &self.catalog
    }

    pub fn policy(&self) -> &TierPolicy {
        &self.policy
    }

    /// Two independent Bernoulli trials, one per side, each followed by an
    /// independent draw from that side's rail. `None` when both sides
    /// come up empty.
    pub fn sidebar_pair<R: Rng>(&self, rng: &mut R) -> Option<SidebarPair> {
        let probability = self.policy.config().sidebar_probability;
        let left = self.gated_draw(rng, slots::LEFT, probability);
        let right = self.gated_draw(rng, slots::RIGHT, probability);
        if left.is_none() && right.is_none() {
            None
        } else {
            Some(SidebarPair { left, right })
        }
    }

    /// Popup draw at the active tier's intensity: expected one win per
    /// `popup_intensity` trigger events.
    pub fn popup<R: Rng>(&self, rng: &mut R) -> Option<Creative> {
        let intensity = self.policy.config().popup_intensity.max(1);
        self.gated_draw(rng, slots::POPUP, 1.0 / intensity as f64)
    }

    /// Banner draw restricted to creatives targeting exactly `category`.
    pub fn banner_for_category<R: Rng>(&self, category: Category, rng: &mut R) -> Option<Creative> {
        if !Self::passes(rng, self.policy.config().banner_probability) {
            return None;
        }
        let now = Utc::now();
        let pool: Vec<&Creative> = self
            .catalog
            .by_category(category)
            .into_iter()
            .filter(|c| c.slot_id == slots::BANNER_TOP && c.is_live(now) && self.allowed(c))
            .collect();
        let chosen = Self::draw(rng, &pool).cloned();
        if let Some(creative) = &chosen {
            self.record(creative);
            debug!(creative = %creative.id, category = %category, "banner selected");
        }
        chosen
    }

    /// One gate for the whole checkout placement; on success two
    /// independent draws from the combined checkout pool.
    pub fn checkout_pair<R: Rng>(&self, rng: &mut R) -> Option<CheckoutPair> {
        if !Self::passes(rng, self.policy.config().checkout_probability) {
            return None;
        }
        let now = Utc::now();
        let mut pool = self.eligible_pool(slots::CHECKOUT_LEFT, now);
        pool.extend(self.eligible_pool(slots::CHECKOUT_RIGHT, now));
        let left = Self::draw(rng, &pool)?.clone();
        let right = Self::draw(rng, &pool)?.clone();
        self.record(&left);
        self.record(&right);
        debug!(left = %left.id, right = %right.id, "checkout pair selected");
        Some(CheckoutPair { left, right })
    }

    pub fn button<R: Rng>(&self, rng: &mut R) -> Option<Creative> {
        self.gated_draw(rng, slots::BUTTON, self.policy.config().button_probability)
    }

    fn gated_draw<R: Rng>(&self, rng: &mut R, slot_id: &str, probability: f64) -> Option<Creative> {
        if !Self::passes(rng, probability) {
            return None;
        }
        let pool = self.eligible_pool(slot_id, Utc::now());
        let chosen = Self::draw(rng, &pool).cloned();
        if let Some(creative) = &chosen {
            self.record(creative);
            debug!(creative = %creative.id, slot = slot_id, "creative selected");
        }
        chosen
    }

    fn eligible_pool(&self, slot_id: &str, now: chrono::DateTime<Utc>) -> Vec<&Creative> {
        self.catalog
            .live_pool(slot_id, now)
            .into_iter()
            .filter(|c| self.allowed(c))
            .collect()
    }

    fn allowed(&self, creative: &Creative) -> bool {
        self.ledger
            .as_ref()
            .map_or(true, |ledger| ledger.eligible(creative))
    }

    fn record(&self, creative: &Creative) {
        if let Some(ledger) = &self.ledger {
            ledger.record(creative);
        }
    }

    fn passes<R: Rng>(rng: &mut R, probability: f64) -> bool {
        rng.gen::<f64>() < probability
    }

    fn draw<'c, R: Rng>(rng: &mut R, pool: &[&'c Creative]) -> Option<&'c Creative> {
        if pool.is_empty() {
            None
        } else {
            Some(pool[rng.gen_range(0..pool.len())])
        }
    }
}
