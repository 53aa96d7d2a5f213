use std::fmt;
use std::str::FromStr;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use storefront_core::{StorefrontError, StorefrontResult};

/// Probability profile controlling how aggressively promotional content is
/// surfaced.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TierConfig {
    /// Chance to show the category banner.
    pub banner_probability: f64,
    /// Chance to show each sidebar, tried independently per side.
    pub sidebar_probability: f64,
    /// Chance to show the checkout pair.
    pub checkout_probability: f64,
    /// Chance to show the button creative.
    pub button_probability: f64,
    /// Expected one popup per this many trigger events.
    pub popup_intensity: u32,
    pub description: &'static str,
}

const LIGHT: TierConfig = TierConfig {
    banner_probability: 0.2,
    sidebar_probability: 0.3,
    checkout_probability: 0.3,
    button_probability: 0.2,
    popup_intensity: 8,
    description: "Light ad experience with minimal interruptions",
};

const MEDIUM: TierConfig = TierConfig {
    banner_probability: 0.5,
    sidebar_probability: 0.6,
    checkout_probability: 0.6,
    button_probability: 0.5,
    popup_intensity: 5,
    description: "Balanced ad experience",
};

const HEAVY: TierConfig = TierConfig {
    banner_probability: 1.0,
    sidebar_probability: 1.0,
    checkout_probability: 1.0,
    button_probability: 0.8,
    popup_intensity: 2,
    description: "Full ad experience",
};

/// Named ad experience profile. Closed enumeration; anything else is
/// rejected at the `TierPolicy` boundary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AdTier {
    Light,
    Medium,
    Heavy,
}

impl AdTier {
    pub const ALL: [AdTier; 3] = [AdTier::Light, AdTier::Medium, AdTier::Heavy];

    pub fn config(self) -> &'static TierConfig {
        match self {
            AdTier::Light => &LIGHT,
            AdTier::Medium => &MEDIUM,
            AdTier::Heavy => &HEAVY,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AdTier::Light => "light",
            AdTier::Medium => "medium",
            AdTier::Heavy => "heavy",
        }
    }
}

impl FromStr for AdTier {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(AdTier::Light),
            "medium" => Ok(AdTier::Medium),
            "heavy" => Ok(AdTier::Heavy),
            other => Err(StorefrontError::UnknownTier(other.to_string())),
        }
    }
}

impl fmt::Display for AdTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Holds the active tier for one engine instance. Constructed once and
/// passed by reference to selection and coordination calls; changing the
/// tier affects only future selections, never creatives already displayed.
#[derive(Debug)]
pub struct TierPolicy {
    active: RwLock<AdTier>,
}

impl TierPolicy {
    pub fn new(initial: AdTier) -> Self {
        Self {
            active: RwLock::new(initial),
        }
    }

    pub fn current(&self) -> AdTier {
        *self.active.read()
    }

    /// Probability profile of the currently active tier.
    pub fn config(&self) -> &'static TierConfig {
        self.current().config()
    }

    pub fn set(&self, tier: AdTier) {
        *self.active.write() = tier;
        info!(tier = %tier, "ad tier changed");
    }

    /// Change the active tier by name. An unrecognized name is rejected and
    /// leaves the previous tier in effect.
    pub fn set_tier(&self, name: &str) -> StorefrontResult<AdTier> {
        match name.parse::<AdTier>() {
            Ok(tier) => {
                self.set(tier);
                Ok(tier)
            }
            Err(err) => {
                warn!(requested = name, active = %self.current(), "rejected unknown ad tier");
                Err(err)
            }
        }
    }
}

impl Default for TierPolicy {
    fn default() -> Self {
        Self::new(AdTier::Heavy)
    }
}
