//! Advertisement orchestration engine — tier-aware randomized creative
//! selection, popup coordination, and session frequency control.

pub mod catalog;
pub mod frequency;
pub mod popup;
pub mod seed;
pub mod selector;
pub mod tier;

pub use catalog::AdCatalog;
pub use frequency::FrequencyLedger;
pub use popup::{PopupCoordinator, PopupDecision, PopupTimerHandle};
pub use selector::{AdSelector, CheckoutPair, SidebarPair};
pub use tier::{AdTier, TierConfig, TierPolicy};
