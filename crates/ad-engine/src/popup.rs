//! Popup coordination: a session-scoped two-state machine enforcing the
//! at-most-one-popup invariant across every trigger source.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use rand::Rng;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use storefront_core::types::{Creative, TriggerEvent};

use crate::selector::AdSelector;

/// Guard state. `Showing` holds the creative currently on screen.
#[derive(Debug, Clone, Default)]
pub enum PopupState {
    #[default]
    Idle,
    Showing(Creative),
}

/// Outcome of a popup trigger.
#[derive(Debug, Clone, PartialEq)]
pub enum PopupDecision {
    /// The draw won; the creative is now showing.
    Shown(Creative),
    /// A popup is already visible; the trigger was ignored.
    Suppressed,
    /// The Bernoulli gate failed or the pool was empty.
    NotSelected,
}

/// Enforces "at most one popup visible" for one session. The guard check
/// and the transition to `Showing` happen inside a single critical
/// section, so two triggers racing each other cannot both succeed.
pub struct PopupCoordinator {
    state: Mutex<PopupState>,
    suppressed: AtomicU64,
}

impl PopupCoordinator {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(PopupState::Idle),
            suppressed: AtomicU64::new(0),
        }
    }

    /// Handle a trigger event. While a popup is showing every further
    /// trigger is a counted no-op; from idle, the selector's popup draw
    /// decides whether anything appears.
    pub fn request<R: Rng>(
        &self,
        selector: &AdSelector,
        trigger: TriggerEvent,
        rng: &mut R,
    ) -> PopupDecision {
        let mut state = self.state.lock();
        if matches!(*state, PopupState::Showing(_)) {
            self.suppressed.fetch_add(1, Ordering::Relaxed);
            debug!(?trigger, "popup already visible, trigger ignored");
            return PopupDecision::Suppressed;
        }
        match selector.popup(rng) {
            Some(creative) => {
                *state = PopupState::Showing(creative.clone());
                info!(creative = %creative.id, ?trigger, "popup shown");
                PopupDecision::Shown(creative)
            }
            None => PopupDecision::NotSelected,
        }
    }

    /// Explicit close action from the user.
    pub fn close(&self) {
        let mut state = self.state.lock();
        if let PopupState::Showing(creative) = &*state {
            debug!(creative = %creative.id, "popup closed");
        }
        *state = PopupState::Idle;
    }

    /// Teardown path for an owning view that goes away without a close.
    /// The guard must never stay set once the creative is no longer
    /// actually visible.
    pub fn release(&self) {
        *self.state.lock() = PopupState::Idle;
    }

    pub fn is_showing(&self) -> bool {
        matches!(*self.state.lock(), PopupState::Showing(_))
    }

    /// The creative currently on screen, if any.
    pub fn current(&self) -> Option<Creative> {
        match &*self.state.lock() {
            PopupState::Showing(creative) => Some(creative.clone()),
            PopupState::Idle => None,
        }
    }

    /// Triggers ignored because a popup was already visible.
    pub fn suppressed_total(&self) -> u64 {
        self.suppressed.load(Ordering::Relaxed)
    }

    /// Start the periodic popup trigger. Each tick files a
    /// `TriggerEvent::TimerTick` request. The returned handle aborts the
    /// task on `stop` or drop, so a torn-down view cannot receive a stale
    /// fire.
    pub fn spawn_timer(
        self: &Arc<Self>,
        selector: AdSelector,
        interval: Duration,
    ) -> PopupTimerHandle {
        let coordinator = Arc::clone(self);
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The first tick completes immediately; consume it so the
            // first trigger waits one full period.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let mut rng = rand::thread_rng();
                coordinator.request(&selector, TriggerEvent::TimerTick, &mut rng);
            }
        });
        PopupTimerHandle { handle }
    }
}

impl Default for PopupCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

/// Cancellation handle for the periodic popup trigger.
pub struct PopupTimerHandle {
    handle: JoinHandle<()>,
}

impl PopupTimerHandle {
    pub fn stop(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for PopupTimerHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AdCatalog;
    use crate::seed;
    use crate::tier::{AdTier, TierPolicy};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn make_selector(tier: AdTier) -> AdSelector {
        AdSelector::new(
            Arc::new(seed::default_catalog()),
            Arc::new(TierPolicy::new(tier)),
        )
    }

    /// Drive requests until one shows; heavy tier wins half the trials so
    /// a hundred attempts cannot realistically all miss.
    fn show_popup<R: Rng>(
        coordinator: &PopupCoordinator,
        selector: &AdSelector,
        rng: &mut R,
    ) -> Creative {
        for _ in 0..100 {
            if let PopupDecision::Shown(creative) =
                coordinator.request(selector, TriggerEvent::RouteChanged, rng)
            {
                return creative;
            }
        }
        panic!("popup never shown under heavy tier");
    }

    #[test]
    fn test_second_request_suppressed_while_showing() {
        let coordinator = PopupCoordinator::new();
        let selector = make_selector(AdTier::Heavy);
        let mut rng = StdRng::seed_from_u64(11);

        let shown = show_popup(&coordinator, &selector, &mut rng);
        assert!(coordinator.is_showing());

        let second = coordinator.request(&selector, TriggerEvent::CategoryChanged, &mut rng);
        assert_eq!(second, PopupDecision::Suppressed);
        assert_eq!(coordinator.suppressed_total(), 1);
        // Guard unchanged: still showing the same creative.
        assert_eq!(coordinator.current().unwrap().id, shown.id);
    }

    #[test]
    fn test_close_allows_next_popup() {
        let coordinator = PopupCoordinator::new();
        let selector = make_selector(AdTier::Heavy);
        let mut rng = StdRng::seed_from_u64(17);

        show_popup(&coordinator, &selector, &mut rng);
        coordinator.close();
        assert!(!coordinator.is_showing());

        show_popup(&coordinator, &selector, &mut rng);
        assert!(coordinator.is_showing());
    }

    #[test]
    fn test_release_clears_guard_on_teardown() {
        let coordinator = PopupCoordinator::new();
        let selector = make_selector(AdTier::Heavy);
        let mut rng = StdRng::seed_from_u64(23);

        show_popup(&coordinator, &selector, &mut rng);
        coordinator.release();
        assert!(!coordinator.is_showing());
        assert!(coordinator.current().is_none());

        // A fresh request succeeds again after the forced release.
        show_popup(&coordinator, &selector, &mut rng);
        assert!(coordinator.is_showing());
    }

    #[test]
    fn test_close_when_idle_is_a_noop() {
        let coordinator = PopupCoordinator::new();
        coordinator.close();
        coordinator.release();
        assert!(!coordinator.is_showing());
        assert_eq!(coordinator.suppressed_total(), 0);
    }

    #[test]
    fn test_empty_pool_never_shows() {
        let coordinator = PopupCoordinator::new();
        let selector = AdSelector::new(
            Arc::new(AdCatalog::new(Vec::new(), Vec::new())),
            Arc::new(TierPolicy::new(AdTier::Heavy)),
        );
        let mut rng = StdRng::seed_from_u64(29);
        for _ in 0..50 {
            let decision = coordinator.request(&selector, TriggerEvent::UserClick, &mut rng);
            assert_eq!(decision, PopupDecision::NotSelected);
        }
        assert!(!coordinator.is_showing());
    }

    #[tokio::test]
    async fn test_timer_stops_firing_after_cancellation() {
        let coordinator = Arc::new(PopupCoordinator::new());
        let selector = make_selector(AdTier::Heavy);

        let timer = coordinator.spawn_timer(selector, Duration::from_millis(5));
        tokio::time::sleep(Duration::from_millis(60)).await;

        timer.stop();
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(timer.is_finished());

        coordinator.release();
        let suppressed = coordinator.suppressed_total();
        tokio::time::sleep(Duration::from_millis(60)).await;

        // No tick fired into the torn-down view: state and counters are
        // exactly as the teardown left them.
        assert!(!coordinator.is_showing());
        assert_eq!(coordinator.suppressed_total(), suppressed);
    }
}
