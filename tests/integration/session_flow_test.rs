//! Integration test for a full storefront session: tier change, ad
//! decisions across every placement, popup lifecycle, and the content
//! pipeline over a product view.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use storefront_ads::{
        seed, AdSelector, AdTier, FrequencyLedger, PopupCoordinator, PopupDecision, TierPolicy,
    };
    use storefront_core::types::{Category, ProductContent, Review, TriggerEvent};
    use storefront_injection::{InjectionOptions, InjectionPipeline};

    fn sample_product() -> ProductContent {
        ProductContent {
            description: "Wireless mouse with 6-month battery life.".to_string(),
            shipping: "Free Shipping\nEstimated delivery: 4 days".to_string(),
            reviews: vec![Review {
                rating: 4.5,
                title: "Good value".to_string(),
                author: "Priya".to_string(),
                body: "Battery really does last months.".to_string(),
                date: Utc.with_ymd_and_hms(2025, 2, 10, 14, 0, 0).unwrap(),
                helpful: 7,
                not_helpful: 1,
                verified_purchase: true,
            }],
        }
    }

    #[test]
    fn test_full_session_flow() {
        let policy = Arc::new(TierPolicy::default());
        assert_eq!(policy.current(), AdTier::Heavy);
        assert!(policy.set_tier("ultra").is_err());
        assert_eq!(policy.current(), AdTier::Heavy);

        let catalog = Arc::new(seed::default_catalog());
        let ledger = Arc::new(FrequencyLedger::new());
        let selector = AdSelector::new(catalog, policy.clone()).with_ledger(ledger);
        let coordinator = PopupCoordinator::new();
        let mut rng = StdRng::seed_from_u64(2024);

        // Heavy tier: banner, sidebars, and checkout always resolve.
        let banner = selector
            .banner_for_category(Category::Electronics, &mut rng)
            .expect("heavy tier banner gate always passes");
        assert_eq!(banner.target_category, Some(Category::Electronics));
        assert!(selector.sidebar_pair(&mut rng).is_some());
        assert!(selector.checkout_pair(&mut rng).is_some());

        // Popup lifecycle: show, suppress, close, show again.
        let mut shown = None;
        for _ in 0..100 {
            if let PopupDecision::Shown(creative) =
                coordinator.request(&selector, TriggerEvent::RouteChanged, &mut rng)
            {
                shown = Some(creative);
                break;
            }
        }
        let shown = shown.expect("popup shows within 100 heavy-tier triggers");
        assert_eq!(
            coordinator.request(&selector, TriggerEvent::UserClick, &mut rng),
            PopupDecision::Suppressed
        );
        assert_eq!(coordinator.current().unwrap().id, shown.id);
        coordinator.close();
        assert!(!coordinator.is_showing());

        // Product view through the full pipeline.
        let product = sample_product();
        let pipeline = InjectionPipeline::new(InjectionOptions::all());
        let augmented = pipeline.augment(&product);
        assert!(augmented.description.contains(&product.description));
        assert!(augmented.reviews.len() > product.reviews.len());
        assert_eq!(pipeline.augment(&product), augmented);
    }
}
