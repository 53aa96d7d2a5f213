//! Storefront Sim — drives the promotion engine through a scripted
//! browsing session, standing in for the presentation layer: category
//! navigation, popup triggers, checkout, and one product view through the
//! content pipeline. Every decision is logged; the augmented product
//! content is printed as JSON at the end.

use std::sync::Arc;
use std::time::Duration;

use chrono::{TimeZone, Utc};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use storefront_ads::{
    seed, AdSelector, FrequencyLedger, PopupCoordinator, PopupDecision, TierPolicy,
};
use storefront_core::config::AppConfig;
use storefront_core::types::{Category, ProductContent, Review, TriggerEvent};
use storefront_injection::{FieldToggles, InjectionOptions, InjectionPipeline};

#[derive(Parser, Debug)]
#[command(name = "storefront-sim")]
#[command(about = "Scripted browsing session against the promotion engine")]
#[command(version)]
struct Cli {
    /// Ad tier (overrides config)
    #[arg(long, env = "STOREFRONT__TIER")]
    tier: Option<String>,

    /// RNG seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Number of simulated category navigations
    #[arg(long, default_value_t = 12)]
    pages: usize,

    /// Popup timer interval in seconds (overrides config)
    #[arg(long)]
    popup_interval_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storefront=info,storefront_sim=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });
    if let Some(tier) = cli.tier {
        config.tier = tier;
    }
    if let Some(secs) = cli.popup_interval_secs {
        config.ads.popup_interval_secs = secs;
    }

    let policy = Arc::new(TierPolicy::default());
    if let Err(e) = policy.set_tier(&config.tier) {
        warn!(error = %e, "keeping default tier");
    }

    let catalog = Arc::new(seed::default_catalog());
    let ledger = Arc::new(FrequencyLedger::new());
    let mut selector = AdSelector::new(catalog.clone(), policy.clone());
    if config.ads.session_frequency {
        selector = selector.with_ledger(ledger.clone());
    }

    info!(
        session = %ledger.session_id(),
        tier = %policy.current(),
        creatives = catalog.len(),
        "storefront session starting"
    );

    let coordinator = Arc::new(PopupCoordinator::new());
    let timer = coordinator.spawn_timer(
        selector.clone(),
        Duration::from_secs(config.ads.popup_interval_secs),
    );

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // Walk the category pages like a shopper flipping between them.
    for step in 0..cli.pages {
        let category = Category::ALL[step % Category::ALL.len()];
        info!(step, category = %category, "navigated to category page");

        if let PopupDecision::Shown(creative) =
            coordinator.request(&selector, TriggerEvent::CategoryChanged, &mut rng)
        {
            info!(creative = %creative.id, "popup displayed");
            coordinator.close();
        }

        if let Some(banner) = selector.banner_for_category(category, &mut rng) {
            info!(creative = %banner.id, "banner displayed");
        }
        if let Some(pair) = selector.sidebar_pair(&mut rng) {
            info!(
                left = pair.left.as_ref().map(|c| c.id.as_str()).unwrap_or("-"),
                right = pair.right.as_ref().map(|c| c.id.as_str()).unwrap_or("-"),
                "sidebar rails displayed"
            );
        }
    }

    // Checkout page: both rails plus the decoy button.
    if let PopupDecision::Shown(creative) =
        coordinator.request(&selector, TriggerEvent::RouteChanged, &mut rng)
    {
        info!(creative = %creative.id, "popup displayed on checkout");
        coordinator.close();
    }
    if let Some(pair) = selector.checkout_pair(&mut rng) {
        info!(left = %pair.left.id, right = %pair.right.id, "checkout ads displayed");
    }
    if let Some(button) = selector.button(&mut rng) {
        info!(creative = %button.id, "button creative displayed");
    }

    // One product view through the two-stage content pipeline. Computed
    // once and held for the view, exactly as a product page would.
    let product = sample_product();
    let pipeline = InjectionPipeline::new(InjectionOptions {
        visible: if config.injection.visible {
            FieldToggles::ALL
        } else {
            FieldToggles::default()
        },
        invisible: if config.injection.invisible {
            FieldToggles::ALL
        } else {
            FieldToggles::default()
        },
    });
    let augmented = pipeline.augment(&product);
    println!("{}", serde_json::to_string_pretty(&augmented)?);

    timer.stop();
    coordinator.release();
    info!(
        suppressed = coordinator.suppressed_total(),
        "session finished"
    );

    Ok(())
}

/// Fixture product for the simulated detail view.
fn sample_product() -> ProductContent {
    ProductContent {
        description: "Wireless mouse with 6-month battery life.".to_string(),
        shipping: "Free Shipping\nEstimated delivery: 4 days".to_string(),
        reviews: vec![
            Review {
                rating: 4.5,
                title: "Good value".to_string(),
                author: "Priya".to_string(),
                body: "Battery really does last months.".to_string(),
                date: Utc.with_ymd_and_hms(2025, 2, 10, 14, 0, 0).unwrap(),
                helpful: 7,
                not_helpful: 1,
                verified_purchase: true,
            },
            Review {
                rating: 3.0,
                title: "Decent but loud clicks".to_string(),
                author: "Sam K.".to_string(),
                body: "Does the job, the clicking is louder than expected.".to_string(),
                date: Utc.with_ymd_and_hms(2025, 3, 22, 8, 15, 0).unwrap(),
                helpful: 2,
                not_helpful: 0,
                verified_purchase: false,
            },
        ],
    }
}
