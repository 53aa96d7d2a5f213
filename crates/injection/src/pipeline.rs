//! Pipeline composition: visible promotion first, hidden payloads second.
//! Everything is off by default — the presentation layer opts in per field
//! and per stage, which keeps the augmentation surface auditable at the
//! call site and testable in isolation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use storefront_core::types::ProductContent;

use crate::{invisible, visible};

/// Per-field opt-in for one injection stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldToggles {
    pub description: bool,
    pub shipping: bool,
    pub reviews: bool,
}

impl FieldToggles {
    pub const ALL: FieldToggles = FieldToggles {
        description: true,
        shipping: true,
        reviews: true,
    };
}

/// Which stages run, and over which fields. `Default` is fully disabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjectionOptions {
    pub visible: FieldToggles,
    pub invisible: FieldToggles,
}

impl InjectionOptions {
    /// Both stages over every field.
    pub fn all() -> Self {
        Self {
            visible: FieldToggles::ALL,
            invisible: FieldToggles::ALL,
        }
    }

    /// Visible promotion only; no hidden payloads.
    pub fn visible_only() -> Self {
        Self {
            visible: FieldToggles::ALL,
            invisible: FieldToggles::default(),
        }
    }
}

/// The two-stage transform, applied once per product view. Deterministic:
/// identical input yields identical output on every call, so the caller
/// can cache the result for the view's lifetime and recompute at will.
#[derive(Debug, Clone)]
pub struct InjectionPipeline {
    options: InjectionOptions,
}

impl InjectionPipeline {
    pub fn new(options: InjectionOptions) -> Self {
        Self { options }
    }

    /// A pipeline that passes content through untouched.
    pub fn disabled() -> Self {
        Self::new(InjectionOptions::default())
    }

    pub fn options(&self) -> InjectionOptions {
        self.options
    }

    /// `stage2(stage1(input))` over the product's text triple.
    pub fn augment(&self, content: &ProductContent) -> ProductContent {
        let staged = visible::apply(content, self.options.visible);
        let result = invisible::apply(&staged, self.options.invisible);
        debug!(
            reviews_in = content.reviews.len(),
            reviews_out = result.reviews.len(),
            "content pipeline applied"
        );
        result
    }
}

impl Default for InjectionPipeline {
    fn default() -> Self {
        Self::disabled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use storefront_core::types::Review;

    fn make_content() -> ProductContent {
        ProductContent {
            description: "Wireless mouse with 6-month battery life.".to_string(),
            shipping: "Free Shipping\nEstimated delivery: 5 days".to_string(),
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
    fn test_stage_one_preserves_original_and_stage_two_extends_it() {
        let content = make_content();
        let staged = visible::apply(&content, FieldToggles::ALL);
        assert!(staged.description.contains("Wireless mouse with 6-month battery life."));

        let out = invisible::apply(&staged, FieldToggles::ALL);
        // Stage-2 output contains the full stage-1 output plus content that
        // was not there before.
        assert!(out.description.contains(&staged.description));
        assert!(out.description.len() > staged.description.len());
    }

    #[test]
    fn test_full_pipeline_keeps_original_substring() {
        let pipeline = InjectionPipeline::new(InjectionOptions::all());
        let content = make_content();
        let out = pipeline.augment(&content);
        assert!(out.description.contains(&content.description));
        assert!(out.shipping.contains(&content.shipping));
    }

    #[test]
    fn test_repeated_invocation_is_stable() {
        let pipeline = InjectionPipeline::new(InjectionOptions::all());
        let content = make_content();
        let first = pipeline.augment(&content);
        let second = pipeline.augment(&content);
        // No hidden counter or accumulation across calls.
        assert_eq!(first, second);
    }

    #[test]
    fn test_disabled_pipeline_is_identity() {
        let pipeline = InjectionPipeline::disabled();
        let content = make_content();
        assert_eq!(pipeline.augment(&content), content);
    }

    #[test]
    fn test_visible_only_adds_no_hidden_containers() {
        let pipeline = InjectionPipeline::new(InjectionOptions::visible_only());
        let content = make_content();
        let out = pipeline.augment(&content);
        assert!(out.description.len() > content.description.len());
        assert!(!out.description.contains("left:-9999px"));
        assert!(!out.reviews.iter().any(|r| r.body.contains("display:none")));
    }

    #[test]
    fn test_partial_field_opt_in() {
        let options = InjectionOptions {
            visible: FieldToggles {
                description: true,
                shipping: false,
                reviews: false,
            },
            invisible: FieldToggles::default(),
        };
        let pipeline = InjectionPipeline::new(options);
        let content = make_content();
        let out = pipeline.augment(&content);
        assert!(out.description.len() > content.description.len());
        assert_eq!(out.shipping, content.shipping);
        assert_eq!(out.reviews, content.reviews);
    }
}
