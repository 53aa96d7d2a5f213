//! Content injection pipeline — a pure two-stage transform that blends
//! promotional and hidden payloads into product text before it reaches a
//! renderer. Built for adversarial robustness testing of automated
//! shopping agents; every stage and field is off by default.

pub mod invisible;
pub mod pipeline;
pub mod visible;

pub use pipeline::{FieldToggles, InjectionOptions, InjectionPipeline};
