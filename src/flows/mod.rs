//! Flows module - Synthetic supply-chain flow dataset
//!
//! Provides:
//! - generate: seeded supplier → category → channel edge generation
//! - summary: channel × category sales aggregation
//! - validate: per-category conservation check
//! - run: the `generate` and `validate` commands

pub mod generate;
pub mod run;
pub mod summary;
pub mod validate;
