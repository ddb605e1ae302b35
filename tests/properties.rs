//! Property tests for Folio.
//!
//! Randomized input generation protects the "never panics" and exact-
//! mapping invariants of the pure modules.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/form.rs"]
mod form;

#[path = "properties/markup.rs"]
mod markup;

#[path = "properties/resume.rs"]
mod resume;

#[path = "properties/stats.rs"]
mod stats;
