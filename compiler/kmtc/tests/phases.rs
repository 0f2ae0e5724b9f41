// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end tests through the public [`kmtc::analyze`] facade.
//!
//! # Organization
//!
//! - `common/` - Shared helpers for running programs
//! - `pipeline` - Concrete programs and the stage short-circuit rules
//! - `properties` - Property tests over chunk sizes and literals
//!
//! ```bash
//! cargo test -p kmtc --test phases
//! ```

#[path = "phases/common.rs"]
mod common;

#[path = "phases/pipeline.rs"]
mod pipeline;

#[path = "phases/properties.rs"]
mod properties;
