//! Integration tests for SocietyDesk.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p society-desk-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `roster_flow` - End-to-end command flows against a seeded engine
//! - `query_view` - Derived-view properties over the seed dataset
//! - `bulk_actions` - Group selection and mutation flows
//!
//! Engine logs can be surfaced with
//! `RUST_LOG=society_desk_roster=debug cargo test -- --nocapture`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Once;

static INIT: Once = Once::new();

/// Install the env-filter subscriber once for the whole test binary.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
