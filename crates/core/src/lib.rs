//! SocietyDesk Core - Shared types library.
//!
//! This crate provides common types used across all SocietyDesk components:
//! - `roster` - The admin record-management and view-derivation engine
//! - `integration-tests` - End-to-end coverage over the engine
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no clocks, no stored
//! collections. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
