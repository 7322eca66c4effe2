//! Shiba Core - Shared types library.
//!
//! This crate provides the value types used across the Shiba Phone storefront:
//! - `shiba-storefront` - Catalog, cart store and the simulated purchase flow
//! - `shiba-cli` - Command-line front end for browsing and purchasing
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no async, no global state.
//! Every constructor that accepts user input validates it and returns a
//! typed error instead of panicking.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, rupee prices, emails, digit codes and catalog enums

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
