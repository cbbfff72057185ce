//! Mars Paper Core - Shared domain types.
//!
//! This crate provides the value types used by the site and its tests:
//! - `site` - Public marketing site and the admin content panel
//! - `integration-tests` - Black-box tests against the site library
//!
//! # Architecture
//!
//! The core crate contains only types and parsing rules - no I/O, no HTTP
//! clients, no storage access. Every type validates on construction so that
//! downstream code only ever sees well-formed values.
//!
//! # Modules
//!
//! - [`types`] - Phone numbers, emails, record IDs, prices, gallery icons and locales

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
