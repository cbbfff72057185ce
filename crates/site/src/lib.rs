//! Mars Paper site library.
//!
//! The public marketing site and the admin content panel, provided as a
//! library so the router can be driven in-process by tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod content;
pub mod error;
pub mod filters;
pub mod forms;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod storage;
pub mod store;
pub mod telegram;
pub mod views;
