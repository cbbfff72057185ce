//! Core types for Mars Paper.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod icon;
pub mod id;
pub mod locale;
pub mod phone;
pub mod price;

pub use email::{Email, EmailError};
pub use icon::{GalleryIcon, GalleryIconError};
pub use id::{RecordId, RecordIdError};
pub use locale::Locale;
pub use phone::{Phone, PhoneError};
pub use price::{Price, PriceError};
