//! Custom Askama template filters.

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Local::now().year())
}

/// Returns the content hash for main.css, computed at build time.
///
/// Usage in templates: `{{ ""|css_hash }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn css_hash(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    Ok(env!("CSS_HASH"))
}

/// Appends the currency to a grouped amount.
///
/// Usage in templates: `{{ product.price_per_unit|som }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn som(amount: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format!("{amount} so'm"))
}
