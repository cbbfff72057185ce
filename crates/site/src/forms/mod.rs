//! Schema-first decoding of submitted forms.
//!
//! Every form arrives as a flat field-name to value map ([`FormData`]). A
//! decoder turns it into a typed record or a [`FieldErrors`] map holding the
//! first problem found for each invalid field. Nothing downstream ever sees a
//! half-validated record.

mod contact;
mod gallery;
mod login;
mod order;
mod product;
mod team;

pub use login::LoginForm;

use std::collections::{BTreeMap, HashMap};

use mars_paper_core::{Email, GalleryIcon, Phone, Price, RecordId};
use rust_decimal::Decimal;
use serde::Deserialize;
use url::Url;

/// Message shown under a numeric input that does not hold a number.
pub const NOT_A_NUMBER: &str = "Qiymat raqam bo'lishi kerak.";
/// Message shown under a phone input that fails the format check.
pub const INVALID_PHONE: &str = "Telefon raqami to'g'ri formatda bo'lishi kerak.";
/// Message shown under an email input that fails the format check.
pub const INVALID_EMAIL: &str = "Email manzili noto'g'ri.";
/// Message shown under an image URL input that is not an http(s) URL.
pub const INVALID_IMAGE_URL: &str = "Rasm URL manzili noto'g'ri.";
/// Message shown under a required input left empty.
pub const REQUIRED: &str = "Bu maydon to'ldirilishi shart.";

/// First error message per invalid field, keyed by field name.
pub type FieldErrors = BTreeMap<String, String>;

/// Decode a typed value from submitted form fields.
pub trait FromForm: Sized {
    /// # Errors
    ///
    /// Returns the first validation message for every invalid field.
    fn from_form(form: &FormData) -> Result<Self, FieldErrors>;
}

/// A submitted form: field name to raw value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct FormData(HashMap<String, String>);

impl FormData {
    /// Create an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a field.
    #[must_use]
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.0.insert(key.to_string(), value.to_string());
        self
    }

    /// The trimmed value of a field, or `None` when it is missing or blank.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    /// The record id carried in the `id` field.
    #[must_use]
    pub fn record_id(&self) -> Option<RecordId> {
        self.get("id").and_then(|raw| RecordId::parse(raw).ok())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Collects field values and the first error for each field.
///
/// Every accessor returns `Some` on success and records an error otherwise,
/// so a decoder reads all fields and then calls [`Validator::finish`].
pub(crate) struct Validator<'a> {
    form: &'a FormData,
    errors: FieldErrors,
}

impl<'a> Validator<'a> {
    pub(crate) fn new(form: &'a FormData) -> Self {
        Self {
            form,
            errors: FieldErrors::new(),
        }
    }

    fn fail<T>(&mut self, field: &str, message: &str) -> Option<T> {
        self.errors
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
        None
    }

    /// Required text with a minimum length in characters.
    pub(crate) fn text(&mut self, field: &str, min_chars: usize, message: &str) -> Option<String> {
        match self.form.get(field) {
            Some(value) if value.chars().count() >= min_chars => Some(value.to_string()),
            _ => self.fail(field, message),
        }
    }

    /// Optional free text. Blank input is absent, never an error.
    pub(crate) fn optional_text(&self, field: &str) -> Option<String> {
        self.form.get(field).map(str::to_string)
    }

    /// Required phone number.
    pub(crate) fn phone(&mut self, field: &str) -> Option<Phone> {
        match self.form.get(field).map(Phone::parse) {
            Some(Ok(phone)) => Some(phone),
            _ => self.fail(field, INVALID_PHONE),
        }
    }

    /// Optional email. Blank input is absent; anything else must parse.
    pub(crate) fn optional_email(&mut self, field: &str) -> Option<Option<Email>> {
        match self.form.get(field) {
            None => Some(None),
            Some(raw) => match Email::parse(raw) {
                Ok(email) => Some(Some(email)),
                Err(_) => self.fail(field, INVALID_EMAIL),
            },
        }
    }

    /// Optional absolute http(s) URL.
    pub(crate) fn optional_url(&mut self, field: &str) -> Option<Option<String>> {
        match self.form.get(field) {
            None => Some(None),
            Some(raw) => match Url::parse(raw) {
                Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {
                    Some(Some(raw.to_string()))
                }
                _ => self.fail(field, INVALID_IMAGE_URL),
            },
        }
    }

    /// Required non-negative price.
    pub(crate) fn price(&mut self, field: &str, negative_message: &str) -> Option<Price> {
        let Some(raw) = self.form.get(field) else {
            return self.fail(field, NOT_A_NUMBER);
        };
        match Price::parse(raw) {
            Ok(price) => Some(price),
            Err(mars_paper_core::PriceError::NotANumber) => self.fail(field, NOT_A_NUMBER),
            Err(mars_paper_core::PriceError::Negative) => self.fail(field, negative_message),
        }
    }

    /// Required number that must be at least `min`.
    pub(crate) fn decimal_at_least(
        &mut self,
        field: &str,
        min: Decimal,
        message: &str,
    ) -> Option<Decimal> {
        match self.form.get(field).map(str::parse::<Decimal>) {
            Some(Ok(value)) if value >= min => Some(value.normalize()),
            Some(Ok(_)) => self.fail(field, message),
            _ => self.fail(field, NOT_A_NUMBER),
        }
    }

    /// Optional gallery icon from the closed icon set.
    pub(crate) fn optional_icon(&mut self, field: &str, message: &str) -> Option<Option<GalleryIcon>> {
        match self.form.get(field) {
            None => Some(None),
            Some(raw) => match GalleryIcon::parse(raw) {
                Ok(icon) => Some(Some(icon)),
                Err(_) => self.fail(field, message),
            },
        }
    }

    /// Comma-separated list. Segments are trimmed and blank ones dropped.
    pub(crate) fn list(&self, field: &str) -> Vec<String> {
        split_list(self.form.get(field).unwrap_or_default())
    }

    /// Return the decoded value, or every recorded field error.
    ///
    /// `build` only runs when no field failed, so each accessor's `Some`
    /// can be unwrapped with `?` inside it.
    pub(crate) fn finish<T>(self, build: impl FnOnce() -> Option<T>) -> Result<T, FieldErrors> {
        if !self.errors.is_empty() {
            return Err(self.errors);
        }
        build().ok_or(self.errors)
    }
}

/// Split a comma-separated list, dropping blank segments.
#[must_use]
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_get_trims_and_hides_blank() {
        let form = FormData::new().with("name", "  Ali ").with("empty", "   ");
        assert_eq!(form.get("name"), Some("Ali"));
        assert_eq!(form.get("empty"), None);
        assert_eq!(form.get("missing"), None);
    }

    #[test]
    fn test_record_id() {
        assert_eq!(
            FormData::new().with("id", " 42 ").record_id().unwrap().as_str(),
            "42"
        );
        assert!(FormData::new().with("id", "").record_id().is_none());
        assert!(FormData::new().record_id().is_none());
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("A, B, C"), vec!["A", "B", "C"]);
        assert_eq!(split_list(" A ,, B "), vec!["A", "B"]);
        assert!(split_list("").is_empty());
        assert!(split_list(" , ").is_empty());
    }

    #[test]
    fn test_first_error_per_field_wins() {
        let form = FormData::new();
        let mut v = Validator::new(&form);
        let _ = v.text("name", 2, "first");
        let _ = v.text("name", 2, "second");
        let errors = v.finish(|| Some(())).unwrap_err();
        assert_eq!(errors.get("name").map(String::as_str), Some("first"));
    }

    #[test]
    fn test_text_counts_characters() {
        let form = FormData::new().with("name", "Ўз");
        let mut v = Validator::new(&form);
        assert_eq!(v.text("name", 2, "short").as_deref(), Some("Ўз"));
    }

    #[test]
    fn test_optional_email_blank_is_absent() {
        let form = FormData::new().with("email", "").with("bad", "not-an-email");
        let mut v = Validator::new(&form);
        assert_eq!(v.optional_email("email"), Some(None));
        assert_eq!(v.optional_email("bad"), None);
        let errors = v.finish(|| Some(())).unwrap_err();
        assert_eq!(errors["bad"], INVALID_EMAIL);
    }

    #[test]
    fn test_optional_url_requires_http() {
        let form = FormData::new()
            .with("ok", "https://cdn.example.com/a.png")
            .with("ftp", "ftp://example.com/a.png")
            .with("junk", "not a url");
        let mut v = Validator::new(&form);
        assert!(matches!(v.optional_url("ok"), Some(Some(_))));
        assert_eq!(v.optional_url("ftp"), None);
        assert_eq!(v.optional_url("junk"), None);
        assert_eq!(v.optional_url("missing"), Some(None));
    }

    #[test]
    fn test_numbers() {
        let form = FormData::new()
            .with("qty", "2.50")
            .with("zero", "0")
            .with("nan", "abc");
        let mut v = Validator::new(&form);
        assert_eq!(
            v.decimal_at_least("qty", Decimal::ONE, "min"),
            Some(Decimal::new(25, 1))
        );
        assert_eq!(v.decimal_at_least("zero", Decimal::ONE, "min"), None);
        assert_eq!(v.decimal_at_least("nan", Decimal::ONE, "min"), None);
        assert_eq!(v.decimal_at_least("blank", Decimal::ONE, "min"), None);
        let errors = v.finish(|| Some(())).unwrap_err();
        assert_eq!(errors["zero"], "min");
        assert_eq!(errors["nan"], NOT_A_NUMBER);
        assert_eq!(errors["blank"], NOT_A_NUMBER);
    }
}
