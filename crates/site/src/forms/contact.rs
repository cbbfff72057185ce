use super::{FieldErrors, FormData, FromForm, Validator};
use crate::models::ContactMessage;

pub(super) const FIRST_NAME_TOO_SHORT: &str = "Ism kamida 2 ta belgidan iborat bo'lishi kerak.";

impl FromForm for ContactMessage {
    fn from_form(form: &FormData) -> Result<Self, FieldErrors> {
        let mut v = Validator::new(form);
        let first_name = v.text("firstName", 2, FIRST_NAME_TOO_SHORT);
        let last_name = v.optional_text("lastName");
        let phone = v.phone("phone");
        let email = v.optional_email("email");
        let company = v.optional_text("company");
        let message = v.optional_text("message");

        v.finish(|| {
            Some(Self {
                first_name: first_name?,
                last_name,
                phone: phone?,
                email: email?,
                company,
                message,
            })
        })
    }
}
