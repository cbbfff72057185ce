use mars_paper_core::Phone;
use secrecy::SecretString;

use super::{FieldErrors, FormData, FromForm, Validator};

const PASSWORD_TOO_SHORT: &str = "Parol kamida 6 ta belgidan iborat bo'lishi kerak.";

/// Submitted admin credentials.
#[derive(Debug)]
pub struct LoginForm {
    pub phone: Phone,
    pub password: SecretString,
}

impl FromForm for LoginForm {
    fn from_form(form: &FormData) -> Result<Self, FieldErrors> {
        let mut v = Validator::new(form);
        let phone = v.phone("phone");
        let password = v.text("password", 6, PASSWORD_TOO_SHORT);

        v.finish(|| {
            Some(Self {
                phone: phone?,
                password: SecretString::from(password?),
            })
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn test_decodes_login() {
        let form = FormData::new()
            .with("phone", "+998901234567")
            .with("password", "maxfiy123");
        let login = LoginForm::from_form(&form).unwrap();
        assert_eq!(login.phone.as_str(), "+998901234567");
        assert_eq!(login.password.expose_secret(), "maxfiy123");
    }

    #[test]
    fn test_short_password() {
        let form = FormData::new()
            .with("phone", "+998901234567")
            .with("password", "12345");
        let errors = LoginForm::from_form(&form).unwrap_err();
        assert_eq!(errors["password"], PASSWORD_TOO_SHORT);
    }
}
