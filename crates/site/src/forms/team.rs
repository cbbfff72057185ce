use super::{FieldErrors, FormData, FromForm, Validator};
use crate::models::TeamMember;

const NAME_TOO_SHORT: &str = "Ism kamida 2 ta belgidan iborat bo'lishi kerak.";
const POSITION_TOO_SHORT: &str = "Lavozim kamida 2 ta belgidan iborat bo'lishi kerak.";

impl FromForm for TeamMember {
    fn from_form(form: &FormData) -> Result<Self, FieldErrors> {
        let mut v = Validator::new(form);
        let name = v.text("name", 2, NAME_TOO_SHORT);
        let position = v.text("position", 2, POSITION_TOO_SHORT);
        let experience = v.optional_text("experience");
        let description = v.optional_text("description");
        let image_url = v.optional_url("image_url");
        let achievements = v.list("achievements");

        v.finish(|| {
            Some(Self {
                name: name?,
                position: position?,
                experience,
                description,
                image_url: image_url?,
                achievements,
            })
        })
    }
}
