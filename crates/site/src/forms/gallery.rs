use super::{FieldErrors, FormData, FromForm, Validator};
use crate::models::GalleryItem;

const TITLE_TOO_SHORT: &str = "Nomi kamida 2 ta belgidan iborat bo'lishi kerak.";
const DESCRIPTION_TOO_SHORT: &str = "Tavsif kamida 2 ta belgidan iborat bo'lishi kerak.";
const CATEGORY_TOO_SHORT: &str = "Kategoriya kamida 2 ta belgidan iborat bo'lishi kerak.";
const UNKNOWN_ICON: &str = "Noma'lum ikonka tanlangan.";

impl FromForm for GalleryItem {
    fn from_form(form: &FormData) -> Result<Self, FieldErrors> {
        let mut v = Validator::new(form);
        let title_key = v.text("title_key", 2, TITLE_TOO_SHORT);
        let description_key = v.text("description_key", 2, DESCRIPTION_TOO_SHORT);
        let category = v.text("category", 2, CATEGORY_TOO_SHORT);
        let image_url = v.optional_url("image_url");
        let icon_name = v.optional_icon("icon_name", UNKNOWN_ICON);

        v.finish(|| {
            Some(Self {
                title_key: title_key?,
                description_key: description_key?,
                category: category?,
                image_url: image_url?,
                icon_name: icon_name?,
            })
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use mars_paper_core::GalleryIcon;

    use super::*;

    fn valid_form() -> FormData {
        FormData::new()
            .with("title_key", "gallery_factory_title")
            .with("description_key", "gallery_factory_desc")
            .with("category", "ishlab chiqarish")
            .with("image_url", "https://cdn.example.com/factory.jpg")
    }

    #[test]
    fn test_icon_is_optional_and_case_insensitive() {
        let item = GalleryItem::from_form(&valid_form()).unwrap();
        assert_eq!(item.icon_name, None);

        let item = GalleryItem::from_form(&valid_form().with("icon_name", "Award")).unwrap();
        assert_eq!(item.icon_name, Some(GalleryIcon::Award));
    }

    #[test]
    fn test_unknown_icon_rejected() {
        let errors = GalleryItem::from_form(&valid_form().with("icon_name", "Rocket")).unwrap_err();
        assert_eq!(errors["icon_name"], UNKNOWN_ICON);
    }

    #[test]
    fn test_short_category() {
        let errors = GalleryItem::from_form(&valid_form().with("category", "x")).unwrap_err();
        assert_eq!(errors["category"], CATEGORY_TOO_SHORT);
    }
}
