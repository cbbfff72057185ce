use super::{FieldErrors, FormData, FromForm, Validator};
use crate::models::Product;

const SLUG_TOO_SHORT: &str = "Slug kamida 2 ta belgidan iborat bo'lishi kerak.";
const TITLE_TOO_SHORT: &str = "Nomi kamida 2 ta belgidan iborat bo'lishi kerak.";
const DESCRIPTION_TOO_SHORT: &str = "Tavsif kamida 2 ta belgidan iborat bo'lishi kerak.";
const NEGATIVE_PRICE: &str = "Narx manfiy bo'lishi mumkin emas.";
const UNIT_REQUIRED: &str = "Birlik turi tanlanishi kerak.";

impl FromForm for Product {
    fn from_form(form: &FormData) -> Result<Self, FieldErrors> {
        let mut v = Validator::new(form);
        let slug = v.text("slug", 2, SLUG_TOO_SHORT);
        let title_key = v.text("title_key", 2, TITLE_TOO_SHORT);
        let description_key = v.text("description_key", 2, DESCRIPTION_TOO_SHORT);
        let price_per_unit = v.price("price_per_unit", NEGATIVE_PRICE);
        let unit_type = v.text("unit_type", 1, UNIT_REQUIRED);
        let image_url = v.optional_url("image_url");
        let features = v.list("features");
        let icon = v.optional_text("icon");
        let keywords = v.optional_text("keywords");

        v.finish(|| {
            Some(Self {
                slug: slug?,
                title_key: title_key?,
                description_key: description_key?,
                price_per_unit: price_per_unit?,
                unit_type: unit_type?,
                image_url: image_url?,
                features,
                icon,
                keywords,
            })
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use mars_paper_core::Price;

    use super::*;
    use crate::forms::NOT_A_NUMBER;

    fn valid_form() -> FormData {
        FormData::new()
            .with("slug", "a4-qogoz")
            .with("title_key", "product_a4_title")
            .with("description_key", "product_a4_description")
            .with("price_per_unit", "45000")
            .with("unit_type", "pachka")
            .with("features", "80 g/m², 500 varaq")
            .with("icon", "📄")
    }

    #[test]
    fn test_decodes_product() {
        let product = Product::from_form(&valid_form()).unwrap();
        assert_eq!(product.slug, "a4-qogoz");
        assert_eq!(product.price_per_unit, Price::parse("45000").unwrap());
        assert_eq!(product.features, vec!["80 g/m²", "500 varaq"]);
        assert_eq!(product.keywords, None);
    }

    #[test]
    fn test_price_rules() {
        let errors = Product::from_form(&valid_form().with("price_per_unit", "-1")).unwrap_err();
        assert_eq!(errors["price_per_unit"], NEGATIVE_PRICE);

        let errors = Product::from_form(&valid_form().with("price_per_unit", "")).unwrap_err();
        assert_eq!(errors["price_per_unit"], NOT_A_NUMBER);

        assert!(Product::from_form(&valid_form().with("price_per_unit", "0")).is_ok());
    }

    #[test]
    fn test_missing_unit_type() {
        let errors = Product::from_form(&valid_form().with("unit_type", " ")).unwrap_err();
        assert_eq!(errors["unit_type"], UNIT_REQUIRED);
    }
}
