use rust_decimal::Decimal;

use super::{FieldErrors, FormData, FromForm, REQUIRED, Validator};
use crate::models::ProductOrder;

const QUANTITY_TOO_SMALL: &str = "Miqdor kamida 1 bo'lishi kerak.";
const NEGATIVE_TOTAL: &str = "Narx manfiy bo'lishi mumkin emas.";
const LAST_NAME_TOO_SHORT: &str = "Familiya kamida 2 ta belgidan iborat bo'lishi kerak.";

impl FromForm for ProductOrder {
    fn from_form(form: &FormData) -> Result<Self, FieldErrors> {
        let mut v = Validator::new(form);
        let product_id = v.text("productId", 1, REQUIRED);
        let product_title = v.text("productTitle", 1, REQUIRED);
        let quantity = v.decimal_at_least("quantity", Decimal::ONE, QUANTITY_TOO_SMALL);
        let unit_type = v.text("unitType", 1, REQUIRED);
        let total_price = v.price("totalPrice", NEGATIVE_TOTAL);
        let first_name = v.text("firstName", 2, super::contact::FIRST_NAME_TOO_SHORT);
        let last_name = v.text("lastName", 2, LAST_NAME_TOO_SHORT);
        let phone = v.phone("phone");
        let email = v.optional_email("email");
        let company = v.optional_text("company");
        let message = v.optional_text("message");

        v.finish(|| {
            Some(Self {
                product_id: product_id?,
                product_title: product_title?,
                quantity: quantity?,
                unit_type: unit_type?,
                total_price: total_price?,
                first_name: first_name?,
                last_name: last_name?,
                phone: phone?,
                email: email?,
                company,
                message,
            })
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_form() -> FormData {
        FormData::new()
            .with("productId", "7")
            .with("productTitle", "product_a4_title")
            .with("quantity", "3")
            .with("unitType", "pachka")
            .with("totalPrice", "135000")
            .with("firstName", "Dilnoza")
            .with("lastName", "Rahimova")
            .with("phone", "901234567")
            .with("email", "dilnoza@example.uz")
    }

    #[test]
    fn test_decodes_order() {
        let order = ProductOrder::from_form(&valid_form()).unwrap();
        assert_eq!(order.quantity, Decimal::from(3));
        assert_eq!(order.total_price.to_string(), "135 000");
        assert_eq!(order.email.unwrap().as_str(), "dilnoza@example.uz");
        assert_eq!(order.company, None);
    }

    #[test]
    fn test_quantity_must_be_at_least_one() {
        let errors = ProductOrder::from_form(&valid_form().with("quantity", "0")).unwrap_err();
        assert_eq!(errors["quantity"], QUANTITY_TOO_SMALL);
    }

    #[test]
    fn test_last_name_required_for_orders() {
        let errors = ProductOrder::from_form(&valid_form().with("lastName", "")).unwrap_err();
        assert_eq!(errors["lastName"], LAST_NAME_TOO_SHORT);
    }

    #[test]
    fn test_missing_product_reference() {
        let form = valid_form().with("productId", "").with("productTitle", "");
        let errors = ProductOrder::from_form(&form).unwrap_err();
        assert_eq!(errors["productId"], REQUIRED);
        assert_eq!(errors["productTitle"], REQUIRED);
    }
}
