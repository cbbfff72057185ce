use mars_paper_core::{Email, Phone, Price};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A message left through the public contact form. Append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    pub phone: Phone,
    #[serde(default)]
    pub email: Option<Email>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// An order placed from a product page. Append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOrder {
    pub product_id: String,
    pub product_title: String,
    pub quantity: Decimal,
    pub unit_type: String,
    pub total_price: Price,
    pub first_name: String,
    pub last_name: String,
    pub phone: Phone,
    #[serde(default)]
    pub email: Option<Email>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
