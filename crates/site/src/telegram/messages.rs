//! Chat message builders.
//!
//! Messages use Telegram's HTML parse mode, so every submitted value goes
//! through [`escape_html`] before it is interpolated.

use std::fmt::Write as _;

use crate::models::{ContactMessage, ProductOrder};

/// Placeholder for an empty contact message body.
const NOT_SENT: &str = "Yuborilmagan";

/// Placeholder for optional order fields left empty.
const NOT_ENTERED: &str = "Kiritilmagan";

/// Escape the three characters Telegram's HTML mode treats specially.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

fn or_placeholder(value: Option<&str>, placeholder: &str) -> String {
    value.map_or_else(|| placeholder.to_string(), escape_html)
}

/// Build the message for a contact form submission.
#[must_use]
pub fn build_contact_message(contact: &ContactMessage) -> String {
    let mut text = String::from(
        "<b>Yangi Aloqa Xabari (Mars Paper Saytidan)</b>\n\n\
         <b>Telefon qilib murojat qilamiz</b>\n\n",
    );

    let _ = writeln!(text, "<b>Ism:</b> {}", escape_html(&contact.first_name));
    if let Some(last_name) = &contact.last_name {
        let _ = writeln!(text, "<b>Familiya:</b> {}", escape_html(last_name));
    }
    let _ = writeln!(text, "<b>Telefon:</b> {}", escape_html(contact.phone.as_str()));
    if let Some(email) = &contact.email {
        let _ = writeln!(text, "<b>Email:</b> {}", escape_html(email.as_str()));
    }
    if let Some(company) = &contact.company {
        let _ = writeln!(text, "<b>Kompaniya:</b> {}", escape_html(company));
    }
    let _ = write!(
        text,
        "\n<b>Xabar:</b> {}",
        or_placeholder(contact.message.as_deref(), NOT_SENT)
    );
    text
}

/// Build the message for a product order.
#[must_use]
pub fn build_order_message(order: &ProductOrder) -> String {
    let mut text = String::from("<b>Yangi Mahsulot Buyurtmasi (Mars Paper Saytidan)</b>\n\n");

    let _ = writeln!(text, "<b>Mahsulot ID:</b> {}", escape_html(&order.product_id));
    let _ = writeln!(text, "<b>Mahsulot Nomi:</b> {}", escape_html(&order.product_title));
    let _ = writeln!(
        text,
        "<b>Miqdor:</b> {} {}",
        order.quantity,
        escape_html(&order.unit_type)
    );
    let _ = writeln!(text, "<b>Umumiy Narx:</b> {}", order.total_price.display_som());

    text.push_str("\n<b>Buyurtmachi:</b>\n");
    let _ = writeln!(text, "<b>Ism:</b> {}", escape_html(&order.first_name));
    let _ = writeln!(text, "<b>Familiya:</b> {}", escape_html(&order.last_name));
    let _ = writeln!(text, "<b>Telefon:</b> {}", escape_html(order.phone.as_str()));
    let _ = writeln!(
        text,
        "<b>Email:</b> {}",
        or_placeholder(order.email.as_ref().map(|e| e.as_str()), NOT_ENTERED)
    );
    let _ = writeln!(
        text,
        "<b>Kompaniya:</b> {}",
        or_placeholder(order.company.as_deref(), NOT_ENTERED)
    );

    let _ = write!(
        text,
        "\n<b>Qo'shimcha Izohlar:</b>\n{}",
        or_placeholder(order.message.as_deref(), NOT_ENTERED)
    );
    text
}
