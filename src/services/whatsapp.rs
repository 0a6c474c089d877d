//! WhatsApp hand-off links.
//!
//! Every flow on the site ends here: the server never completes a booking or a
//! purchase itself, it builds a pre-filled `wa.me` chat link and a human at the
//! salon takes it from there.

use chrono::NaiveDate;
use url::{form_urlencoded, Url};

use crate::errors::AppError;
use crate::models::ContactDetails;
use crate::services::i18n::{translate, Lang};

pub fn encode_text(message: &str) -> String {
    // form encoding writes spaces as '+', and a literal '+' as %2B, so the swap is lossless
    form_urlencoded::byte_serialize(message.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

pub fn wa_link(phone: &str, message: &str) -> Result<Url, AppError> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Err(AppError::Validation(format!(
            "whatsapp number has no digits: {phone:?}"
        )));
    }

    let raw = format!("https://wa.me/{digits}?text={}", encode_text(message));
    Url::parse(&raw).map_err(|e| AppError::Validation(format!("invalid whatsapp link: {e}")))
}

/// The `text` parameter of a `wa.me` link, decoded.
pub fn message_text(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == "text")
        .map(|(_, v)| v.into_owned())
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%a %b %-d, %Y").to_string()
}

/// Line-per-field message in the WhatsApp bold style (`*Label:* value`).
pub struct MessageBuilder {
    lang: Lang,
    lines: Vec<String>,
}

impl MessageBuilder {
    pub fn new(lang: Lang, header_key: &str) -> Self {
        Self {
            lang,
            lines: vec![translate(lang, header_key), String::new()],
        }
    }

    pub fn field(mut self, label_key: &str, value: impl AsRef<str>) -> Self {
        let label = translate(self.lang, label_key);
        self.lines.push(format!("*{label}:* {}", value.as_ref()));
        self
    }

    pub fn field_opt(self, label_key: &str, value: Option<&str>) -> Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(v) => self.field(label_key, v),
            None => self,
        }
    }

    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.lines.push(text.into());
        self
    }

    pub fn blank(mut self) -> Self {
        self.lines.push(String::new());
        self
    }

    pub fn build(self) -> String {
        self.lines.join("\n").trim_end().to_string()
    }
}

pub struct BookingRequest<'a> {
    pub reference: &'a str,
    pub service: &'a str,
    pub date: NaiveDate,
    pub time_label: &'a str,
    pub deposit_amount: u32,
    pub card_last4: &'a str,
    pub contact: &'a ContactDetails,
}

pub fn booking_message(lang: Lang, req: &BookingRequest<'_>) -> String {
    let card = format!("•••• {}", req.card_last4);
    MessageBuilder::new(lang, "wa.booking.header")
        .field("label.reference", req.reference)
        .field("label.service", req.service)
        .field("label.date", format_date(req.date))
        .field("label.time", req.time_label)
        .field("label.name", &req.contact.name)
        .field("label.phone", &req.contact.phone)
        .field_opt("label.email", Some(req.contact.email.as_str()))
        .field_opt("label.notes", req.contact.notes.as_deref())
        .field("label.deposit", format!("${}", req.deposit_amount))
        .field("label.card", card)
        .blank()
        .line(translate(lang, "wa.booking.footer"))
        .build()
}

pub fn inquiry_message(lang: Lang, name: &str, message: &str) -> String {
    MessageBuilder::new(lang, "wa.inquiry.header")
        .field("label.name", name)
        .field("label.message", message)
        .build()
}

pub fn design_message(lang: Lang, title: &str, image: Option<&str>) -> String {
    MessageBuilder::new(lang, "wa.design.header")
        .field("label.design", title)
        .field_opt("label.image", image)
        .blank()
        .line(translate(lang, "wa.design.body"))
        .build()
}

/// Opens the chat hand-off with the customer's last question quoted.
pub fn chat_handoff_message(lang: Lang, question: &str) -> String {
    MessageBuilder::new(lang, "wa.chat.handoff")
        .field_opt("label.message", Some(question))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_shape() {
        let url = wa_link("+1 (555) 555-0123", "Hi there").unwrap();
        assert_eq!(url.host_str(), Some("wa.me"));
        assert_eq!(url.path(), "/15555550123");
        assert_eq!(url.query(), Some("text=Hi%20there"));
    }

    #[test]
    fn test_decoding_reproduces_message() {
        let messages = [
            "plain",
            "*Amount:* $100\n*From:* Ana",
            "a+b=c & d?e#f %20 100%",
            "Añadir diseño ✨ 💅",
            "",
        ];
        for msg in messages {
            let url = wa_link("15555550123", msg).unwrap();
            assert_eq!(message_text(&url).as_deref(), Some(msg), "{msg:?}");
        }
    }

    #[test]
    fn test_encoded_text_has_no_raw_separators() {
        let encoded = encode_text("a b&c=d+e#f\n");
        assert!(!encoded.contains(' '));
        assert!(!encoded.contains('&'));
        assert!(!encoded.contains('='));
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('#'));
        assert!(encoded.contains("%0A"));
    }

    #[test]
    fn test_phone_without_digits_rejected() {
        assert!(wa_link("n/a", "hello").is_err());
    }

    #[test]
    fn test_booking_message_fields() {
        let contact = ContactDetails {
            name: "Ana".to_string(),
            phone: "555-0100".to_string(),
            email: String::new(),
            notes: Some("  ".to_string()),
        };
        let msg = booking_message(
            Lang::En,
            &BookingRequest {
                reference: "NB-1",
                service: "Gel Manicure",
                date: NaiveDate::from_ymd_opt(2025, 6, 17).unwrap(),
                time_label: "10:00 AM",
                deposit_amount: 15,
                card_last4: "4242",
                contact: &contact,
            },
        );
        assert!(msg.starts_with("💅 *New Booking Request*"));
        assert!(msg.contains("*Service:* Gel Manicure"));
        assert!(msg.contains("*Date:* Tue Jun 17, 2025"));
        assert!(msg.contains("*Deposit:* $15"));
        assert!(msg.contains("•••• 4242"));
        assert!(!msg.contains("*Email:*"));
        assert!(!msg.contains("*Notes:*"));
    }

    #[test]
    fn test_inquiry_message_spanish_labels() {
        let msg = inquiry_message(Lang::Es, "Ana", "¿Tienen citas hoy?");
        assert!(msg.contains("*Nombre:* Ana"));
        assert!(msg.contains("*Mensaje:* ¿Tienen citas hoy?"));
    }

    #[test]
    fn test_design_message() {
        let msg = design_message(Lang::En, "Ocean Marble", Some("/img/gallery/g08.jpg"));
        assert!(msg.contains("*Design:* Ocean Marble"));
        assert!(msg.contains("*Photo:* /img/gallery/g08.jpg"));
        assert!(msg.ends_with("Can I book this look?"));
    }
}
