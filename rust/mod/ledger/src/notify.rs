//! WhatsApp reminder links.
//!
//! Outbound contact happens through a messaging deep link:
//! `https://wa.me/<digits>?text=<encoded message>`. The message is the
//! management's standard Turkish payment reminder with the resident's
//! name, today's date and the formatted outstanding amount.

use rezidans_core::{format_money, today_display};

/// Build the reminder message body for a resident with outstanding
/// debt.
pub fn reminder_message(name: &str, debt_balance: f64) -> String {
    format!(
        "Sayın {name},\n\n\
         Şengel Residence Yönetimi olarak hatırlatmadır.\n\
         {date} tarihi itibariyle toplam *{amount} TL* borcunuz bulunmaktadır.\n\n\
         Lütfen ödemenizi en kısa sürede yapınız.\n\
         İyi günler dileriz.",
        name = name,
        date = today_display(),
        amount = format_money(debt_balance),
    )
}

/// Build the full deep link. `phone` must already be canonical
/// (digits only, `90` prefix).
pub fn whatsapp_link(phone: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", phone, url_encode(message))
}

/// Percent-encode a query value. Everything outside the RFC 3986
/// unreserved set is encoded, UTF-8 bytewise.
fn url_encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 3);
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => {
                out.push_str(&format!("%{:02X}", byte));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_contains_phone_and_encoded_text() {
        let link = whatsapp_link("905321112233", "merhaba dünya");
        assert!(link.starts_with("https://wa.me/905321112233?text="));
        assert!(link.contains("merhaba%20d%C3%BCnya"));
        assert!(!link.contains(' '));
    }

    #[test]
    fn message_includes_name_and_amount() {
        let msg = reminder_message("NAMIK KETHÜDA", 1451.86);
        assert!(msg.contains("Sayın NAMIK KETHÜDA"));
        assert!(msg.contains("*1.451,86 TL*"));
        assert!(msg.contains(&today_display()));
    }

    #[test]
    fn url_encode_keeps_unreserved() {
        assert_eq!(url_encode("abc-123_.~"), "abc-123_.~");
        assert_eq!(url_encode("a b"), "a%20b");
        assert_eq!(url_encode("₺"), "%E2%82%BA");
    }
}
