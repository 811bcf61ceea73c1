/// WhatsApp deep link with a prefilled, URL-encoded message.
pub fn whatsapp_link(number: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", number, urlencoding::encode(message))
}

pub fn mailto_link(email: &str) -> String {
    format!("mailto:{}", email)
}

/// `tel:` link with the display spacing removed.
pub fn tel_link(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{}", digits)
}
