//! WhatsApp deep link builder.
//!
//! Checkout hands the order summary off through a `wa.me` link with the text
//! pre-filled. Opening the link is fire-and-forget: nothing comes back, so the
//! storefront never knows whether the message was actually sent.

/// Build a `wa.me` deep link with the message URL-escaped as the text query
/// parameter.
#[must_use]
pub fn checkout_url(number: &str, message: &str) -> String {
    format!("https://wa.me/{number}?text={}", urlencoding::encode(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_url_escapes_message() {
        let url = checkout_url("5547996224032", "Olá! Tamanho: M & G");
        assert!(url.starts_with("https://wa.me/5547996224032?text="));
        assert!(url.contains("Ol%C3%A1"));
        assert!(url.contains("%26"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn test_checkout_url_escapes_newlines() {
        let url = checkout_url("5547996224032", "linha 1\nlinha 2");
        assert!(url.contains("%0A"));
    }
}
