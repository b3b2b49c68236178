// src/common/messages.rs

// Catálogo de mensagens exibidas ao usuário.
// A interface original da loja é em tailandês; inglês é o fallback.

pub const DEFAULT_LANG: &str = "en";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    FetchFailed,
    Unexpected,
}

pub fn translate(key: MessageKey, lang: &str) -> &'static str {
    match (key, lang) {
        (MessageKey::FetchFailed, "th") => "เกิดข้อผิดพลาด: ไม่สามารถดึงข้อมูลได้",
        (MessageKey::FetchFailed, _) => "Could not load data from the store.",
        (MessageKey::Unexpected, "th") => "เกิดข้อผิดพลาดที่ไม่คาดคิด",
        (MessageKey::Unexpected, _) => "An unexpected error occurred.",
    }
}

pub fn is_supported(lang: &str) -> bool {
    matches!(lang, "en" | "th")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thai_messages_are_distinct_from_english() {
        assert_ne!(
            translate(MessageKey::FetchFailed, "th"),
            translate(MessageKey::FetchFailed, "en")
        );
    }

    #[test]
    fn unknown_language_falls_back_to_english() {
        assert_eq!(
            translate(MessageKey::Unexpected, "pt"),
            translate(MessageKey::Unexpected, DEFAULT_LANG)
        );
        assert!(!is_supported("pt"));
    }
}
