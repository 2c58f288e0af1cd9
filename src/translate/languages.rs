/// Supported target languages, keyed by short code.
const LANGUAGES: &[(&str, &str)] = &[
    ("hi", "Hindi"),
    ("ta", "Tamil"),
    ("bn", "Bengali"),
    ("te", "Telugu"),
    ("mr", "Marathi"),
    ("gu", "Gujarati"),
];

pub fn language_name(code: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, name)| *name)
}

/// Resolve a requested code to a language name; missing or unknown codes
/// resolve to `default`.
pub fn resolve<'a>(code: Option<&str>, default: &'a str) -> &'a str {
    code.and_then(language_name).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(language_name("hi"), Some("Hindi"));
        assert_eq!(language_name("ta"), Some("Tamil"));
        assert_eq!(language_name("bn"), Some("Bengali"));
        assert_eq!(language_name("te"), Some("Telugu"));
        assert_eq!(language_name("mr"), Some("Marathi"));
        assert_eq!(language_name("gu"), Some("Gujarati"));
    }

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(language_name("HI"), None);
        assert_eq!(language_name(" ta"), None);
        assert_eq!(language_name(""), None);
    }

    #[test]
    fn test_resolve_defaults_on_miss() {
        assert_eq!(resolve(Some("bn"), "Hindi"), "Bengali");
        assert_eq!(resolve(Some("fr"), "Hindi"), "Hindi");
        assert_eq!(resolve(None, "Hindi"), "Hindi");
    }
}
