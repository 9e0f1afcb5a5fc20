/// Matching key for a phone number: its digits, without the leading `+` or
/// any formatting. `+57 300-123-4567` and `573001234567` share a key, so a
/// lookup by key covers both the `+`-prefixed and bare forms of a number.
///
/// The record's own `phone` value is never rewritten; only the key is.
pub fn phone_match_key(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut out = String::with_capacity(trimmed.len());
    for ch in trimmed.chars() {
        if ch.is_ascii_digit() {
            out.push(ch);
            continue;
        }

        if matches!(ch, 'x' | 'X' | '#' | ';' | ',') {
            if out.is_empty() {
                return None;
            }
            break;
        }
    }

    if out.is_empty() {
        return None;
    }

    Some(out)
}

#[cfg(test)]
mod tests {
    use super::phone_match_key;

    #[test]
    fn match_key_strips_plus_and_formatting() {
        let value = phone_match_key("  +57 (300) 123-4567  ").unwrap();
        assert_eq!(value, "573001234567");
    }

    #[test]
    fn match_key_is_shared_by_plus_and_bare_forms() {
        assert_eq!(
            phone_match_key("+573001234567"),
            phone_match_key("573001234567")
        );
    }

    #[test]
    fn match_key_ignores_extensions() {
        let value = phone_match_key("415-555-1212 x89").unwrap();
        assert_eq!(value, "4155551212");
    }

    #[test]
    fn match_key_rejects_values_without_digits() {
        assert!(phone_match_key("ext 123").is_none());
        assert!(phone_match_key("x123").is_none());
        assert!(phone_match_key("   ").is_none());
        assert!(phone_match_key("+").is_none());
    }
}
