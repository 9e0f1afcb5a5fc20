const MONTH_NAMES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

const MONTH_TOKENS: [(&str, u32); 26] = [
    ("enero", 1),
    ("ene", 1),
    ("febrero", 2),
    ("feb", 2),
    ("marzo", 3),
    ("mar", 3),
    ("abril", 4),
    ("abr", 4),
    ("mayo", 5),
    ("may", 5),
    ("junio", 6),
    ("jun", 6),
    ("julio", 7),
    ("jul", 7),
    ("agosto", 8),
    ("ago", 8),
    ("septiembre", 9),
    ("setiembre", 9),
    ("sept", 9),
    ("sep", 9),
    ("octubre", 10),
    ("oct", 10),
    ("noviembre", 11),
    ("nov", 11),
    ("diciembre", 12),
    ("dic", 12),
];

// Full month names that double as given names.
const GIVEN_NAME_MONTHS: [&str; 2] = ["abril", "julio"];

pub(crate) fn month_name(number: u32) -> Option<&'static str> {
    let index = usize::try_from(number).ok()?.checked_sub(1)?;
    MONTH_NAMES.get(index).copied()
}

/// Month number for a whole word, compared case-insensitively.
pub(crate) fn month_from_token(token: &str) -> Option<u32> {
    let lower = token.to_lowercase();
    MONTH_TOKENS
        .iter()
        .find(|(candidate, _)| *candidate == lower)
        .map(|(_, number)| *number)
}

/// Whether a month word is also a common given name.
pub(crate) fn is_given_name(token: &str) -> bool {
    GIVEN_NAME_MONTHS.contains(&token.to_lowercase().as_str())
}

/// Month number for a one- or two-digit group such as `04` or `4`.
pub(crate) fn month_from_digits(group: &str) -> Option<u32> {
    if group.is_empty() || group.len() > 2 {
        return None;
    }
    let number: u32 = group.parse().ok()?;
    (1..=12).contains(&number).then_some(number)
}

#[cfg(test)]
mod tests {
    use super::{is_given_name, month_from_digits, month_from_token, month_name};

    #[test]
    fn tokens_resolve_abbreviated_and_full_forms() {
        assert_eq!(month_from_token("Jul"), Some(7));
        assert_eq!(month_from_token("SEPTIEMBRE"), Some(9));
        assert_eq!(month_from_token("julios"), None);
    }

    #[test]
    fn digit_groups_must_be_calendar_months() {
        assert_eq!(month_from_digits("04"), Some(4));
        assert_eq!(month_from_digits("4"), Some(4));
        assert_eq!(month_from_digits("13"), None);
        assert_eq!(month_from_digits("00"), None);
        assert_eq!(month_from_digits("004"), None);
    }

    #[test]
    fn names_are_one_based() {
        assert_eq!(month_name(1), Some("Enero"));
        assert_eq!(month_name(12), Some("Diciembre"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }

    #[test]
    fn given_name_months_are_full_words_only() {
        assert!(is_given_name("Abril"));
        assert!(is_given_name("JULIO"));
        assert!(!is_given_name("Jul"));
        assert!(!is_given_name("Mayo"));
    }
}
