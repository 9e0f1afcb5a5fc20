use crate::domain::record::ContactRecord;
use crate::dto::CountryCount;
use std::collections::HashMap;

// Ordered longest prefix first so "+593" wins over a shorter match.
const COUNTRY_PREFIXES: [(&str, &str); 15] = [
    ("593", "Ecuador"),
    ("598", "Uruguay"),
    ("507", "Panama"),
    ("506", "Costa Rica"),
    ("503", "El Salvador"),
    ("57", "Colombia"),
    ("52", "Mexico"),
    ("54", "Argentina"),
    ("34", "Spain"),
    ("44", "United Kingdom"),
    ("55", "Brazil"),
    ("51", "Peru"),
    ("56", "Chile"),
    ("58", "Venezuela"),
    ("1", "USA/Canada"),
];

/// Country label for an international number. Numbers written without a
/// leading `+` carry no reliable calling code and are not classified.
pub fn country_for_phone(phone: &str) -> Option<String> {
    let digits = phone.trim().strip_prefix('+')?;
    if !digits.starts_with(|ch: char| ch.is_ascii_digit()) {
        return None;
    }

    for (prefix, country) in COUNTRY_PREFIXES {
        if digits.starts_with(prefix) {
            return Some(country.to_string());
        }
    }

    let code: String = digits
        .chars()
        .take_while(|ch| ch.is_ascii_digit())
        .take(2)
        .collect();
    Some(format!("Code +{code}"))
}

/// Counts records per country, largest first, ties by name. Percentages are
/// relative to the whole batch, classified or not.
pub fn country_breakdown(records: &[ContactRecord], limit: usize) -> Vec<CountryCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for record in records {
        if let Some(country) = country_for_phone(&record.phone) {
            *counts.entry(country).or_default() += 1;
        }
    }

    let total = records.len();
    let mut rows: Vec<CountryCount> = counts
        .into_iter()
        .map(|(country, count)| CountryCount {
            country,
            count,
            percent: if total == 0 {
                0.0
            } else {
                count as f64 * 100.0 / total as f64
            },
        })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.country.cmp(&b.country)));
    rows.truncate(limit);
    rows
}

#[cfg(test)]
mod tests {
    use super::{country_breakdown, country_for_phone};
    use crate::domain::ContactRecord;

    #[test]
    fn longest_prefix_wins() {
        assert_eq!(country_for_phone("+593991234567").as_deref(), Some("Ecuador"));
        assert_eq!(country_for_phone("+573001234567").as_deref(), Some("Colombia"));
        assert_eq!(country_for_phone("+14155551212").as_deref(), Some("USA/Canada"));
    }

    #[test]
    fn unknown_prefix_reports_code() {
        assert_eq!(country_for_phone("+81312345678").as_deref(), Some("Code +81"));
    }

    #[test]
    fn numbers_without_plus_are_not_classified() {
        assert!(country_for_phone("573001234567").is_none());
        assert!(country_for_phone("+").is_none());
    }

    #[test]
    fn breakdown_orders_by_count() {
        let records = vec![
            ContactRecord::new(Some("A"), "+573001", None),
            ContactRecord::new(Some("B"), "+573002", None),
            ContactRecord::new(Some("C"), "+5215512", None),
            ContactRecord::new(Some("D"), "573003", None),
        ];
        let rows = country_breakdown(&records, 10);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].country, "Colombia");
        assert_eq!(rows[0].count, 2);
        assert!((rows[0].percent - 50.0).abs() < f64::EPSILON);
        assert_eq!(rows[1].country, "Mexico");
    }
}
