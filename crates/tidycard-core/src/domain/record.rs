use serde::{Deserialize, Serialize};

/// One exported contact. The Spanish keys of the source export (`nombre`,
/// `telefono`, `nota`) are accepted on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    #[serde(default, alias = "nombre")]
    pub name: Option<String>,
    #[serde(alias = "telefono")]
    pub phone: String,
    #[serde(default, alias = "nota")]
    pub note: Option<String>,
}

impl ContactRecord {
    pub fn new(name: Option<&str>, phone: &str, note: Option<&str>) -> Self {
        Self {
            name: name.map(ToString::to_string),
            phone: phone.to_string(),
            note: note.map(ToString::to_string),
        }
    }

    pub fn sort_key(&self) -> String {
        self.name.as_deref().unwrap_or_default().to_lowercase()
    }
}

/// Stable sort by case-insensitive name. Records without a name sort first.
pub fn sort_by_name(records: &mut [ContactRecord]) {
    records.sort_by_cached_key(ContactRecord::sort_key);
}

/// Moves a date fragment lifted from the name into the note.
///
/// The fragment is prepended as `"<fragment> - <note>"` unless the note
/// already mentions it. Without a fragment the note is returned untouched.
pub fn merge_note(note: Option<&str>, fragment: Option<&str>) -> Option<String> {
    let Some(fragment) = fragment.map(str::trim).filter(|value| !value.is_empty()) else {
        return note.map(ToString::to_string);
    };

    let existing = note.map(str::trim).unwrap_or_default();
    let merged = if existing.contains(fragment) {
        existing.to_string()
    } else if existing.is_empty() {
        fragment.to_string()
    } else {
        format!("{fragment} - {existing}")
    };

    let tidy = tidy_note(&merged);
    if tidy.is_empty() {
        None
    } else {
        Some(tidy)
    }
}

// Collapses whitespace, repeated dash separators, and dangling dashes.
fn tidy_note(value: &str) -> String {
    let mut tokens: Vec<&str> = Vec::new();
    for token in value.split_whitespace() {
        if token.chars().all(|ch| ch == '-') {
            if tokens.last().map_or(true, |last| *last == "-") {
                continue;
            }
            tokens.push("-");
        } else {
            tokens.push(token);
        }
    }
    while tokens.last() == Some(&"-") {
        tokens.pop();
    }
    tokens.join(" ")
}

#[cfg(test)]
mod tests {
    use super::{merge_note, sort_by_name, ContactRecord};

    #[test]
    fn merge_note_prepends_fragment() {
        let merged = merge_note(Some("Reservó Apt 302"), Some("Abril 2025"));
        assert_eq!(merged.as_deref(), Some("Abril 2025 - Reservó Apt 302"));
    }

    #[test]
    fn merge_note_uses_fragment_for_empty_note() {
        assert_eq!(
            merge_note(None, Some("2024")).as_deref(),
            Some("2024")
        );
        assert_eq!(
            merge_note(Some("  "), Some("2024")).as_deref(),
            Some("2024")
        );
    }

    #[test]
    fn merge_note_skips_fragment_already_present() {
        let merged = merge_note(Some("Cliente desde Julio 2025"), Some("Julio 2025"));
        assert_eq!(merged.as_deref(), Some("Cliente desde Julio 2025"));
    }

    #[test]
    fn merge_note_cleans_dangling_dashes() {
        let merged = merge_note(Some("- - visita -"), Some("Mayo 2024"));
        assert_eq!(merged.as_deref(), Some("Mayo 2024 - visita"));
    }

    #[test]
    fn merge_note_without_fragment_keeps_note() {
        assert_eq!(merge_note(Some(" x  y "), None).as_deref(), Some(" x  y "));
        assert_eq!(merge_note(None, None), None);
    }

    #[test]
    fn records_accept_spanish_keys() {
        let record: ContactRecord = serde_json::from_str(
            r#"{"nombre": "Ana", "telefono": "+573001112233", "nota": null}"#,
        )
        .expect("parse");
        assert_eq!(record.name.as_deref(), Some("Ana"));
        assert_eq!(record.phone, "+573001112233");
        assert!(record.note.is_none());
    }

    #[test]
    fn sort_by_name_is_case_insensitive_with_unnamed_first() {
        let mut records = vec![
            ContactRecord::new(Some("beatriz"), "1", None),
            ContactRecord::new(Some("Andrea"), "2", None),
            ContactRecord::new(None, "3", None),
            ContactRecord::new(Some("Álvaro"), "4", None),
        ];
        sort_by_name(&mut records);
        let phones: Vec<&str> = records.iter().map(|r| r.phone.as_str()).collect();
        assert_eq!(phones, vec!["3", "2", "1", "4"]);
    }
}
