const CONNECTORS: [&str; 8] = ["de", "del", "la", "el", "los", "las", "y", "da"];
const EXTENDED_CONNECTORS: [&str; 2] = ["do", "dos"];

/// Closed set of connector words kept lowercase inside a name. The extended
/// set adds the Portuguese `do`/`dos`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConnectorWords {
    extended: bool,
}

impl ConnectorWords {
    pub fn base() -> Self {
        Self { extended: false }
    }

    pub fn extended() -> Self {
        Self { extended: true }
    }

    pub fn is_extended(&self) -> bool {
        self.extended
    }

    pub fn contains(&self, lower: &str) -> bool {
        CONNECTORS.contains(&lower) || (self.extended && EXTENDED_CONNECTORS.contains(&lower))
    }
}

/// Title-cases every whitespace-separated token and joins them with single
/// spaces. Connector words stay lowercase unless they open the name.
pub fn capitalize_words(name: &str, connectors: ConnectorWords) -> String {
    name.split_whitespace()
        .enumerate()
        .map(|(index, word)| {
            let lower = word.to_lowercase();
            if index > 0 && connectors.contains(&lower) {
                lower
            } else {
                title_case(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Upper-cases the first character and leaves the rest alone.
pub(crate) fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
