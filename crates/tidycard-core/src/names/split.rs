use crate::names::lexicon::StemLexicon;

const MIN_HEAD_CHARS: usize = 3;

/// Re-inserts a missing space in a concatenated name.
///
/// Only names without whitespace are considered. A lowercase-to-uppercase
/// transition wins; otherwise the first dictionary stem that ends the word
/// splits it. Anything else is returned unchanged.
pub fn split_words(name: &str, stems: &dyn StemLexicon) -> String {
    if name.is_empty() || name.contains(char::is_whitespace) {
        return name.to_string();
    }

    if let Some(split) = split_on_case(name) {
        return split;
    }

    match stems.find_suffix(name, MIN_HEAD_CHARS) {
        Some(offset) if offset > 0 => format!("{} {}", &name[..offset], &name[offset..]),
        _ => name.to_string(),
    }
}

fn split_on_case(name: &str) -> Option<String> {
    let mut out = String::with_capacity(name.len() + 4);
    let mut previous: Option<char> = None;
    let mut split = false;

    for ch in name.chars() {
        if previous.is_some_and(char::is_lowercase) && ch.is_uppercase() {
            out.push(' ');
            split = true;
        }
        out.push(ch);
        previous = Some(ch);
    }

    split.then_some(out)
}

#[cfg(test)]
mod tests {
    use super::split_words;
    use crate::names::lexicon::SurnameDictionary;

    fn split(name: &str) -> String {
        split_words(name, &SurnameDictionary::builtin())
    }

    #[test]
    fn splits_on_case_transition() {
        assert_eq!(split("CesarMontoya"), "Cesar Montoya");
        assert_eq!(split("anaMaríaGómez"), "ana María Gómez");
    }

    #[test]
    fn splits_on_known_stem() {
        assert_eq!(split("Cesarmontoya"), "Cesar montoya");
        assert_eq!(split("Cindyflórez"), "Cindy flórez");
        assert_eq!(split("Carolinapinilla"), "Carolina pinilla");
    }

    #[test]
    fn leaves_short_heads_and_unknown_words_alone() {
        assert_eq!(split("Montoya"), "Montoya");
        assert_eq!(split("Danielfino"), "Danielfino");
        assert_eq!(split("Carlos"), "Carlos");
    }

    #[test]
    fn names_with_spaces_are_untouched() {
        assert_eq!(split("Carolina Giraldo"), "Carolina Giraldo");
        assert_eq!(split("ana Mariagomez"), "ana Mariagomez");
    }

    #[test]
    fn custom_stems_are_used() {
        let stems = SurnameDictionary::new(["fino"]).expect("stems");
        assert_eq!(split_words("Danielfino", &stems), "Daniel fino");
    }

    #[test]
    fn is_idempotent() {
        for name in ["CesarMontoya", "Cesarmontoya", "Carlos", "Ana María"] {
            let once = split(name);
            assert_eq!(split(&once), once, "{name}");
        }
    }
}
