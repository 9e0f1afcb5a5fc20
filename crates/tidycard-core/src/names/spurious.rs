use crate::error::CoreError;
use crate::names::capitalize::upper_first;
use crate::names::lexicon::AllowLexicon;
use std::fmt;

/// The capital letter that upstream corruption prepends to names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpuriousLetter(char);

impl SpuriousLetter {
    pub fn new(letter: char) -> Result<Self, CoreError> {
        if !letter.is_alphabetic() || !letter.is_uppercase() {
            return Err(CoreError::InvalidSpuriousLetter(letter.to_string()));
        }
        Ok(Self(letter))
    }

    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let mut chars = raw.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Self::new(letter),
            _ => Err(CoreError::InvalidSpuriousLetter(raw.to_string())),
        }
    }

    pub fn as_char(&self) -> char {
        self.0
    }
}

impl Default for SpuriousLetter {
    fn default() -> Self {
        Self('A')
    }
}

impl fmt::Display for SpuriousLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Removes a spurious leading letter, re-testing the remainder until no
/// trigger fires. Running it again on its own output is a no-op.
pub fn strip_spurious_letter(
    name: &str,
    letter: SpuriousLetter,
    allow_list: &dyn AllowLexicon,
) -> String {
    let mut current = name.to_string();
    while let Some(next) = strip_once(&current, letter, allow_list) {
        current = next;
    }
    current
}

fn strip_once(name: &str, letter: SpuriousLetter, allow_list: &dyn AllowLexicon) -> Option<String> {
    let letter = letter.as_char();
    let mut chars = name.chars();
    if chars.next()? != letter {
        return None;
    }

    let second = chars.next()?;
    let doubled = second == letter;
    let follower = if doubled { chars.next()? } else { second };
    if !follower.is_lowercase() {
        return None;
    }

    if allow_list.protects(name) || is_only_letter(name, letter) {
        return None;
    }

    let rest = &name[letter.len_utf8()..];
    if doubled {
        // "AAdam": drop one copy and let the next pass judge "Adam".
        Some(rest.to_string())
    } else {
        Some(upper_first(rest))
    }
}

// "Aaa" is all suspect letter; nothing would be left to keep.
fn is_only_letter(name: &str, letter: char) -> bool {
    name.split_whitespace().next().is_some_and(|word| {
        word.chars()
            .all(|ch| ch.to_uppercase().eq(letter.to_uppercase()))
    })
}

#[cfg(test)]
mod tests {
    use super::{strip_spurious_letter, SpuriousLetter};
    use crate::names::lexicon::AllowList;

    fn strip(name: &str) -> String {
        strip_spurious_letter(name, SpuriousLetter::default(), &AllowList::builtin())
    }

    #[test]
    fn removes_prefix_before_lowercase() {
        assert_eq!(strip("Acarlos"), "Carlos");
        assert_eq!(strip("Aandrea"), "Andrea");
        assert_eq!(strip("Acesarmontoya"), "Cesarmontoya");
    }

    #[test]
    fn allow_list_suppresses_trigger() {
        assert_eq!(strip("Andrea"), "Andrea");
        assert_eq!(strip("Andrea Gómez"), "Andrea Gómez");
        assert_eq!(strip("Adam"), "Adam");
        assert_eq!(strip("Alexandervasquez"), "Alexandervasquez");
    }

    #[test]
    fn doubled_prefix_drops_one_copy_and_retests() {
        assert_eq!(strip("AAdam"), "Adam");
        assert_eq!(strip("AAcarlos"), "Carlos");
    }

    #[test]
    fn doubled_uppercase_without_lowercase_is_left_alone() {
        assert_eq!(strip("AAA"), "AAA");
        assert_eq!(strip("ANDREA"), "ANDREA");
    }

    #[test]
    fn word_made_only_of_the_letter_is_kept() {
        assert_eq!(strip("Aaa"), "Aaa");
        assert_eq!(strip("Aa Lopez"), "Aa Lopez");
    }

    #[test]
    fn real_leading_letter_outside_allow_list_is_lost() {
        assert_eq!(strip("Amparito"), "Mparito");
        assert_eq!(strip("Aaldemar"), "Ldemar");

        let mut allow_list = AllowList::builtin();
        allow_list.extend(["amparito"]).expect("extend");
        let kept = strip_spurious_letter("Amparito", SpuriousLetter::default(), &allow_list);
        assert_eq!(kept, "Amparito");
    }

    #[test]
    fn other_letters_are_not_touched() {
        assert_eq!(strip("Bcarlos"), "Bcarlos");
        assert_eq!(strip("acarlos"), "acarlos");
        assert_eq!(strip("A"), "A");
    }

    #[test]
    fn is_idempotent() {
        for name in ["Aacarlos", "Acarlos", "AAdam", "Andrea", "Aaron", "AAA", "Aaa", "Aura"] {
            let once = strip(name);
            assert_eq!(strip(&once), once, "{name}");
        }
    }

    #[test]
    fn letter_is_configurable() {
        let letter = SpuriousLetter::parse("B").expect("letter");
        let stripped = strip_spurious_letter("Bcarlos", letter, &AllowList::default());
        assert_eq!(stripped, "Carlos");
    }

    #[test]
    fn letter_must_be_single_uppercase() {
        assert!(SpuriousLetter::parse("a").is_err());
        assert!(SpuriousLetter::parse("AB").is_err());
        assert!(SpuriousLetter::parse("").is_err());
        assert!(SpuriousLetter::parse("7").is_err());
        assert_eq!(SpuriousLetter::parse(" A ").expect("letter").as_char(), 'A');
    }
}
