use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid spurious letter {0:?}: expected a single uppercase letter")]
    InvalidSpuriousLetter(String),
    #[error("override key cannot be empty")]
    EmptyOverrideKey,
    #[error("override for {0:?} has an empty replacement")]
    EmptyOverrideValue(String),
    #[error("invalid lexicon entry: {0:?}")]
    InvalidLexiconEntry(String),
}
