//! Name-normalization pipeline.
//!
//! Each raw name flows forward through four stages: prefix stripping,
//! spurious-letter correction, word-boundary splitting, and capitalization.
//! An exact entry in the [`OverrideTable`] short-circuits all of them.

pub mod capitalize;
pub mod lexicon;
mod months;
pub mod overrides;
pub mod pipeline;
pub mod prefix;
pub mod split;
pub mod spurious;

pub use capitalize::{capitalize_words, ConnectorWords};
pub use lexicon::{AllowLexicon, AllowList, StemLexicon, SurnameDictionary};
pub use overrides::{OverrideTable, BUILTIN_OVERRIDES_VERSION};
pub use pipeline::{normalize, NormalizationOutcome, Normalizer, NormalizerBuilder};
pub use prefix::{strip_prefix, Stripped};
pub use split::split_words;
pub use spurious::{strip_spurious_letter, SpuriousLetter};
