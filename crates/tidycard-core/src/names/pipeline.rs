use crate::names::capitalize::{capitalize_words, upper_first, ConnectorWords};
use crate::names::lexicon::{AllowLexicon, AllowList, StemLexicon, SurnameDictionary};
use crate::names::overrides::OverrideTable;
use crate::names::prefix::{consume_stray_initial, strip_prefix};
use crate::names::split::split_words;
use crate::names::spurious::{strip_spurious_letter, SpuriousLetter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

const MIN_NAME_CHARS: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationOutcome {
    /// `None` when nothing usable is left of the name.
    pub cleaned_name: Option<String>,
    pub date_fragment: Option<String>,
}

impl NormalizationOutcome {
    pub fn is_recoverable(&self) -> bool {
        self.cleaned_name.is_some()
    }
}

/// Cleans a raw name with the built-in stems, the default suspect letter and
/// the base connector set.
pub fn normalize(
    raw: &str,
    overrides: &OverrideTable,
    allow_list: &dyn AllowLexicon,
) -> NormalizationOutcome {
    static STEMS: OnceLock<SurnameDictionary> = OnceLock::new();
    let stems = STEMS.get_or_init(SurnameDictionary::builtin);
    let stages = Stages {
        overrides,
        allow_list,
        stems,
        letter: SpuriousLetter::default(),
        connectors: ConnectorWords::base(),
    };
    stages.run(raw)
}

/// A configured name cleaner. Immutable once built and safe to share across
/// threads.
pub struct Normalizer {
    overrides: OverrideTable,
    allow_list: Box<dyn AllowLexicon>,
    stems: Box<dyn StemLexicon>,
    letter: SpuriousLetter,
    connectors: ConnectorWords,
}

impl Normalizer {
    pub fn builder() -> NormalizerBuilder {
        NormalizerBuilder::default()
    }

    pub fn normalize(&self, raw: &str) -> NormalizationOutcome {
        self.stages().run(raw)
    }

    pub fn overrides(&self) -> &OverrideTable {
        &self.overrides
    }

    pub fn spurious_letter(&self) -> SpuriousLetter {
        self.letter
    }

    pub fn connectors(&self) -> ConnectorWords {
        self.connectors
    }

    fn stages(&self) -> Stages<'_> {
        Stages {
            overrides: &self.overrides,
            allow_list: self.allow_list.as_ref(),
            stems: self.stems.as_ref(),
            letter: self.letter,
            connectors: self.connectors,
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Normalizer")
            .field("overrides", &self.overrides.len())
            .field("letter", &self.letter)
            .field("connectors", &self.connectors)
            .finish_non_exhaustive()
    }
}

/// Starts from the built-in tables; every setter replaces one of them.
pub struct NormalizerBuilder {
    overrides: OverrideTable,
    allow_list: Box<dyn AllowLexicon>,
    stems: Box<dyn StemLexicon>,
    letter: SpuriousLetter,
    connectors: ConnectorWords,
}

impl Default for NormalizerBuilder {
    fn default() -> Self {
        Self {
            overrides: OverrideTable::builtin(),
            allow_list: Box::new(AllowList::builtin()),
            stems: Box::new(SurnameDictionary::builtin()),
            letter: SpuriousLetter::default(),
            connectors: ConnectorWords::base(),
        }
    }
}

impl NormalizerBuilder {
    pub fn overrides(mut self, overrides: OverrideTable) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn allow_list(mut self, allow_list: impl AllowLexicon + 'static) -> Self {
        self.allow_list = Box::new(allow_list);
        self
    }

    pub fn stems(mut self, stems: impl StemLexicon + 'static) -> Self {
        self.stems = Box::new(stems);
        self
    }

    pub fn spurious_letter(mut self, letter: SpuriousLetter) -> Self {
        self.letter = letter;
        self
    }

    pub fn connectors(mut self, connectors: ConnectorWords) -> Self {
        self.connectors = connectors;
        self
    }

    pub fn build(self) -> Normalizer {
        Normalizer {
            overrides: self.overrides,
            allow_list: self.allow_list,
            stems: self.stems,
            letter: self.letter,
            connectors: self.connectors,
        }
    }
}

struct Stages<'a> {
    overrides: &'a OverrideTable,
    allow_list: &'a dyn AllowLexicon,
    stems: &'a dyn StemLexicon,
    letter: SpuriousLetter,
    connectors: ConnectorWords,
}

impl Stages<'_> {
    fn run(&self, raw: &str) -> NormalizationOutcome {
        if raw.trim().is_empty() {
            return NormalizationOutcome::default();
        }

        if let Some(cleaned) = self.overrides.get(raw) {
            return NormalizationOutcome {
                cleaned_name: Some(cleaned.to_string()),
                date_fragment: None,
            };
        }

        let stripped = strip_prefix(raw);
        let cleaned_name = stripped.name.and_then(|name| {
            let name = self.settle(upper_first(&name));
            is_usable(&name).then_some(name)
        });

        NormalizationOutcome {
            cleaned_name,
            date_fragment: stripped.date_fragment,
        }
    }

    // Repeats the cleaning stages until the display form stops changing.
    // Capitalizing can expose a trigger the raw casing hid ("ALDEMAR"), and
    // a correction can leave a stray initial behind ("Aj Perez").
    fn settle(&self, mut name: String) -> String {
        loop {
            let next = self.clean_once(&name);
            if next == name {
                return name;
            }
            name = next;
        }
    }

    fn clean_once(&self, name: &str) -> String {
        let name = strip_spurious_letter(name, self.letter, self.allow_list);
        let name = consume_stray_initial(&name).map(upper_first).unwrap_or(name);
        let name = split_words(&name, self.stems);
        capitalize_words(&name, self.connectors)
    }
}

fn is_usable(name: &str) -> bool {
    name.chars().count() >= MIN_NAME_CHARS && !name.chars().all(|ch| ch.is_ascii_digit())
}
