use crate::error::CoreError;
use std::collections::HashMap;

/// Bumped whenever the built-in table changes, so reports can say which
/// corrections were applied.
pub const BUILTIN_OVERRIDES_VERSION: u32 = 1;

const BUILTIN_OVERRIDES: [(&str, &str); 52] = [
    ("Acesarmontoya", "César Montoya"),
    ("Aalexandra", "Alexandra"),
    ("Aangie", "Angie"),
    ("Aandres", "Andrés"),
    ("Aandrés", "Andrés"),
    ("Acarlos", "Carlos"),
    ("Acarolina", "Carolina"),
    ("Acindyflórez", "Cindy Flórez"),
    ("Aclaudia", "Claudia"),
    ("Aclaudiabarca", "Claudia Barca"),
    ("Aclaudiaprieto", "Claudia Prieto"),
    ("Adanielaciro", "Daniela Ciro"),
    ("Adiana", "Diana"),
    ("Aalbertopos", "Alberto Pos"),
    ("Aandrearivera", "Andrea Rivera"),
    ("Aandresidagarra", "Andrés Idagarra"),
    ("Aangelmartínez", "Ángel Martínez"),
    ("Aanniechaljub", "Annie Chaljub"),
    ("Aanyelarivera", "Anyela Rivera"),
    ("Aastridvelasquez", "Astrid Velásquez"),
    ("Abdanielfino", "Daniel Fino"),
    ("Abelénchiraquian", "Belén Chiraquian"),
    ("Aberthaaguilar", "Bertha Aguilar"),
    ("Abrkatherinposible", "Katherine Posible"),
    ("Acamiloandres", "Camilo Andrés"),
    ("Acarloslopez", "Carlos López"),
    ("Acarlossegura", "Carlos Segura"),
    ("Acarolinapinilla", "Carolina Pinilla"),
    ("Acarolinarojas", "Carolina Rojas"),
    ("Acarolquiroga", "Carol Quiroga"),
    ("Adaisymendoza", "Daisy Mendoza"),
    ("Adamiánbarragán", "Damián Barragán"),
    ("Adanorahija", "Danora Hija"),
    ("Adianagallardo", "Diana Gallardo"),
    ("Aadam", "Adam"),
    ("Aaishaqvistagaard", "Aisha Qvistagaard"),
    ("Alexandervasquez", "Alexander Vásquez"),
    ("Alexanderabril", "Alexander Abril"),
    ("Julioguecha", "Julio Guecha"),
    ("Juliokippsy", "Julio Kippsy"),
    ("Melissamayo", "Melissa Mayo"),
    ("Posiblecamilomayorga", "Camilo Mayorga"),
    // Real names that only look corrupted.
    ("Abad", "Abad"),
    ("Abel", "Abel"),
    ("Abraham", "Abraham"),
    ("Abril", "Abril"),
    ("Ada", "Ada"),
    ("Adam", "Adam"),
    ("Adriana", "Adriana"),
    ("Adrián", "Adrián"),
    ("Ángel", "Ángel"),
    ("Ángela", "Ángela"),
];

/// Exact raw name to final cleaned name. Matching is case-sensitive and a
/// hit bypasses every other normalization stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideTable {
    entries: HashMap<String, String>,
}

impl OverrideTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let entries = BUILTIN_OVERRIDES
            .iter()
            .map(|(raw, cleaned)| ((*raw).to_string(), (*cleaned).to_string()))
            .collect();
        Self { entries }
    }

    /// Adds or replaces a correction. Later inserts win.
    pub fn insert(
        &mut self,
        raw: impl Into<String>,
        cleaned: impl Into<String>,
    ) -> Result<(), CoreError> {
        let raw = raw.into();
        let cleaned = cleaned.into();
        if raw.is_empty() {
            return Err(CoreError::EmptyOverrideKey);
        }
        if cleaned.trim().is_empty() {
            return Err(CoreError::EmptyOverrideValue(raw));
        }
        self.entries.insert(raw, cleaned);
        Ok(())
    }

    pub fn get(&self, raw: &str) -> Option<&str> {
        self.entries.get(raw).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
