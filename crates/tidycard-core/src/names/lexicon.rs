use crate::error::CoreError;

/// Given names that legitimately begin with the suspect letter.
pub trait AllowLexicon: Send + Sync {
    /// Whether `name` starts, case-insensitively, with a known valid name.
    fn protects(&self, name: &str) -> bool;
}

/// Word stems (surnames, second given names) that commonly end a
/// concatenated name.
pub trait StemLexicon: Send + Sync {
    /// Byte offset in `word` where the first matching stem begins, requiring
    /// at least `min_head` letters before it.
    fn find_suffix(&self, word: &str, min_head: usize) -> Option<usize>;
}

const BUILTIN_ALLOW_LIST: [&str; 148] = [
    "Aaron", "Abad", "Abel", "Abraham", "Abril", "Ada", "Adam", "Adán", "Addison", "Adelaida",
    "Adela", "Adelina", "Adolfo", "Adriana", "Adrián", "Adrian", "Adriano", "Agatha", "Agnes",
    "Agustín", "Agustina", "Aida", "Aiden", "Aileen", "Aimee", "Aisha", "Alan", "Alana", "Alba",
    "Albert", "Alberta", "Alberto", "Aldo", "Alejandra", "Alejandro", "Alejo", "Alessandra",
    "Alessandro", "Alex", "Alexa", "Alexander", "Alexandra", "Alexis", "Alfonso", "Alfred",
    "Alfredo", "Alice", "Alicia", "Alina", "Alison", "Allan", "Allen", "Allison", "Alma",
    "Alonso", "Altagracia", "Alvaro", "Álvaro", "Alyssa", "Amada", "Amalia", "Amanda", "Amaya",
    "Amber", "Amelia", "America", "Amira", "Amparo", "Amy", "Ana", "Anabel", "Anastasia",
    "Andrea", "Andrés", "Andres", "Andrew", "Andy", "Ángel", "Angel", "Angela", "Ángela",
    "Angélica", "Angelina", "Angelo", "Angie", "Aníbal", "Anita", "Anna", "Anne", "Annie",
    "Anthony", "Antonia", "Antonio", "Antony", "Anuar", "Anyela", "Apollo", "Aquiles",
    "Arabella", "Araceli", "Aracely", "Aranza", "Arcadio", "Ariadna", "Ariana", "Ariel", "Ariela",
    "Arlene", "Arleth", "Armando", "Arnaldo", "Arnold", "Arnulfo", "Arquímedes", "Arsenio",
    "Artemio", "Arthur", "Arturo", "Ashley", "Astrid", "Asunción", "Atanasio", "Athena",
    "Aubrey", "Audrey", "Augusto", "Aura", "Aurelia", "Aurelio", "Aurora", "Austin", "Ava", "Avelino",
    "Avery", "Axel", "Ayla", "Azucena", "Azul", "Acevedo", "Acuerdo", "Administrador",
    "Administradora", "Admisiones", "Adp", "Adelantos", "Adatours", "Adora", "Addora",
];

// Earlier entries win: surnames first, then common second given names.
const BUILTIN_STEMS: [&str; 116] = [
    "garcia", "rodriguez", "martinez", "lopez", "gonzalez", "hernandez", "perez", "sanchez",
    "ramirez", "torres", "flores", "rivera", "gomez", "diaz", "reyes", "morales", "jimenez",
    "ruiz", "alvarez", "castillo", "romero", "mendoza", "cruz", "ortiz", "gutierrez", "chavez",
    "ramos", "vargas", "vasquez", "castro", "coronado", "correa", "rojas", "mendez", "fuentes",
    "aguilar", "salazar", "luna", "ortega", "guerrero", "olivares", "cardenas", "figueroa",
    "cabrera", "campos", "vega", "carrillo", "medina", "santana", "moreno", "montoya",
    "restrepo", "giraldo", "ospina", "cardona", "zapata", "quintero", "valencia", "arango",
    "henao", "muñoz", "osorio", "mejia", "londoño", "herrera", "jaramillo", "duque",
    "velasquez", "florez", "pinilla", "gallardo", "mayorga", "segura", "barragan", "quiroga",
    "sotelo", "paiva", "luis", "carlos", "miguel", "antonio", "manuel", "alberto", "eduardo",
    "fernando", "david", "daniel", "pablo", "pedro", "andres", "felipe", "diego", "mario",
    "julio", "cesar", "oscar", "victor", "sergio", "ricardo", "roberto", "alejandro",
    "fernanda", "alejandra", "victoria", "gabriela", "camila", "valentina", "sofia", "elena",
    "patricia", "monica", "claudia", "andrea", "paula", "carolina", "daniela",
];

#[derive(Debug, Clone, Default)]
pub struct AllowList {
    entries: Vec<String>,
}

impl AllowList {
    pub fn builtin() -> Self {
        let mut list = Self::default();
        for entry in BUILTIN_ALLOW_LIST {
            list.entries.push(entry.to_lowercase());
        }
        list
    }

    pub fn new<I, S>(entries: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::default();
        list.extend(entries)?;
        Ok(list)
    }

    pub fn extend<I, S>(&mut self, entries: I) -> Result<(), CoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for entry in entries {
            let entry = normalize_entry(entry.as_ref())?;
            if !self.entries.contains(&entry) {
                self.entries.push(entry);
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AllowLexicon for AllowList {
    fn protects(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        self.entries.iter().any(|entry| lower.starts_with(entry.as_str()))
    }
}

/// Ordered stem list, matched against the accent-folded end of a word.
#[derive(Debug, Clone, Default)]
pub struct SurnameDictionary {
    stems: Vec<Vec<char>>,
}

impl SurnameDictionary {
    pub fn builtin() -> Self {
        let mut dictionary = Self::default();
        for stem in BUILTIN_STEMS {
            dictionary.stems.push(stem.chars().map(fold_char).collect());
        }
        dictionary
    }

    pub fn new<I, S>(stems: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::default();
        dictionary.append(stems)?;
        Ok(dictionary)
    }

    /// Adds stems after the existing ones.
    pub fn append<I, S>(&mut self, stems: I) -> Result<(), CoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for stem in stems {
            let folded = fold_stem(stem.as_ref())?;
            if !self.stems.contains(&folded) {
                self.stems.push(folded);
            }
        }
        Ok(())
    }

    /// Adds stems ahead of the existing ones, so they take priority.
    pub fn prepend<I, S>(&mut self, stems: I) -> Result<(), CoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut leading = Vec::new();
        for stem in stems {
            let folded = fold_stem(stem.as_ref())?;
            if !leading.contains(&folded) {
                leading.push(folded);
            }
        }
        self.stems.retain(|stem| !leading.contains(stem));
        leading.append(&mut self.stems);
        self.stems = leading;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.stems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stems.is_empty()
    }
}

impl StemLexicon for SurnameDictionary {
    fn find_suffix(&self, word: &str, min_head: usize) -> Option<usize> {
        let folded: Vec<char> = word.chars().map(fold_char).collect();
        let offsets: Vec<usize> = word.char_indices().map(|(offset, _)| offset).collect();

        for stem in &self.stems {
            if stem.len() + min_head > folded.len() {
                continue;
            }
            let start = folded.len() - stem.len();
            if folded[start..] == stem[..] && folded[..start].iter().all(|ch| ch.is_alphabetic()) {
                return Some(offsets[start]);
            }
        }
        None
    }
}

fn normalize_entry(raw: &str) -> Result<String, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InvalidLexiconEntry(raw.to_string()));
    }
    Ok(trimmed.to_lowercase())
}

fn fold_stem(raw: &str) -> Result<Vec<char>, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(char::is_alphabetic) {
        return Err(CoreError::InvalidLexiconEntry(raw.to_string()));
    }
    Ok(trimmed.chars().map(fold_char).collect())
}

// Lowercase and drop diacritics, one char in, one char out.
fn fold_char(ch: char) -> char {
    let lower = ch.to_lowercase().next().unwrap_or(ch);
    match lower {
        'á' | 'à' | 'â' | 'ä' | 'ã' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        other => other,
    }
}
