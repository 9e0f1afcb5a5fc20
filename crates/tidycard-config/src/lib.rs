use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tidycard_core::names::{
    AllowList, ConnectorWords, OverrideTable, SpuriousLetter, SurnameDictionary,
};
use tidycard_core::{CoreError, Normalizer, UnrecoverablePolicy};

const APP_DIR: &str = "tidycard";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_SAMPLE_SIZE: usize = 50;
pub const DEFAULT_SQL_BATCH_SIZE: usize = 100;
pub const DEFAULT_VALID_FLAG: &str = "valid";
pub const DEFAULT_TEMP_TABLE: &str = "numeros_a_eliminar";
pub const DEFAULT_PHONE_COLUMN: &str = "phoneNumber";
pub const DEFAULT_TABLES: [&str; 2] = ["Contactos", "IA_CRM_Clientes"];
pub const DEFAULT_VALIDITY_CANDIDATES: [&str; 5] = [
    "numeros_con_whatsapp.csv",
    "whapi_results.csv",
    "validated_numbers.csv",
    "whatsapp_valid.csv",
    "resultados_whapi.csv",
];

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub spurious_letter: SpuriousLetter,
    pub extended_connectors: bool,
    pub unrecoverable: UnrecoverablePolicy,
    pub sample_size: usize,
    pub lexicon: LexiconConfig,
    pub overrides: BTreeMap<String, String>,
    pub validity: ValidityConfig,
    pub sql: SqlConfig,
}

#[derive(Debug, Clone, Default)]
pub struct LexiconConfig {
    pub allow_list: Vec<String>,
    pub stems: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ValidityConfig {
    pub search_dir: PathBuf,
    pub candidates: Vec<String>,
    pub valid_flag: String,
}

#[derive(Debug, Clone)]
pub struct SqlConfig {
    pub temp_table: String,
    pub column: String,
    pub tables: Vec<String>,
    pub batch_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            spurious_letter: SpuriousLetter::default(),
            extended_connectors: false,
            unrecoverable: UnrecoverablePolicy::Keep,
            sample_size: DEFAULT_SAMPLE_SIZE,
            lexicon: LexiconConfig::default(),
            overrides: BTreeMap::new(),
            validity: ValidityConfig {
                search_dir: PathBuf::from("."),
                candidates: DEFAULT_VALIDITY_CANDIDATES
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
                valid_flag: DEFAULT_VALID_FLAG.to_string(),
            },
            sql: SqlConfig {
                temp_table: DEFAULT_TEMP_TABLE.to_string(),
                column: DEFAULT_PHONE_COLUMN.to_string(),
                tables: DEFAULT_TABLES.iter().map(ToString::to_string).collect(),
                batch_size: DEFAULT_SQL_BATCH_SIZE,
            },
        }
    }
}

impl AppConfig {
    /// Builds the name cleaner: built-in tables extended by the configured
    /// allow-list, stems, and overrides.
    pub fn build_normalizer(&self) -> Result<Normalizer> {
        let mut allow_list = AllowList::builtin();
        allow_list.extend(&self.lexicon.allow_list)?;

        let mut stems = SurnameDictionary::builtin();
        stems.prepend(&self.lexicon.stems)?;

        let mut overrides = OverrideTable::builtin();
        for (raw, cleaned) in &self.overrides {
            overrides.insert(raw.as_str(), cleaned.as_str())?;
        }

        let connectors = if self.extended_connectors {
            ConnectorWords::extended()
        } else {
            ConnectorWords::base()
        };

        Ok(Normalizer::builder()
            .overrides(overrides)
            .allow_list(allow_list)
            .stems(stems)
            .spurious_letter(self.spurious_letter)
            .connectors(connectors)
            .build())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid sample_size value: {0}")]
    InvalidSampleSize(usize),
    #[error("invalid sql.batch_size value: {0}")]
    InvalidBatchSize(usize),
    #[error("sql.tables must list at least one table")]
    EmptyTables,
    #[error("validity.candidates must list at least one file name")]
    EmptyCandidates,
    #[error("invalid name tables: {0}")]
    Names(#[from] CoreError),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    spurious_letter: Option<String>,
    extended_connectors: Option<bool>,
    unrecoverable: Option<UnrecoverablePolicy>,
    sample_size: Option<usize>,
    lexicon: Option<LexiconFile>,
    overrides: Option<BTreeMap<String, String>>,
    validity: Option<ValidityFile>,
    sql: Option<SqlFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LexiconFile {
    allow_list: Option<Vec<String>>,
    stems: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ValidityFile {
    search_dir: Option<PathBuf>,
    candidates: Option<Vec<String>>,
    valid_flag: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SqlFile {
    temp_table: Option<String>,
    column: Option<String>,
    tables: Option<Vec<String>>,
    batch_size: Option<usize>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path.clone()) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(letter) = parsed.spurious_letter {
        config.spurious_letter = SpuriousLetter::parse(&letter)?;
    }
    if let Some(extended) = parsed.extended_connectors {
        config.extended_connectors = extended;
    }
    if let Some(policy) = parsed.unrecoverable {
        config.unrecoverable = policy;
    }
    if let Some(sample_size) = parsed.sample_size {
        if sample_size == 0 {
            return Err(ConfigError::InvalidSampleSize(sample_size));
        }
        config.sample_size = sample_size;
    }

    if let Some(lexicon) = parsed.lexicon {
        if let Some(allow_list) = lexicon.allow_list {
            config.lexicon.allow_list = allow_list;
        }
        if let Some(stems) = lexicon.stems {
            config.lexicon.stems = stems;
        }
    }
    if let Some(overrides) = parsed.overrides {
        config.overrides = overrides;
    }

    if let Some(validity) = parsed.validity {
        if let Some(search_dir) = validity.search_dir {
            config.validity.search_dir = search_dir;
        }
        if let Some(candidates) = validity.candidates {
            if candidates.is_empty() {
                return Err(ConfigError::EmptyCandidates);
            }
            config.validity.candidates = candidates;
        }
        if let Some(valid_flag) = validity.valid_flag {
            config.validity.valid_flag = valid_flag.trim().to_string();
        }
    }

    if let Some(sql) = parsed.sql {
        if let Some(temp_table) = sql.temp_table {
            config.sql.temp_table = temp_table;
        }
        if let Some(column) = sql.column {
            config.sql.column = column;
        }
        if let Some(tables) = sql.tables {
            if tables.is_empty() {
                return Err(ConfigError::EmptyTables);
            }
            config.sql.tables = tables;
        }
        if let Some(batch_size) = sql.batch_size {
            if batch_size == 0 {
                return Err(ConfigError::InvalidBatchSize(batch_size));
            }
            config.sql.batch_size = batch_size;
        }
    }

    // Surface bad lexicon or override entries at load time.
    config.build_normalizer()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::{load_at_path, merge_config, ConfigError, ConfigFile, LexiconFile, SqlFile};
    use std::collections::BTreeMap;
    use std::fs;
    use tempfile::TempDir;
    use tidycard_core::UnrecoverablePolicy;

    #[test]
    fn merge_config_applies_values() {
        let parsed = ConfigFile {
            spurious_letter: Some("B".to_string()),
            unrecoverable: Some(UnrecoverablePolicy::Drop),
            sample_size: Some(10),
            lexicon: Some(LexiconFile {
                allow_list: Some(vec!["Bianca".to_string()]),
                stems: Some(vec!["fino".to_string()]),
            }),
            sql: Some(SqlFile {
                batch_size: Some(25),
                ..SqlFile::default()
            }),
            ..ConfigFile::default()
        };
        let merged = merge_config(parsed).expect("merge");
        assert_eq!(merged.spurious_letter.as_char(), 'B');
        assert_eq!(merged.unrecoverable, UnrecoverablePolicy::Drop);
        assert_eq!(merged.sample_size, 10);
        assert_eq!(merged.sql.batch_size, 25);
        assert_eq!(merged.sql.tables, vec!["Contactos", "IA_CRM_Clientes"]);

        let normalizer = merged.build_normalizer().expect("normalizer");
        let outcome = normalizer.normalize("Bdanielfino");
        assert_eq!(outcome.cleaned_name.as_deref(), Some("Daniel Fino"));
        assert_eq!(
            normalizer.normalize("Bianca").cleaned_name.as_deref(),
            Some("Bianca")
        );
    }

    #[test]
    fn merge_config_rejects_invalid_values() {
        let bad_letter = ConfigFile {
            spurious_letter: Some("ab".to_string()),
            ..ConfigFile::default()
        };
        assert!(matches!(merge_config(bad_letter), Err(ConfigError::Names(_))));

        let bad_batch = ConfigFile {
            sql: Some(SqlFile {
                batch_size: Some(0),
                ..SqlFile::default()
            }),
            ..ConfigFile::default()
        };
        assert!(matches!(
            merge_config(bad_batch),
            Err(ConfigError::InvalidBatchSize(0))
        ));

        let mut overrides = BTreeMap::new();
        overrides.insert("Aana".to_string(), "  ".to_string());
        let bad_override = ConfigFile {
            overrides: Some(overrides),
            ..ConfigFile::default()
        };
        assert!(matches!(merge_config(bad_override), Err(ConfigError::Names(_))));
    }

    #[test]
    fn load_at_path_requires_file_when_requested() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let err = load_at_path(&missing, true).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("config file not found"));
    }

    #[test]
    fn load_at_path_skips_missing_default_file() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        assert!(load_at_path(&missing, false).expect("load").is_none());
    }

    #[test]
    fn load_at_path_parses_toml() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "extended_connectors = true\nunrecoverable = \"drop\"\n\n[overrides]\n\"Acarlos\" = \"Carlos Andrés\"\n\n[validity]\nsearch_dir = \"data\"\nvalid_flag = \"ok\"\n\n[sql]\ntables = [\"Contacts\"]\n",
        )
        .expect("write config");

        let config = load_at_path(&path, true).expect("load").expect("config");
        assert!(config.extended_connectors);
        assert_eq!(config.unrecoverable, UnrecoverablePolicy::Drop);
        assert_eq!(config.validity.valid_flag, "ok");
        assert_eq!(config.validity.search_dir.to_string_lossy(), "data");
        assert_eq!(config.sql.tables, vec!["Contacts"]);

        let normalizer = config.build_normalizer().expect("normalizer");
        assert_eq!(
            normalizer.normalize("Acarlos").cleaned_name.as_deref(),
            Some("Carlos Andrés")
        );
    }

    #[test]
    fn load_at_path_rejects_unknown_keys() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "due_soon_days = 5\n").expect("write config");
        let err = load_at_path(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
