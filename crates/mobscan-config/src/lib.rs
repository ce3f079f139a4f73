use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use mobscan_io::companies::InputLayout;
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "mobscan";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_INPUT_PATH: &str = "progress_page_460.json";
pub const DEFAULT_REPORT_PATH: &str = "valid_mobile_numbers.txt";
pub const DEFAULT_LIST_PATH: &str = "mobile_numbers_only.txt";
pub const DEFAULT_REPORT_TITLE: &str = "Valid mobile numbers";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
}

/// Where the collection lives and which JSON keys carry each record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputConfig {
    pub path: PathBuf,
    pub layout: InputLayout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub report_path: PathBuf,
    pub list_path: PathBuf,
    pub report_title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input: InputConfig {
                path: PathBuf::from(DEFAULT_INPUT_PATH),
                layout: InputLayout::default(),
            },
            output: OutputConfig {
                report_path: PathBuf::from(DEFAULT_REPORT_PATH),
                list_path: PathBuf::from(DEFAULT_LIST_PATH),
                report_title: DEFAULT_REPORT_TITLE.to_string(),
            },
        }
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
    #[error("invalid {section}.{field} value: must not be empty")]
    InvalidField {
        section: &'static str,
        field: &'static str,
    },
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
    input: Option<InputFile>,
    output: Option<OutputFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct InputFile {
    path: Option<PathBuf>,
    collection: Option<String>,
    id_field: Option<String>,
    name_field: Option<String>,
    contact_field: Option<String>,
    phone_field: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct OutputFile {
    report_path: Option<PathBuf>,
    list_path: Option<PathBuf>,
    report_title: Option<String>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
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

    if let Some(input) = parsed.input {
        if let Some(path) = input.path {
            config.input.path = non_empty_path(path, "input", "path")?;
        }
        let layout = &mut config.input.layout;
        merge_field(&mut layout.collection, input.collection, "collection")?;
        merge_field(&mut layout.id_field, input.id_field, "id_field")?;
        merge_field(&mut layout.name_field, input.name_field, "name_field")?;
        merge_field(&mut layout.contact_field, input.contact_field, "contact_field")?;
        merge_field(&mut layout.phone_field, input.phone_field, "phone_field")?;
    }

    if let Some(output) = parsed.output {
        if let Some(path) = output.report_path {
            config.output.report_path = non_empty_path(path, "output", "report_path")?;
        }
        if let Some(path) = output.list_path {
            config.output.list_path = non_empty_path(path, "output", "list_path")?;
        }
        if let Some(title) = output.report_title {
            let title = title.trim();
            if title.is_empty() {
                return Err(ConfigError::InvalidField {
                    section: "output",
                    field: "report_title",
                });
            }
            config.output.report_title = title.to_string();
        }
    }

    Ok(config)
}

fn merge_field(target: &mut String, value: Option<String>, field: &'static str) -> Result<()> {
    let Some(value) = value else {
        return Ok(());
    };
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidField {
            section: "input",
            field,
        });
    }
    *target = trimmed.to_string();
    Ok(())
}

fn non_empty_path(path: PathBuf, section: &'static str, field: &'static str) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::InvalidField { section, field });
    }
    Ok(path)
}
