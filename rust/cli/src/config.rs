use nowstars_engine::ConverterConfig;
use serde::Deserialize;
use std::fs;

pub const CONFIG_ENV: &str = "NOWSTARS_CONFIG";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub site_name: String,
    pub table_prefix: String,
    pub table_size: u8,
    pub currency: String,
    pub timezone_label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub site_name: ValueSource,
    pub table_prefix: ValueSource,
    pub table_size: ValueSource,
    pub currency: ValueSource,
    pub timezone_label: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            site_name: ValueSource::Default,
            table_prefix: ValueSource::Default,
            table_size: ValueSource::Default,
            currency: ValueSource::Default,
            timezone_label: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        let base = ConverterConfig::default();
        Self {
            site_name: base.site_name,
            table_prefix: base.table_prefix,
            table_size: base.table_size,
            currency: base.currency,
            timezone_label: base.timezone_label,
        }
    }
}

impl Config {
    pub fn converter(&self, hero: &str) -> ConverterConfig {
        ConverterConfig {
            hero: hero.to_string(),
            site_name: self.site_name.clone(),
            table_prefix: self.table_prefix.clone(),
            table_size: self.table_size,
            currency: self.currency.clone(),
            timezone_label: self.timezone_label.clone(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

/// Resolve configuration from the process environment. `file` (from
/// `--config`) wins over `NOWSTARS_CONFIG`.
pub fn load_with_sources(file: Option<&str>) -> Result<ConfigResolved, ConfigError> {
    resolve(file, &|key| std::env::var(key).ok())
}

/// Defaults, then the TOML file, then `NOWSTARS_*` overrides.
pub fn resolve(
    file: Option<&str>,
    env: &dyn Fn(&str) -> Option<String>,
) -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    let path = file
        .map(str::to_string)
        .or_else(|| env(CONFIG_ENV).filter(|p| !p.is_empty()));
    if let Some(path) = path {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.site_name {
            cfg.site_name = v;
            sources.site_name = ValueSource::File;
        }
        if let Some(v) = f.table_prefix {
            cfg.table_prefix = v;
            sources.table_prefix = ValueSource::File;
        }
        if let Some(v) = f.table_size {
            cfg.table_size = v;
            sources.table_size = ValueSource::File;
        }
        if let Some(v) = f.currency {
            cfg.currency = v;
            sources.currency = ValueSource::File;
        }
        if let Some(v) = f.timezone_label {
            cfg.timezone_label = v;
            sources.timezone_label = ValueSource::File;
        }
    }

    if let Some(v) = env("NOWSTARS_SITE_NAME")
        && !v.is_empty()
    {
        cfg.site_name = v;
        sources.site_name = ValueSource::Env;
    }
    if let Some(v) = env("NOWSTARS_TABLE_PREFIX")
        && !v.is_empty()
    {
        cfg.table_prefix = v;
        sources.table_prefix = ValueSource::Env;
    }
    if let Some(v) = env("NOWSTARS_TABLE_SIZE")
        && !v.is_empty()
    {
        cfg.table_size = v
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid table size".into()))?;
        sources.table_size = ValueSource::Env;
    }
    if let Some(v) = env("NOWSTARS_CURRENCY")
        && !v.is_empty()
    {
        cfg.currency = v;
        sources.currency = ValueSource::Env;
    }
    if let Some(v) = env("NOWSTARS_TZ_LABEL")
        && !v.is_empty()
    {
        cfg.timezone_label = v;
        sources.timezone_label = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    site_name: Option<String>,
    #[serde(default)]
    table_prefix: Option<String>,
    #[serde(default)]
    table_size: Option<u8>,
    #[serde(default)]
    currency: Option<String>,
    #[serde(default)]
    timezone_label: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !(2..=10).contains(&cfg.table_size) {
        return Err(ConfigError::Invalid(
            "Invalid configuration: table_size must be between 2 and 10".into(),
        ));
    }
    for (name, value) in [
        ("site_name", &cfg.site_name),
        ("table_prefix", &cfg.table_prefix),
        ("currency", &cfg.currency),
        ("timezone_label", &cfg.timezone_label),
    ] {
        if value.trim().is_empty() {
            return Err(ConfigError::Invalid(format!(
                "Invalid configuration: {} must not be empty",
                name
            )));
        }
    }
    Ok(())
}
