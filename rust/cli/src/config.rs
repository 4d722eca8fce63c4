use serde::{Deserialize, Serialize};
use std::fs;

use lowball_ai::AI_TYPES;
use lowball_engine::config::{Blinds, TableConfig};
use lowball_engine::player::SeatId;
use lowball_engine::rules::LimitConfig;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seats: usize,
    pub small_bet: u32,
    pub big_bet: u32,
    pub cap: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub starting_stack: u32,
    pub seed: Option<u64>,
    pub ai: String,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seats: ValueSource,
    pub small_bet: ValueSource,
    pub big_bet: ValueSource,
    pub cap: ValueSource,
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
    pub starting_stack: ValueSource,
    pub seed: ValueSource,
    pub ai: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seats: ValueSource::Default,
            small_bet: ValueSource::Default,
            big_bet: ValueSource::Default,
            cap: ValueSource::Default,
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
            starting_stack: ValueSource::Default,
            seed: ValueSource::Default,
            ai: ValueSource::Default,
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
        let table = TableConfig::default();
        Self {
            seats: table.seats,
            small_bet: table.limits.small_bet,
            big_bet: table.limits.big_bet,
            cap: table.limits.cap,
            small_blind: table.blinds.small,
            big_blind: table.blinds.big,
            starting_stack: table.starting_stack,
            seed: None,
            ai: "baseline".into(),
        }
    }
}

impl Config {
    /// Table settings for this configuration with `human_seat` driven by the caller.
    pub fn table_config(&self, human_seat: Option<SeatId>) -> TableConfig {
        TableConfig {
            seats: self.seats,
            limits: LimitConfig {
                small_bet: self.small_bet,
                big_bet: self.big_bet,
                cap: self.cap,
            },
            blinds: Blinds {
                small: self.small_blind,
                big: self.big_blind,
            },
            starting_stack: self.starting_stack,
            seed: self.seed,
            human_seat,
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
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

/// Resolves defaults, then the TOML file named by `LOWBALL_CONFIG`, then
/// `LOWBALL_*` environment overrides.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("LOWBALL_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        macro_rules! from_file {
            ($field:ident) => {
                if let Some(v) = f.$field {
                    cfg.$field = v;
                    sources.$field = ValueSource::File;
                }
            };
        }
        from_file!(seats);
        from_file!(small_bet);
        from_file!(big_bet);
        from_file!(cap);
        from_file!(small_blind);
        from_file!(big_blind);
        from_file!(starting_stack);
        from_file!(ai);
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Some(seed) = env_value("LOWBALL_SEED") {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {}", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(seats) = env_value("LOWBALL_SEATS") {
        cfg.seats = seats
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid seats: {}", seats)))?;
        sources.seats = ValueSource::Env;
    }
    if let Some(stack) = env_value("LOWBALL_STACK") {
        cfg.starting_stack = stack
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid stack: {}", stack)))?;
        sources.starting_stack = ValueSource::Env;
    }
    if let Some(ai) = env_value("LOWBALL_AI") {
        cfg.ai = ai;
        sources.ai = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seats: Option<usize>,
    #[serde(default)]
    small_bet: Option<u32>,
    #[serde(default)]
    big_bet: Option<u32>,
    #[serde(default)]
    cap: Option<u32>,
    #[serde(default)]
    small_blind: Option<u32>,
    #[serde(default)]
    big_blind: Option<u32>,
    #[serde(default)]
    starting_stack: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    ai: Option<String>,
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !AI_TYPES.contains(&cfg.ai.as_str()) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown ai '{}' (expected one of {})",
            cfg.ai,
            AI_TYPES.join(", ")
        )));
    }
    cfg.table_config(Some(0))
        .validate()
        .map_err(|e| ConfigError::Invalid(format!("Invalid configuration: {}", e)))
}
