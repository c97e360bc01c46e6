//! Layered configuration: defaults, then a TOML file named by
//! `TICTACTOE_CONFIG`, then `TICTACTOE_*` environment variables.
//! Command-line flags are applied on top by the individual commands.

use serde::{Deserialize, Serialize};
use std::fs;
use tictactoe_engine::ai::Difficulty;
use tictactoe_engine::engine::{EngineSettings, GameMode};

pub const CONFIG_ENV: &str = "TICTACTOE_CONFIG";
pub const MODE_ENV: &str = "TICTACTOE_MODE";
pub const DIFFICULTY_ENV: &str = "TICTACTOE_DIFFICULTY";
pub const SEED_ENV: &str = "TICTACTOE_SEED";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub seed: Option<u64>,
    pub player1_avatar: String,
    pub player2_avatar: String,
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
    pub mode: ValueSource,
    pub difficulty: ValueSource,
    pub seed: ValueSource,
    pub player1_avatar: ValueSource,
    pub player2_avatar: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            mode: ValueSource::Default,
            difficulty: ValueSource::Default,
            seed: ValueSource::Default,
            player1_avatar: ValueSource::Default,
            player2_avatar: ValueSource::Default,
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
        let engine = EngineSettings::default();
        Self {
            mode: engine.mode,
            difficulty: engine.difficulty,
            seed: engine.seed,
            player1_avatar: engine.player1_avatar,
            player2_avatar: engine.player2_avatar,
        }
    }
}

impl Config {
    /// Engine settings for one game built from this configuration.
    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            mode: self.mode,
            player1_avatar: self.player1_avatar.clone(),
            player2_avatar: self.player2_avatar.clone(),
            difficulty: self.difficulty,
            seed: self.seed,
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

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Resolve configuration from the process environment.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    resolve_with(|key| std::env::var(key).ok())
}

/// Resolve configuration with `lookup` standing in for the environment.
pub fn resolve_with<F>(lookup: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();
    let lookup = |key: &str| lookup(key).filter(|v| !v.is_empty());

    if let Some(path) = lookup(CONFIG_ENV) {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.mode {
            cfg.mode = parse_mode(&v)?;
            sources.mode = ValueSource::File;
        }
        if let Some(v) = f.difficulty {
            cfg.difficulty = parse_difficulty(&v)?;
            sources.difficulty = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.player1_avatar {
            cfg.player1_avatar = v;
            sources.player1_avatar = ValueSource::File;
        }
        if let Some(v) = f.player2_avatar {
            cfg.player2_avatar = v;
            sources.player2_avatar = ValueSource::File;
        }
    }

    if let Some(mode) = lookup(MODE_ENV) {
        cfg.mode = parse_mode(&mode)?;
        sources.mode = ValueSource::Env;
    }
    if let Some(difficulty) = lookup(DIFFICULTY_ENV) {
        cfg.difficulty = parse_difficulty(&difficulty)?;
        sources.difficulty = ValueSource::Env;
    }
    if let Some(seed) = lookup(SEED_ENV) {
        cfg.seed = Some(
            seed.trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    mode: Option<String>,
    #[serde(default)]
    difficulty: Option<String>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    player1_avatar: Option<String>,
    #[serde(default)]
    player2_avatar: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.player1_avatar.trim().is_empty() || cfg.player2_avatar.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "Invalid configuration: avatars must not be blank".into(),
        ));
    }
    Ok(())
}

pub fn parse_mode(s: &str) -> Result<GameMode, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "single" | "singleplayer" => Ok(GameMode::Singleplayer),
        "multi" | "multiplayer" => Ok(GameMode::Multiplayer),
        other => Err(ConfigError::Invalid(format!("Invalid mode: {}", other))),
    }
}

fn parse_difficulty(s: &str) -> Result<Difficulty, ConfigError> {
    s.parse().map_err(ConfigError::Invalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let resolved = resolve_with(env(&[])).unwrap();
        assert_eq!(resolved.config, Config::default());
        assert_eq!(resolved.config.mode, GameMode::Singleplayer);
        assert_eq!(resolved.config.difficulty, Difficulty::Medium);
        assert_eq!(resolved.sources.seed, ValueSource::Default);
    }

    #[test]
    fn env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tictactoe.toml");
        fs::write(
            &path,
            "mode = \"multi\"\ndifficulty = \"easy\"\nseed = 5\nplayer1_avatar = \"fox\"\n",
        )
        .unwrap();
        let path = path.to_string_lossy().to_string();

        let resolved = resolve_with(env(&[
            (CONFIG_ENV, path.as_str()),
            (DIFFICULTY_ENV, "hard"),
        ]))
        .unwrap();
        let cfg = &resolved.config;
        assert_eq!(cfg.mode, GameMode::Multiplayer);
        assert_eq!(cfg.difficulty, Difficulty::Hard);
        assert_eq!(cfg.seed, Some(5));
        assert_eq!(cfg.player1_avatar, "fox");
        assert_eq!(resolved.sources.mode, ValueSource::File);
        assert_eq!(resolved.sources.difficulty, ValueSource::Env);
        assert_eq!(resolved.sources.player2_avatar, ValueSource::Default);
    }

    #[test]
    fn empty_env_values_are_ignored() {
        let resolved = resolve_with(env(&[(SEED_ENV, ""), (MODE_ENV, "")])).unwrap();
        assert_eq!(resolved.config.seed, None);
        assert_eq!(resolved.sources.mode, ValueSource::Default);
    }

    #[test]
    fn invalid_values_are_reported() {
        assert!(matches!(
            resolve_with(env(&[(SEED_ENV, "abc")])),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            resolve_with(env(&[(MODE_ENV, "solo")])),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            resolve_with(env(&[(DIFFICULTY_ENV, "nightmare")])),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn blank_avatar_in_file_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "player2_avatar = \"  \"\n").unwrap();
        let path = path.to_string_lossy().to_string();
        assert!(matches!(
            resolve_with(env(&[(CONFIG_ENV, path.as_str())])),
            Err(ConfigError::Invalid(_))
        ));
    }
}
