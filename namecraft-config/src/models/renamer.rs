use crate::util::{non_empty_var, parse_bool};
use anyhow::{Context, anyhow};
use namecraft_core::{DEFAULT_SCRIPT, Renamer, RenamerSettings, Script};
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

pub const CONFIG_PATH_VAR: &str = "NAMECRAFT_CONFIG_PATH";
pub const CONFIG_JSON_VAR: &str = "NAMECRAFT_CONFIG_JSON";
pub const SCRIPT_PATH_VAR: &str = "NAMECRAFT_SCRIPT_PATH";
pub const MAX_EPISODE_TITLE_LENGTH_VAR: &str = "NAMECRAFT_MAX_EPISODE_TITLE_LENGTH";
pub const REPLACE_INVALID_PATH_CHARACTERS_VAR: &str = "NAMECRAFT_REPLACE_INVALID_PATH_CHARACTERS";

/// Source that produced the renamer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RenamerConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// Renamer settings plus the script the host should run.
///
/// ```toml
/// script_path = "scripts/rename.txt"
/// max_episode_title_length = 40
/// replace_invalid_path_characters = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RenamerConfig {
    #[serde(flatten)]
    pub settings: RenamerSettings,
    /// Script file to run. Relative paths in a config file are resolved
    /// against that file's directory. Without one the stock script is used.
    pub script_path: Option<PathBuf>,
}

impl RenamerConfig {
    /// Load renamer configuration using environment variables.
    /// Evaluation order:
    /// 1) `$NAMECRAFT_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$NAMECRAFT_CONFIG_JSON` (inline JSON),
    /// 3) `namecraft.toml` / `namecraft.json` in the working directory or `config/`,
    /// 4) defaults.
    ///
    /// Individual `NAMECRAFT_*` overrides are applied on top of whichever
    /// source won.
    pub fn load_from_env() -> anyhow::Result<(Self, RenamerConfigSource)> {
        let (mut config, source) = Self::load_base()?;
        config.apply_env_overrides()?;
        info!("renamer config loaded from {:?}", source);
        Ok((config, source))
    }

    fn load_base() -> anyhow::Result<(Self, RenamerConfigSource)> {
        if let Some(path_str) = non_empty_var(CONFIG_PATH_VAR) {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            return Ok((config, RenamerConfigSource::EnvPath(path)));
        }

        if let Some(raw) = non_empty_var(CONFIG_JSON_VAR) {
            let parsed = Self::parse_json(&raw)
                .with_context(|| format!("failed to parse {CONFIG_JSON_VAR}"))?;
            return Ok((parsed, RenamerConfigSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file() {
            let config = Self::load_from_file(&path)?;
            return Ok((config, RenamerConfigSource::File(path)));
        }

        Ok((Self::default(), RenamerConfigSource::Default))
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read renamer config from {}", path.display()))?;

        let mut config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents)
                .with_context(|| format!("invalid renamer config {}", path.display()))?,
            Some("toml") | Some("tml") => toml::from_str(&contents)
                .map_err(|err| anyhow!("invalid renamer config {}: {}", path.display(), err))?,
            _ => Self::parse_from_str(&contents, &path.display().to_string())?,
        };

        if let Some(base) = path.parent() {
            config.resolve_script_path(base);
        }
        Ok(config)
    }

    pub fn parse_from_str(contents: &str, origin: &str) -> anyhow::Result<Self> {
        // Try TOML first, then JSON for convenience.
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse renamer config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).map_err(|err| anyhow!("invalid renamer config json: {err}"))
    }

    /// Apply `NAMECRAFT_*` variables over the loaded values.
    pub fn apply_env_overrides(&mut self) -> anyhow::Result<()> {
        if let Some(raw) = non_empty_var(MAX_EPISODE_TITLE_LENGTH_VAR) {
            self.settings.max_episode_title_length = raw
                .trim()
                .parse()
                .with_context(|| format!("{MAX_EPISODE_TITLE_LENGTH_VAR} must be a number, got {raw:?}"))?;
        }

        if let Some(raw) = non_empty_var(REPLACE_INVALID_PATH_CHARACTERS_VAR) {
            self.settings.replace_invalid_path_characters = parse_bool(&raw).ok_or_else(|| {
                anyhow!("{REPLACE_INVALID_PATH_CHARACTERS_VAR} must be a boolean, got {raw:?}")
            })?;
        }

        if let Some(path) = non_empty_var(SCRIPT_PATH_VAR) {
            self.script_path = Some(PathBuf::from(path));
        }
        Ok(())
    }

    /// Script text to run: the configured file, or the stock script.
    pub fn load_script(&self) -> anyhow::Result<String> {
        match &self.script_path {
            Some(path) => {
                let text = fs::read_to_string(path).with_context(|| {
                    format!("failed to read rename script from {}", path.display())
                })?;
                debug!("loaded rename script from {}", path.display());
                Ok(text)
            }
            None => Ok(DEFAULT_SCRIPT.to_string()),
        }
    }

    /// Parsed script and a renamer configured with these settings.
    pub fn build(&self) -> anyhow::Result<(Renamer, Script)> {
        let script = Script::parse(&self.load_script()?);
        if script.is_empty() {
            return Err(anyhow!("rename script contains no usable statements"));
        }
        Ok((Renamer::new(self.settings.clone()), script))
    }

    fn resolve_script_path(&mut self, base: &Path) {
        if let Some(path) = self.script_path.as_mut()
            && path.is_relative()
        {
            *path = base.join(&*path);
        }
    }

    fn find_default_file() -> Option<PathBuf> {
        const CANDIDATES: &[&str] = &[
            "namecraft.toml",
            "namecraft.json",
            "config/namecraft.toml",
            "config/namecraft.json",
        ];

        CANDIDATES
            .iter()
            .map(Path::new)
            .find(|path| path.exists())
            .map(|path| path.to_path_buf())
    }
}

impl From<RenamerSettings> for RenamerConfig {
    fn from(settings: RenamerSettings) -> Self {
        Self {
            settings,
            script_path: None,
        }
    }
}
