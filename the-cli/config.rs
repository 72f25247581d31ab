use std::{
  fs,
  path::{
    Path,
    PathBuf,
  },
};

use anyhow::{
  Context,
  Result,
};
use etcetera::base_strategy::{
  BaseStrategy,
  choose_base_strategy,
};
use serde::Deserialize;
use the_blocks_lib::block_select::BlockSelectConfig;

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
  pub block_select: BlockSelectConfig,
}

impl Config {
  pub fn parse(text: &str) -> std::result::Result<Self, toml::de::Error> {
    toml::from_str(text)
  }

  pub fn load(path: &Path) -> Result<Self> {
    let text = fs::read_to_string(path)
      .with_context(|| format!("failed to read config file {}", path.display()))?;
    Self::parse(&text).with_context(|| format!("invalid config file {}", path.display()))
  }

  /// Load `specified_file`, or the default config file if it exists.
  pub fn load_or_default(specified_file: Option<&Path>) -> Result<Self> {
    if let Some(path) = specified_file {
      return Self::load(path);
    }

    let path = config_file()?;
    if path.is_file() {
      Self::load(&path)
    } else {
      log::debug!("no config file at {}, using defaults", path.display());
      Ok(Self::default())
    }
  }
}

pub fn config_dir() -> Result<PathBuf> {
  if let Ok(dir) = std::env::var("THE_BLOCKS_CONFIG_DIR") {
    return Ok(PathBuf::from(dir));
  }
  let strategy =
    choose_base_strategy().map_err(|_| anyhow::anyhow!("unable to find the config directory"))?;
  let mut path = strategy.config_dir();
  path.push("the-blocks");
  Ok(path)
}

pub fn config_file() -> Result<PathBuf> {
  Ok(config_dir()?.join("config.toml"))
}
