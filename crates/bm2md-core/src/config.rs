use crate::hierarchy::{DEFAULT_ROOT_TITLE, MAX_HEADING_LEVEL};
use serde::Deserialize;

pub use toml::de::Error as ConfigError;

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub options: Options,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Options {
    /// Prefix each link with an image pointing at its site's `/favicon.ico`.
    #[serde(default = "default_true")]
    pub favicons: bool,
    /// Heading title used for folders opened before any `<H3>` is seen.
    #[serde(default = "default_root_title", alias = "rootTitle")]
    pub root_title: String,
    /// Deeper folders flatten to this level. Values outside `1..=6` are clamped.
    #[serde(default = "default_max_heading_level", alias = "maxHeadingLevel")]
    pub max_heading_level: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            favicons: true,
            root_title: DEFAULT_ROOT_TITLE.to_string(),
            max_heading_level: MAX_HEADING_LEVEL,
        }
    }
}

impl Options {
    pub fn heading_limit(&self) -> usize {
        self.max_heading_level.clamp(1, MAX_HEADING_LEVEL)
    }
}

fn default_true() -> bool {
    true
}

fn default_root_title() -> String {
    DEFAULT_ROOT_TITLE.to_string()
}

fn default_max_heading_level() -> usize {
    MAX_HEADING_LEVEL
}

impl Config {
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        toml::from_str(input)
    }
}
