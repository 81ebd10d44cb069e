use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub data: DataConfig,
    pub journal: JournalConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct UiConfig {
    /// "dark" or "light"; unset means dark.
    pub theme: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct DataConfig {
    /// Dataset file overriding the built-in one.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct JournalConfig {
    /// Where download requests are journaled; unset disables the journal.
    pub path: Option<PathBuf>,
}
