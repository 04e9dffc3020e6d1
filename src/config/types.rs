// Configuration type definitions

use serde::Deserialize;

use crate::debounce::DEFAULT_DEBOUNCE_MS;

pub const DEFAULT_MAX_VISIBLE: usize = 8;
pub const DEFAULT_PLACEHOLDER: &str = "Search";

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_max_visible() -> usize {
    DEFAULT_MAX_VISIBLE
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

/// Combobox behaviour section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ComboboxConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

impl Default for ComboboxConfig {
    fn default() -> Self {
        ComboboxConfig {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            max_visible: DEFAULT_MAX_VISIBLE,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

/// Candidate list section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct ItemsConfig {
    #[serde(default)]
    pub values: Option<Vec<String>>,
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub combobox: ComboboxConfig,
    #[serde(default)]
    pub items: ItemsConfig,
}
