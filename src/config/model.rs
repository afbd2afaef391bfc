use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Contents of `.style-guard.toml`.
///
/// ```toml
/// [check]
/// output = "unified"
/// ignore = ["*/vendor/*"]
///
/// [formatters]
/// python = ["black", "--quiet", "-"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub check: CheckConfig,

    /// Replacement formatter argv keyed by checker name.
    #[serde(default)]
    pub formatters: IndexMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CheckConfig {
    /// Output mode name; validated when the run starts.
    #[serde(default)]
    pub output: Option<String>,

    /// Ignore patterns used when none are given on the command line.
    #[serde(default)]
    pub ignore: Vec<String>,
}
