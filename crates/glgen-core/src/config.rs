//! Configuration for binding generation.

use std::sync::LazyLock;

use crate::PrefixRules;

static SHARED: LazyLock<Config> = LazyLock::new(Config::default);

/// Spellings the generated code uses to reach the native side.
#[derive(Clone, Debug)]
pub struct Config {
    /// Qualifier in front of native type names (`C.` for cgo)
    pub(crate) native_qualifier: String,
    /// Helper that turns a target bool into the native integer encoding
    pub(crate) bool_encoder: String,
    /// Native constant for boolean true
    pub(crate) true_sentinel: String,
    /// Prefixes stripped from identifiers
    pub(crate) prefixes: PrefixRules,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            native_qualifier: "C.".to_string(),
            bool_encoder: "boolToInt".to_string(),
            true_sentinel: "TRUE".to_string(),
            prefixes: PrefixRules::gl(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// The default configuration, shared by the free functions.
    pub fn shared() -> &'static Self {
        &SHARED
    }

    /// Set the qualifier used for native type names.
    pub fn native_qualifier(mut self, value: impl Into<String>) -> Self {
        self.native_qualifier = value.into();
        self
    }

    /// Set the helper used to encode booleans for the native side.
    pub fn bool_encoder(mut self, value: impl Into<String>) -> Self {
        self.bool_encoder = value.into();
        self
    }

    /// Set the native true constant compared against when decoding booleans.
    pub fn true_sentinel(mut self, value: impl Into<String>) -> Self {
        self.true_sentinel = value.into();
        self
    }

    /// Replace the identifier prefix rules.
    pub fn prefixes(mut self, value: PrefixRules) -> Self {
        self.prefixes = value;
        self
    }

    /// Native type name with the configured qualifier (`C.GLenum`).
    pub fn native_name(&self, name: &str) -> String {
        format!("{}{}", self.native_qualifier, name)
    }

    /// Strip an API-family prefix using the configured rules.
    pub fn trim_api_prefix<'a>(&self, name: &'a str) -> &'a str {
        self.prefixes.trim(name)
    }
}
