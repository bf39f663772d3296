//! Configuration types for C emission.

use setpack_core::Colors;

/// Configuration for C emission.
#[derive(Clone, Debug)]
pub struct Config {
    /// Prepended to every generated symbol (`g` in `gSettingsDefault`)
    pub(crate) symbol_prefix: String,
    /// Appended to default data symbols (`Default` in `gSettingsDefault`)
    pub(crate) symbol_suffix: String,
    /// Whether to annotate output with offsets and decoded values
    pub(crate) comments: bool,
    /// Whether to wrap struct declarations in `#pragma pack`
    pub(crate) pack_pragma: bool,
    /// Color configuration for output
    pub(crate) colors: Colors,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            symbol_prefix: "g".to_string(),
            symbol_suffix: "Default".to_string(),
            comments: true,
            pack_pragma: true,
            colors: Colors::OFF,
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prefix of generated symbols.
    pub fn symbol_prefix(mut self, value: impl Into<String>) -> Self {
        self.symbol_prefix = value.into();
        self
    }

    /// Set the suffix of default data symbols.
    pub fn symbol_suffix(mut self, value: impl Into<String>) -> Self {
        self.symbol_suffix = value.into();
        self
    }

    /// Set whether to emit comments.
    pub fn comments(mut self, value: bool) -> Self {
        self.comments = value;
        self
    }

    /// Set whether to emit `#pragma pack` around struct declarations.
    pub fn pack_pragma(mut self, value: bool) -> Self {
        self.pack_pragma = value;
        self
    }

    /// Set whether to use colored output.
    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }
}
