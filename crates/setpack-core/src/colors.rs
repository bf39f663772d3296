//! Terminal highlighting for blob dumps and generated C listings.

/// Escape sequences keyed by what they highlight.
///
/// `name` marks struct names and generated symbols, `literal` marks decoded
/// field values, and `muted` marks offsets, raw bytes, and comments. With
/// highlighting off every sequence is empty, so callers can interpolate
/// them unconditionally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub name: &'static str,
    pub literal: &'static str,
    pub muted: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        name: "\x1b[34m",
        literal: "\x1b[32m",
        muted: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        name: "",
        literal: "",
        muted: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }
}
