//! Packed version numbers.
//!
//! A version has up to four components, each in `0..=255`, packed
//! most-significant first into a `u32`:
//!
//! ```text
//! (major << 24) | (minor << 16) | (patch << 8) | build
//! ```
//!
//! Plain integer comparison of two packed versions therefore orders them the
//! same way as comparing components left to right (`2.2.1 > 2.1.9.9`).

use std::fmt;
use std::str::FromStr;

use crate::FormatError;

/// Name of the mandatory first field of every top-level struct.
pub const VERSION_FIELD: &str = "version";

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[repr(transparent)]
pub struct PackedVersion(u32);

impl PackedVersion {
    pub const fn new(major: u8, minor: u8, patch: u8, build: u8) -> Self {
        Self(
            (major as u32) << 24 | (minor as u32) << 16 | (patch as u32) << 8 | build as u32,
        )
    }

    /// Pack components given as wider integers, rejecting anything outside `0..=255`.
    pub fn encode(major: i64, minor: i64, patch: i64, build: i64) -> Result<Self, FormatError> {
        Ok(Self::new(
            component("major", major)?,
            component("minor", minor)?,
            component("patch", patch)?,
            component("build", build)?,
        ))
    }

    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// `(major, minor, patch, build)`.
    pub const fn decode(self) -> (u8, u8, u8, u8) {
        let [major, minor, patch, build] = self.0.to_be_bytes();
        (major, minor, patch, build)
    }
}

fn component(name: &'static str, value: i64) -> Result<u8, FormatError> {
    u8::try_from(value).map_err(|_| FormatError::VersionComponentOutOfRange {
        component: name,
        value,
    })
}

impl From<PackedVersion> for u32 {
    fn from(v: PackedVersion) -> Self {
        v.get()
    }
}

/// Prints `major.minor`, plus `patch` and `build` only when non-zero
/// (`2.3`, `2.3.1`, `2.3.0.4`).
impl fmt::Display for PackedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (major, minor, patch, build) = self.decode();
        write!(f, "{major}.{minor}")?;
        if patch != 0 || build != 0 {
            write!(f, ".{patch}")?;
        }
        if build != 0 {
            write!(f, ".{build}")?;
        }
        Ok(())
    }
}

/// Parses one to four dot-separated components; missing ones are zero.
impl FromStr for PackedVersion {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FormatError::InvalidVersion(s.to_string());

        let mut parts = [0i64; 4];
        let mut count = 0;
        for part in s.trim().split('.') {
            if count == parts.len() {
                return Err(invalid());
            }
            parts[count] = part.parse().map_err(|_| invalid())?;
            count += 1;
        }

        let [major, minor, patch, build] = parts;
        Self::encode(major, minor, patch, build)
    }
}
