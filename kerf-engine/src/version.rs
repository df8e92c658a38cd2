//! Engine version and the override capability gate

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Version of the segmentation engine the factory targets
///
/// Word-break class overrides landed in engine 5.5; older engines fall
/// back to the unmodified default tokenizer. The comparison is resolved
/// once per factory into a single capability flag, so version policy never
/// leaks into parsing or dispatch logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EngineVersion {
    /// Major version
    pub major: u16,
    /// Minor version
    pub minor: u16,
}

impl EngineVersion {
    /// First version that accepts classification overrides
    pub const OVERRIDE_SUPPORT: EngineVersion = EngineVersion { major: 5, minor: 5 };

    /// Most recent engine version
    pub const LATEST: EngineVersion = EngineVersion { major: 6, minor: 2 };

    /// Create a version from its components
    pub fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }

    /// Whether this version is `other` or newer
    pub fn on_or_after(self, other: EngineVersion) -> bool {
        self >= other
    }

    /// Whether this engine accepts a classification override table
    pub fn supports_word_break_overrides(self) -> bool {
        self.on_or_after(Self::OVERRIDE_SUPPORT)
    }
}

impl Default for EngineVersion {
    fn default() -> Self {
        Self::LATEST
    }
}

impl fmt::Display for EngineVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Failure to parse a `major.minor` version string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid engine version `{0}`, expected `major.minor`")]
pub struct ParseVersionError(pub String);

impl FromStr for EngineVersion {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (major, minor) = s
            .split_once('.')
            .ok_or_else(|| ParseVersionError(s.to_string()))?;
        let major = major
            .parse()
            .map_err(|_| ParseVersionError(s.to_string()))?;
        let minor = minor
            .parse()
            .map_err(|_| ParseVersionError(s.to_string()))?;
        Ok(Self { major, minor })
    }
}
