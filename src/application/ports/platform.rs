//! Platform and locale provider port interfaces

use std::fmt;

/// Platform identifier sent to the backend.
///
/// The backend distinguishes only two Apple platform families; every
/// variant collapses to one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Ios,
    Macos,
}

impl Platform {
    /// The wire representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Macos => "macos",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Port for identifying the current platform.
pub trait PlatformProvider: Send + Sync {
    fn platform(&self) -> Platform;
}

/// Port for reading the device locale, when one is known.
pub trait LocaleProvider: Send + Sync {
    fn locale(&self) -> Option<String>;
}
