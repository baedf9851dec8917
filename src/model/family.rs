//! Widget families and runtime family lookup.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::constants::{FAMILY_MACOS, FAMILY_WINDOWS};

/// A widget family: the look-and-feel every widget of one platform shares.
///
/// The set is closed and known at compile time, so factory selection can
/// match on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Widgets with the Windows look-and-feel.
    Windows,
    /// Widgets with the macOS look-and-feel.
    MacOs,
}

impl Family {
    /// Every family, each exactly once.
    pub const ALL: [Family; 2] = [Family::Windows, Family::MacOs];

    /// The family matching the host operating system.
    ///
    /// Hosts without a native family (Linux, the BSDs) fall back to
    /// Windows so a bare demo run still renders something.
    pub fn native() -> Self {
        if cfg!(target_os = "macos") {
            Family::MacOs
        } else {
            Family::Windows
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Family::Windows => FAMILY_WINDOWS,
            Family::MacOs => FAMILY_MACOS,
        };
        f.write_str(name)
    }
}

impl FromStr for Family {
    type Err = FamilyError;

    /// Resolve a family from the names users actually type.
    ///
    /// Matching is case-insensitive and accepts the common short aliases
    /// (`win`, `mac`, `osx`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "windows" | "win" => Ok(Family::Windows),
            "macos" | "mac" | "osx" => Ok(Family::MacOs),
            _ => Err(FamilyError::Unknown(s.to_string())),
        }
    }
}

/// Errors from runtime family lookup.
///
/// Widget construction and painting are total; resolving a family from a
/// runtime string is the only operation that can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FamilyError {
    /// The requested name does not match any known family.
    #[error("unknown widget family `{0}`")]
    Unknown(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_names() {
        assert_eq!("windows".parse::<Family>(), Ok(Family::Windows));
        assert_eq!("macos".parse::<Family>(), Ok(Family::MacOs));
    }

    #[test]
    fn test_parse_aliases_and_case() {
        assert_eq!("WIN".parse::<Family>(), Ok(Family::Windows));
        assert_eq!("Mac".parse::<Family>(), Ok(Family::MacOs));
        assert_eq!("osx".parse::<Family>(), Ok(Family::MacOs));
    }

    #[test]
    fn test_parse_unknown_keeps_requested_name() {
        let err = "amiga".parse::<Family>().unwrap_err();
        assert_eq!(err, FamilyError::Unknown("amiga".to_string()));
        assert_eq!(err.to_string(), "unknown widget family `amiga`");
    }

    #[test]
    fn test_native_is_a_known_family() {
        assert!(Family::ALL.contains(&Family::native()));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Family::Windows.to_string(), "Windows");
        assert_eq!(Family::MacOs.to_string(), "macOS");
    }
}
