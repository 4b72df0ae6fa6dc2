// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Sidecar(String),
    Setup(SetupError),
}

/// Specific failures of the theme installer.
/// Used to pick the recovery hint printed to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// The packaged theme folder does not exist
    MissingThemeSource(String),

    /// The chosen destination lies inside the theme source itself
    DestinationInsideSource(String),

    /// Copying a file or creating a directory failed
    CopyFailed(String),
}

impl SetupError {
    /// Returns the hint shown under the error message.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            SetupError::MissingThemeSource(_) => {
                "Reinstall the package, or pass --theme-source pointing at the theme folder."
            }
            SetupError::DestinationInsideSource(_) => {
                "Choose a destination outside the packaged theme folder."
            }
            SetupError::CopyFailed(_) => "You can manually copy the theme folder from:",
        }
    }
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::MissingThemeSource(path) => {
                write!(f, "Theme folder not found: {}", path)
            }
            SetupError::DestinationInsideSource(path) => {
                write!(f, "Destination is inside the theme folder: {}", path)
            }
            SetupError::CopyFailed(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Sidecar(e) => write!(f, "Sidecar Error: {}", e),
            Error::Setup(e) => write!(f, "Setup Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<SetupError> for Error {
    fn from(err: SetupError) -> Self {
        Error::Setup(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Sidecar(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
