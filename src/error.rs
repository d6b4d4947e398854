// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Manifest(ManifestError),
}

/// Reasons a portfolio manifest could not be turned into item sets.
#[derive(Debug, Clone, PartialEq)]
pub enum ManifestError {
    /// The manifest file does not exist.
    NotFound(String),

    /// The file exists but is not valid manifest TOML.
    Parse(String),

    /// An entry declares an empty category tag.
    EmptyCategory {
        /// Section the entry belongs to (`gallery` or `ugc`).
        section: &'static str,
        /// Zero-based position of the entry in its section.
        position: usize,
    },

    /// A category tag uses the reserved wildcard name.
    ReservedCategory {
        section: &'static str,
        position: usize,
    },
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestError::NotFound(path) => write!(f, "manifest not found: {}", path),
            ManifestError::Parse(msg) => write!(f, "invalid manifest: {}", msg),
            ManifestError::EmptyCategory { section, position } => {
                write!(f, "{} entry #{} has an empty category", section, position)
            }
            ManifestError::ReservedCategory { section, position } => write!(
                f,
                "{} entry #{} uses the reserved category \"all\"",
                section, position
            ),
        }
    }
}

/// Failure of the simulated contact-form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The pending submission was cancelled before it completed.
    Aborted,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Aborted => write!(f, "submission aborted"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Manifest(e) => write!(f, "Manifest Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ManifestError> for Error {
    fn from(err: ManifestError) -> Self {
        Error::Manifest(err)
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

pub type Result<T> = std::result::Result<T, Error>;
