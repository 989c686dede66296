// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    /// Image header could not be read.
    Image(String),
    /// An embedded artwork could not be found or decoded.
    Asset(AssetError),
    /// A gallery was built from an empty list of pieces.
    EmptyGallery,
}

/// Specific failures when resolving a bundled artwork.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetError {
    /// No embedded file carries this name.
    Missing(String),

    /// The embedded bytes are not a readable image.
    Undecodable { name: String, reason: String },
}

impl AssetError {
    /// Returns the name of the asset the error refers to.
    pub fn asset_name(&self) -> &str {
        match self {
            AssetError::Missing(name) | AssetError::Undecodable { name, .. } => name,
        }
    }
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Missing(name) => write!(f, "asset not bundled: {}", name),
            AssetError::Undecodable { name, reason } => {
                write!(f, "asset {} could not be decoded: {}", name, reason)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Asset(e) => write!(f, "Asset Error: {}", e),
            Error::EmptyGallery => write!(f, "Gallery Error: a gallery needs at least one piece"),
        }
    }
}

impl std::error::Error for Error {}

impl From<AssetError> for Error {
    fn from(err: AssetError) -> Self {
        Error::Asset(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
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
