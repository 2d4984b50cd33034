// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors the viewer can surface to the user.
///
/// All gesture and catalog inputs are validated before they reach the state
/// machine, so the only runtime failures left are embedded asset lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An embedded image asset is missing or unreadable.
    Asset(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Asset(e) => write!(f, "Asset Error: {}", e),
        }
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Error::Asset(message)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_asset_error() {
        let err = Error::Asset("missing: thumb-owl.png".to_string());
        assert_eq!(format!("{}", err), "Asset Error: missing: thumb-owl.png");
    }

    #[test]
    fn from_string_produces_asset_variant() {
        let err: Error = "no such file".to_string().into();
        match err {
            Error::Asset(message) => assert!(message.contains("no such file")),
        }
    }
}
