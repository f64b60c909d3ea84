use crate::error::CoreError;
use crate::symbology::Symbology;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A symbol payload tagged by where it came from.
///
/// Generated values are produced by the engine and are well-formed by
/// construction; custom values come from user content and can only be built
/// through [`SymbolValue::new`], which runs the symbology's validation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymbolValue {
    /// An engine-generated payload (random base plus check digit where the
    /// symbology calls for one).
    Generated(String),
    /// A user-provided payload that has passed shape validation.
    Custom(String),
}

impl SymbolValue {
    /// Creates a `SymbolValue` from user content after validating it against
    /// the symbology's rules.
    ///
    /// The stored value is the trimmed content, kept verbatim otherwise —
    /// no check digit is computed or corrected for user input.
    pub fn new(symbology: Symbology, raw: impl AsRef<str>) -> Result<Self, CoreError> {
        let trimmed = raw.as_ref().trim();
        symbology.validate(trimmed)?;
        Ok(Self::Custom(trimmed.to_owned()))
    }

    /// Creates a `SymbolValue` without validation.
    ///
    /// Use this only for payloads produced by trusted internal sources
    /// (the random generators, which are well-formed by construction).
    pub fn generated(value: impl Into<String>) -> Self {
        Self::Generated(value.into())
    }

    /// Returns the payload as a string slice.
    pub fn as_str(&self) -> &str {
        match self {
            SymbolValue::Generated(s) => s.as_str(),
            SymbolValue::Custom(s) => s.as_str(),
        }
    }
}

impl Display for SymbolValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
