use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt::Display;
use stria_stamp::StampId;

/// A batch-entry id encoded as base58 string.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CodeId(SmolStr);

impl CodeId {
    /// Creates a new `CodeId` by encoding the given bytes as base58.
    ///
    /// Typically fed with the 7-byte array of a [`StampId`]; any byte slice
    /// works, which keeps tests free to construct ids directly.
    pub fn new<T: AsRef<[u8]>>(bytes: T) -> Self {
        let encoded = bs58::encode(bytes).into_string();
        Self(SmolStr::new(encoded))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for CodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("CodeId").field(&self.0).finish()
    }
}

impl Display for CodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for CodeId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CodeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = SmolStr::deserialize(deserializer)?;
        Ok(Self(s))
    }
}

impl From<StampId> for CodeId {
    fn from(val: StampId) -> Self {
        let bytes = val.into_bytes();
        CodeId::new(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stamp_ids_map_to_distinct_code_ids() {
        let a: CodeId = StampId::new().with_millis(1).with_sequence(0).into();
        let b: CodeId = StampId::new().with_millis(1).with_sequence(1).into();
        assert_ne!(a, b);
        assert!(!a.as_str().is_empty());
    }

    #[test]
    fn display_matches_base58_encoding() {
        let id = CodeId::new([0x10, 0x20, 0x30]);
        assert_eq!(id.to_string(), bs58::encode([0x10, 0x20, 0x30]).into_string());
    }
}
