use crate::code_id::CodeId;
use crate::symbology::Symbology;
use crate::value::SymbolValue;
use serde::{Deserialize, Serialize};

/// A single generated code entry as displayed to the caller.
///
/// Entries are created per generation call, owned by the caller's batch
/// list, and discarded on clear — nothing is persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedCode {
    /// Unique within the owning batch.
    pub id: CodeId,
    pub symbology: Symbology,
    pub value: SymbolValue,
}

impl GeneratedCode {
    /// Formats the entry as an export line, `TAG: value`.
    pub fn export_line(&self) -> String {
        format!("{}: {}", self.symbology, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_line_uses_symbology_tag() {
        let code = GeneratedCode {
            id: CodeId::new([1, 2, 3]),
            symbology: Symbology::Ean13,
            value: SymbolValue::generated("4006381333931"),
        };
        assert_eq!(code.export_line(), "EAN13: 4006381333931");
    }
}
