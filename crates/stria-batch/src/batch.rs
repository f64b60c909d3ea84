use serde::{Deserialize, Serialize};
use stria_core::GeneratedCode;

/// The caller-owned ordered list of currently displayed codes.
///
/// The service commits to a batch only after a whole generation request has
/// succeeded: random generation replaces the list, content generation
/// prepends to it. Clearing discards everything; nothing is persisted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeBatch {
    entries: Vec<GeneratedCode>,
}

impl CodeBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entries in display order (newest prepends first).
    pub fn entries(&self) -> &[GeneratedCode] {
        &self.entries
    }

    /// Drops all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Replaces the whole list with a freshly generated one.
    pub fn replace(&mut self, entries: Vec<GeneratedCode>) {
        self.entries = entries;
    }

    /// Inserts the given entries ahead of the existing ones, preserving the
    /// order of both.
    pub fn prepend(&mut self, entries: Vec<GeneratedCode>) {
        self.entries.splice(0..0, entries);
    }

    /// Renders the batch as copyable text, one `TAG: value` line per entry.
    pub fn export_text(&self) -> String {
        self.entries
            .iter()
            .map(GeneratedCode::export_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
