use modular_bitfield::prelude::*;
use std::fmt;

#[bitfield]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StampId {
    /// 40 bits for timestamp (milliseconds since a custom epoch).
    pub millis: B40,
    /// 16 bits for sequence number (resets every millisecond).
    pub sequence: B16,
}

impl fmt::Debug for StampId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StampId")
            .field("millis", &self.millis())
            .field("sequence", &self.sequence())
            .finish()
    }
}
