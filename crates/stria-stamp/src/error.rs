use jiff::Timestamp;
use thiserror::Error;

/// Errors returned by Stamper initialization and id generation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("epoch is ahead of current clock time: epoch={epoch}, now={now}")]
    EpochAhead { epoch: Timestamp, now: Timestamp },
    #[error("overtime limit")]
    OverTimeLimit,
    #[error("stamper state lock is poisoned")]
    StatePoisoned,
}
