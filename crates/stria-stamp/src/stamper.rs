use crate::{
    clock::{Clock, SystemClock},
    error::Error,
    StampId,
};
use jiff::Timestamp;
use std::sync::Mutex;
use typed_builder::TypedBuilder;

const MAX_TIMESTAMP_MILLIS: u64 = (1_u64 << 40) - 1;
const MAX_SEQUENCE: u16 = u16::MAX;

/// Configures a Stamper instance.
#[derive(Debug, Clone, Copy, TypedBuilder)]
pub struct StamperSettings {
    /// Custom epoch used as the zero point for the 40-bit millisecond field.
    ///
    /// Stamper math runs at whole-millisecond precision
    /// (`Timestamp::as_millisecond`). Sub-millisecond detail is intentionally
    /// not modeled in the 40-bit field.
    #[builder]
    pub start_epoch: Timestamp,
}

#[derive(Debug, Default)]
struct StamperState {
    last_elapsed_timestamp: Option<Timestamp>,
    sequence: u16,
}

/// Entry-id generator with Sonyflake-style wait-on-overflow semantics.
///
/// Every id a single instance hands out is unique, so a batch of generated
/// codes stamped through one instance never repeats an id.
#[derive(Debug)]
pub struct Stamper<C: Clock> {
    start_time: Timestamp,
    clock: C,
    state: Mutex<StamperState>,
}

impl Stamper<SystemClock> {
    /// Creates a stamper backed by the real system clock.
    pub fn new(settings: StamperSettings) -> Result<Self, Error> {
        Self::with_clock(settings, SystemClock)
    }
}

impl<C: Clock> Stamper<C> {
    /// Creates a stamper driven by the given clock.
    pub fn with_clock(settings: StamperSettings, clock: C) -> Result<Self, Error> {
        let now = clock.now();
        if settings.start_epoch > now {
            return Err(Error::EpochAhead {
                epoch: settings.start_epoch,
                now,
            });
        }

        Ok(Self {
            start_time: settings.start_epoch,
            clock,
            state: Mutex::new(StamperState::default()),
        })
    }

    /// Generates the next unique StampId.
    ///
    /// Correctness strategy (matching Sonyflake behavior):
    /// - if the per-millisecond sequence is exhausted, wait for the next millisecond
    /// - if clock moves backward, wait until clock catches up
    pub fn next_id(&self) -> Result<StampId, Error> {
        let mut state = self.state.lock().map_err(|_| Error::StatePoisoned)?;

        let mut now = self.clock.now();

        match state.last_elapsed_timestamp {
            None => {
                // First call: sequence starts at 0 (already the default).
                state.sequence = 0;
            }
            Some(last) => {
                if now < last {
                    // Clock moved backward — block until we've caught up to the
                    // last timestamp used. Without this, two calls could produce
                    // the same (millis, sequence) pair.
                    self.clock.wait_until(last);
                    now = self.clock.now();
                }

                if now.as_millisecond() == last.as_millisecond() {
                    if state.sequence < MAX_SEQUENCE {
                        state.sequence += 1;
                    } else {
                        // Per-millisecond sequence exhausted: wait for the next
                        // millisecond boundary, then reset so we start fresh.
                        let next_millisecond =
                            Timestamp::from_millisecond(last.as_millisecond() + 1)
                                .expect("next millisecond is a valid timestamp");
                        self.clock.wait_until(next_millisecond);
                        now = self.clock.now();
                        state.sequence = 0;
                    }
                } else {
                    // Entered a new millisecond: the sequence counter resets.
                    state.sequence = 0;
                }
            }
        }

        // Milliseconds elapsed since the custom epoch, used as the millis field.
        let elapsed = now.as_millisecond() - self.start_time.as_millisecond();
        if elapsed as u64 > MAX_TIMESTAMP_MILLIS {
            return Err(Error::OverTimeLimit);
        }

        let id = StampId::new()
            .with_millis(elapsed as u64)
            .with_sequence(state.sequence);

        state.last_elapsed_timestamp = Some(now);

        Ok(id)
    }
}
