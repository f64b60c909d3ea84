mod clock;
pub mod error;
mod stamp_id;
mod stamper;

pub use clock::{Clock, SystemClock};
pub use error::Error;
pub use stamp_id::StampId;
pub use stamper::{Stamper, StamperSettings};
