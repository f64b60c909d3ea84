//! Random symbol value generation.
//!
//! This crate provides the generation seam used by the batch service: a
//! [`Generator`] trait plus the default [`RandomGenerator`] that produces
//! demo payloads — alphanumeric strings for the free-form symbologies and
//! digit strings with a correct trailing check digit for EAN/UPC.

pub mod checksum;
pub mod random;

use checksum::Weighting;
use stria_core::{SymbolValue, Symbology};

/// Base lengths (check digit excluded) for the numeric symbologies.
const EAN13_BASE_LEN: usize = 12;
const EAN8_BASE_LEN: usize = 7;
const UPC_BASE_LEN: usize = 11;

/// Payload lengths for the free-form symbologies.
const CODE39_LEN: usize = 10;
const CODE128_LEN: usize = 12;

/// Trait for generating symbol values.
///
/// Implementations are pure generators without semantic meaning behind the
/// payloads — the output is test/demo data, only guaranteed to be
/// well-formed for the requested symbology.
pub trait Generator: Send + Sync + 'static {
    /// Produces a random value that passes the symbology's validation.
    fn generate(&self, symbology: Symbology) -> SymbolValue;
}

/// The default generator backed by the thread-local rng.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomGenerator;

impl Generator for RandomGenerator {
    fn generate(&self, symbology: Symbology) -> SymbolValue {
        let value = match symbology {
            Symbology::Ean13 => checksum::complete(
                &random::random_digits(EAN13_BASE_LEN),
                Weighting::EvenPositions,
            ),
            Symbology::Ean8 => checksum::complete(
                &random::random_digits(EAN8_BASE_LEN),
                Weighting::OddPositions,
            ),
            Symbology::Upc => checksum::complete(
                &random::random_digits(UPC_BASE_LEN),
                Weighting::OddPositions,
            ),
            Symbology::Code39 => random::random_alphanumeric(CODE39_LEN),
            Symbology::Code128 | Symbology::QrCode => random::random_alphanumeric(CODE128_LEN),
        };
        SymbolValue::generated(value)
    }
}
