use crate::batch::CodeBatch;
use crate::error::BatchError;
use stria_core::{GeneratedCode, SymbolValue, Symbology};
use stria_generator::Generator;
use stria_stamp::{Clock, Stamper, StamperSettings, SystemClock};
use tracing::debug;

/// Upper bound on entries produced by a single request, whether from a
/// count or from content lines.
pub const MAX_BATCH: usize = 100;

/// Orchestrates generation requests against a caller-owned [`CodeBatch`].
///
/// The service wraps a value [`Generator`] and an id [`Stamper`]. Every
/// entry of a request is built before the batch is touched, so a rejected
/// request leaves the batch exactly as it was.
pub struct BatchService<G: Generator, C: Clock> {
    generator: G,
    stamper: Stamper<C>,
}

impl<G: Generator> BatchService<G, SystemClock> {
    /// Creates a service whose stamper runs off the real system clock.
    pub fn new(generator: G, settings: StamperSettings) -> Result<Self, BatchError> {
        Ok(Self {
            generator,
            stamper: Stamper::new(settings)?,
        })
    }
}

impl<G: Generator, C: Clock> BatchService<G, C> {
    /// Creates a service with an explicit stamper (custom clock included).
    pub fn with_stamper(generator: G, stamper: Stamper<C>) -> Self {
        Self { generator, stamper }
    }

    /// Generates `count` random codes for the symbology and replaces the
    /// batch with them.
    pub fn generate_by_count(
        &self,
        batch: &mut CodeBatch,
        symbology: Symbology,
        count: usize,
    ) -> Result<usize, BatchError> {
        Self::check_count(count)?;

        let mut entries = Vec::with_capacity(count);
        for _ in 0..count {
            let value = self.generator.generate(symbology);
            entries.push(self.stamp(symbology, value)?);
        }

        debug!(symbology = %symbology, count, "generated random batch");
        batch.replace(entries);
        Ok(count)
    }

    /// Generates codes from literal content and prepends them to the batch.
    ///
    /// Content is split on line breaks, trimmed, with empty lines dropped.
    /// Multiple lines produce one code per line and ignore `count`; a single
    /// line reuses the count bound and produces `count` codes sharing the
    /// literal value. Validation failures abort the whole request; a
    /// multi-line failure reports the 1-indexed offending line.
    pub fn generate_by_content(
        &self,
        batch: &mut CodeBatch,
        symbology: Symbology,
        raw_text: &str,
        count: usize,
    ) -> Result<usize, BatchError> {
        let lines: Vec<&str> = raw_text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if lines.is_empty() {
            return Err(BatchError::EmptyContent);
        }

        if lines.len() > 1 {
            if lines.len() > MAX_BATCH {
                return Err(BatchError::TooManyLines);
            }

            // Validate every line before any entry is committed.
            let mut values = Vec::with_capacity(lines.len());
            for (index, line) in lines.iter().enumerate() {
                let value = SymbolValue::new(symbology, *line)
                    .map_err(|source| BatchError::InvalidLine {
                        line: index + 1,
                        source,
                    })?;
                values.push(value);
            }

            let mut entries = Vec::with_capacity(values.len());
            for value in values {
                entries.push(self.stamp(symbology, value)?);
            }

            let produced = entries.len();
            debug!(symbology = %symbology, lines = produced, "generated batch from multi-line content");
            batch.prepend(entries);
            return Ok(produced);
        }

        // Single line: the count bound applies and every entry shares the
        // literal value.
        Self::check_count(count)?;
        let value = SymbolValue::new(symbology, lines[0])?;

        let mut entries = Vec::with_capacity(count);
        for _ in 0..count {
            entries.push(self.stamp(symbology, value.clone())?);
        }

        debug!(symbology = %symbology, count, "generated batch from single-line content");
        batch.prepend(entries);
        Ok(count)
    }

    fn stamp(&self, symbology: Symbology, value: SymbolValue) -> Result<GeneratedCode, BatchError> {
        let id = self.stamper.next_id()?;
        Ok(GeneratedCode {
            id: id.into(),
            symbology,
            value,
        })
    }

    fn check_count(count: usize) -> Result<(), BatchError> {
        if count == 0 {
            return Err(BatchError::CountTooSmall);
        }
        if count > MAX_BATCH {
            return Err(BatchError::CountTooLarge);
        }
        Ok(())
    }
}
