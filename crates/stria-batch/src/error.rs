use stria_core::CoreError;
use thiserror::Error;

/// Batch-level rejections.
///
/// Every failure is reported, never thrown past the service boundary, and
/// no variant leaves the caller's batch partially mutated. As with
/// [`CoreError`], the `Display` strings are the user-facing texts.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BatchError {
    #[error("生成数量必须大于 0")]
    CountTooSmall,
    #[error("一次最多生成 100 个条码，请适当减少数量")]
    CountTooLarge,
    #[error("请输入需要生成条码的内容")]
    EmptyContent,
    #[error("一次最多根据 100 行内容生成条码，请适当减少行数")]
    TooManyLines,
    /// A multi-line submission failed validation; `line` is 1-indexed.
    #[error("第 {line} 行：{source}")]
    InvalidLine {
        line: usize,
        #[source]
        source: CoreError,
    },
    #[error(transparent)]
    InvalidValue(#[from] CoreError),
    #[error(transparent)]
    Stamp(#[from] stria_stamp::Error),
}
