use thiserror::Error;

/// Content rejection reasons for symbol values.
///
/// The `Display` strings are the user-facing rejection texts surfaced
/// verbatim by the UI layer, so they stay in the tool's display language.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("内容不能为空")]
    EmptyValue,
    #[error("{label} 条码必须是 {expected} 位数字")]
    DigitLengthMismatch { label: &'static str, expected: usize },
    #[error("Code39 仅支持大写字母、数字及 - . 空格 $ / + % 等字符")]
    InvalidCode39Charset,
    #[error("内容过长，请控制在 256 个字符以内")]
    ValueTooLong,
}
