use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The fixed set of barcode/QR symbologies the engine understands.
///
/// The set is closed: it mirrors what the rendering collaborators can draw
/// and is never extended at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Symbology {
    QrCode,
    Code128,
    Ean13,
    Ean8,
    Upc,
    Code39,
}

/// Maximum payload length for free-form symbologies (CODE128, QRCODE).
const MAX_FREEFORM_LEN: usize = 256;

impl Symbology {
    /// All symbologies, in the order the original tool lists them.
    pub const ALL: [Symbology; 6] = [
        Symbology::QrCode,
        Symbology::Code128,
        Symbology::Ean13,
        Symbology::Ean8,
        Symbology::Upc,
        Symbology::Code39,
    ];

    /// Returns the wire/display tag, e.g. `EAN13` or `UPC`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Symbology::QrCode => "QRCODE",
            Symbology::Code128 => "CODE128",
            Symbology::Ean13 => "EAN13",
            Symbology::Ean8 => "EAN8",
            Symbology::Upc => "UPC",
            Symbology::Code39 => "CODE39",
        }
    }

    /// Returns the human-facing label shown in selection lists.
    pub fn label(&self) -> &'static str {
        match self {
            Symbology::QrCode => "二维码（QR Code）",
            Symbology::Code128 => "条形码 - CODE128（通用，支持字母+数字）",
            Symbology::Ean13 => "条形码 - EAN-13（13位数字）",
            Symbology::Ean8 => "条形码 - EAN-8（8位数字）",
            Symbology::Upc => "条形码 - UPC-A（12位数字）",
            Symbology::Code39 => "条形码 - Code39（字母+数字，常见一维码）",
        }
    }

    /// Validates raw content against this symbology's shape rules.
    ///
    /// The value is trimmed first; an empty result is rejected before any
    /// symbology-specific rule runs. Numeric symbologies check digit class
    /// and exact length only — check digits are deliberately not recomputed
    /// here, matching the preview-tool semantics of the original.
    pub fn validate(&self, raw: &str) -> Result<(), CoreError> {
        let value = raw.trim();

        if value.is_empty() {
            return Err(CoreError::EmptyValue);
        }

        match self {
            Symbology::Ean13 => Self::require_digits(value, "EAN-13", 13),
            Symbology::Ean8 => Self::require_digits(value, "EAN-8", 8),
            Symbology::Upc => Self::require_digits(value, "UPC-A", 12),
            Symbology::Code39 => {
                if !value.chars().all(is_code39_char) {
                    return Err(CoreError::InvalidCode39Charset);
                }
                Ok(())
            }
            Symbology::Code128 | Symbology::QrCode => {
                if value.chars().count() > MAX_FREEFORM_LEN {
                    return Err(CoreError::ValueTooLong);
                }
                Ok(())
            }
        }
    }

    fn require_digits(
        value: &str,
        label: &'static str,
        expected: usize,
    ) -> Result<(), CoreError> {
        if value.len() != expected || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::DigitLengthMismatch { label, expected });
        }
        Ok(())
    }
}

fn is_code39_char(c: char) -> bool {
    c.is_ascii_digit()
        || c.is_ascii_uppercase()
        || matches!(c, '.' | '$' | '/' | '+' | '%' | ' ' | '-')
}

impl Display for Symbology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_value_is_rejected_for_every_symbology() {
        for symbology in Symbology::ALL {
            assert_eq!(symbology.validate("   "), Err(CoreError::EmptyValue));
            assert_eq!(symbology.validate(""), Err(CoreError::EmptyValue));
        }
    }

    #[test]
    fn ean13_requires_exactly_13_digits() {
        assert!(Symbology::Ean13.validate("1234567890123").is_ok());

        let err = Symbology::Ean13.validate("123").unwrap_err();
        assert_eq!(
            err,
            CoreError::DigitLengthMismatch {
                label: "EAN-13",
                expected: 13,
            }
        );
        assert!(err.to_string().contains("13 位数字"));

        assert!(Symbology::Ean13.validate("12345678901234").is_err());
        assert!(Symbology::Ean13.validate("123456789012X").is_err());
    }

    #[test]
    fn ean8_requires_exactly_8_digits() {
        assert!(Symbology::Ean8.validate("12345678").is_ok());
        assert!(Symbology::Ean8.validate("1234567").is_err());
        assert!(Symbology::Ean8.validate("1234567a").is_err());
    }

    #[test]
    fn upc_requires_exactly_12_digits() {
        assert!(Symbology::Upc.validate("123456789012").is_ok());
        assert!(Symbology::Upc.validate("1234567890123").is_err());
    }

    #[test]
    fn code39_charset() {
        assert!(Symbology::Code39.validate("ABC-123").is_ok());
        assert!(Symbology::Code39.validate("A.B $C/1+2%3-").is_ok());
        // lowercase is not part of the Code39 alphabet
        assert_eq!(
            Symbology::Code39.validate("abc"),
            Err(CoreError::InvalidCode39Charset)
        );
        assert!(Symbology::Code39.validate("ABC_123").is_err());
    }

    #[test]
    fn freeform_symbologies_cap_length_at_256() {
        let ok = "x".repeat(256);
        let too_long = "x".repeat(257);
        for symbology in [Symbology::QrCode, Symbology::Code128] {
            assert!(symbology.validate(&ok).is_ok());
            assert_eq!(symbology.validate(&too_long), Err(CoreError::ValueTooLong));
        }
        // arbitrary mixed content is fine below the cap
        assert!(Symbology::QrCode.validate("https://例え.jp/?q=1").is_ok());
    }

    #[test]
    fn validation_trims_before_checking() {
        assert!(Symbology::Ean8.validate(" 12345678 ").is_ok());
    }

    #[test]
    fn serde_tags_match_display() {
        for symbology in Symbology::ALL {
            let json = serde_json::to_string(&symbology).unwrap();
            assert_eq!(json, format!("\"{}\"", symbology));
            let back: Symbology = serde_json::from_str(&json).unwrap();
            assert_eq!(back, symbology);
        }
    }
}
