//! UPC/EAN mod-10 weighted check-digit math.
//!
//! All three numeric symbologies share the same formula and differ only in
//! which 1-indexed positions of the base carry weight 3. UPC-A and EAN-8
//! weight the odd positions; EAN-13 weights the even positions. The
//! asymmetry is part of the standards and must not be unified.

/// Which 1-indexed base positions carry weight 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Weighting {
    /// Odd positions ×3 (UPC-A, EAN-8).
    OddPositions,
    /// Even positions ×3 (EAN-13).
    EvenPositions,
}

impl Weighting {
    fn weight_at(&self, position: usize) -> u32 {
        let heavy = match self {
            Weighting::OddPositions => position % 2 == 1,
            Weighting::EvenPositions => position % 2 == 0,
        };
        if heavy {
            3
        } else {
            1
        }
    }
}

/// Computes the trailing check digit for an ASCII-digit base.
///
/// `check = (10 − (Σ digit×weight mod 10)) mod 10`
pub fn check_digit(base: &str, weighting: Weighting) -> u32 {
    debug_assert!(base.bytes().all(|b| b.is_ascii_digit()));

    let total: u32 = base
        .bytes()
        .enumerate()
        .map(|(index, byte)| {
            let digit = (byte - b'0') as u32;
            digit * weighting.weight_at(index + 1)
        })
        .sum();

    (10 - total % 10) % 10
}

/// Appends the computed check digit to the base, yielding the full value.
pub fn complete(base: &str, weighting: Weighting) -> String {
    format!("{}{}", base, check_digit(base, weighting))
}
