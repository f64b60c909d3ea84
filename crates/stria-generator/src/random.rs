use rand::Rng;

/// Alphabet for alphanumeric symbologies (CODE128, CODE39, QRCODE demo data).
const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Draws `length` characters uniformly from `[A-Z0-9]`.
pub fn random_alphanumeric(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHANUMERIC.len());
            ALPHANUMERIC[idx] as char
        })
        .collect()
}

/// Draws `length` decimal digits uniformly from `[0-9]`.
pub fn random_digits(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let digit = rng.gen_range(0..10_u32);
            char::from_digit(digit, 10).expect("single decimal digit")
        })
        .collect()
}
