//! Random fixture values for DB-backed tests

use rand::Rng;
use rand::seq::SliceRandom;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const CURRENCIES: &[&str] = &["EUR", "USD", "CAD"];

/// Random integer in `[min, max]` inclusive
pub fn random_int(min: i64, max: i64) -> i64 {
    rand::thread_rng().gen_range(min..=max)
}

/// Random lowercase string of `n` characters
pub fn random_string(n: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..n)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Random account owner name
pub fn random_owner() -> String {
    random_string(6)
}

/// Random balance in minor currency units
pub fn random_money() -> i64 {
    random_int(0, 1000)
}

/// Random supported currency code
pub fn random_currency() -> String {
    let mut rng = rand::thread_rng();
    CURRENCIES
        .choose(&mut rng)
        .copied()
        .unwrap_or("USD")
        .to_string()
}
