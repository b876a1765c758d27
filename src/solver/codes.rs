//! Code space enumeration
//!
//! Builds every code a secret could be, which is the solver's candidate pool.

use crate::core::{Code, SecretDigits};

/// Every code of `length` digits over `alphabet`, in ascending numeric order
///
/// # Examples
/// ```
/// use codebreaker::core::SecretDigits;
/// use codebreaker::solver::all_codes;
///
/// let codes = all_codes(4, SecretDigits::Classic);
/// assert_eq!(codes.len(), 5usize.pow(4));
/// assert_eq!(codes[0].to_string(), "1111");
/// assert_eq!(codes[codes.len() - 1].to_string(), "5555");
/// ```
#[must_use]
pub fn all_codes(length: usize, alphabet: SecretDigits) -> Vec<Code> {
    let symbols = alphabet.symbols();
    if length == 0 || symbols.is_empty() {
        return Vec::new();
    }

    let total = symbols.len().pow(length as u32);
    let mut codes = Vec::with_capacity(total);
    let mut indices = vec![0usize; length];

    loop {
        let digits: Vec<u8> = indices.iter().map(|&i| symbols[i]).collect();
        // Symbols are always 1-6, so construction cannot fail
        if let Ok(code) = Code::from_digits(digits) {
            codes.push(code);
        }

        // Odometer increment from the rightmost position
        let mut pos = length;
        loop {
            if pos == 0 {
                return codes;
            }
            pos -= 1;
            indices[pos] += 1;
            if indices[pos] < symbols.len() {
                break;
            }
            indices[pos] = 0;
        }
    }
}
