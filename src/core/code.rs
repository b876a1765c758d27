//! Digit code representation
//!
//! A Code is the ordered digit sequence used for both the secret and every guess.

use rand::Rng;
use rustc_hash::FxHashMap;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use thiserror::Error;

/// Smallest digit a secret can contain
pub const MIN_DIGIT: u8 = 1;

/// Largest digit advertised to the player
pub const MAX_DIGIT: u8 = 6;

/// Error type for invalid codes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("code must contain at least one digit")]
    Empty,
    #[error("'{0}' is not a decimal digit")]
    NotADigit(char),
    #[error("digit value {0} is not in 0-9")]
    DigitOutOfRange(u8),
    #[error("{raw} does not fit in {length} digits")]
    TooManyDigits { raw: u32, length: usize },
    #[error("secret has {secret} digits but guess has {guess}")]
    LengthMismatch { secret: usize, guess: usize },
}

/// Alphabet secrets are drawn from
///
/// `Classic` draws from `MIN_DIGIT..MAX_DIGIT` (6 is never generated), which is
/// how the game has always played. `Full` draws from `MIN_DIGIT..=MAX_DIGIT`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SecretDigits {
    #[default]
    Classic,
    Full,
}

impl SecretDigits {
    /// Parse from a CLI name; anything unrecognized is `Classic`
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "full" | "inclusive" => Self::Full,
            _ => Self::Classic,
        }
    }

    /// Inclusive range of digits a secret can contain
    #[must_use]
    pub const fn range(self) -> RangeInclusive<u8> {
        match self {
            Self::Classic => MIN_DIGIT..=MAX_DIGIT - 1,
            Self::Full => MIN_DIGIT..=MAX_DIGIT,
        }
    }

    /// Every digit a secret can contain, ascending
    #[must_use]
    pub fn symbols(self) -> Vec<u8> {
        self.range().collect()
    }
}

/// A fixed-length sequence of decimal digits
///
/// Compared positionally: `[1, 2]` and `[2, 1]` are different codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code {
    digits: Vec<u8>,
}

impl Code {
    /// Create a code from raw digit values
    ///
    /// # Errors
    /// Returns `CodeError` if the sequence is empty or any value is above 9.
    ///
    /// # Examples
    /// ```
    /// use codebreaker::core::Code;
    ///
    /// let code = Code::from_digits([1, 2, 3, 4]).unwrap();
    /// assert_eq!(code.to_string(), "1234");
    ///
    /// assert!(Code::from_digits(Vec::new()).is_err());
    /// assert!(Code::from_digits([1, 12]).is_err());
    /// ```
    pub fn from_digits(digits: impl Into<Vec<u8>>) -> Result<Self, CodeError> {
        let digits = digits.into();

        if digits.is_empty() {
            return Err(CodeError::Empty);
        }

        if let Some(&bad) = digits.iter().find(|&&d| d > 9) {
            return Err(CodeError::DigitOutOfRange(bad));
        }

        Ok(Self { digits })
    }

    /// Decompose a raw numeric guess into exactly `length` digits
    ///
    /// The least-significant digit fills the rightmost position; missing
    /// high-order positions are zero.
    ///
    /// # Errors
    /// Returns `CodeError::TooManyDigits` if `raw` needs more than `length`
    /// digits, and `CodeError::Empty` for a zero length.
    ///
    /// # Examples
    /// ```
    /// use codebreaker::core::Code;
    ///
    /// let code = Code::parse_guess(1234, 4).unwrap();
    /// assert_eq!(code.digits(), &[1, 2, 3, 4]);
    ///
    /// let padded = Code::parse_guess(42, 4).unwrap();
    /// assert_eq!(padded.digits(), &[0, 0, 4, 2]);
    ///
    /// assert!(Code::parse_guess(12345, 4).is_err());
    /// ```
    pub fn parse_guess(raw: u32, length: usize) -> Result<Self, CodeError> {
        if length == 0 {
            return Err(CodeError::Empty);
        }

        let mut digits = vec![0u8; length];
        let mut rest = raw;
        for slot in digits.iter_mut().rev() {
            *slot = (rest % 10) as u8;
            rest /= 10;
        }

        if rest != 0 {
            return Err(CodeError::TooManyDigits { raw, length });
        }

        Ok(Self { digits })
    }

    /// Draw a random secret of `length` digits, each uniform over `alphabet`
    ///
    /// # Panics
    /// Panics if `length` is zero.
    pub fn random<R: Rng>(length: usize, alphabet: SecretDigits, rng: &mut R) -> Self {
        assert!(length > 0, "secret length must be positive");

        let digits = (0..length)
            .map(|_| rng.random_range(alphabet.range()))
            .collect();

        Self { digits }
    }

    /// Digits in position order
    #[inline]
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Always false; codes have at least one digit
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// The code read back as a decimal number, e.g. `[1, 2, 3, 4]` → 1234
    #[must_use]
    pub fn to_raw(&self) -> u32 {
        self.digits
            .iter()
            .fold(0u32, |acc, &d| acc * 10 + u32::from(d))
    }

    /// Occurrences of each digit
    ///
    /// Used for multiplicity-correct scoring.
    #[inline]
    pub(crate) fn digit_counts(&self) -> FxHashMap<u8, usize> {
        let mut counts = FxHashMap::default();
        for &d in &self.digits {
            *counts.entry(d).or_insert(0) += 1;
        }
        counts
    }
}

impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .trim()
            .chars()
            .map(|c| {
                c.to_digit(10)
                    .map(|d| d as u8)
                    .ok_or(CodeError::NotADigit(c))
            })
            .collect::<Result<Vec<u8>, _>>()?;

        Self::from_digits(digits)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.digits {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

/// Read a raw numeric guess from user input
///
/// Anything that is not a non-negative integer becomes 0, which no difficulty
/// accepts, so the caller simply re-prompts.
#[must_use]
pub fn parse_raw_guess(input: &str) -> u32 {
    input.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn from_digits_valid() {
        let code = Code::from_digits([2, 2, 3, 4]).unwrap();
        assert_eq!(code.digits(), &[2, 2, 3, 4]);
        assert_eq!(code.len(), 4);
        assert!(!code.is_empty());
    }

    #[test]
    fn from_digits_rejects_empty_and_large_values() {
        assert_eq!(Code::from_digits(Vec::new()), Err(CodeError::Empty));
        assert_eq!(
            Code::from_digits([1, 10]),
            Err(CodeError::DigitOutOfRange(10))
        );
    }

    #[test]
    fn parse_guess_fills_from_the_right() {
        assert_eq!(Code::parse_guess(6543, 4).unwrap().digits(), &[6, 5, 4, 3]);
        assert_eq!(
            Code::parse_guess(111_111, 6).unwrap().digits(),
            &[1, 1, 1, 1, 1, 1]
        );
        assert_eq!(Code::parse_guess(7, 3).unwrap().digits(), &[0, 0, 7]);
        assert_eq!(Code::parse_guess(0, 2).unwrap().digits(), &[0, 0]);
    }

    #[test]
    fn parse_guess_rejects_overflow() {
        assert_eq!(
            Code::parse_guess(11_111, 4),
            Err(CodeError::TooManyDigits {
                raw: 11_111,
                length: 4
            })
        );
        assert_eq!(Code::parse_guess(5, 0), Err(CodeError::Empty));
    }

    #[test]
    fn to_raw_round_trips_parse_guess() {
        for raw in [1111, 1234, 6666, 5151] {
            assert_eq!(Code::parse_guess(raw, 4).unwrap().to_raw(), raw);
        }
    }

    #[test]
    fn classic_secrets_never_contain_six() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let code = Code::random(6, SecretDigits::Classic, &mut rng);
            assert_eq!(code.len(), 6);
            assert!(code.digits().iter().all(|d| (1..=5).contains(d)));
        }
    }

    #[test]
    fn full_secrets_reach_six() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut saw_six = false;
        for _ in 0..500 {
            let code = Code::random(4, SecretDigits::Full, &mut rng);
            assert!(code.digits().iter().all(|d| (1..=6).contains(d)));
            saw_six |= code.digits().contains(&6);
        }
        assert!(saw_six);
    }

    #[test]
    fn secret_digits_symbols() {
        assert_eq!(SecretDigits::Classic.symbols(), vec![1, 2, 3, 4, 5]);
        assert_eq!(SecretDigits::Full.symbols(), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(SecretDigits::from_name("full"), SecretDigits::Full);
        assert_eq!(SecretDigits::from_name("whatever"), SecretDigits::Classic);
    }

    #[test]
    fn from_str_parses_digit_strings() {
        let code: Code = "3141".parse().unwrap();
        assert_eq!(code.digits(), &[3, 1, 4, 1]);
        assert_eq!("12a4".parse::<Code>(), Err(CodeError::NotADigit('a')));
        assert_eq!("".parse::<Code>(), Err(CodeError::Empty));
    }

    #[test]
    fn digit_counts_handles_duplicates() {
        let code = Code::from_digits([2, 2, 3, 2]).unwrap();
        let counts = code.digit_counts();
        assert_eq!(counts.get(&2), Some(&3));
        assert_eq!(counts.get(&3), Some(&1));
        assert_eq!(counts.get(&4), None);
    }

    #[test]
    fn display_concatenates_digits() {
        let code = Code::from_digits([1, 0, 6]).unwrap();
        assert_eq!(format!("{code}"), "106");
    }

    #[test]
    fn raw_guess_defaults_to_zero() {
        assert_eq!(parse_raw_guess("1234"), 1234);
        assert_eq!(parse_raw_guess("  4321\n"), 4321);
        assert_eq!(parse_raw_guess("abcd"), 0);
        assert_eq!(parse_raw_guess("-12"), 0);
        assert_eq!(parse_raw_guess(""), 0);
    }
}
