use super::alphabet::position;
use crate::error::{CipherdrillError, Result};
use rand::Rng;

/// A validated Vigenere key, stored as ring shifts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherKey {
    shifts: Vec<usize>,
}

impl CipherKey {
    /// Case-fold and validate `key`.
    /// Fails on an empty key or on any character outside A-Z after folding.
    pub fn parse(key: &str) -> Result<Self> {
        if key.is_empty() {
            return Err(CipherdrillError::invalid("key must not be empty"));
        }

        let shifts = key
            .to_uppercase()
            .chars()
            .map(|c| {
                position(c).ok_or_else(|| {
                    CipherdrillError::invalid(format!("key contains non-letter character {:?}", c))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { shifts })
    }

    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    /// Endless stream of shifts, one per enciphered letter
    pub fn shifts(&self) -> impl Iterator<Item = usize> + '_ {
        self.shifts.iter().copied().cycle()
    }
}

impl std::str::FromStr for CipherKey {
    type Err = CipherdrillError;
    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Generate a random uppercase key of `length` letters
pub fn generate_key(length: usize) -> Result<String> {
    if length == 0 {
        return Err(CipherdrillError::invalid("key length must be at least 1"));
    }
    let mut rng = rand::thread_rng();
    Ok((0..length)
        .map(|_| rng.gen_range(b'A'..=b'Z') as char)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_folds() {
        let lower = CipherKey::parse("alphonse").unwrap();
        let upper = CipherKey::parse("ALPHONSE").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.len(), 8);
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(CipherKey::parse("").unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_parse_rejects_non_letters() {
        for key in ["key 1", "k-y", "ключ"] {
            assert!(CipherKey::parse(key).unwrap_err().is_invalid_argument(), "{}", key);
        }
    }

    #[test]
    fn test_shifts_cycle() {
        let key: CipherKey = "abc".parse().unwrap();
        let shifts: Vec<usize> = key.shifts().take(7).collect();
        assert_eq!(shifts, vec![0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn test_generate_key() {
        let key = generate_key(32).unwrap();
        assert_eq!(key.len(), 32);
        assert!(key.chars().all(|c| c.is_ascii_uppercase()));
        assert!(CipherKey::parse(&key).is_ok());
    }

    #[test]
    fn test_generate_key_zero_length() {
        assert!(generate_key(0).unwrap_err().is_invalid_argument());
    }
}
