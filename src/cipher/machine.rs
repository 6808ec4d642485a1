use super::alphabet::{letter, position, shift_backward, shift_forward};
use super::key::CipherKey;
use crate::error::{CipherdrillError, Result};
use log::debug;
use serde::{Deserialize, Serialize};

/// Output orientation of a ciphering machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Return the ciphered text as computed
    #[default]
    Direct,
    /// Return the ciphered text with its characters reversed
    Reversed,
}

impl Mode {
    pub fn is_direct(self) -> bool {
        self == Mode::Direct
    }
}

impl From<bool> for Mode {
    fn from(direct: bool) -> Self {
        if direct {
            Mode::Direct
        } else {
            Mode::Reversed
        }
    }
}

impl std::str::FromStr for Mode {
    type Err = CipherdrillError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "direct" => Ok(Self::Direct),
            "reversed" | "reverse" => Ok(Self::Reversed),
            _ => Err(CipherdrillError::invalid(format!("mode: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Encrypt,
    Decrypt,
}

/// Encrypt `message` with the repeating `key`.
///
/// Both inputs are upper-cased first. Letters are shifted by the next key
/// letter; every other character is copied through and does not consume key.
pub fn encrypt(message: &str, key: &str, mode: Mode) -> Result<String> {
    apply(message, key, mode, Direction::Encrypt)
}

/// Inverse of [`encrypt`] for the same key, applied to the text as given.
pub fn decrypt(message: &str, key: &str, mode: Mode) -> Result<String> {
    apply(message, key, mode, Direction::Decrypt)
}

fn apply(message: &str, key: &str, mode: Mode, direction: Direction) -> Result<String> {
    if message.is_empty() {
        return Err(CipherdrillError::invalid("message must not be empty"));
    }
    let key = CipherKey::parse(key)?;

    let mut shifts = key.shifts();
    let mut output = String::with_capacity(message.len());
    for c in message.to_uppercase().chars() {
        let shifted = position(c).and_then(|pos| {
            shifts.next().map(|shift| match direction {
                Direction::Encrypt => shift_forward(pos, shift),
                Direction::Decrypt => shift_backward(pos, shift),
            })
        });
        match shifted {
            Some(pos) => output.push(letter(pos)),
            None => output.push(c),
        }
    }

    debug!(
        "{:?} {} chars with {}-letter key ({:?})",
        direction,
        output.chars().count(),
        key.len(),
        mode
    );

    Ok(match mode {
        Mode::Direct => output,
        Mode::Reversed => output.chars().rev().collect(),
    })
}

/// Vigenere ciphering machine with a fixed output orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CipheringMachine {
    mode: Mode,
}

/// Machine returning ciphered text as computed
pub const DIRECT_MACHINE: CipheringMachine = CipheringMachine { mode: Mode::Direct };

/// Machine returning ciphered text reversed
pub const REVERSE_MACHINE: CipheringMachine = CipheringMachine {
    mode: Mode::Reversed,
};

impl CipheringMachine {
    pub fn new(direct: bool) -> Self {
        Self {
            mode: Mode::from(direct),
        }
    }

    pub fn with_mode(mode: Mode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_direct(&self) -> bool {
        self.mode.is_direct()
    }

    pub fn encrypt(&self, message: &str, key: &str) -> Result<String> {
        encrypt(message, key, self.mode)
    }

    pub fn decrypt(&self, message: &str, key: &str) -> Result<String> {
        decrypt(message, key, self.mode)
    }
}
