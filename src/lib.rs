//! Cipherdrill - control-sequence transformer and Vigenere ciphering machine
//!
//! Two independent, pure components:
//!
//! - **Transform**: rewrites a sequence according to the inline control tokens
//!   `--double-next` (emit the following value twice) and `--discard-prev`
//!   (drop the last emitted value).
//! - **Cipher**: repeating-key Vigenere over the 26-letter Latin alphabet, with
//!   a direct mode and a reversed mode that flips the finished output.
//!
//! ## Example
//!
//! ```
//! use cipherdrill::cipher::{DIRECT_MACHINE, REVERSE_MACHINE};
//! use cipherdrill::transform::{transform, Element};
//!
//! let seq = [Element::Value(1), Element::DoubleNext, Element::Value(2)];
//! assert_eq!(transform(&seq), vec![1, 2, 2]);
//!
//! let secret = DIRECT_MACHINE.encrypt("attack at dawn!", "alphonse").unwrap();
//! assert_eq!(secret, "AEIHQX SX DLLU!");
//! assert_eq!(
//!     REVERSE_MACHINE.decrypt(&secret, "alphonse").unwrap(),
//!     "!NWAD TA KCATTA"
//! );
//! ```

pub mod cipher;
pub mod cli;
pub mod error;
pub mod transform;

pub use cipher::{decrypt, encrypt, CipheringMachine, Mode, DIRECT_MACHINE, REVERSE_MACHINE};
pub use error::{CipherdrillError, Result};
pub use transform::{transform, transform_value, Element};
