use crate::cipher::{CipheringMachine, Mode};
use crate::error::Result;
use log::info;

/// Options for the encrypt and decrypt commands
#[derive(Debug, Clone)]
pub struct CipherOptions {
    pub key: String,
    pub mode: Mode,
}

impl Default for CipherOptions {
    fn default() -> Self {
        Self {
            key: String::new(),
            mode: Mode::default(),
        }
    }
}

impl CipherOptions {
    fn machine(&self) -> CipheringMachine {
        CipheringMachine::with_mode(self.mode)
    }
}

/// Encrypt `message` according to `options`
pub fn run_encrypt(message: &str, options: &CipherOptions) -> Result<String> {
    info!("Encrypting {} chars ({:?} mode)", message.chars().count(), options.mode);
    options.machine().encrypt(message, &options.key)
}

/// Decrypt `message` according to `options`
pub fn run_decrypt(message: &str, options: &CipherOptions) -> Result<String> {
    info!("Decrypting {} chars ({:?} mode)", message.chars().count(), options.mode);
    options.machine().decrypt(message, &options.key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_encrypt_reversed() {
        let opts = CipherOptions {
            key: "alphonse".into(),
            mode: Mode::Reversed,
        };
        assert_eq!(run_encrypt("attack at dawn!", &opts).unwrap(), "!ULLD XS XQHIEA");
    }

    #[test]
    fn test_run_decrypt_default_mode() {
        let opts = CipherOptions {
            key: "alphonse".into(),
            ..Default::default()
        };
        assert_eq!(run_decrypt("AEIHQX SX DLLU!", &opts).unwrap(), "ATTACK AT DAWN!");
    }

    #[test]
    fn test_default_options_have_no_key() {
        let err = run_encrypt("attack", &CipherOptions::default()).unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
