use crate::cipher::generate_key;
use crate::error::Result;

/// Options for the keygen command
#[derive(Debug, Clone)]
pub struct KeygenOptions {
    pub length: usize,
}

impl Default for KeygenOptions {
    fn default() -> Self {
        Self { length: 16 }
    }
}

pub fn run_keygen(options: &KeygenOptions) -> Result<String> {
    generate_key(options.length)
}
