pub mod cipher;
pub mod keygen;
pub mod transform;

pub use cipher::*;
pub use keygen::*;
pub use transform::*;

use crate::error::Result;
use std::io::Read;

/// Use `arg` when given, otherwise read all of stdin.
/// A single trailing line break is stripped from stdin input.
pub fn read_input(arg: Option<String>) -> Result<String> {
    match arg {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(strip_line_break(buf))
        }
    }
}

fn strip_line_break(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
