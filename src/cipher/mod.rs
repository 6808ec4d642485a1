pub mod alphabet;
pub mod key;
pub mod machine;

pub use alphabet::*;
pub use key::*;
pub use machine::*;
